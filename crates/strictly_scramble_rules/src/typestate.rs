//! Session lifecycle as typestate.
//!
//! A [`SessionSetup`] holds a loaded word pool but no root word yet. Starting
//! it consumes the setup and yields an active [`GameSession`], so a
//! submission can never reach a session without a root word. An active
//! session is closed under `submit` and `start_game`.

use super::contracts::{Contract, SubmissionContract};
use super::feedback::ErrorState;
use super::rejection::{Rejection, Submission};
use super::scoring::ScoringRules;
use super::source::{WordSource, WordSourceError};
use super::state::SessionState;
use super::types::{RootWord, Word, WordPool};
use super::view::SessionView;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Session waiting to start: pool loaded, no root word chosen.
#[derive(Debug, Clone)]
pub struct SessionSetup<R = StdRng> {
    pool: WordPool,
    rules: ScoringRules,
    rng: R,
}

impl SessionSetup<StdRng> {
    /// Loads the pool from `source` and seeds the generator from OS entropy.
    #[instrument(skip(source))]
    pub fn from_source<S: WordSource + ?Sized>(source: &S) -> Result<Self, WordSourceError> {
        Self::load(source, StdRng::from_entropy())
    }

    /// Loads the pool from `source` with a reproducible generator.
    #[instrument(skip(source))]
    pub fn seeded<S: WordSource + ?Sized>(source: &S, seed: u64) -> Result<Self, WordSourceError> {
        Self::load(source, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SessionSetup<R> {
    /// Creates a setup from an already loaded pool.
    pub fn new(pool: WordPool, rng: R) -> Self {
        Self {
            pool,
            rules: ScoringRules::default(),
            rng,
        }
    }

    /// Loads the pool from `source`.
    ///
    /// A source failure is fatal for the session and is returned as is.
    #[instrument(skip(source, rng))]
    pub fn load<S: WordSource + ?Sized>(source: &S, rng: R) -> Result<Self, WordSourceError> {
        let pool = source.load_word_pool()?;
        info!(pool_size = pool.len(), "Word pool loaded");
        if pool.is_empty() {
            warn!("Word pool has no usable words");
        }
        Ok(Self::new(pool, rng))
    }

    /// Replaces the scoring rules.
    pub fn with_rules(mut self, rules: ScoringRules) -> Self {
        self.rules = rules;
        self
    }

    /// Returns the loaded pool.
    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    /// Picks a root word and starts the session (consumes setup).
    #[instrument(skip(self))]
    pub fn start(mut self) -> GameSession<R> {
        let root_word = self.pool.choose_root(&mut self.rng);
        info!(%root_word, "Session started");
        GameSession {
            state: SessionState::new(root_word, self.rules),
            pool: self.pool,
            rng: self.rng,
            pending_input: String::new(),
            error: ErrorState::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Active Phase
// ─────────────────────────────────────────────────────────────

/// An active game session.
///
/// Owns everything a presentation shell needs: the rules state, the text
/// being typed, and the last rejection.
#[derive(Debug, Clone)]
pub struct GameSession<R = StdRng> {
    state: SessionState,
    pool: WordPool,
    rng: R,
    pending_input: String,
    error: ErrorState,
}

impl<R: Rng> GameSession<R> {
    /// Restarts with a fresh root word from the pool.
    ///
    /// Score drops to zero and the word list is cleared. Pending input and
    /// any visible error are discarded too.
    #[instrument(skip(self), fields(old_root = %self.state.root_word()))]
    pub fn start_game(&mut self) -> &RootWord {
        let root_word = self.pool.choose_root(&mut self.rng);
        info!(%root_word, "Session restarted");
        self.state.reset(root_word);
        self.pending_input.clear();
        self.error.clear();
        self.state.root_word()
    }

    /// Runs one submission through the pipeline.
    ///
    /// Blank input is ignored. Otherwise the normalized word is checked for
    /// originality, then feasibility, then identity with the root word. The
    /// first failing check rejects it, and the rejection is also recorded
    /// as the visible error. A passing word is prepended, scored, and the
    /// pending input cleared.
    #[instrument(skip(self), fields(root_word = %self.state.root_word()))]
    pub fn submit(&mut self, raw: &str) -> Result<Submission, Rejection> {
        let Some(word) = Word::normalize(raw) else {
            debug!("Blank submission ignored");
            return Ok(Submission::Ignored);
        };

        if let Err(rejection) = SubmissionContract::pre(&self.state, &word) {
            info!(%word, kind = %rejection.kind(), "Word rejected");
            self.error.show(&rejection);
            return Err(rejection);
        }

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let accepted = self.state.accept(word);
        self.pending_input.clear();

        // Postcondition: verify contract in debug builds
        #[cfg(debug_assertions)]
        {
            let post = SubmissionContract::post(&before, &self.state);
            if let Err(violation) = &post {
                tracing::error!(%violation, "Submission broke a session invariant");
            }
            debug_assert!(post.is_ok(), "Submission postcondition failed");
        }

        Ok(Submission::Accepted(accepted))
    }

    /// Submits whatever is in the pending input.
    #[instrument(skip(self))]
    pub fn submit_pending(&mut self) -> Result<Submission, Rejection> {
        let raw = self.pending_input.clone();
        self.submit(&raw)
    }
}

impl<R> GameSession<R> {
    /// Letters available this session.
    pub fn root_word(&self) -> &RootWord {
        self.state.root_word()
    }

    /// Accepted words, most recent first.
    pub fn used_words(&self) -> &[Word] {
        self.state.used_words()
    }

    /// Running score.
    pub fn score(&self) -> u32 {
        *self.state.score()
    }

    /// Scoring rules in force.
    pub fn rules(&self) -> &ScoringRules {
        self.state.rules()
    }

    /// Rules-level state, for contracts and invariants.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Candidate root words for restarts.
    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    /// Text currently being typed.
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Replaces the text being typed.
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Appends a character to the text being typed.
    pub fn push_char(&mut self, c: char) {
        self.pending_input.push(c);
    }

    /// Removes the last typed character, if any.
    pub fn pop_char(&mut self) -> Option<char> {
        self.pending_input.pop()
    }

    /// Last rejection and whether it is showing.
    pub fn error(&self) -> &ErrorState {
        &self.error
    }

    /// Dismisses the visible rejection.
    pub fn acknowledge_error(&mut self) {
        self.error.acknowledge();
    }

    /// Snapshot of everything a renderer displays.
    pub fn view(&self) -> SessionView {
        SessionView::from_session(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StaticWordSource;

    fn silkworm_session() -> GameSession {
        let source = StaticWordSource::new(vec!["silkworm".to_string()]);
        SessionSetup::seeded(&source, 1).expect("static source").start()
    }

    #[test]
    fn test_rejection_sets_visible_error() {
        let mut session = silkworm_session();
        let rejection = session.submit("zebra").expect_err("not possible");
        assert_eq!(session.error().title(), rejection.title());
        assert!(*session.error().visible());
        session.acknowledge_error();
        assert!(!*session.error().visible());
    }

    #[test]
    fn test_accept_clears_pending_input() {
        let mut session = silkworm_session();
        session.set_pending_input("Silk ");
        let outcome = session.submit_pending().expect("accepted");
        assert!(outcome.accepted().is_some());
        assert_eq!(session.pending_input(), "");
    }

    #[test]
    fn test_rejection_keeps_pending_input() {
        let mut session = silkworm_session();
        for c in "silks".chars() {
            session.push_char(c);
        }
        assert!(session.submit_pending().is_err());
        assert_eq!(session.pending_input(), "silks");
        assert_eq!(session.pop_char(), Some('s'));
    }

    #[test]
    fn test_restart_clears_error_and_input() {
        let mut session = silkworm_session();
        session.set_pending_input("zzz");
        let _ = session.submit_pending();
        session.start_game();
        assert!(!*session.error().visible());
        assert_eq!(session.pending_input(), "");
    }
}
