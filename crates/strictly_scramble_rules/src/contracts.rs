//! Contract-based validation for submissions.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, word)} accept {Q(before, after)}. The preconditions are the
//! game rules, checked in a fixed order. The postconditions are the
//! session invariants.

use super::invariants::{InvariantSet, SessionInvariants};
use super::rejection::Rejection;
use super::rules::{is_original, is_root_word};
use super::state::SessionState;
use super::{LetterPool, Word};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ContractViolation>;
}

/// A postcondition failed: the session was corrupted by a transition.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Postcondition failed: {}", description)]
pub struct ContractViolation {
    /// What went wrong.
    pub description: String,
}

impl ContractViolation {
    /// Creates a new violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Submission Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the word has not been accepted this session.
pub struct WordIsOriginal;

impl WordIsOriginal {
    /// Rejects repeats with [`Rejection::AlreadyUsed`].
    #[instrument(skip(state))]
    pub fn check(word: &Word, state: &SessionState) -> Result<(), Rejection> {
        if is_original(word, state.used_words()) {
            Ok(())
        } else {
            Err(Rejection::AlreadyUsed { word: word.clone() })
        }
    }
}

/// Precondition: the root word can supply every letter.
pub struct WordIsPossible;

impl WordIsPossible {
    /// Rejects unspellable words with [`Rejection::NotPossible`].
    #[instrument(skip(state))]
    pub fn check(word: &Word, state: &SessionState) -> Result<(), Rejection> {
        LetterPool::from_root(state.root_word())
            .consume(word.as_str())
            .map(|_| ())
            .map_err(|missing| Rejection::NotPossible {
                word: word.clone(),
                root: state.root_word().clone(),
                missing,
            })
    }
}

/// Precondition: the word is not the root word.
pub struct WordIsNotRoot;

impl WordIsNotRoot {
    /// Rejects the root word with [`Rejection::IsRootWord`].
    #[instrument(skip(state))]
    pub fn check(word: &Word, state: &SessionState) -> Result<(), Rejection> {
        if is_root_word(word, state.root_word()) {
            Err(Rejection::IsRootWord { word: word.clone() })
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: originality, then feasibility, then identity.
///
/// The order decides which rejection a word gets when it breaks several
/// rules at once.
pub struct PlayableWord;

impl PlayableWord {
    /// Validates all preconditions for a submission.
    #[instrument(skip(state))]
    pub fn check(word: &Word, state: &SessionState) -> Result<(), Rejection> {
        WordIsOriginal::check(word, state)?;
        WordIsPossible::check(word, state)?;
        WordIsNotRoot::check(word, state)?;
        debug!("Word is playable");
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Submission Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for accepting a word.
///
/// Preconditions:
/// - Word not used yet
/// - Word spellable from the root word
/// - Word is not the root word
///
/// Postconditions:
/// - Exactly one word was prepended
/// - Score did not decrease
/// - All session invariants hold
pub struct SubmissionContract;

impl Contract<SessionState, Word> for SubmissionContract {
    fn pre(state: &SessionState, word: &Word) -> Result<(), Rejection> {
        PlayableWord::check(word, state)
    }

    fn post(before: &SessionState, after: &SessionState) -> Result<(), ContractViolation> {
        if after.used_words().len() != before.used_words().len() + 1 {
            return Err(ContractViolation::new(format!(
                "expected {} used words, found {}",
                before.used_words().len() + 1,
                after.used_words().len()
            )));
        }
        if after.used_words()[1..] != before.used_words()[..] {
            return Err(ContractViolation::new("earlier words were modified"));
        }
        if after.score() < before.score() {
            return Err(ContractViolation::new(format!(
                "score decreased from {} to {}",
                before.score(),
                after.score()
            )));
        }

        SessionInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            ContractViolation::new(descriptions)
        })
    }
}
