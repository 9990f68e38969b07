//! Application state and key handling for the word scramble TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use rand::rngs::StdRng;
use strictly_scramble_rules::{GameSession, Submission};
use tracing::{debug, info, instrument};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTransition {
    /// Keep running.
    Stay,
    /// Leave the game.
    Quit,
}

/// Main application state.
///
/// Wraps the game session with the presentation-only bits: whether the
/// rules panel is open and the last status line.
#[derive(Debug)]
pub struct App<R = StdRng> {
    session: GameSession<R>,
    show_rules: bool,
    status_message: String,
}

impl<R> App<R> {
    /// The game session.
    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    /// True while the rules panel is open.
    pub fn show_rules(&self) -> bool {
        self.show_rules
    }

    /// The status line under the score.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }
}

impl<R: Rng> App<R> {
    /// Creates the app around a started session.
    pub fn new(session: GameSession<R>) -> Self {
        Self {
            session,
            show_rules: false,
            status_message: "Type a word and press Enter.".to_string(),
        }
    }

    /// Handles a key press.
    ///
    /// A visible error is modal: only its OK (Enter, Esc or Space) gets
    /// through. The rules panel is modal in the same way.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> AppTransition {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            info!("User quit");
            return AppTransition::Quit;
        }

        if *self.session.error().visible() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.session.acknowledge_error();
            }
            return AppTransition::Stay;
        }

        if self.show_rules {
            if matches!(
                key.code,
                KeyCode::Enter | KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?')
            ) {
                self.show_rules = false;
            }
            return AppTransition::Stay;
        }

        match key.code {
            KeyCode::F(1) => self.show_rules = true,
            KeyCode::Char('?') if self.session.pending_input().is_empty() => {
                self.show_rules = true;
            }
            KeyCode::F(5) => self.restart(),
            KeyCode::Char('r') if ctrl => self.restart(),
            KeyCode::Esc => {
                info!("User quit");
                return AppTransition::Quit;
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.session.pop_char();
            }
            KeyCode::Char(c) if !ctrl => self.session.push_char(c),
            _ => {}
        }
        AppTransition::Stay
    }

    /// Submits the typed word.
    #[instrument(skip(self))]
    fn submit(&mut self) {
        match self.session.submit_pending() {
            Ok(Submission::Accepted(accepted)) => {
                let award = accepted.award();
                self.status_message = if *award.milestone() > 0 {
                    format!(
                        "{} +{} (includes +{} bonus!)",
                        accepted.word(),
                        award.total(),
                        award.milestone()
                    )
                } else {
                    format!("{} +{}", accepted.word(), award.total())
                };
            }
            Ok(Submission::Ignored) => debug!("Nothing to submit"),
            Err(rejection) => {
                self.status_message = format!("{} rejected", rejection.word());
            }
        }
    }

    /// Starts a new round.
    #[instrument(skip(self))]
    fn restart(&mut self) {
        let root = self.session.start_game();
        self.status_message = format!("New root word: {}", root);
    }
}
