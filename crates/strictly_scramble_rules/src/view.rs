//! Serializable snapshot handed to renderers.

use super::feedback::ErrorState;
use super::typestate::GameSession;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One row of the word list: the word and its letter count.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct UsedWordView {
    /// Accepted word.
    word: String,
    /// Number of letters in the word.
    letters: usize,
}

/// Everything a renderer needs to draw the session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionView {
    /// Letters available this session.
    root_word: String,
    /// Accepted words, most recent first.
    used_words: Vec<UsedWordView>,
    /// Running score.
    score: u32,
    /// Accepted words needed for the next milestone bonus.
    words_until_bonus: Option<usize>,
    /// Text currently being typed.
    pending_input: String,
    /// Last rejection.
    error: ErrorState,
}

impl SessionView {
    pub(crate) fn from_session<R>(session: &GameSession<R>) -> Self {
        let used_words = session
            .used_words()
            .iter()
            .map(|word| UsedWordView {
                word: word.to_string(),
                letters: word.letter_count(),
            })
            .collect::<Vec<_>>();
        Self {
            root_word: session.root_word().to_string(),
            words_until_bonus: session.rules().words_until_milestone(used_words.len()),
            used_words,
            score: session.score(),
            pending_input: session.pending_input().to_string(),
            error: session.error().clone(),
        }
    }
}
