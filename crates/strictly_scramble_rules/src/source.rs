//! Word sources supply the pool of candidate root words.

use super::types::WordPool;
use derive_more::{Display, Error};
use derive_new::new;
use tracing::{debug, instrument};

/// Supplies candidate root words for a session.
///
/// A failure here is unrecoverable: without a pool no session can start.
pub trait WordSource {
    /// Loads the word pool.
    fn load_word_pool(&self) -> Result<WordPool, WordSourceError>;
}

impl<T: WordSource + ?Sized> WordSource for &T {
    fn load_word_pool(&self) -> Result<WordPool, WordSourceError> {
        (**self).load_word_pool()
    }
}

impl<T: WordSource + ?Sized> WordSource for Box<T> {
    fn load_word_pool(&self) -> Result<WordPool, WordSourceError> {
        (**self).load_word_pool()
    }
}

/// The word pool could not be obtained.
#[derive(Debug, Clone, Display, Error)]
#[display("Word source error: {} at {}:{}", message, file, line)]
pub struct WordSourceError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl WordSourceError {
    /// Creates a new word source error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// A fixed, in-memory list of words.
#[derive(Debug, Clone, Default, new)]
pub struct StaticWordSource {
    words: Vec<String>,
}

impl WordSource for StaticWordSource {
    #[instrument(skip(self), fields(count = self.words.len()))]
    fn load_word_pool(&self) -> Result<WordPool, WordSourceError> {
        debug!("Loading static word pool");
        Ok(WordPool::from_words(&self.words))
    }
}
