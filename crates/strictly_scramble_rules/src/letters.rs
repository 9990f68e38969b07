//! Letter multiset arithmetic over a root word.

use super::types::RootWord;
use tracing::{instrument, trace};

/// Letters of a root word that have not been spent yet.
///
/// Letters keep their root-word order. Spending a letter removes its
/// leftmost remaining occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    letters: Vec<char>,
}

impl LetterPool {
    /// Creates a pool holding every letter of `text`.
    pub fn new(text: &str) -> Self {
        Self {
            letters: text.chars().collect(),
        }
    }

    /// Creates a pool holding every letter of the root word.
    pub fn from_root(root: &RootWord) -> Self {
        Self::new(root.as_str())
    }

    /// Removes the leftmost occurrence of `letter`.
    ///
    /// Returns false, leaving the pool untouched, when the letter is not available.
    pub fn take(&mut self, letter: char) -> bool {
        match self.letters.iter().position(|&c| c == letter) {
            Some(pos) => {
                self.letters.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Spends the letters of `word` left to right.
    ///
    /// Returns the letters left over, or the first letter that could not be
    /// supplied.
    #[instrument(skip(self), fields(available = %self.remaining()))]
    pub fn consume(mut self, word: &str) -> Result<Self, char> {
        for letter in word.chars() {
            if !self.take(letter) {
                trace!(%letter, "Letter unavailable");
                return Err(letter);
            }
        }
        Ok(self)
    }

    /// Remaining letters in root-word order.
    pub fn remaining(&self) -> String {
        self.letters.iter().collect()
    }

    /// Number of letters still available.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// True once every letter has been spent.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}
