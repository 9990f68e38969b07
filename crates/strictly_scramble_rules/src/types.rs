//! Core domain types for word scramble.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Root word used when the word pool yields no candidate.
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

/// A normalized word: lowercased, surrounding whitespace trimmed, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Normalizes raw player input.
    ///
    /// Lowercases first, then trims whitespace and newlines from both ends.
    /// Returns `None` when nothing is left.
    #[instrument]
    pub fn normalize(raw: &str) -> Option<Self> {
        let lowered = raw.to_lowercase();
        let trimmed = lowered.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Returns the word as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of letters (characters) in the word.
    pub fn letter_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl TryFrom<String> for Word {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Word::normalize(&raw).ok_or_else(|| "word must not be blank".to_string())
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The fixed letter pool for a session.
///
/// Always non-empty, since it wraps a normalized [`Word`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(transparent)]
pub struct RootWord(Word);

impl RootWord {
    /// Creates a root word from a normalized word.
    pub fn new(word: Word) -> Self {
        Self(word)
    }

    /// The root word used when selection comes up empty.
    pub fn fallback() -> Self {
        Self(Word(FALLBACK_ROOT_WORD.to_string()))
    }

    /// Returns the underlying word.
    pub fn as_word(&self) -> &Word {
        &self.0
    }

    /// Returns the root word as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Candidate root words supplied by a word source.
///
/// Entries are normalized on the way in. Blank lines never make it into
/// the pool, so every selected root word is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPool {
    words: Vec<Word>,
}

impl WordPool {
    /// Builds a pool from arbitrary strings, discarding blank entries.
    #[instrument(skip(words))]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<Word> = words
            .into_iter()
            .filter_map(|w| Word::normalize(w.as_ref()))
            .collect();
        debug!(count = words.len(), "Word pool built");
        Self { words }
    }

    /// Builds a pool from newline-delimited text.
    #[instrument(skip(text), fields(bytes = text.len()))]
    pub fn from_lines(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Returns the words in the pool.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of candidate words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the pool holds no candidates.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Picks a root word uniformly at random.
    ///
    /// Falls back to [`FALLBACK_ROOT_WORD`] when the pool is empty.
    #[instrument(skip(self, rng), fields(pool_size = self.words.len()))]
    pub fn choose_root<R: Rng + ?Sized>(&self, rng: &mut R) -> RootWord {
        match self.words.choose(rng) {
            Some(word) => RootWord::new(word.clone()),
            None => {
                warn!(fallback = FALLBACK_ROOT_WORD, "Word pool empty, using fallback root word");
                RootWord::fallback()
            }
        }
    }
}
