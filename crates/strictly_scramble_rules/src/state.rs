//! Per-session game state: root word, accepted words and score.

use super::rejection::Accepted;
use super::rules::leftover_letters;
use super::scoring::ScoringRules;
use super::types::{RootWord, Word};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// The part of a session that the rules and invariants reason about.
///
/// Accepted words are stored most recent first.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionState {
    /// Letters available this session.
    root_word: RootWord,
    /// Accepted words, most recent first.
    used_words: Vec<Word>,
    /// Running score.
    score: u32,
    /// Scoring rules in force.
    rules: ScoringRules,
}

impl SessionState {
    /// Creates a fresh state around `root_word`.
    #[instrument]
    pub fn new(root_word: RootWord, rules: ScoringRules) -> Self {
        Self {
            root_word,
            used_words: Vec::new(),
            score: 0,
            rules,
        }
    }

    /// Accepted words in the order they were played.
    pub fn words_in_play_order(&self) -> impl Iterator<Item = &Word> {
        self.used_words.iter().rev()
    }

    /// Starts over with a new root word: empty list, zero score.
    #[instrument(skip(self), fields(old_root = %self.root_word))]
    pub(crate) fn reset(&mut self, root_word: RootWord) {
        self.root_word = root_word;
        self.used_words.clear();
        self.score = 0;
    }

    /// Prepends `word` and adds its award to the score.
    ///
    /// Does not validate; callers check the submission contract first.
    #[instrument(skip(self), fields(root_word = %self.root_word))]
    pub(crate) fn accept(&mut self, word: Word) -> Accepted {
        let uses_every_letter = leftover_letters(&word, &self.root_word)
            .map(|left| left.is_empty())
            .unwrap_or(false);
        self.used_words.insert(0, word.clone());
        let award = self
            .rules
            .award(word.letter_count(), self.used_words.len(), uses_every_letter);
        self.score = self.score.saturating_add(award.total());
        info!(%word, points = award.total(), score = self.score, "Word accepted");
        Accepted::new(word, award, self.score)
    }

    #[cfg(test)]
    pub(crate) fn corrupt_score(&mut self, score: u32) {
        self.score = score;
    }
}
