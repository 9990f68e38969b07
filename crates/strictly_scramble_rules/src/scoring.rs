//! Scoring rules for accepted words.

use derive_getters::Getters;
use derive_new::new;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How accepted words are scored.
///
/// Every word scores its letter count. Every `milestone_every`-th accepted
/// word earns `milestone_bonus` on top. A word that spends every letter of
/// the root word earns `anagram_bonus`, which is off by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct ScoringRules {
    /// Accepted-word count interval that triggers the milestone bonus. Zero disables it.
    milestone_every: usize,
    /// Flat bonus awarded on each milestone.
    milestone_bonus: u32,
    /// Bonus for a word that uses all of the root word's letters.
    anagram_bonus: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            milestone_every: 5,
            milestone_bonus: 5,
            anagram_bonus: 0,
        }
    }
}

impl ScoringRules {
    /// True when accepting the `accepted`-th word of a session hits a milestone.
    pub fn is_milestone(&self, accepted: usize) -> bool {
        self.milestone_every > 0 && accepted > 0 && accepted % self.milestone_every == 0
    }

    /// Accepted words still needed before the next milestone bonus.
    pub fn words_until_milestone(&self, accepted: usize) -> Option<usize> {
        if self.milestone_every == 0 {
            return None;
        }
        Some(self.milestone_every - accepted % self.milestone_every)
    }

    /// Scores one accepted word.
    ///
    /// `accepted` counts accepted words including this one.
    #[instrument(skip(self))]
    pub fn award(&self, letters: usize, accepted: usize, uses_every_letter: bool) -> Award {
        let milestone = if self.is_milestone(accepted) {
            self.milestone_bonus
        } else {
            0
        };
        let anagram = if uses_every_letter { self.anagram_bonus } else { 0 };
        let letters = u32::try_from(letters).unwrap_or(u32::MAX);
        Award::new(letters, milestone, anagram)
    }
}

/// Points earned by one accepted word, broken down by source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize, new)]
pub struct Award {
    /// One point per letter.
    letters: u32,
    /// Milestone bonus, zero when this word was not a milestone.
    milestone: u32,
    /// Anagram bonus, zero unless enabled and earned.
    anagram: u32,
}

impl Award {
    /// Total points for the word, saturating at `u32::MAX`.
    pub fn total(&self) -> u32 {
        self.letters
            .saturating_add(self.milestone)
            .saturating_add(self.anagram)
    }
}
