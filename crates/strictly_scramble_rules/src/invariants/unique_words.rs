//! Unique words invariant: no word appears twice in the list.

use super::super::SessionState;
use super::Invariant;
use std::collections::HashSet;

/// Invariant: accepted words are pairwise distinct.
pub struct UniqueWordsInvariant;

impl Invariant<SessionState> for UniqueWordsInvariant {
    fn holds(state: &SessionState) -> bool {
        let mut seen = HashSet::new();
        state.used_words().iter().all(|word| seen.insert(word))
    }

    fn description() -> &'static str {
        "Accepted words are unique"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RootWord, ScoringRules, Word};

    fn word(raw: &str) -> Word {
        Word::normalize(raw).expect("non-blank")
    }

    #[test]
    fn test_distinct_words_hold() {
        let mut state = SessionState::new(RootWord::new(word("silkworm")), ScoringRules::default());
        state.accept(word("silk"));
        state.accept(word("worm"));
        assert!(UniqueWordsInvariant::holds(&state));
    }

    #[test]
    fn test_duplicate_violates() {
        let mut state = SessionState::new(RootWord::new(word("silkworm")), ScoringRules::default());
        state.accept(word("silk"));
        state.accept(word("silk"));
        assert!(!UniqueWordsInvariant::holds(&state));
    }
}
