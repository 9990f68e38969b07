//! Feasibility: a word must be spelled from the root word's letters.

use super::super::{LetterPool, RootWord, Word};
use tracing::instrument;

/// Letters of `root` left over after spelling `word`.
///
/// Returns `None` when `word` needs a letter the root word cannot supply.
#[instrument]
pub fn leftover_letters(word: &Word, root: &RootWord) -> Option<LetterPool> {
    LetterPool::from_root(root).consume(word.as_str()).ok()
}

/// True when every letter of `word` can be drawn from `root`, each letter of
/// `root` used at most once.
#[instrument]
pub fn is_possible(word: &Word, root: &RootWord) -> bool {
    leftover_letters(word, root).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(raw: &str) -> Word {
        Word::normalize(raw).expect("non-blank")
    }

    fn silkworm() -> RootWord {
        RootWord::new(word("silkworm"))
    }

    #[test]
    fn test_sub_word_is_possible() {
        assert!(is_possible(&word("silk"), &silkworm()));
        assert!(is_possible(&word("worm"), &silkworm()));
        assert!(is_possible(&word("milk"), &silkworm()));
    }

    #[test]
    fn test_reused_letter_is_not_possible() {
        assert!(!is_possible(&word("silks"), &silkworm()));
        assert!(!is_possible(&word("mills"), &silkworm()));
        assert!(!is_possible(&word("worry"), &silkworm()));
    }

    #[test]
    fn test_each_letter_once_is_possible() {
        // w, o, r, m and s each occur once in the root
        assert!(is_possible(&word("worms"), &silkworm()));
    }

    #[test]
    fn test_foreign_letter_is_not_possible() {
        assert!(!is_possible(&word("zip"), &silkworm()));
    }

    #[test]
    fn test_root_word_is_possible_from_itself() {
        assert!(is_possible(&word("silkworm"), &silkworm()));
    }

    #[test]
    fn test_leftover_letters() {
        let left = leftover_letters(&word("worm"), &silkworm()).expect("possible");
        assert_eq!(left.remaining(), "silk");
    }
}
