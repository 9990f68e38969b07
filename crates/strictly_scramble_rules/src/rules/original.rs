//! Originality: a word may only be played once per session.

use super::super::Word;
use tracing::instrument;

/// True when `word` has not been accepted yet this session.
#[instrument(skip(used), fields(used_count = used.len()))]
pub fn is_original(word: &Word, used: &[Word]) -> bool {
    !used.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(raw: &str) -> Word {
        Word::normalize(raw).expect("non-blank")
    }

    #[test]
    fn test_fresh_word_is_original() {
        assert!(is_original(&word("silk"), &[word("worm")]));
    }

    #[test]
    fn test_repeat_is_not_original() {
        let used = [word("worm"), word("silk")];
        assert!(!is_original(&word("silk"), &used));
    }

    #[test]
    fn test_repeat_after_normalization() {
        let used = [word("silk")];
        assert!(!is_original(&word("  SILK\n"), &used));
    }

    #[test]
    fn test_empty_history() {
        assert!(is_original(&word("silk"), &[]));
    }
}
