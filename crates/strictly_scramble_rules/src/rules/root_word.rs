//! Identity: the root word itself never scores.

use super::super::{RootWord, Word};
use tracing::instrument;

/// True when `word` is exactly the session's root word.
#[instrument]
pub fn is_root_word(word: &Word, root: &RootWord) -> bool {
    word == root.as_word()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_word_matches() {
        let root = RootWord::new(Word::normalize("silkworm").expect("non-blank"));
        assert!(is_root_word(&Word::normalize(" SilkWorm ").expect("non-blank"), &root));
    }

    #[test]
    fn test_anagram_is_not_root_word() {
        let root = RootWord::new(Word::normalize("listen").expect("non-blank"));
        assert!(!is_root_word(&Word::normalize("silent").expect("non-blank"), &root));
    }
}
