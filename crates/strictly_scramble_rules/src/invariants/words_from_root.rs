//! Every accepted word is a proper sub-word of the root word.

use super::super::SessionState;
use super::super::rules::{is_possible, is_root_word};
use super::Invariant;

/// Invariant: each accepted word is spellable from, and different to, the root word.
pub struct WordsFromRootInvariant;

impl Invariant<SessionState> for WordsFromRootInvariant {
    fn holds(state: &SessionState) -> bool {
        let root = state.root_word();
        state
            .used_words()
            .iter()
            .all(|word| is_possible(word, root) && !is_root_word(word, root))
    }

    fn description() -> &'static str {
        "Accepted words are spelled from the root word and differ from it"
    }
}
