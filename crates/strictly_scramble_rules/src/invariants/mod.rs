//! First-class invariants for a word scramble session.
//!
//! Invariants are logical properties that must hold after every accepted
//! word. They are testable independently and back the submission
//! contract's postcondition.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod score_consistent;
pub mod unique_words;
pub mod words_from_root;

pub use score_consistent::ScoreConsistentInvariant;
pub use unique_words::UniqueWordsInvariant;
pub use words_from_root::WordsFromRootInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    UniqueWordsInvariant,
    WordsFromRootInvariant,
    ScoreConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RootWord, ScoringRules, SessionState, Word};

    fn word(raw: &str) -> Word {
        Word::normalize(raw).expect("non-blank")
    }

    fn state_with(words: &[&str]) -> SessionState {
        let mut state = SessionState::new(RootWord::new(word("silkworm")), ScoringRules::default());
        for w in words {
            state.accept(word(w));
        }
        state
    }

    #[test]
    fn test_invariant_set_holds_for_fresh_state() {
        assert!(SessionInvariants::check_all(&state_with(&[])).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_words() {
        let state = state_with(&["silk", "worm", "milk", "ski", "row", "owl"]);
        assert!(SessionInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        // Duplicate, unspellable and then a bogus score: all three break.
        let mut state = state_with(&["silks", "silks"]);
        state.corrupt_score(1);
        let violations = SessionInvariants::check_all(&state).expect_err("corrupted");
        assert_eq!(violations.len(), 3);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (UniqueWordsInvariant, ScoreConsistentInvariant);
        assert!(TwoInvariants::check_all(&state_with(&["silk"])).is_ok());
    }
}
