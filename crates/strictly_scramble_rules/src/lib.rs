//! Strictly Scramble rules - pure word scramble game logic.
//!
//! A session draws a random root word from a word pool. Players submit
//! words spelled from the root word's letters. Each submission is
//! normalized, then checked in a fixed order:
//!
//! 1. not already used this session,
//! 2. spellable from the root word (each letter at most as often as it occurs),
//! 3. not the root word itself.
//!
//! Accepted words score their letter count, plus a bonus on every fifth
//! accepted word.
//!
//! # Example
//!
//! ```
//! use strictly_scramble_rules::{SessionSetup, StaticWordSource, Rejection};
//!
//! let source = StaticWordSource::new(vec!["silkworm".to_string()]);
//! let mut session = SessionSetup::seeded(&source, 7)?.start();
//!
//! assert!(session.submit("silk").is_ok());
//! assert!(matches!(session.submit("silk"), Err(Rejection::AlreadyUsed { .. })));
//! assert_eq!(session.score(), 4);
//! # Ok::<(), strictly_scramble_rules::WordSourceError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod feedback;
mod invariants;
mod letters;
mod rejection;
pub mod rules;
mod scoring;
mod source;
mod state;
mod types;
mod typestate;
mod view;

pub use contracts::{
    Contract, ContractViolation, PlayableWord, SubmissionContract, WordIsNotRoot, WordIsOriginal,
    WordIsPossible,
};
pub use feedback::ErrorState;
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, ScoreConsistentInvariant, SessionInvariants,
    UniqueWordsInvariant, WordsFromRootInvariant,
};
pub use letters::LetterPool;
pub use rejection::{Accepted, Rejection, RejectionKind, Submission};
pub use scoring::{Award, ScoringRules};
pub use source::{StaticWordSource, WordSource, WordSourceError};
pub use state::SessionState;
pub use types::{FALLBACK_ROOT_WORD, RootWord, Word, WordPool};
pub use typestate::{GameSession, SessionSetup};
pub use view::{SessionView, UsedWordView};
