//! Submission rules for word scramble.
//!
//! Pure predicates over a candidate word, the words already played and the
//! root word. They hold no state of their own so contracts and invariants
//! can compose them freely.

pub mod original;
pub mod possible;
pub mod root_word;

pub use original::is_original;
pub use possible::{is_possible, leftover_letters};
pub use root_word::is_root_word;
