//! Submission outcomes: acceptance, silent no-op, or a user-facing rejection.

use super::scoring::Award;
use super::types::{RootWord, Word};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Category of a rejected submission.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RejectionKind {
    /// The word was already accepted this session.
    AlreadyUsed,
    /// The root word cannot supply the word's letters.
    NotPossible,
    /// The word is the root word itself.
    IsRootWord,
}

impl RejectionKind {
    /// Short headline shown to the player.
    pub fn title(self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word used already",
            Self::NotPossible => "Word not possible",
            Self::IsRootWord => "Word is the rootword",
        }
    }
}

/// A submission that broke one of the rules.
///
/// Rejections are recoverable and meant for the player. They never carry
/// past the session boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    /// Duplicate submission.
    #[display("Word used already: Be more original!")]
    AlreadyUsed {
        /// The repeated word.
        word: Word,
    },

    /// Letters unavailable in the root word.
    #[display("Word not possible: You can't spell that word from '{}'!", root)]
    NotPossible {
        /// The rejected word.
        word: Word,
        /// The session's root word.
        root: RootWord,
        /// First letter the root word could not supply.
        missing: char,
    },

    /// Submission equals the root word.
    #[display("Word is the rootword: You can't use your answer because it is the rootword!")]
    IsRootWord {
        /// The rejected word.
        word: Word,
    },
}

impl std::error::Error for Rejection {}

impl Rejection {
    /// The rejection's category.
    pub fn kind(&self) -> RejectionKind {
        match self {
            Self::AlreadyUsed { .. } => RejectionKind::AlreadyUsed,
            Self::NotPossible { .. } => RejectionKind::NotPossible,
            Self::IsRootWord { .. } => RejectionKind::IsRootWord,
        }
    }

    /// Short headline shown to the player.
    pub fn title(&self) -> &'static str {
        self.kind().title()
    }

    /// Explanation shown under the title.
    pub fn message(&self) -> String {
        match self {
            Self::AlreadyUsed { .. } => "Be more original!".to_string(),
            Self::NotPossible { root, .. } => {
                format!("You can't spell that word from '{}'!", root)
            }
            Self::IsRootWord { .. } => {
                "You can't use your answer because it is the rootword!".to_string()
            }
        }
    }

    /// The word that was rejected.
    pub fn word(&self) -> &Word {
        match self {
            Self::AlreadyUsed { word }
            | Self::NotPossible { word, .. }
            | Self::IsRootWord { word } => word,
        }
    }
}

/// An accepted word and what it earned.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Accepted {
    /// The normalized word added to the list.
    word: Word,
    /// Points earned by this word.
    award: Award,
    /// Session score after this word.
    score: u32,
}

/// Result of a submission that was not rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Submission {
    /// Blank input; nothing happened.
    Ignored,
    /// The word was accepted and scored.
    Accepted(Accepted),
}

impl Submission {
    /// Returns the acceptance, if any.
    pub fn accepted(&self) -> Option<&Accepted> {
        match self {
            Self::Accepted(accepted) => Some(accepted),
            Self::Ignored => None,
        }
    }
}
