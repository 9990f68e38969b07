//! Last-rejection feedback shown to the player until acknowledged.

use super::rejection::Rejection;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Title and message of the most recent rejection, plus whether it is on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ErrorState {
    /// Rejection headline.
    title: String,
    /// Rejection explanation.
    message: String,
    /// True until the player acknowledges the rejection.
    visible: bool,
}

impl ErrorState {
    /// Overwrites the state with `rejection` and makes it visible.
    #[instrument(skip(self))]
    pub fn show(&mut self, rejection: &Rejection) {
        self.title = rejection.title().to_string();
        self.message = rejection.message();
        self.visible = true;
    }

    /// Hides the error. Title and message are kept.
    #[instrument(skip(self))]
    pub fn acknowledge(&mut self) {
        debug!(title = %self.title, "Error acknowledged");
        self.visible = false;
    }

    /// Hides the error and forgets its contents.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
