//! Session bootstrap from configuration.

use strictly_scramble_rules::{GameSession, SessionSetup, WordSourceError};
use tracing::{info, instrument};

use crate::{ScrambleConfig, word_source_for};

/// Loads the configured word pool and starts a session.
///
/// Fails only when the word pool cannot be obtained, which is fatal.
#[instrument(skip(config), fields(seed = ?config.seed()))]
pub fn start_session(config: &ScrambleConfig) -> Result<GameSession, WordSourceError> {
    let source = word_source_for(config);
    let setup = match config.seed() {
        Some(seed) => SessionSetup::seeded(&source, *seed)?,
        None => SessionSetup::from_source(&source)?,
    };
    let session = setup.with_rules(*config.scoring()).start();
    info!(root_word = %session.root_word(), "Session ready");
    Ok(session)
}
