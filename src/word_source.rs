//! Word sources backed by files and by the bundled word list.

use derive_new::new;
use std::path::PathBuf;
use strictly_scramble_rules::{WordPool, WordSource, WordSourceError};
use tracing::{info, instrument};

use crate::ScrambleConfig;

/// Root words compiled into the binary.
pub const BUNDLED_WORDS: &str = include_str!("../assets/start.txt");

/// Reads a newline-delimited word list from disk.
#[derive(Debug, Clone, new)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    /// Path of the word list.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl WordSource for FileWordSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load_word_pool(&self) -> Result<WordPool, WordSourceError> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            WordSourceError::new(format!(
                "Could not load {}: {}",
                self.path.display(),
                e
            ))
        })?;
        let pool = WordPool::from_lines(&text);
        info!(count = pool.len(), "Word list loaded from file");
        Ok(pool)
    }
}

/// The word list shipped inside the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledWordSource;

impl WordSource for BundledWordSource {
    #[instrument(skip(self))]
    fn load_word_pool(&self) -> Result<WordPool, WordSourceError> {
        let pool = WordPool::from_lines(BUNDLED_WORDS);
        if pool.is_empty() {
            return Err(WordSourceError::new("Bundled word list is empty"));
        }
        info!(count = pool.len(), "Bundled word list loaded");
        Ok(pool)
    }
}

/// Picks the word source named by the configuration.
#[instrument(skip(config))]
pub fn word_source_for(config: &ScrambleConfig) -> Box<dyn WordSource> {
    match config.word_list() {
        Some(path) => Box::new(FileWordSource::new(path.clone())),
        None => Box::new(BundledWordSource),
    }
}
