//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_scramble_rules::ScoringRules;
use tracing::{debug, info, instrument};

/// Config file looked up when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_scramble.toml";

/// Configuration for a word scramble session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ScrambleConfig {
    /// Newline-delimited root word list. The bundled list is used when absent.
    #[serde(default)]
    word_list: Option<PathBuf>,

    /// Seed for root word selection. OS entropy is used when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Where the terminal UI writes its log.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Scoring rules.
    #[serde(default)]
    scoring: ScoringRules,
}

#[instrument]
fn default_log_file() -> PathBuf {
    PathBuf::from("strictly_scramble.log")
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            word_list: None,
            seed: None,
            log_file: default_log_file(),
            scoring: ScoringRules::default(),
        }
    }
}

impl ScrambleConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        info!(
            word_list = ?config.word_list,
            seed = ?config.seed,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Resolves the config to use.
    ///
    /// An explicitly requested file must exist. Without one, the default
    /// path is tried and defaults are used if it is missing.
    #[instrument]
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Applies command-line overrides on top of the file values.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, word_list: Option<PathBuf>, seed: Option<u64>) -> Self {
        if let Some(path) = word_list {
            info!(path = %path.display(), "Overriding word list");
            self.word_list = Some(path);
        }
        if let Some(seed) = seed {
            info!(seed, "Overriding seed");
            self.seed = Some(seed);
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
