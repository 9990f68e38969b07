//! Strictly Scramble - word scramble game shells
//!
//! Wraps the rules in `strictly_scramble_rules` with everything needed to
//! actually play: configuration, word lists, a terminal UI and a
//! line-oriented batch mode.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus command-line overrides
//! - **Word sources**: a word list file or the bundled list
//! - **TUI**: ratatui front end with rules and error overlays
//! - **Batch**: one word per line in, one outcome per line out
//!
//! # Example
//!
//! ```
//! use strictly_scramble::{OutputFormat, ScrambleConfig, run_batch, start_session};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = ScrambleConfig::default().with_overrides(None, Some(42));
//! let mut session = start_session(&config)?;
//!
//! let mut out = Vec::new();
//! let summary = run_batch(&mut session, "\n".as_bytes(), &mut out, OutputFormat::Text)?;
//! assert_eq!(*summary.ignored(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod batch;
mod config;
mod help;
mod session;
mod tui;
mod word_source;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, ScrambleConfig};

// Crate-level exports - Word sources
pub use word_source::{BUNDLED_WORDS, BundledWordSource, FileWordSource, word_source_for};

// Crate-level exports - Session bootstrap and rules text
pub use help::rules_text;
pub use session::start_session;

// Crate-level exports - Shells
pub use batch::{BatchSummary, OutputFormat, run_batch};
pub use tui::{App, AppTransition, draw, run_app, run_tui};
