//! Command-line interface for strictly_scramble.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Scramble - spell words from a random root word
#[derive(Parser, Debug)]
#[command(name = "strictly_scramble")]
#[command(about = "Word scramble game with strictly checked rules", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to strictly_scramble.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Newline-delimited root word list, overriding the config
    #[arg(long, global = true)]
    pub words: Option<PathBuf>,

    /// Seed for root word selection, overriding the config
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Read one word per line from stdin and print each outcome
    Batch {
        /// Emit one JSON object per line instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the rules and exit
    Rules,
}
