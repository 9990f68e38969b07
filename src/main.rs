//! Strictly Scramble - Unified CLI
//!
//! Word scramble game playable in a terminal UI or line by line over stdin.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use strictly_scramble::{
    OutputFormat, ScrambleConfig, rules_text, run_batch, run_tui, start_session,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config =
        ScrambleConfig::resolve(cli.config.as_deref())?.with_overrides(cli.words, cli.seed);

    match cli.command {
        Command::Play => run_tui(&config),
        Command::Batch { json } => run_batch_mode(&config, json),
        Command::Rules => {
            for line in rules_text(config.scoring()) {
                println!("{}", line);
            }
            Ok(())
        }
    }
}

/// Plays stdin against a fresh session, logging to stderr.
#[instrument(skip(config))]
fn run_batch_mode(config: &ScrambleConfig, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    info!("Starting Strictly Scramble batch mode");

    let mut session = start_session(config)?;
    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let summary = run_batch(&mut session, io::stdin().lock(), io::stdout().lock(), format)?;
    info!(
        accepted = summary.accepted(),
        rejected = summary.rejected(),
        final_score = summary.final_score(),
        "Batch complete"
    );
    Ok(())
}
