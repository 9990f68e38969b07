//! Line-oriented shell: one submission per input line, one outcome per output line.
//!
//! Lines starting with `:` are commands rather than words:
//! `:restart` picks a new root word, `:state` prints the session,
//! `:quit` stops reading.

use anyhow::Result;
use derive_getters::Getters;
use rand::Rng;
use serde::Serialize;
use serde_json::json;
use std::borrow::Cow;
use std::io::{BufRead, Write};
use strictly_scramble_rules::{GameSession, Rejection, Submission};
use tracing::{debug, info, instrument, warn};

/// How outcomes are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Tally of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize)]
pub struct BatchSummary {
    /// Words accepted.
    accepted: usize,
    /// Words rejected.
    rejected: usize,
    /// Blank lines ignored.
    ignored: usize,
    /// Score when input ran out.
    final_score: u32,
}

/// Drives `session` from `input`, writing outcomes to `output`.
#[instrument(skip_all, fields(root_word = %session.root_word(), format = ?format))]
pub fn run_batch<R, I, W>(
    session: &mut GameSession<R>,
    mut input: I,
    mut output: W,
    format: OutputFormat,
) -> Result<BatchSummary>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    let mut summary = BatchSummary::default();
    write_root(&mut output, format, "started", session.root_word().as_str())?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let decoded = String::from_utf8_lossy(&buf);
        if let Cow::Owned(_) = decoded {
            warn!("Input line is not valid UTF-8, submitting it lossily");
        }
        let line = decoded.trim_end_matches(['\n', '\r']).to_string();
        if let Some(command) = line.trim().strip_prefix(':') {
            debug!(command, "Batch command");
            match command {
                "quit" => break,
                "restart" => {
                    let root = session.start_game().as_str().to_string();
                    write_root(&mut output, format, "restarted", &root)?;
                }
                "state" => write_state(&mut output, format, session)?,
                other => {
                    warn!(command = other, "Unknown batch command");
                    match format {
                        OutputFormat::Text => writeln!(output, "unknown command :{}", other)?,
                        OutputFormat::Json => writeln!(
                            output,
                            "{}",
                            json!({ "event": "unknown_command", "command": other })
                        )?,
                    }
                }
            }
            continue;
        }

        match session.submit(&line) {
            Ok(Submission::Ignored) => {
                summary.ignored += 1;
                match format {
                    OutputFormat::Text => writeln!(output, "ignored")?,
                    OutputFormat::Json => {
                        writeln!(output, "{}", json!({ "event": "ignored", "input": line }))?
                    }
                }
            }
            Ok(Submission::Accepted(accepted)) => {
                summary.accepted += 1;
                let award = accepted.award();
                match format {
                    OutputFormat::Text => {
                        write!(
                            output,
                            "accepted {} +{} (score {}",
                            accepted.word(),
                            award.total(),
                            accepted.score()
                        )?;
                        if *award.milestone() > 0 {
                            write!(output, ", bonus +{}", award.milestone())?;
                        }
                        if *award.anagram() > 0 {
                            write!(output, ", anagram +{}", award.anagram())?;
                        }
                        writeln!(output, ")")?;
                    }
                    OutputFormat::Json => writeln!(
                        output,
                        "{}",
                        json!({
                            "event": "accepted",
                            "input": line,
                            "word": accepted.word(),
                            "award": award,
                            "points": award.total(),
                            "score": accepted.score(),
                        })
                    )?,
                }
            }
            Err(rejection) => {
                summary.rejected += 1;
                write_rejection(&mut output, format, &line, &rejection)?;
                // No one to press OK in batch mode.
                session.acknowledge_error();
            }
        }
    }

    summary.final_score = session.score();
    info!(?summary, "Batch finished");
    Ok(summary)
}

fn write_root<W: Write>(
    output: &mut W,
    format: OutputFormat,
    event: &str,
    root: &str,
) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(output, "root: {}", root)?,
        OutputFormat::Json => {
            writeln!(output, "{}", json!({ "event": event, "root_word": root }))?
        }
    }
    Ok(())
}

fn write_rejection<W: Write>(
    output: &mut W,
    format: OutputFormat,
    input: &str,
    rejection: &Rejection,
) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(output, "rejected {}: {}", rejection.word(), rejection)?,
        OutputFormat::Json => writeln!(
            output,
            "{}",
            json!({
                "event": "rejected",
                "input": input,
                "word": rejection.word(),
                "kind": rejection.kind(),
                "title": rejection.title(),
                "message": rejection.message(),
            })
        )?,
    }
    Ok(())
}

fn write_state<R, W: Write>(
    output: &mut W,
    format: OutputFormat,
    session: &GameSession<R>,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let words = session
                .used_words()
                .iter()
                .map(|w| w.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                output,
                "root {} | score {} | words [{}]",
                session.root_word(),
                session.score(),
                words
            )?;
        }
        OutputFormat::Json => {
            let mut value = serde_json::to_value(session.view())?;
            value["event"] = json!("state");
            writeln!(output, "{}", value)?;
        }
    }
    Ok(())
}
