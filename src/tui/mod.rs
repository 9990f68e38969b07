//! Terminal UI for Strictly Scramble.

mod app;
mod ui;

pub use app::{App, AppTransition};
pub use ui::draw;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::{ScrambleConfig, start_session};

/// Runs the TUI until the player quits.
///
/// Logs go to the configured log file so they never draw over the game.
/// A word pool that cannot be loaded aborts before the terminal is touched.
pub fn run_tui(config: &ScrambleConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting Strictly Scramble TUI");

    let session = start_session(config)?;
    let app = App::new(session);

    enable_raw_mode()?;
    run_then_restore(|| run_in_alternate_screen(app), restore_terminal)
}

/// Runs `body`, then `restore` even if `body` failed.
///
/// A `body` error takes precedence over a `restore` error.
fn run_then_restore<T>(
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    let res = body();
    let restored = restore();
    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    let value = res?;
    restored?;
    Ok(value)
}

/// Enters the alternate screen and runs the game loop there.
fn run_in_alternate_screen(app: App) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    run_app(&mut terminal, app)
}

/// Leaves raw mode and the alternate screen, whether or not they were entered.
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}

/// Draw-and-read loop.
#[instrument(skip_all)]
pub fn run_app<B, R>(terminal: &mut Terminal<B>, mut app: App<R>) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
    R: Rng,
{
    loop {
        terminal.draw(|f| draw(f, &app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if app.handle_key(key) == AppTransition::Quit {
                info!(score = app.session().score(), "Leaving game");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_restore_runs_after_failed_setup() {
        let restored = Cell::new(false);
        let res: Result<()> = run_then_restore(
            || Err(anyhow::anyhow!("alternate screen unavailable")),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(restored.get());
        assert_eq!(res.unwrap_err().to_string(), "alternate screen unavailable");
    }

    #[test]
    fn test_loop_error_wins_over_restore_error() {
        let res: Result<()> = run_then_restore(
            || Err(anyhow::anyhow!("draw failed")),
            || Err(anyhow::anyhow!("restore failed")),
        );
        assert_eq!(res.unwrap_err().to_string(), "draw failed");
    }

    #[test]
    fn test_restore_error_surfaces_after_clean_exit() {
        let res = run_then_restore(|| Ok(7), || Err(anyhow::anyhow!("restore failed")));
        assert_eq!(res.unwrap_err().to_string(), "restore failed");
    }
}
