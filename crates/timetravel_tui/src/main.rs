//! Time-travel tic-tac-toe - terminal entry point.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use std::time::Duration;
use timetravel_tui::{App, Cli, Settings, ui};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_file)?;

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    }
    .with_overrides(cli.theme, cli.pieces, cli.size);

    info!(?settings, "Starting time-travel tic-tac-toe");

    let mut app = App::new(settings.cosmetics());
    run_tui(&mut app)
}

/// Sends logs to a file so they do not interfere with the TUI.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Sets up the terminal, runs the event loop, and always restores the terminal.
fn run_tui(app: &mut App) -> Result<()> {
    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let res = event_loop(&mut terminal, app);
    let restored = guard.restore().context("Failed to restore terminal");

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Exiting");
    res.and(restored)
}

/// Raw mode plus alternate screen, undone on drop.
///
/// Dropping the guard on an early return restores the terminal and
/// discards any restore error; [`TerminalGuard::restore`] reports it.
struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
        Ok(guard)
    }

    fn restore(mut self) -> io::Result<()> {
        self.active = false;
        restore_terminal()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = restore_terminal();
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    run_restore_steps(&[
        &disable_raw_mode,
        &|| execute!(io::stdout(), LeaveAlternateScreen),
        &|| execute!(io::stdout(), Show),
    ])
}

/// Runs every step even after one fails and returns the first error.
fn run_restore_steps(steps: &[&dyn Fn() -> io::Result<()>]) -> io::Result<()> {
    let mut first = Ok(());
    for step in steps {
        if let Err(err) = step()
            && first.is_ok()
        {
            first = Err(err);
        }
    }
    first
}

/// Draw, wait for a key, apply it. Each key runs to completion before the next redraw.
#[instrument(skip_all)]
fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_restore_steps_all_run_after_failure() {
        let ran = Cell::new(0);
        let result = run_restore_steps(&[
            &|| {
                ran.set(ran.get() + 1);
                Err(io::Error::other("raw mode"))
            },
            &|| {
                ran.set(ran.get() + 1);
                Err(io::Error::other("alternate screen"))
            },
            &|| {
                ran.set(ran.get() + 1);
                Ok(())
            },
        ]);
        assert_eq!(ran.get(), 3);
        assert_eq!(result.unwrap_err().to_string(), "raw mode");
    }

    #[test]
    fn test_restore_steps_ok_when_all_succeed() {
        assert!(run_restore_steps(&[&|| Ok(()), &|| Ok(())]).is_ok());
    }
}
