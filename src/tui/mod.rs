//! Terminal presentation layer for hot-seat tic-tac-toe.
//!
//! Reads keys, forwards cell activations to the engine and renders what it
//! returns. Single-threaded: each key is handled before the next is read.

mod app;
mod input;
mod ui;

pub use app::{App, NameField, Screen};

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

/// Runs the terminal UI until the user quits.
#[instrument(skip(app))]
pub fn run_tui(mut app: App) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let res = run_in_alternate_screen(&mut app);
    let restored = restore_terminal();

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("Terminal UI closed");
    res.and(restored)
}

fn run_in_alternate_screen(app: &mut App) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    run_app(&mut terminal, app)
}

/// Leaves the alternate screen and raw mode, attempting both even if one fails.
fn restore_terminal() -> Result<()> {
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
    let raw = disable_raw_mode();
    screen?;
    raw?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_is_safe_without_raw_mode() {
        // Teardown runs after a failed setup too, before raw mode was ever entered.
        assert!(restore_terminal().is_ok());
        assert!(restore_terminal().is_ok());
    }
}
