//! Terminal UI for tic-tac-toe.
//!
//! The view layer: draws snapshots from the store and turns key presses
//! into intents. It never mutates game state directly.

mod app;
mod input;
mod ui;

pub use app::{App, Control, View};
pub use input::{Command, Direction, command_for, move_cursor};

use crate::config::GameConfig;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tictactoe_core::StoreHandle;
use tracing::{error, info, instrument};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game on `store` until the player quits.
///
/// Once raw mode is on, the terminal is restored on every exit path,
/// including a failed alternate-screen or backend setup.
#[instrument(skip_all, fields(locale = %config.locale()))]
pub fn run_tui(store: StoreHandle, config: &GameConfig) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let res = enter_screen().and_then(|mut terminal| {
        let mut app = App::new(store, *config.locale())?;
        run_loop(&mut terminal, &mut app, config.poll_interval())
    });

    settle(res, restore_terminal())
}

fn enter_screen() -> Result<Term> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Attempts every restore step even when an earlier one fails.
fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let mut stdout = io::stdout();
    let screen = execute!(stdout, LeaveAlternateScreen, Show);
    raw.and(screen)
}

/// Combines the session result with the restore result.
///
/// A session error is logged and returned even if restoring also failed.
fn settle(res: Result<()>, restored: io::Result<()>) -> Result<()> {
    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    match (res, restored) {
        (Err(err), Err(restore_err)) => {
            error!(error = %restore_err, "Failed to restore terminal");
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), restored) => restored.context("Failed to restore terminal"),
    }
}

fn run_loop(terminal: &mut Term, app: &mut App, poll: Duration) -> Result<()> {
    loop {
        if app.take_dirty() {
            let view = app.view()?;
            terminal.draw(|frame| ui::draw(frame, &view))?;
        }

        if event::poll(poll)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key.code)? == Control::Quit {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => app.mark_dirty(),
                _ => {}
            }
        }
    }
}
