//! Application state for the terminal view.

use super::input::{Command, command_for, move_cursor};
use crossterm::event::KeyCode;
use std::cell::Cell;
use std::rc::Rc;
use tictactoe_core::{
    GameState, Intent, Locale, Outcome, Position, StoreError, StoreHandle, SubscriptionId,
    winning_line,
};
use tracing::{debug, info};

/// Whether the event loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Snapshot to draw.
    pub state: GameState,
    /// Highlighted cell.
    pub cursor: Position,
    /// Status line text.
    pub status: String,
    /// Explanation of the last rejected move, if any.
    pub note: Option<String>,
    /// Cells of the completed line, if any.
    pub winning_line: Option<[Position; 3]>,
    /// Won or drawn; only restart and quit do anything.
    pub game_over: bool,
}

/// Terminal application state.
///
/// The game itself lives in the store; the app only keeps view concerns
/// (cursor, last note) and a redraw flag set by the store's publications.
#[derive(Debug)]
pub struct App {
    store: StoreHandle,
    cursor: Position,
    locale: Locale,
    note: Option<String>,
    dirty: Rc<Cell<bool>>,
    subscription: SubscriptionId,
}

impl App {
    /// Creates the app and subscribes it to `store`.
    pub fn new(store: StoreHandle, locale: Locale) -> Result<Self, StoreError> {
        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        let subscription = store.subscribe(move |_| flag.set(true))?;
        Ok(Self {
            store,
            cursor: Position::Center,
            locale,
            note: None,
            dirty,
            subscription,
        })
    }

    /// Returns and clears the redraw flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    /// Forces a redraw on the next loop iteration.
    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Result<Control, StoreError> {
        let Some(command) = command_for(key) else {
            return Ok(Control::Continue);
        };
        debug!(?command, "Key command");

        match command {
            Command::Move(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
                self.mark_dirty();
            }
            Command::SelectCursor => self.select(self.cursor)?,
            Command::SelectCell(pos) => {
                self.cursor = pos;
                self.select(pos)?;
            }
            Command::Restart => {
                info!("Restarting game");
                self.note = None;
                self.store.restart()?;
            }
            Command::Quit => {
                info!("User quit");
                return Ok(Control::Quit);
            }
        }
        Ok(Control::Continue)
    }

    fn select(&mut self, pos: Position) -> Result<(), StoreError> {
        match self.store.dispatch(Intent::Select(pos))? {
            Outcome::Accepted => self.note = None,
            Outcome::Rejected(rejection) => {
                self.note = Some(rejection.to_string());
                self.mark_dirty();
            }
        }
        Ok(())
    }

    /// Builds the view for the current state.
    pub fn view(&self) -> Result<View, StoreError> {
        let state = self.store.state()?;
        let status = state.status();
        Ok(View {
            status: status.message(self.locale),
            game_over: status.is_terminal(),
            winning_line: winning_line(state.board()),
            state,
            cursor: self.cursor,
            note: self.note.clone(),
        })
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.store.unsubscribe(self.subscription);
    }
}
