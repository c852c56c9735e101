//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here is cached:
//! callers recompute winner and status on every observation.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::{is_draw, is_full};
pub use status::{Locale, Status, status};
pub use win::{LINES, has_line, winner, winning_line};

use crate::types::Board;
use serde::{Deserialize, Serialize};

/// Coarse game phase derived from a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No winner and at least one empty square.
    InProgress,
    /// A line is complete or the board is full.
    Terminal,
}

/// Derives the phase of `board`.
pub fn phase(board: &Board) -> Phase {
    if winner(board).is_some() || is_full(board) {
        Phase::Terminal
    } else {
        Phase::InProgress
    }
}
