//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// Every way to win, in evaluation order: rows top to bottom, columns
/// left to right, then the 0-4-8 diagonal before the 2-4-6 diagonal.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Owner of a completed line, if the three squares agree.
fn line_owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Player> {
    let sq = board.get(a);
    if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
        sq.player()
    } else {
        None
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the player owning the first complete line in [`LINES`] order,
/// `None` otherwise. On boards with several complete lines (unreachable in
/// play) the earliest line decides.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.into_iter().find_map(|line| line_owner(board, line))
}

/// The line that decides [`winner`], for highlighting.
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES
        .into_iter()
        .find(|line| line_owner(board, *line).is_some())
}

/// Whether `player` owns at least one complete line.
pub fn has_line(board: &Board, player: Player) -> bool {
    LINES
        .into_iter()
        .any(|line| line_owner(board, line) == Some(player))
}
