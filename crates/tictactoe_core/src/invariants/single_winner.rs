//! Single winner: play halts on the first completed line.

use super::Invariant;
use crate::rules::has_line;
use crate::{GameState, Player};

/// Invariant: at most one player owns a line, and the owner made the last
/// move.
///
/// When X wins, X has one more mark than O; when O wins, the counts are
/// equal.
pub struct SingleWinnerInvariant;

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        match (has_line(board, Player::X), has_line(board, Player::O)) {
            (true, true) => false,
            (true, false) => x == o + 1,
            (false, true) => x == o,
            (false, false) => true,
        }
    }

    fn description() -> &'static str {
        "No move is accepted after a line is complete"
    }
}
