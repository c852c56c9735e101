//! Balanced marks: X never trails O and never leads by more than one.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: `count(X) - count(O)` is 0 or 1.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or exactly one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Square};

    #[test]
    fn test_empty_game_holds() {
        assert!(BalancedMarksInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_x_two_ahead_violates() {
        let mut squares = [Square::Empty; 9];
        squares[0] = Square::Occupied(Player::X);
        squares[4] = Square::Occupied(Player::X);
        let state = GameState::from_parts(Board::from_squares(squares), Player::O);
        assert!(!BalancedMarksInvariant::holds(&state));
    }
}
