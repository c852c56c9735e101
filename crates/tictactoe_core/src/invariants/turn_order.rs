//! Turn order: the turn indicator follows from the marks on the board.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: X moves when both players have equal marks, O otherwise.
pub struct TurnOrderInvariant;

impl Invariant<GameState> for TurnOrderInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        let expected = if x == o { Player::X } else { Player::O };
        state.to_move() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Intent, Position, reduce};

    #[test]
    fn test_single_move_holds() {
        let (state, _) = reduce(GameState::new(), Intent::Select(Position::Center));
        assert!(TurnOrderInvariant::holds(&state));
        assert_eq!(state.to_move(), Player::O);
    }

    #[test]
    fn test_wrong_player_to_move_violates() {
        let state = GameState::from_parts(*GameState::new().board(), Player::O);
        assert!(!TurnOrderInvariant::holds(&state));
    }
}
