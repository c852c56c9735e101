//! Property tests over arbitrary move sequences and boards.

use proptest::prelude::*;
use tictactoe_core::{
    Board, GameState, GameStore, Intent, Outcome, Player, Position, Square, invariants, winner,
};

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn any_board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(square()).prop_map(Board::from_squares)
}

fn intent() -> impl Strategy<Value = Intent> {
    prop_oneof![
        9 => (0usize..9).prop_map(|i| Intent::Select(Position::ALL[i])),
        1 => Just(Intent::Restart),
    ]
}

proptest! {
    #[test]
    fn winner_is_owner_of_some_complete_line(board in any_board()) {
        if let Some(player) = winner(&board) {
            let owned = tictactoe_core::LINES.iter().any(|line| {
                line.iter().all(|pos| board.get(*pos) == Square::Occupied(player))
            });
            prop_assert!(owned);
        } else {
            prop_assert!(!tictactoe_core::rules::has_line(&board, Player::X));
            prop_assert!(!tictactoe_core::rules::has_line(&board, Player::O));
        }
    }

    #[test]
    fn accepted_selects_keep_marks_balanced(indices in prop::collection::vec(0usize..9, 0..30)) {
        let mut store = GameStore::new();
        for index in indices {
            store.select_index(index).unwrap();
            let state = store.state();
            let x = state.board().count(Player::X);
            let o = state.board().count(Player::O);
            prop_assert!(x == o || x == o + 1);
            prop_assert_eq!(state.to_move() == Player::X, x == o);
        }
    }

    #[test]
    fn every_reachable_state_satisfies_invariants(intents in prop::collection::vec(intent(), 0..40)) {
        let mut store = GameStore::new();
        for intent in intents {
            store.dispatch(intent);
            prop_assert!(invariants::check_state(&store.state()).is_ok());
        }
    }

    #[test]
    fn rejected_select_leaves_state_identical(indices in prop::collection::vec(0usize..9, 1..20), probe in 0usize..9) {
        let mut store = GameStore::new();
        for index in indices {
            store.select_index(index).unwrap();
        }
        let before = store.state();
        if let Ok(Outcome::Rejected(_)) = store.select_index(probe) {
            prop_assert_eq!(store.state(), before);
        }
    }

    #[test]
    fn board_frozen_once_won(indices in prop::collection::vec(0usize..9, 0..40)) {
        let mut store = GameStore::new();
        let mut frozen: Option<GameState> = None;
        for index in indices {
            store.select_index(index).unwrap();
            match frozen {
                Some(won) => prop_assert_eq!(store.state(), won),
                None if store.winner().is_some() => frozen = Some(store.state()),
                None => {}
            }
        }
    }

    #[test]
    fn restart_is_idempotent(intents in prop::collection::vec(intent(), 0..20)) {
        let mut store = GameStore::new();
        for intent in intents {
            store.dispatch(intent);
        }
        store.restart();
        let once = store.state();
        store.restart();
        prop_assert_eq!(once, GameState::new());
        prop_assert_eq!(store.state(), once);
    }
}
