//! End-to-end scenarios driven through the game store.

use tictactoe_core::{
    GameState, GameStore, Intent, Outcome, Phase, Player, Position, Rejection, Square, StoreError,
    status, winner,
};

fn play(store: &mut GameStore, indices: &[usize]) {
    for &index in indices {
        assert_eq!(
            store.select_index(index),
            Ok(Outcome::Accepted),
            "move {index} should be accepted"
        );
    }
}

#[test]
fn test_left_column_win() {
    let mut store = GameStore::new();
    play(&mut store, &[0, 1, 3, 4, 6]);

    let state = store.state();
    assert_eq!(winner(state.board()), Some(Player::X));
    assert_eq!(
        status(winner(state.board()), state.board(), state.to_move()),
        "player X has won"
    );
    assert_eq!(state.phase(), Phase::Terminal);
}

#[test]
fn test_full_board_draw() {
    // X O X / X O O / O X X
    let mut store = GameStore::new();
    play(&mut store, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    let state = store.state();
    assert_eq!(winner(state.board()), None);
    assert_eq!(status(None, state.board(), state.to_move()), "draw");
    assert_eq!(state.phase(), Phase::Terminal);
}

#[test]
fn test_repeated_select_is_noop() {
    let mut store = GameStore::new();
    play(&mut store, &[0]);
    let before = store.state();

    assert_eq!(
        store.select_index(0),
        Ok(Outcome::Rejected(Rejection::Occupied(Position::TopLeft)))
    );
    assert_eq!(store.state(), before);
    assert_eq!(store.state().to_move(), Player::O);
}

#[test]
fn test_select_after_win_is_noop() {
    let mut store = GameStore::new();
    play(&mut store, &[0, 1, 3, 4, 6]);
    let before = store.state();

    for pos in Position::empty_on(before.board()) {
        assert_eq!(store.select(pos), Outcome::Rejected(Rejection::GameOver));
    }
    assert_eq!(store.state(), before);
}

#[test]
fn test_restart_from_midgame() {
    let mut store = GameStore::new();
    play(&mut store, &[4, 0, 8]);
    store.restart();

    let state = store.state();
    assert!(state.board().squares().iter().all(|s| *s == Square::Empty));
    assert_eq!(state.to_move(), Player::X);
    assert_eq!(state, GameState::new());
}

#[test]
fn test_restart_after_win_allows_play() {
    let mut store = GameStore::new();
    play(&mut store, &[0, 1, 3, 4, 6]);
    assert_eq!(store.dispatch(Intent::Restart), Outcome::Accepted);
    assert_eq!(store.select(Position::Center), Outcome::Accepted);
    assert_eq!(store.status().to_string(), "player O to move");
}

#[test]
fn test_out_of_range_is_usage_fault() {
    let mut store = GameStore::new();
    let err = store.select_index(42).unwrap_err();
    assert_eq!(err, StoreError::CellOutOfRange { index: 42 });
    assert_eq!(err.to_string(), "Cell index 42 is out of range (must be 0-8)");
    assert_eq!(store.state(), GameState::new());
}

#[test]
fn test_snapshot_serializes() {
    let mut store = GameStore::new();
    play(&mut store, &[4]);
    let json = serde_json::to_value(store.state()).unwrap();
    assert_eq!(json["to_move"], "O");
    assert_eq!(json["board"]["squares"][4]["Occupied"], "X");
    assert_eq!(json["board"]["squares"][0], "Empty");
}
