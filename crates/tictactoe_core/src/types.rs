//! Core domain types for tic-tac-toe.

use crate::position::Position;
use crate::rules::{self, Phase, Status};
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the player holding this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts the squares held by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based cell number so the text doubles
    /// as a key for the `play` command and the terminal digits.
    pub fn display(&self) -> String {
        let rows: Vec<String> = self
            .squares
            .chunks(3)
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, square)| match square {
                        Square::Empty => (row * 3 + col + 1).to_string(),
                        Square::Occupied(player) => player.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        rows.join("\n-+-+-\n")
    }

    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Builds a board from raw squares; rule checks and tests use this to
    /// construct positions that normal play may never reach.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete game state: the board and whose turn it is.
///
/// Every snapshot handed out by the store is an independent copy; later
/// transitions never touch a published value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: Player,
}

impl GameState {
    /// Creates the initial state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
        }
    }

    /// Creates a state from parts without validation.
    pub fn from_parts(board: Board, to_move: Player) -> Self {
        Self { board, to_move }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose symbol the next accepted move places.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Winner derived from the current board.
    pub fn winner(&self) -> Option<Player> {
        rules::winner(&self.board)
    }

    /// Status derived from the current board and turn.
    pub fn status(&self) -> Status {
        Status::evaluate(self.winner(), &self.board, self.to_move)
    }

    /// Phase derived from the current board.
    pub fn phase(&self) -> Phase {
        rules::phase(&self.board)
    }

    /// Places the current player's mark and hands the turn over.
    pub(crate) fn place(&mut self, pos: Position) {
        self.board.set(pos, Square::Occupied(self.to_move));
        self.to_move = self.to_move.opponent();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty_with_x_to_move() {
        let state = GameState::new();
        assert!(state.board().squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(state.to_move(), Player::X);
    }

    #[test]
    fn test_place_flips_turn() {
        let mut state = GameState::new();
        state.place(Position::Center);
        assert_eq!(state.board().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(state.to_move(), Player::O);
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::Center, Square::Occupied(Player::O));
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_count_per_player() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::TopRight, Square::Occupied(Player::X));
        board.set(Position::Center, Square::Occupied(Player::O));
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 1);
    }
}
