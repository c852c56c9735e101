//! Human-readable game status.

use super::draw::is_full;
use crate::{Board, Player};
use serde::{Deserialize, Serialize};

/// Language used for status messages.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Locale {
    /// "player X to move", "player O has won", "draw".
    #[default]
    English,
    /// "Pemain : X", "Menang: O", "Seri!".
    Indonesian,
}

/// What the status line should say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// A player completed a line.
    Won(Player),
    /// Board full, no line.
    Draw,
    /// Game continues; this player moves next.
    ToMove(Player),
}

impl Status {
    /// Picks the status from a winner, the board and the turn indicator.
    ///
    /// A winner takes precedence over a full board.
    pub fn evaluate(winner: Option<Player>, board: &Board, to_move: Player) -> Self {
        match winner {
            Some(player) => Status::Won(player),
            None if is_full(board) => Status::Draw,
            None => Status::ToMove(to_move),
        }
    }

    /// Whether the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::ToMove(_))
    }

    /// Renders the status in `locale`.
    pub fn message(&self, locale: Locale) -> String {
        match (locale, self) {
            (Locale::English, Status::Won(p)) => format!("player {p} has won"),
            (Locale::English, Status::Draw) => "draw".to_string(),
            (Locale::English, Status::ToMove(p)) => format!("player {p} to move"),
            (Locale::Indonesian, Status::Won(p)) => format!("Menang: {p}"),
            (Locale::Indonesian, Status::Draw) => "Seri!".to_string(),
            (Locale::Indonesian, Status::ToMove(p)) => format!("Pemain : {p}"),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message(Locale::English))
    }
}

/// Formats the status line for a board, its winner and the turn indicator.
pub fn status(winner: Option<Player>, board: &Board, to_move: Player) -> String {
    Status::evaluate(winner, board, to_move).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;
    use std::str::FromStr;

    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);

    #[test]
    fn test_status_to_move() {
        assert_eq!(status(None, &Board::new(), Player::X), "player X to move");
        assert_eq!(status(None, &Board::new(), Player::O), "player O to move");
    }

    #[test]
    fn test_status_winner_precedes_full_board() {
        let board = Board::from_squares([X, X, X, O, O, X, X, O, O]);
        assert_eq!(status(Some(Player::X), &board, Player::O), "player X has won");
    }

    #[test]
    fn test_status_draw() {
        let board = Board::from_squares([X, O, X, O, X, X, O, X, O]);
        assert_eq!(status(None, &board, Player::O), "draw");
    }

    #[test]
    fn test_only_won_and_draw_are_terminal() {
        assert!(Status::Won(Player::X).is_terminal());
        assert!(Status::Draw.is_terminal());
        assert!(!Status::ToMove(Player::O).is_terminal());
    }

    #[test]
    fn test_indonesian_messages() {
        assert_eq!(Status::Won(Player::O).message(Locale::Indonesian), "Menang: O");
        assert_eq!(Status::Draw.message(Locale::Indonesian), "Seri!");
        assert_eq!(
            Status::ToMove(Player::X).message(Locale::Indonesian),
            "Pemain : X"
        );
    }

    #[test]
    fn test_locale_parses_case_insensitively() {
        assert_eq!(Locale::from_str("Indonesian"), Ok(Locale::Indonesian));
        assert_eq!(Locale::from_str("english"), Ok(Locale::English));
        assert!(Locale::from_str("klingon").is_err());
        assert_eq!(Locale::Indonesian.to_string(), "indonesian");
    }
}
