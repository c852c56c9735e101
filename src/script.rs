//! Non-interactive play: replay a list of cell indices through the store.

use derive_new::new;
use serde::Serialize;
use tictactoe_core::{GameState, Locale, Outcome, Player, Rejection, StoreError, StoreHandle};
use tracing::{debug, instrument};

/// What happened to one scripted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveResult {
    /// The mark was placed.
    Accepted,
    /// The cell already held a mark.
    Occupied,
    /// A line was already complete.
    GameOver,
    /// The index was not a cell.
    OutOfRange,
}

impl From<Outcome> for MoveResult {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Accepted => MoveResult::Accepted,
            Outcome::Rejected(Rejection::Occupied(_)) => MoveResult::Occupied,
            Outcome::Rejected(Rejection::GameOver) => MoveResult::GameOver,
        }
    }
}

/// One scripted move and its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, new)]
pub struct MoveReport {
    /// Cell index as given.
    pub index: usize,
    /// What the store did with it.
    pub result: MoveResult,
}

/// Final position after a scripted game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayReport {
    /// Per-move results, in input order.
    pub moves: Vec<MoveReport>,
    /// State after the last move.
    pub state: GameState,
    /// Winner of the final board.
    pub winner: Option<Player>,
    /// Status line in the requested locale.
    pub status: String,
}

impl PlayReport {
    /// Board followed by the status line.
    pub fn render_text(&self) -> String {
        let mut text = self.state.board().display();
        text.push_str("\n\n");
        text.push_str(&self.status);
        text
    }
}

/// Sends each index to the store as a select and reports the outcome.
///
/// Rejected and out-of-range moves are recorded and skipped.
///
/// # Errors
///
/// Returns [`StoreError::Busy`] if the store is already publishing.
#[instrument(skip(store))]
pub fn run_moves(
    store: &StoreHandle,
    indices: &[usize],
    locale: Locale,
) -> Result<PlayReport, StoreError> {
    let mut moves = Vec::with_capacity(indices.len());
    for &index in indices {
        let result = match store.select_index(index) {
            Ok(outcome) => MoveResult::from(outcome),
            Err(StoreError::CellOutOfRange { .. }) => MoveResult::OutOfRange,
            Err(e) => return Err(e),
        };
        debug!(index, ?result, "Scripted move");
        moves.push(MoveReport::new(index, result));
    }

    let state = store.state()?;
    Ok(PlayReport {
        moves,
        winner: state.winner(),
        status: state.status().message(locale),
        state,
    })
}
