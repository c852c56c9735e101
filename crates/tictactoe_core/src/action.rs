//! First-class intents and the pure transition function.
//!
//! Intents are domain events, not side effects. [`reduce`] maps a state and
//! an intent to the next state without touching anything else, so every rule
//! about which moves count can be tested without a store or a view.

use crate::{GameState, Position, rules};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A user action submitted to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    /// Place the current player's mark on a cell.
    Select(Position),
    /// Replace the whole state with the initial one.
    Restart,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intent::Select(pos) => write!(f, "select {}", pos.label()),
            Intent::Restart => write!(f, "restart"),
        }
    }
}

/// Why a select intent left the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// A line is already complete.
    #[display("Game is already over")]
    GameOver,
}

/// Result of applying an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The state was replaced and published.
    Accepted,
    /// The state is unchanged.
    Rejected(Rejection),
}

impl Outcome {
    /// True for [`Outcome::Accepted`].
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted)
    }
}

/// Checks whether `pos` may be played on `state`.
pub fn check_select(state: &GameState, pos: Position) -> Result<(), Rejection> {
    if rules::winner(state.board()).is_some() {
        return Err(Rejection::GameOver);
    }
    if !state.board().is_empty(pos) {
        return Err(Rejection::Occupied(pos));
    }
    Ok(())
}

/// Applies `intent` to `state`, returning the next state and what happened.
///
/// A rejected select returns `state` itself. Restart always succeeds.
#[instrument(level = "debug", skip(state), fields(to_move = %state.to_move()))]
pub fn reduce(state: GameState, intent: Intent) -> (GameState, Outcome) {
    match intent {
        Intent::Select(pos) => match check_select(&state, pos) {
            Ok(()) => {
                let mut next = state;
                next.place(pos);
                (next, Outcome::Accepted)
            }
            Err(rejection) => (state, Outcome::Rejected(rejection)),
        },
        Intent::Restart => (GameState::new(), Outcome::Accepted),
    }
}

/// Folds `intents` over the initial state.
pub fn replay<I>(intents: I) -> (GameState, Vec<Outcome>)
where
    I: IntoIterator<Item = Intent>,
{
    intents
        .into_iter()
        .fold((GameState::new(), Vec::new()), |(state, mut outcomes), intent| {
            let (next, outcome) = reduce(state, intent);
            outcomes.push(outcome);
            (next, outcomes)
        })
}
