//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`GameState`]
//! - **Rules**: [`winner`], [`status`] and friends, pure over a board
//! - **Intents**: [`Intent`] and the pure [`reduce`] transition
//! - **Store**: [`GameStore`] owns the state and publishes snapshots
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameStore, Outcome, Player};
//!
//! let mut store = GameStore::new();
//! for index in [0, 1, 3, 4, 6] {
//!     assert_eq!(store.select_index(index), Ok(Outcome::Accepted));
//! }
//! assert_eq!(store.winner(), Some(Player::X));
//! assert_eq!(store.status().to_string(), "player X has won");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod store;
mod types;

pub use action::{Intent, Outcome, Rejection, check_select, reduce, replay};
pub use error::StoreError;
pub use position::Position;
pub use rules::{LINES, Locale, Phase, Status, is_draw, is_full, status, winner, winning_line};
pub use store::{GameStore, StoreHandle, SubscriptionId};
pub use types::{Board, GameState, Player, Square};
