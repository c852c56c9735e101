//! Store usage faults.
//!
//! These are programmer errors made while wiring the store into a view,
//! never game outcomes. Rejected moves are reported through
//! [`Outcome`](crate::Outcome) instead.

use derive_more::{Display, Error};

/// Misuse of the game store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum StoreError {
    /// A raw cell index outside 0-8 was selected.
    #[display("Cell index {} is out of range (must be 0-8)", index)]
    CellOutOfRange {
        /// The offending index.
        index: usize,
    },

    /// The store was accessed from a subscriber while it was publishing.
    #[display("Game store is busy publishing a snapshot")]
    Busy,
}
