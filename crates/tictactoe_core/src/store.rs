//! The game state store.
//!
//! [`GameStore`] owns the one authoritative [`GameState`] and changes it only
//! through [`Intent`]s. Every accepted intent publishes the new snapshot to
//! subscribers in registration order. Views that share the store hold a
//! [`StoreHandle`] created by the composition root; there is no global
//! instance.

use crate::error::StoreError;
use crate::rules::Status;
use crate::{GameState, Intent, Outcome, Player, Position, invariants, reduce};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use tracing::{debug, info, instrument, warn};

/// Identifies a subscriber registered with [`GameStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("subscription#{}", _0)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&GameState)>;

/// Owner of the game state.
pub struct GameStore {
    state: GameState,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl std::fmt::Debug for GameStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameStore")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl GameStore {
    /// Creates a store holding the initial state.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Winner of the current board, recomputed on every call.
    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    /// Status of the current state, recomputed on every call.
    pub fn status(&self) -> Status {
        self.state.status()
    }

    /// Applies an intent.
    ///
    /// Accepted intents replace the state and publish it. Rejected selects
    /// change nothing and publish nothing.
    #[instrument(skip_all, fields(intent = %intent))]
    pub fn dispatch(&mut self, intent: Intent) -> Outcome {
        let (next, outcome) = reduce(self.state, intent);
        match outcome {
            Outcome::Accepted => {
                self.state = next;
                debug_assert!(
                    invariants::check_state(&self.state).is_ok(),
                    "Invariants violated after {}",
                    intent
                );
                info!(to_move = %self.state.to_move(), "Intent applied");
                self.publish();
            }
            Outcome::Rejected(rejection) => {
                debug!(%rejection, "Intent rejected");
            }
        }
        outcome
    }

    /// Selects a cell for the current player.
    pub fn select(&mut self, pos: Position) -> Outcome {
        self.dispatch(Intent::Select(pos))
    }

    /// Selects a cell by raw index.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::CellOutOfRange`] for an index above 8; the
    /// state is untouched and nothing is published.
    #[instrument(skip(self))]
    pub fn select_index(&mut self, index: usize) -> Result<Outcome, StoreError> {
        let pos = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Cell index out of range");
            StoreError::CellOutOfRange { index }
        })?;
        Ok(self.select(pos))
    }

    /// Resets to the initial state. Always publishes.
    pub fn restart(&mut self) {
        self.dispatch(Intent::Restart);
    }

    /// Registers a callback run with each newly published snapshot.
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&GameState) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        debug!(%id, "Subscriber registered");
        id
    }

    /// Removes a subscriber. Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        before != self.subscribers.len()
    }

    fn publish(&mut self) {
        let snapshot = self.state;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&snapshot);
        }
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared, single-threaded handle to a [`GameStore`].
///
/// Clones refer to the same store. Every method fails with
/// [`StoreError::Busy`] when called from inside a subscriber, because the
/// store is mid-publish at that point; subscribers receive the snapshot as
/// their argument instead.
#[derive(Debug, Clone, Default)]
pub struct StoreHandle {
    inner: Rc<RefCell<GameStore>>,
}

impl StoreHandle {
    /// Creates a handle around a fresh store.
    pub fn new() -> Self {
        Self::from_store(GameStore::new())
    }

    /// Wraps an existing store.
    pub fn from_store(store: GameStore) -> Self {
        Self {
            inner: Rc::new(RefCell::new(store)),
        }
    }

    fn read(&self) -> Result<Ref<'_, GameStore>, StoreError> {
        self.inner.try_borrow().map_err(|_| {
            warn!("Store read while publishing");
            StoreError::Busy
        })
    }

    fn write(&self) -> Result<RefMut<'_, GameStore>, StoreError> {
        self.inner.try_borrow_mut().map_err(|_| {
            warn!("Store written while publishing");
            StoreError::Busy
        })
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> Result<GameState, StoreError> {
        Ok(self.read()?.state())
    }

    /// See [`GameStore::dispatch`].
    pub fn dispatch(&self, intent: Intent) -> Result<Outcome, StoreError> {
        Ok(self.write()?.dispatch(intent))
    }

    /// See [`GameStore::select_index`].
    pub fn select_index(&self, index: usize) -> Result<Outcome, StoreError> {
        self.write()?.select_index(index)
    }

    /// See [`GameStore::restart`].
    pub fn restart(&self) -> Result<(), StoreError> {
        self.write()?.restart();
        Ok(())
    }

    /// See [`GameStore::subscribe`].
    pub fn subscribe<F>(&self, subscriber: F) -> Result<SubscriptionId, StoreError>
    where
        F: FnMut(&GameState) + 'static,
    {
        Ok(self.write()?.subscribe(subscriber))
    }

    /// See [`GameStore::unsubscribe`].
    pub fn unsubscribe(&self, id: SubscriptionId) -> Result<bool, StoreError> {
        Ok(self.write()?.unsubscribe(id))
    }
}
