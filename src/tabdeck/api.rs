//! # Store Facade
//!
//! [`TabStore`] is the single entry point for all state operations. It
//! owns the in-memory [`AppState`] plus the persistence slot, applies
//! mutations (delegating reorders to [`sync`](crate::sync)), and writes
//! the whole state back after every mutating operation.
//!
//! ## Generic Over BlobStore
//!
//! `TabStore<S: BlobStore>` is generic over the storage backend:
//! - Production: `TabStore<FileStore>`
//! - Testing: `TabStore<InMemoryStore>`
//!
//! The backend is constructor-injected, so tests never touch a real
//! store.
//!
//! ## Error Policy
//!
//! No mutating operation returns an error. A failed save leaves the
//! in-memory state correct and is logged at `warn`; a failed load falls
//! back to the default seed. See [`error`](crate::error) for the
//! taxonomy.

use crate::model::{AppState, Tab, TabId, FIRST_TAB_ID, SECOND_TAB_ID};
use crate::persist::StateSlot;
use crate::store::BlobStore;
use crate::sync;
use log::{debug, warn};

/// The main facade: in-memory tab/card state plus its persistence slot.
pub struct TabStore<S: BlobStore> {
    state: AppState,
    slot: StateSlot<S>,
}

impl<S: BlobStore> TabStore<S> {
    /// Build the store around `store`, hydrating from it when it holds a
    /// usable state and seeding from defaults otherwise. The fallback is
    /// not written back; the slot stays untouched until the first
    /// mutation.
    pub fn new(store: S) -> Self {
        let slot = StateSlot::new(store);
        let state = match slot.load() {
            Ok(state) => state,
            Err(err) => {
                debug!("no usable saved state ({err}), seeding defaults");
                AppState::default_state()
            }
        };
        Self { state, slot }
    }

    /// Make `tab_id` the active tab. Switching to the already-active tab
    /// is a no-op and does not write to the store.
    pub fn switch_tab(&mut self, tab_id: TabId) {
        if tab_id != self.state.active_tab {
            self.state.active_tab = tab_id;
            self.persist();
        }
    }

    /// Move the card at `from` to `to` in the first tab and mirror the
    /// move into the second tab. Invalid indices degrade to a no-op, but
    /// a save is triggered either way (an unchanged save is idempotent).
    pub fn move_card(&mut self, from: usize, to: usize) {
        let (first, second) = sync::first_and_second(&mut self.state.tabs);
        sync::move_card(first, second, from, to);
        self.persist();
    }

    /// Replace the state with a fresh default seed and save it.
    pub fn reset(&mut self) {
        let defaults = AppState::default_state();
        self.state.tabs = defaults.tabs;
        self.state.active_tab = defaults.active_tab;
        self.persist();
    }

    /// Reload from the store. A usable saved state is adopted verbatim;
    /// an absent or corrupt slot resets to defaults (which also rewrites
    /// the slot).
    pub fn hydrate(&mut self) {
        match self.slot.load() {
            Ok(state) => {
                self.state.active_tab = state.active_tab;
                self.state.tabs = state.tabs;
            }
            Err(err) => {
                debug!("hydrate found no usable saved state ({err}), resetting");
                self.reset();
            }
        }
    }

    /// The tab matching `active_tab`, if any. `switch_tab` does not
    /// validate its argument, so this can legitimately be `None`.
    pub fn current_tab(&self) -> Option<&Tab> {
        self.state.tab(self.state.active_tab)
    }

    /// The tab that drives reorders (id 0).
    pub fn first_tab(&self) -> Option<&Tab> {
        self.state.tab(FIRST_TAB_ID)
    }

    /// The tab that mirrors them (id 1).
    pub fn second_tab(&self) -> Option<&Tab> {
        self.state.tab(SECOND_TAB_ID)
    }

    pub fn is_first_tab_active(&self) -> bool {
        self.state.active_tab == FIRST_TAB_ID
    }

    /// Read access to the whole state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Access to the injected backend, mainly for tests probing writes.
    pub fn backend(&self) -> &S {
        self.slot.store()
    }

    pub fn backend_mut(&mut self) -> &mut S {
        self.slot.store_mut()
    }

    fn persist(&mut self) {
        if let Err(err) = self.slot.save(&self.state) {
            warn!("failed to save state: {err}");
        }
    }
}
