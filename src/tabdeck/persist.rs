//! Whole-state persistence over a single keyed slot.
//!
//! The entire [`AppState`] is serialized to one JSON string and stored
//! under [`STORAGE_KEY`]; every save overwrites the slot wholesale, so the
//! last writer wins. Loading distinguishes "nothing stored yet"
//! ([`LoadError::Absent`]) from "stored but unusable"
//! ([`LoadError::Corrupt`]); callers fall back to the default seed in both
//! cases.

use crate::error::{LoadError, PersistError};
use crate::model::AppState;
use crate::store::BlobStore;

/// Key the serialized state lives under; kept stable so existing blobs
/// keep loading.
pub const STORAGE_KEY: &str = "tabState";

/// The persistence slot: a blob store plus the fixed key.
pub struct StateSlot<S: BlobStore> {
    store: S,
    key: &'static str,
}

impl<S: BlobStore> StateSlot<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: STORAGE_KEY,
        }
    }

    /// Serialize `state` and overwrite the slot.
    pub fn save(&mut self, state: &AppState) -> Result<(), PersistError> {
        let blob = serde_json::to_string(state)?;
        self.store.write(self.key, &blob)?;
        Ok(())
    }

    /// Read and parse the slot.
    ///
    /// A backend read failure, unparseable JSON, or a state that fails
    /// [`AppState::validate`] all surface as `Corrupt`; a missing key is
    /// `Absent`. A structurally valid state is returned verbatim, with no
    /// normalization.
    pub fn load(&self) -> Result<AppState, LoadError> {
        let blob = self
            .store
            .read(self.key)
            .map_err(|err| LoadError::Corrupt(err.to_string()))?
            .ok_or(LoadError::Absent)?;
        let state: AppState =
            serde_json::from_str(&blob).map_err(|err| LoadError::Corrupt(err.to_string()))?;
        state.validate().map_err(LoadError::Corrupt)?;
        Ok(state)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
