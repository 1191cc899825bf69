use thiserror::Error;

/// Failure inside a [`BlobStore`](crate::store::BlobStore) backend.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store error: {0}")]
    Backend(String),
}

/// Failure while saving state to the persistence slot.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Failure while loading state from the persistence slot.
///
/// Callers treat both variants the same way: there is no usable persisted
/// state, fall back to the default seed.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("No saved state")]
    Absent,

    #[error("Saved state is corrupt: {0}")]
    Corrupt(String),
}
