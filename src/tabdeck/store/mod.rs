//! # Blob Storage Layer
//!
//! The [`BlobStore`] trait is the synchronous, string-keyed key-value
//! primitive the state slot persists into. It is abstracted behind a trait
//! to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **future backends** without changing the persistence logic
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one file per key under a root
//!   directory
//! - [`memory::InMemoryStore`]: in-memory storage for tests, with a write
//!   counter so tests can assert which operations actually persisted
//!
//! Values are opaque strings; serialization happens one layer up, in
//! [`persist`](crate::persist).

use crate::error::StoreError;

pub mod fs;
pub mod memory;

/// Abstract interface for the blob store.
///
/// All operations are synchronous and whole-value: a `write` replaces
/// whatever was stored under the key.
pub trait BlobStore {
    /// Read the value under `key`, or `None` if nothing is stored.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
