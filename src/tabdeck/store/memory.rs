use super::BlobStore;
use crate::error::StoreError;
use std::collections::HashMap;

/// In-memory blob store for testing and development.
/// Does NOT persist data.
///
/// Keeps a write counter so tests can assert which operations actually
/// hit the store, and can be switched into a failing mode to exercise
/// the swallow-and-log path on save errors.
#[derive(Default)]
pub struct InMemoryStore {
    values: HashMap<String, String>,
    writes: usize,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `write` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Make every subsequent `write` fail, simulating a full or revoked
    /// backing store.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }
}

impl BlobStore for InMemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Backend("write rejected".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_successful_writes_only() {
        let mut store = InMemoryStore::new();
        store.write("k", "1").unwrap();
        store.fail_writes(true);
        assert!(store.write("k", "2").is_err());
        assert_eq!(store.write_count(), 1);
        assert_eq!(store.read("k").unwrap().as_deref(), Some("1"));
    }
}
