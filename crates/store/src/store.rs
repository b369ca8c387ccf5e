//! The key-value blob store abstraction.

use std::collections::HashMap;

use crate::error::{Result, StoreError};

/// Durable key-value storage for opaque blobs.
///
/// Implementations must report failures as values; callers decide whether a
/// failure is fatal.
pub trait PersistentStore {
    /// Reads the blob stored under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the blob exists but cannot be read.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replaces the blob stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write does not complete.
    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<()>;

    /// Removes the blob stored under `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing blob cannot be removed.
    fn clear(&mut self, key: &str) -> Result<()>;
}

/// An in-memory store.
///
/// Used by tests and by `--list` dry runs. Writes can be made to fail on
/// demand to exercise persistence error paths.
///
/// # Examples
///
/// ```
/// use devboard_store::{MemoryStore, PersistentStore};
///
/// let mut store = MemoryStore::new();
/// store.set("tasks", b"[]").unwrap();
/// assert_eq!(store.get("tasks").unwrap(), Some(b"[]".to_vec()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, bytes: impl Into<Vec<u8>>) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), bytes.into());
        store
    }

    /// Makes every subsequent `set` and `clear` fail (or succeed again).
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Returns the number of successful writes so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PersistentStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        if self.fail_writes {
            return Err(StoreError::WriteRejected {
                key: key.to_string(),
            });
        }
        self.entries.insert(key.to_string(), bytes.to_vec());
        self.writes += 1;
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        if self.fail_writes {
            return Err(StoreError::WriteRejected {
                key: key.to_string(),
            });
        }
        self.entries.remove(key);
        Ok(())
    }
}
