//! Keyed persistence backends.
//!
//! Stores never talk to LMDB directly. They receive a [`KeyValueStorage`]
//! handle at construction time, which keeps the catalog logic testable against
//! [`MemoryStorage`] and lets a host swap in whatever backend it prefers.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::StorageError;

/// A string-keyed store of serialized values.
///
/// Every call is synchronous: once `write` returns `Ok`, a subsequent `read`
/// of the same key observes the new value.
pub trait KeyValueStorage: Send + Sync {
    /// Returns the raw payload stored under `key`, or `None` when absent.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous payload.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Returns whether anything was stored there.
    fn remove(&self, key: &str) -> Result<bool, StorageError>;

    /// Drops every key.
    fn clear(&self) -> Result<(), StorageError>;

    /// Releases the underlying resources. Later calls may fail with
    /// [`StorageError::Closed`].
    fn close(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

/// In-process storage with no durability.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::LockPoisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(entries.remove(key).is_some())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::LockPoisoned)?;
        entries.clear();
        Ok(())
    }
}
