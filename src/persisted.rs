//! A single named value that survives restarts.

use std::fmt;
use std::sync::Arc;

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;
use crate::storage::KeyValueStorage;

/// In-memory copy of a value mirrored to storage under `key`.
///
/// Loading never fails: an absent, unreadable or corrupt payload yields the
/// default, which is only written back on the first successful [`set`].
/// Writing happens before the in-memory value changes, so a failed write leaves
/// the previous value visible.
///
/// [`set`]: PersistedValue::set
pub struct PersistedValue<T> {
    key: String,
    value: T,
    default: T,
    storage: Arc<dyn KeyValueStorage>,
}

impl<T> PersistedValue<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    pub fn load(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>, default: T) -> Self {
        let key = key.into();
        let value = read_or_default(storage.as_ref(), &key, &default);
        Self {
            key,
            value,
            default,
            storage,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Persists `value` and makes it the current value.
    pub fn set(&mut self, value: T) -> Result<(), StorageError> {
        let payload = serde_json::to_string(&value)?;
        self.storage.write(&self.key, &payload)?;
        self.value = value;
        Ok(())
    }

    /// Persists the result of `f` applied to the current value.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> Result<(), StorageError> {
        let next = f(&self.value);
        self.set(next)
    }

    /// Re-reads the stored payload, falling back to the default like [`load`].
    ///
    /// [`load`]: PersistedValue::load
    pub fn reload(&mut self) {
        self.value = read_or_default(self.storage.as_ref(), &self.key, &self.default);
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistedValue")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

fn read_or_default<T>(storage: &dyn KeyValueStorage, key: &str, default: &T) -> T
where
    T: DeserializeOwned + Clone,
{
    match storage.read(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Discarding unreadable value under '{key}': {e}");
                default.clone()
            }
        },
        Ok(None) => default.clone(),
        Err(e) => {
            warn!("Could not read '{key}', using default: {e}");
            default.clone()
        }
    }
}
