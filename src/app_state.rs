//! One running catalog: a storage backend shared by the hymn and settings stores.

use std::sync::Arc;

use log::info;

use crate::config::CoreConfig;
use crate::error::StorageError;
use crate::hymn_store::HymnStore;
use crate::local_db_state::AppDbState;
use crate::seed::default_hymns;
use crate::settings_store::SettingsStore;
use crate::storage::KeyValueStorage;

/// Constructed once at startup and handed to every consumer. This replaces
/// any module-level global: whoever holds the state owns the catalog.
pub struct HymnalState {
    storage: Arc<dyn KeyValueStorage>,
    pub hymns: HymnStore,
    pub settings: SettingsStore,
}

impl HymnalState {
    /// Opens the LMDB environment named in `config` and loads both stores.
    pub fn open(config: &CoreConfig) -> Result<Self, StorageError> {
        let db = AppDbState::open(config)?;
        info!("Hymnal opened at {}", db.path());
        Ok(Self::with_storage(Arc::new(db), config.seed_defaults))
    }

    /// Loads both stores from an existing backend.
    pub fn with_storage(storage: Arc<dyn KeyValueStorage>, seed_defaults: bool) -> Self {
        let defaults = if seed_defaults {
            default_hymns()
        } else {
            Vec::new()
        };
        Self {
            hymns: HymnStore::load(Arc::clone(&storage), defaults),
            settings: SettingsStore::load(Arc::clone(&storage)),
            storage,
        }
    }

    /// Wipes every persisted key; both stores fall back to their defaults.
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.storage.clear()?;
        self.hymns.reload();
        self.settings.reload();
        info!("Hymnal reset to defaults");
        Ok(())
    }

    pub fn close(&self) -> Result<(), StorageError> {
        self.storage.close()
    }
}
