//! LMDB-backed implementation of [`KeyValueStorage`].
//!
//! Each persisted value of the catalog (`hymns`, `app-settings`) is one key in
//! the unnamed LMDB database. Writes commit their own transaction before
//! returning, so a value handed back to the UI is already durable.

use std::fs;
use std::path::Path;
use std::sync::RwLock;

use lmdb::{Database, DatabaseFlags, Environment, Transaction, WriteFlags};
use log::{debug, info, warn};

use crate::config::CoreConfig;
use crate::error::StorageError;
use crate::storage::KeyValueStorage;

struct DbHandle {
    env: Environment,
    db: Database,
}

/// An open LMDB environment plus its main database.
///
/// The handle is dropped on [`AppDbState::close_database`]; later calls
/// return [`StorageError::Closed`] instead of touching a dead environment.
pub struct AppDbState {
    handle: RwLock<Option<DbHandle>>,
    path: String,
}

impl AppDbState {
    /// Opens (or creates) `<name>.lmdb` with default settings.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use hymnal_core::local_db_state::AppDbState;
    /// use hymnal_core::storage::KeyValueStorage;
    ///
    /// let db = AppDbState::init("hymnal".to_string())?;
    /// db.write("app-settings", r#"{"theme":"dark","fontSize":"large"}"#)?;
    /// assert!(db.read("app-settings")?.is_some());
    /// # Ok::<(), hymnal_core::error::StorageError>(())
    /// ```
    pub fn init(name: String) -> Result<Self, StorageError> {
        Self::open(&CoreConfig::named(name))
    }

    /// Opens the environment described by `config`.
    ///
    /// # Errors
    ///
    /// Fails when the directory cannot be created or LMDB refuses to open it
    /// (unwritable location, map size too small for existing data).
    pub fn open(config: &CoreConfig) -> Result<Self, StorageError> {
        let path = config.lmdb_dir();
        fs::create_dir_all(&path)?;

        info!("Opening LMDB environment at: {}", path);

        let env = Environment::new()
            .set_max_dbs(1)
            .set_map_size(config.map_size)
            .set_max_readers(config.max_readers)
            .open(Path::new(&path))?;
        let db = env.create_db(None, DatabaseFlags::empty())?;

        Ok(Self {
            handle: RwLock::new(Some(DbHandle { env, db })),
            path,
        })
    }

    /// Directory the environment lives in.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_closed(&self) -> bool {
        self.handle.read().map(|handle| handle.is_none()).unwrap_or(true)
    }

    /// Flushes and drops the environment.
    ///
    /// Closing twice is not an error.
    pub fn close_database(&self) -> Result<(), StorageError> {
        let mut handle = self.handle.write().map_err(|_| StorageError::LockPoisoned)?;
        if let Some(open) = handle.take() {
            if let Err(e) = open.env.sync(true) {
                warn!("Failed to sync LMDB environment before close: {e}");
            }
            info!("LMDB environment at {} closed", self.path);
        }
        Ok(())
    }

    /// Closes the environment and deletes its directory from disk.
    pub fn destroy(self) -> Result<(), StorageError> {
        self.close_database()?;
        if Path::new(&self.path).exists() {
            fs::remove_dir_all(&self.path)?;
        }
        Ok(())
    }

    fn with_handle<R>(
        &self,
        f: impl FnOnce(&DbHandle) -> Result<R, StorageError>,
    ) -> Result<R, StorageError> {
        let handle = self.handle.read().map_err(|_| StorageError::LockPoisoned)?;
        match handle.as_ref() {
            Some(open) => f(open),
            None => Err(StorageError::Closed),
        }
    }
}

impl KeyValueStorage for AppDbState {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.with_handle(|open| {
            let txn = open.env.begin_ro_txn()?;
            let value = match txn.get(open.db, &key) {
                Ok(bytes) => Some(
                    String::from_utf8(bytes.to_vec())
                        .map_err(|_| StorageError::InvalidUtf8(key.to_string()))?,
                ),
                Err(lmdb::Error::NotFound) => None,
                Err(e) => return Err(e.into()),
            };
            txn.abort();
            Ok(value)
        })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.with_handle(|open| {
            let mut txn = open.env.begin_rw_txn()?;
            txn.put(open.db, &key, &value, WriteFlags::empty())?;
            txn.commit()?;
            debug!("Wrote {} bytes under '{}'", value.len(), key);
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        self.with_handle(|open| {
            let mut txn = open.env.begin_rw_txn()?;
            let existed = match txn.del(open.db, &key, None) {
                Ok(()) => true,
                Err(lmdb::Error::NotFound) => false,
                Err(e) => return Err(e.into()),
            };
            txn.commit()?;
            Ok(existed)
        })
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.with_handle(|open| {
            let mut txn = open.env.begin_rw_txn()?;
            txn.clear_db(open.db)?;
            txn.commit()?;
            info!("Cleared all keys in {}", self.path);
            Ok(())
        })
    }

    fn close(&self) -> Result<(), StorageError> {
        self.close_database()
    }
}
