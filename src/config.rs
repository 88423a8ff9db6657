//! Startup configuration for a hymnal instance.

use serde::{Deserialize, Serialize};

/// Settings used to open the LMDB environment and populate first-run data.
///
/// Every field has a default, so `{}` is a valid configuration document.
///
/// ```rust
/// use hymnal_core::config::CoreConfig;
///
/// let config = CoreConfig::from_json(r#"{"db_path":"my_hymns"}"#)?;
/// assert_eq!(config.db_path, "my_hymns");
/// assert!(config.seed_defaults);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Database name; the environment lives in the `<db_path>.lmdb` directory.
    #[serde(default = "default_db_path")]
    pub db_path: String,

    /// Maximum size of the memory map in bytes.
    #[serde(default = "default_map_size")]
    pub map_size: usize,

    #[serde(default = "default_max_readers")]
    pub max_readers: u32,

    /// Whether an empty catalog starts with the built-in sample hymns.
    #[serde(default = "default_seed_defaults")]
    pub seed_defaults: bool,
}

fn default_db_path() -> String {
    "hymnal".to_string()
}

fn default_map_size() -> usize {
    10 * 1024 * 1024
}

fn default_max_readers() -> u32 {
    126
}

fn default_seed_defaults() -> bool {
    true
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            map_size: default_map_size(),
            max_readers: default_max_readers(),
            seed_defaults: default_seed_defaults(),
        }
    }
}

impl CoreConfig {
    /// Configuration for the given database name with every other field defaulted.
    pub fn named(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Directory LMDB opens for this configuration.
    pub fn lmdb_dir(&self) -> String {
        format!("{}.lmdb", self.db_path)
    }
}
