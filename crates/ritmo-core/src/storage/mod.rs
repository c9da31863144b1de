//! Durable key-value boundary and the stores built on top of it.
//!
//! Everything is persisted as whole JSON values under two keys:
//! [`CONFIG_KEY`] for the [`UserConfig`](crate::UserConfig) and [`LOGS_KEY`]
//! for the ordered collection of daily logs.

mod config;
pub mod database;
mod log_store;
mod settings;

pub use config::ConfigStore;
pub use database::Database;
pub use log_store::LogStore;
pub use settings::Settings;

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::StorageError;

/// Key holding the serialized user configuration.
pub const CONFIG_KEY: &str = "ritmo_config";
/// Key holding the serialized daily log collection.
pub const LOGS_KEY: &str = "ritmo_logs";

/// Whole-value get/set by key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Volatile store for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store whose every call fails, for exercising the unreadable paths.
#[cfg(test)]
pub(crate) struct FailingStore;

#[cfg(test)]
impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Locked)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Locked)
    }
}

/// Returns the application data directory, creating it if needed.
///
/// `RITMO_DATA_DIR` overrides the location. Otherwise this is
/// `~/.config/ritmo/`, or `~/.config/ritmo-dev/` when `RITMO_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("RITMO_DATA_DIR") {
        Some(custom) => PathBuf::from(custom),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("RITMO_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("ritmo-dev")
            } else {
                base_dir.join("ritmo")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
