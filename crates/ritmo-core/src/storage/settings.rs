//! Process-level settings read from `settings.toml` in the data directory.
//!
//! These describe where and how the application runs, not the user's
//! goals; the latter live in the key-value store as a `UserConfig`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::error::{ConfigError, StorageError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// SQLite file name, relative to the data directory.
    #[serde(default = "default_database_file")]
    pub database_file: String,
    /// `tracing` filter directive used when `RITMO_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_database_file() -> String {
    "ritmo.db".into()
}
fn default_log_filter() -> String {
    "warn".into()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_file: default_database_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    fn path() -> Result<PathBuf, StorageError> {
        Ok(data_dir()?.join("settings.toml"))
    }

    /// Parse settings from TOML text.
    ///
    /// # Errors
    /// Returns an error if the text is not valid settings TOML.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Load settings from `path`, falling back to defaults when the file
    /// is missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content).unwrap_or_else(|err| {
                tracing::warn!(path = %path.display(), %err, "ignoring malformed settings");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Load from the data directory or return defaults.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        match Self::path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Self::default(),
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_fills_defaults() {
        let settings = Settings::from_toml("log_filter = \"debug\"\n").unwrap();
        assert_eq!(settings.log_filter, "debug");
        assert_eq!(settings.database_file, "ritmo.db");
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "database_file = [not toml").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            Settings::load_from(&dir.path().join("absent.toml")),
            Settings::default()
        );
    }

    #[test]
    fn toml_roundtrip() {
        let settings = Settings {
            database_file: "other.db".into(),
            log_filter: "ritmo_core=debug".into(),
        };
        let text = toml::to_string_pretty(&settings).unwrap();
        assert_eq!(Settings::from_toml(&text).unwrap(), settings);
    }
}
