//! Persisted [`UserConfig`].
//!
//! The configuration is stored as one JSON value under [`CONFIG_KEY`] and is
//! always replaced wholesale. A missing or corrupt value reads as the
//! built-in default.

use super::{KeyValueStore, CONFIG_KEY};
use crate::error::{ConfigError, Result};
use crate::model::UserConfig;

/// Reads and writes the user configuration through a key-value store.
pub struct ConfigStore<'a, S: KeyValueStore + ?Sized> {
    kv: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> ConfigStore<'a, S> {
    pub fn new(kv: &'a S) -> Self {
        Self { kv }
    }

    /// Load the stored configuration or the default one.
    pub fn load(&self) -> UserConfig {
        let raw = match self.kv.get(CONFIG_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return UserConfig::default(),
            Err(err) => {
                tracing::warn!(%err, "config unreadable, using defaults");
                return UserConfig::default();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            tracing::warn!(%err, "config malformed, using defaults");
            UserConfig::default()
        })
    }

    /// Replace the stored configuration.
    ///
    /// # Errors
    /// Returns an error if the store rejects the write.
    pub fn save(&self, config: &UserConfig) -> Result<()> {
        let raw = serde_json::to_string(config)?;
        self.kv.set(CONFIG_KEY, &raw)?;
        tracing::debug!(onboarded = config.is_onboarded, "config saved");
        Ok(())
    }

    /// Store `config` as the result of a finished onboarding.
    ///
    /// # Errors
    /// Returns an error if `config` fails validation or the store rejects
    /// the write.
    pub fn complete_onboarding(&self, config: UserConfig) -> Result<UserConfig> {
        let config = UserConfig {
            is_onboarded: true,
            ..config
        };
        config.validate()?;
        self.save(&config)?;
        Ok(config)
    }

    /// Restore the defaults, which also re-arms onboarding.
    ///
    /// # Errors
    /// Returns an error if the store rejects the write.
    pub fn reset(&self) -> Result<UserConfig> {
        let config = UserConfig {
            is_onboarded: false,
            ..UserConfig::default()
        };
        self.save(&config)?;
        Ok(config)
    }

    /// Get a config value as string by dot-separated key, e.g. `dailyTargets.contacts`.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self.load()).ok()?;
        let val = get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key and save the result.
    ///
    /// # Errors
    /// Returns an error if the key is unknown, the value cannot be parsed
    /// into the field's type, the result fails validation, or the write fails.
    pub fn set(&self, key: &str, value: &str) -> Result<UserConfig> {
        let mut json = serde_json::to_value(self.load())?;
        set_json_value_by_path(&mut json, key, value)?;
        let config: UserConfig =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        self.save(&config)?;
        Ok(config)
    }
}

fn get_json_value_by_path<'v>(
    root: &'v serde_json::Value,
    key: &str,
) -> Option<&'v serde_json::Value> {
    if key.is_empty() {
        return None;
    }

    let mut current = root;
    for part in key.split('.') {
        current = current.get(part)?;
    }
    Some(current)
}

fn set_json_value_by_path(
    root: &mut serde_json::Value,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    let unknown = || ConfigError::UnknownKey(key.to_string());
    let invalid = |message: String| ConfigError::InvalidValue {
        key: key.to_string(),
        message,
    };

    let mut parts = key.split('.').peekable();
    if key.is_empty() {
        return Err(unknown());
    }

    let mut current = root;
    while let Some(part) = parts.next() {
        if parts.peek().is_none() {
            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;

            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value
                        .parse::<bool>()
                        .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
                ),
                serde_json::Value::Number(_) => {
                    if let Ok(n) = value.parse::<u64>() {
                        serde_json::Value::Number(n.into())
                    } else if let Ok(n) = value.parse::<f64>() {
                        serde_json::Number::from_f64(n)
                            .map(serde_json::Value::Number)
                            .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?
                    } else {
                        return Err(invalid(format!("cannot parse '{value}' as number")));
                    }
                }
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    serde_json::from_str(value).map_err(|e| invalid(e.to_string()))?
                }
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        current = current.get_mut(part).ok_or_else(unknown)?;
    }

    Err(unknown())
}
