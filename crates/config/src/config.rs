//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the devboard application.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::notifications::NotificationConfig;
use crate::persistence::{
    find_config_file, read_config_file, read_config_file_async, write_config_file,
};
use crate::storage::StorageConfig;
use crate::ui::UiConfig;

/// Environment variable overriding [`StorageConfig::data_dir`].
pub const ENV_DATA_DIR: &str = "DEVBOARD_DATA_DIR";

/// Environment variable overriding [`StorageConfig::key`].
pub const ENV_STORAGE_KEY: &str = "DEVBOARD_STORAGE_KEY";

/// The main configuration struct for the devboard application.
///
/// # Examples
///
/// ```
/// use devboard_config::{Config, NotificationConfig};
///
/// let config = Config::default();
/// assert_eq!(config.storage.key, "devboard_tasks_v2");
///
/// let config = Config {
///     notifications: NotificationConfig { dismiss_after_ms: 1_000 },
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where and under which key the board is persisted.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Status-bar notification behavior.
    #[serde(default)]
    pub notifications: NotificationConfig,

    /// Interactive board behavior.
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./devboard.json5` or `./devboard.json`
    /// 2. User: `~/.config/devboard/config.json5` or `~/.config/devboard/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    /// Environment overrides are applied before validation.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read or parsed, or if the result is invalid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use devboard_config::Config;
    ///
    /// # async fn example() -> devboard_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("Storing tasks under {}", config.storage.key);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        let mut config: Config = match find_config_file() {
            Some(path) => read_config_file_async(&path).await?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file.
    ///
    /// Environment overrides are applied before validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// result is invalid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use devboard_config::Config;
    ///
    /// # fn example() -> devboard_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let mut config: Config = read_config_file(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found.
    ///
    /// # Examples
    ///
    /// ```
    /// use devboard_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.storage.key = "../escape".to_string();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.storage.validate()?;
        self.notifications.validate()?;
        self.ui.validate()?;
        Ok(())
    }

    /// Applies `DEVBOARD_DATA_DIR` and `DEVBOARD_STORAGE_KEY` from the
    /// process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Applies overrides from an arbitrary variable lookup.
    ///
    /// Empty values are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use devboard_config::Config;
    ///
    /// let mut config = Config::default();
    /// config.apply_overrides(|name| {
    ///     (name == "DEVBOARD_STORAGE_KEY").then(|| "scratch".to_string())
    /// });
    /// assert_eq!(config.storage.key, "scratch");
    /// ```
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |name: &str| lookup(name).filter(|value| !value.is_empty());

        if let Some(dir) = lookup(ENV_DATA_DIR) {
            self.storage.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(key) = lookup(ENV_STORAGE_KEY) {
            self.storage.key = key;
        }
    }
}

/// Checks that a millisecond setting lies within `min..=max`.
pub(crate) fn validate_millis(setting: &'static str, value: u64, min: u64, max: u64) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidDuration {
            setting,
            value,
            min,
            max,
        })
    }
}
