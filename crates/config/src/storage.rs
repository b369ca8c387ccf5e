//! Storage location configuration.
//!
//! Controls where the task board is persisted: the data directory holding
//! the store files and the key the board is saved under.
//!
//! ```json5
//! {
//!   storage: {
//!     data_dir: "~/boards",
//!     key: "work_board",
//!   }
//! }
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// The storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "devboard_tasks_v2";

/// Longest accepted storage key.
pub const MAX_STORAGE_KEY_LEN: usize = 64;

/// Configuration for task persistence.
///
/// # Examples
///
/// ```
/// use devboard_config::StorageConfig;
///
/// let config = StorageConfig::default();
/// assert_eq!(config.key, "devboard_tasks_v2");
/// assert!(config.data_dir.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the store files.
    ///
    /// Defaults to the platform data directory when unset. A leading `~/` is
    /// expanded to the home directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Key the board is stored under.
    ///
    /// Letters, digits, `_` and `-` only.
    #[serde(default = "default_key")]
    pub key: String,
}

fn default_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            key: default_key(),
        }
    }
}

impl StorageConfig {
    /// Returns the data directory with `~/` expanded, if one is configured.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use devboard_config::StorageConfig;
    ///
    /// let config = StorageConfig {
    ///     data_dir: Some(PathBuf::from("/var/lib/devboard")),
    ///     ..Default::default()
    /// };
    /// assert_eq!(config.resolved_data_dir(), Some(PathBuf::from("/var/lib/devboard")));
    /// ```
    #[must_use]
    pub fn resolved_data_dir(&self) -> Option<PathBuf> {
        let dir = self.data_dir.as_ref()?;
        match (dir.strip_prefix("~"), dirs::home_dir()) {
            (Ok(rest), Some(home)) => Some(home.join(rest)),
            _ => Some(dir.clone()),
        }
    }

    /// Validates the storage key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty, too long, or contains a
    /// character outside `[A-Za-z0-9_-]`.
    pub fn validate(&self) -> Result<()> {
        validate_key(&self.key)
    }
}

/// Checks that a storage key is usable as a file name on every platform.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidStorageKey`] describing the first problem.
pub fn validate_key(key: &str) -> Result<()> {
    let invalid = |reason: String| ConfigError::InvalidStorageKey {
        key: key.to_string(),
        reason,
    };

    if key.is_empty() {
        return Err(invalid("key is empty".to_string()));
    }
    if key.len() > MAX_STORAGE_KEY_LEN {
        return Err(invalid(format!(
            "key is longer than {MAX_STORAGE_KEY_LEN} characters"
        )));
    }
    if let Some(c) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
    {
        return Err(invalid(format!("contains {c:?}")));
    }
    Ok(())
}
