//! Locating, reading and writing config files.
//!
//! Files are parsed as JSON5, which also accepts plain JSON. The first
//! existing file wins:
//!
//! 1. `./devboard.json5`, `./devboard.json`
//! 2. `<config dir>/devboard/config.json5`, `<config dir>/devboard/config.json`
//!
//! `<config dir>` is `~/.config` on Linux.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ConfigError, Result};

const LOCAL_FILE_NAMES: &[&str] = &["devboard.json5", "devboard.json"];

const USER_DIR: &str = "devboard";

const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// Looks for a config file in the working directory, then in the
/// platform config directory.
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    find_config_file_in(Path::new("."), dirs::config_dir().as_deref())
}

/// Searches `local_dir`, then `<config_root>/devboard`, for a config file.
#[must_use]
pub fn find_config_file_in(local_dir: &Path, config_root: Option<&Path>) -> Option<PathBuf> {
    let local = LOCAL_FILE_NAMES.iter().map(|name| local_dir.join(name));
    let user = config_root
        .map(|root| root.join(USER_DIR))
        .into_iter()
        .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name)));

    let found = local.chain(user).find(|path| path.is_file());
    debug!(?found, "config file lookup");
    found
}

/// Parses a JSON5 config file.
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] if the file cannot be read and
/// [`ConfigError::ParseJson5`] if it is malformed.
///
/// # Examples
///
/// ```no_run
/// use devboard_config::Config;
/// use devboard_config::persistence::read_config_file;
///
/// # fn main() -> devboard_config::Result<()> {
/// let config: Config = read_config_file("devboard.json5")?;
/// # Ok(())
/// # }
/// ```
pub fn read_config_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json5::from_str(&content)?)
}

/// Async twin of [`read_config_file`], reading through `tokio::fs`.
///
/// # Errors
///
/// Same as [`read_config_file`].
pub async fn read_config_file_async<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(serde_json5::from_str(&content)?)
}

/// Writes `value` as pretty-printed JSON, creating missing parent
/// directories. The output is valid JSON5 and loads back unchanged.
///
/// # Errors
///
/// Returns [`ConfigError::WriteFile`] on I/O failure.
pub fn write_config_file<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    std::fs::write(path, content).map_err(write_err)?;
    debug!(?path, "config written");
    Ok(())
}
