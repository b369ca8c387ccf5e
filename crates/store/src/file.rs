//! File-backed blob store.
//!
//! Each key maps to one JSON file in the data directory:
//!
//! ```text
//! ~/.local/share/devboard/                 # Linux
//! ~/Library/Application Support/devboard/  # macOS
//! └── devboard_tasks_v2.json
//! ```
//!
//! Writes go to a temporary sibling file which is then renamed over the
//! target, so readers never observe a partially written blob.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use crate::error::{Result, StoreError};
use crate::store::PersistentStore;

/// Name of the application directory inside the platform data directory.
const APP_DIR: &str = "devboard";

/// A [`PersistentStore`] keeping one file per key.
///
/// # Examples
///
/// ```no_run
/// use devboard_store::{FileStore, PersistentStore};
///
/// # fn example() -> devboard_store::Result<()> {
/// let mut store = FileStore::new()?;
/// store.set("devboard_tasks_v2", b"[]")?;
/// assert!(store.get("devboard_tasks_v2")?.is_some());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    /// Creates a store in the platform data directory.
    ///
    /// - Linux: `~/.local/share/devboard/`
    /// - macOS: `~/Library/Application Support/devboard/`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\devboard\`
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined or
    /// created.
    #[instrument]
    pub fn new() -> Result<Self> {
        Self::with_path(default_data_dir()?)
    }

    /// Creates a store rooted at a custom directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    #[instrument]
    pub fn with_path(base_path: PathBuf) -> Result<Self> {
        debug!(?base_path, "opening file store");

        if !base_path.exists() {
            debug!(?base_path, "creating data directory");
            fs::create_dir_all(&base_path).map_err(|e| StoreError::io(&base_path, e))?;
        }

        Ok(Self { base_path })
    }

    /// Returns the directory holding the store files.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the file path for a key.
    ///
    /// Keys must be non-empty and made of `[A-Za-z0-9_-]`, so each key maps
    /// to its own file inside the base directory.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidKey`] for any other key.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(format!("{key}.json")))
    }
}

impl PersistentStore for FileStore {
    #[instrument(skip(self))]
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        debug!(?path, "reading blob");

        match fs::read(&path) {
            Ok(bytes) => {
                debug!(?path, len = bytes.len(), "read blob");
                Ok(Some(bytes))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(?path, "blob not found");
                Ok(None)
            }
            Err(e) => {
                warn!(?path, error = %e, "failed to read blob");
                Err(StoreError::io(path, e))
            }
        }
    }

    #[instrument(skip(self, bytes), fields(len = bytes.len()))]
    fn set(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");
        debug!(?path, "writing blob");

        if let Err(e) = fs::write(&tmp_path, bytes) {
            warn!(path = ?tmp_path, error = %e, "failed to write temporary file");
            return Err(StoreError::io(tmp_path, e));
        }
        if let Err(e) = fs::rename(&tmp_path, &path) {
            warn!(?path, error = %e, "failed to move blob into place");
            // Best effort; the original error is what matters.
            let _ = fs::remove_file(&tmp_path);
            return Err(StoreError::io(path, e));
        }

        debug!(?path, "blob written");
        Ok(())
    }

    #[instrument(skip(self))]
    fn clear(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(?path, "blob removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => {
                warn!(?path, error = %e, "failed to remove blob");
                Err(StoreError::io(path, e))
            }
        }
    }
}

/// Returns `<platform data dir>/devboard`.
///
/// # Errors
///
/// Returns [`StoreError::NoDataDirectory`] if the platform has none.
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or(StoreError::NoDataDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (FileStore, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store =
            FileStore::with_path(temp_dir.path().to_path_buf()).expect("Failed to create store");
        (store, temp_dir)
    }

    #[test]
    fn path_for_maps_key_to_json_file() {
        let (store, _temp) = create_test_store();

        let path = store.path_for("devboard_tasks_v2").expect("valid key");
        assert!(path.ends_with("devboard_tasks_v2.json"));
        assert_eq!(path.parent(), Some(store.base_path()));
    }

    #[test]
    fn path_for_rejects_invalid_keys() {
        let (store, _temp) = create_test_store();
        for key in ["", "../evil", "a.b", "my key", "a/b"] {
            assert!(
                matches!(store.path_for(key), Err(StoreError::InvalidKey(_))),
                "{key:?} should be rejected"
            );
        }
    }

    #[test]
    fn distinct_keys_never_share_a_file() {
        let (mut store, _temp) = create_test_store();
        store.set("a_b", b"first").expect("set");
        assert!(store.set("a.b", b"second").is_err());
        assert_eq!(store.get("a_b").expect("get"), Some(b"first".to_vec()));
    }

    #[test]
    fn with_path_creates_directory() {
        let temp_dir = TempDir::new().expect("temp dir");
        let nested = temp_dir.path().join("a").join("b");
        let store = FileStore::with_path(nested.clone()).expect("create store");
        assert!(nested.is_dir());
        assert_eq!(store.base_path(), nested);
    }

    #[test]
    fn get_returns_none_for_missing_key() {
        let (store, _temp) = create_test_store();
        assert!(store.get("nonexistent").expect("get").is_none());
    }

    #[test]
    fn set_and_get_roundtrip() {
        let (mut store, _temp) = create_test_store();
        store.set("tasks", b"[1,2,3]").expect("set");
        assert_eq!(store.get("tasks").expect("get"), Some(b"[1,2,3]".to_vec()));
    }

    #[test]
    fn set_overwrites_and_leaves_no_temp_file() {
        let (mut store, temp) = create_test_store();
        store.set("tasks", b"old").expect("first set");
        store.set("tasks", b"new").expect("second set");

        assert_eq!(store.get("tasks").expect("get"), Some(b"new".to_vec()));
        let names: Vec<_> = fs::read_dir(temp.path())
            .expect("read dir")
            .map(|entry| entry.expect("entry").file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("tasks.json")]);
    }

    #[test]
    fn clear_removes_file_and_tolerates_missing() {
        let (mut store, _temp) = create_test_store();
        store.set("tasks", b"[]").expect("set");
        store.clear("tasks").expect("clear");
        assert!(store.get("tasks").expect("get").is_none());
        store.clear("tasks").expect("second clear");
    }

    #[test]
    fn get_reports_unreadable_blob() {
        let (store, temp) = create_test_store();
        // A directory where the file should be cannot be read as a blob.
        fs::create_dir(temp.path().join("tasks.json")).expect("create dir");
        assert!(matches!(store.get("tasks"), Err(StoreError::Io { .. })));
    }
}
