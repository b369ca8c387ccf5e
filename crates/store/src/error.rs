//! Error types for storage and repository operations.

use std::path::PathBuf;

use devboard_protocol::ProtocolError;

/// Errors that can occur while reading or writing persisted tasks.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An I/O error occurred on a store file.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The platform data directory could not be determined.
    ///
    /// This happens when `$HOME` (or the platform equivalent) is unset.
    #[error("could not determine data directory")]
    NoDataDirectory,

    /// A storage key was empty or contained characters outside `[A-Za-z0-9_-]`.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// The store refused a write.
    #[error("store rejected write for key {key:?}")]
    WriteRejected {
        /// The key that could not be written.
        key: String,
    },

    /// A task was submitted without a title.
    #[error("task title is required")]
    EmptyTitle,

    /// Persisted data could not be encoded or decoded.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}

impl StoreError {
    /// Wraps an I/O error with the path it happened on.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this error is a validation failure rather than a
    /// storage failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::EmptyTitle)
    }
}

/// A specialized Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
