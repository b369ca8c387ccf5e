//! Errors from loading, validating and writing configuration.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is neither valid JSON5 nor matches the config schema.
    #[error("malformed config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    #[error("cannot serialize config: {0}")]
    SerializeJson(#[from] serde_json::Error),

    #[error("invalid storage key {key:?}: {reason}")]
    InvalidStorageKey { key: String, reason: String },

    /// A millisecond setting is outside its allowed range.
    #[error("invalid {setting}: {value} ms is outside {min}..={max} ms")]
    InvalidDuration {
        /// The setting as written in the config file, e.g. `ui.highlight_ms`.
        setting: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_invalid_duration() {
        let err = ConfigError::InvalidDuration {
            setting: "notifications.dismiss_after_ms",
            value: 10,
            min: 500,
            max: 60_000,
        };
        assert_eq!(
            err.to_string(),
            "invalid notifications.dismiss_after_ms: 10 ms is outside 500..=60000 ms"
        );
    }

    #[test]
    fn error_display_read_file() {
        let err = ConfigError::ReadFile {
            path: PathBuf::from("/etc/devboard.json5"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "cannot read /etc/devboard.json5: missing");
    }

    #[test]
    fn error_display_invalid_storage_key() {
        let err = ConfigError::InvalidStorageKey {
            key: "a/b".to_string(),
            reason: "contains '/'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid storage key \"a/b\": contains '/'"
        );
    }
}
