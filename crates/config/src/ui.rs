//! Board interaction configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::config::validate_millis;

/// Default lifetime of the highlight on a newly created card.
pub const DEFAULT_HIGHLIGHT_MS: u64 = 300;

/// Shortest allowed highlight.
pub const MIN_HIGHLIGHT_MS: u64 = 50;

/// Longest allowed highlight.
pub const MAX_HIGHLIGHT_MS: u64 = 5_000;

/// Default delay between marking a card for deletion and removing it.
pub const DEFAULT_REMOVE_DELAY_MS: u64 = 200;

/// Longest allowed removal delay. Zero removes immediately.
pub const MAX_REMOVE_DELAY_MS: u64 = 5_000;

/// Configuration for the board's interactive behavior.
///
/// # Examples
///
/// ```
/// use devboard_config::UiConfig;
///
/// let config = UiConfig::default();
/// assert!(config.mouse);
/// assert_eq!(config.highlight_ms, 300);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long a newly created card stays highlighted, in milliseconds.
    #[serde(default = "default_highlight_ms")]
    pub highlight_ms: u64,

    /// How long a card shows as "removing" before it is deleted.
    #[serde(default = "default_remove_delay_ms")]
    pub remove_delay_ms: u64,

    /// Whether to capture the mouse for drag and drop.
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

fn default_highlight_ms() -> u64 {
    DEFAULT_HIGHLIGHT_MS
}

fn default_remove_delay_ms() -> u64 {
    DEFAULT_REMOVE_DELAY_MS
}

fn default_mouse() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            highlight_ms: DEFAULT_HIGHLIGHT_MS,
            remove_delay_ms: DEFAULT_REMOVE_DELAY_MS,
            mouse: true,
        }
    }
}

impl UiConfig {
    #[must_use]
    pub fn highlight(&self) -> Duration {
        Duration::from_millis(self.highlight_ms)
    }

    #[must_use]
    pub fn remove_delay(&self) -> Duration {
        Duration::from_millis(self.remove_delay_ms)
    }

    /// Validates the UI configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a duration is outside its allowed range.
    pub fn validate(&self) -> Result<()> {
        validate_millis(
            "ui.highlight_ms",
            self.highlight_ms,
            MIN_HIGHLIGHT_MS,
            MAX_HIGHLIGHT_MS,
        )?;
        validate_millis(
            "ui.remove_delay_ms",
            self.remove_delay_ms,
            0,
            MAX_REMOVE_DELAY_MS,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;

    #[test]
    fn default_is_valid() {
        assert!(UiConfig::default().validate().is_ok());
    }

    #[test]
    fn highlight_bounds() {
        let too_short = UiConfig {
            highlight_ms: MIN_HIGHLIGHT_MS - 1,
            ..Default::default()
        };
        assert!(matches!(
            too_short.validate(),
            Err(ConfigError::InvalidDuration {
                setting: "ui.highlight_ms",
                ..
            })
        ));

        let longest = UiConfig {
            highlight_ms: MAX_HIGHLIGHT_MS,
            ..Default::default()
        };
        assert!(longest.validate().is_ok());
    }

    #[test]
    fn zero_remove_delay_is_valid() {
        let config = UiConfig {
            remove_delay_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.remove_delay(), Duration::ZERO);
    }

    #[test]
    fn remove_delay_above_maximum() {
        let config = UiConfig {
            remove_delay_ms: MAX_REMOVE_DELAY_MS + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn deserialize_partial() {
        let config: UiConfig = serde_json::from_str(r#"{"mouse": false}"#).unwrap();
        assert!(!config.mouse);
        assert_eq!(config.highlight_ms, DEFAULT_HIGHLIGHT_MS);
        assert_eq!(config.remove_delay_ms, DEFAULT_REMOVE_DELAY_MS);
    }
}
