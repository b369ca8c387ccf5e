//! Toast notification configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::config::validate_millis;

/// Default toast lifetime (3 seconds).
pub const DEFAULT_DISMISS_AFTER_MS: u64 = 3_000;

/// Shortest allowed toast lifetime.
pub const MIN_DISMISS_AFTER_MS: u64 = 500;

/// Longest allowed toast lifetime (1 minute).
pub const MAX_DISMISS_AFTER_MS: u64 = 60_000;

/// Configuration for status-bar notifications.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use devboard_config::NotificationConfig;
///
/// let config = NotificationConfig::default();
/// assert_eq!(config.dismiss_after(), Duration::from_secs(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How long a notification stays visible, in milliseconds.
    #[serde(default = "default_dismiss_after_ms")]
    pub dismiss_after_ms: u64,
}

fn default_dismiss_after_ms() -> u64 {
    DEFAULT_DISMISS_AFTER_MS
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            dismiss_after_ms: DEFAULT_DISMISS_AFTER_MS,
        }
    }
}

impl NotificationConfig {
    #[must_use]
    pub fn dismiss_after(&self) -> Duration {
        Duration::from_millis(self.dismiss_after_ms)
    }

    /// Validates the notification configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the lifetime is outside
    /// `MIN_DISMISS_AFTER_MS..=MAX_DISMISS_AFTER_MS`.
    pub fn validate(&self) -> Result<()> {
        validate_millis(
            "notifications.dismiss_after_ms",
            self.dismiss_after_ms,
            MIN_DISMISS_AFTER_MS,
            MAX_DISMISS_AFTER_MS,
        )
    }
}
