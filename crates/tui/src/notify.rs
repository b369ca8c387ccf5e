//! Transient user notifications.
//!
//! Board operations report their outcome through the [`Notifier`] trait.
//! The TUI implementation, [`Toasts`], keeps a short queue of messages that
//! the status bar displays until they expire.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default toast lifetime.
pub const DEFAULT_TOAST_LIFETIME: Duration = Duration::from_millis(3_000);

/// Maximum number of toasts kept at once. Older ones are dropped first.
const MAX_TOASTS: usize = 8;

/// Whether a notification reports success or failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    /// The operation succeeded.
    #[default]
    Success,
    /// The operation failed or was rejected.
    Error,
}

/// Fire-and-forget sink for user-facing messages.
pub trait Notifier {
    /// Shows `message` to the user.
    fn notify(&mut self, message: &str, kind: NotificationKind);

    /// Advances the notifier's clock. Auto-dismissing notifiers expire
    /// messages here.
    fn tick(&mut self, _now: Instant) {}
}

/// A single queued notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// The message text.
    pub message: String,
    /// Success or error.
    pub kind: NotificationKind,
    /// When the toast stops being shown.
    pub expires_at: Instant,
}

/// Auto-dismissing notification queue.
///
/// Toasts are stamped with the clock last passed to [`Notifier::tick`], so
/// callers advance time explicitly.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use devboard_tui::notify::{NotificationKind, Notifier, Toasts};
///
/// let start = Instant::now();
/// let mut toasts = Toasts::new(Duration::from_secs(3), start);
/// toasts.notify("Task deleted", NotificationKind::Success);
/// assert_eq!(toasts.latest().map(|t| t.message.as_str()), Some("Task deleted"));
///
/// toasts.tick(start + Duration::from_secs(3));
/// assert!(toasts.latest().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Toasts {
    items: VecDeque<Toast>,
    lifetime: Duration,
    now: Instant,
}

impl Toasts {
    /// Creates an empty queue whose toasts live for `lifetime`.
    #[must_use]
    pub fn new(lifetime: Duration, now: Instant) -> Self {
        Self {
            items: VecDeque::new(),
            lifetime,
            now,
        }
    }

    /// Returns the most recent live toast.
    #[must_use]
    pub fn latest(&self) -> Option<&Toast> {
        self.items.back()
    }

    /// Iterates over live toasts, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    /// Returns the number of live toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no toast is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_LIFETIME, Instant::now())
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, message: &str, kind: NotificationKind) {
        if self.items.len() == MAX_TOASTS {
            self.items.pop_front();
        }
        self.items.push_back(Toast {
            message: message.to_string(),
            kind,
            expires_at: self.now + self.lifetime,
        });
    }

    fn tick(&mut self, now: Instant) {
        self.now = now;
        self.items.retain(|toast| toast.expires_at > now);
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::{NotificationKind, Notifier};

    /// Notifier that records every message, for assertions.
    #[derive(Debug, Default)]
    pub(crate) struct Recorder {
        pub(crate) messages: Vec<(String, NotificationKind)>,
    }

    impl Recorder {
        pub(crate) fn texts(&self) -> Vec<&str> {
            self.messages.iter().map(|(m, _)| m.as_str()).collect()
        }

        pub(crate) fn last(&self) -> Option<(&str, NotificationKind)> {
            self.messages.last().map(|(m, k)| (m.as_str(), *k))
        }
    }

    impl Notifier for Recorder {
        fn notify(&mut self, message: &str, kind: NotificationKind) {
            self.messages.push((message.to_string(), kind));
        }
    }
}
