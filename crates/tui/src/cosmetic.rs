//! Deadline-based cosmetic timers.
//!
//! Timers are plain entries checked on every tick of the event loop. An
//! action whose card has since disappeared degrades to a no-op when it runs,
//! so timers are never cancelled.

use std::time::Instant;

use devboard_protocol::TaskId;

use crate::view::CardMark;

/// Work to do once a timer is due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerAction {
    /// Remove a transient mark from a card.
    ClearMark {
        /// The card to update.
        task_id: TaskId,
        /// The mark to clear.
        mark: CardMark,
    },
    /// Complete a pending delete.
    FinishDelete {
        /// The task being deleted.
        task_id: TaskId,
    },
}

#[derive(Debug, Clone)]
struct Timer {
    due: Instant,
    action: TimerAction,
}

/// Pending cosmetic timers.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use devboard_protocol::TaskId;
/// use devboard_tui::cosmetic::{CosmeticTimers, TimerAction};
///
/// let start = Instant::now();
/// let mut timers = CosmeticTimers::new();
/// timers.schedule(
///     start + Duration::from_millis(200),
///     TimerAction::FinishDelete { task_id: TaskId::new("task_001") },
/// );
///
/// assert!(timers.take_due(start).is_empty());
/// assert_eq!(timers.take_due(start + Duration::from_millis(200)).len(), 1);
/// assert!(timers.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CosmeticTimers {
    pending: Vec<Timer>,
}

impl CosmeticTimers {
    /// Creates an empty timer set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `action` to run at or after `due`.
    pub fn schedule(&mut self, due: Instant, action: TimerAction) {
        self.pending.push(Timer { due, action });
    }

    /// Removes and returns every action due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerAction> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|timer| timer.due <= now);
        self.pending = pending;
        due.sort_by_key(|timer| timer.due);
        due.into_iter().map(|timer| timer.action).collect()
    }

    /// Returns `true` if a delete is already pending for the task.
    #[must_use]
    pub fn is_deleting(&self, task_id: &TaskId) -> bool {
        self.pending.iter().any(|timer| {
            matches!(&timer.action, TimerAction::FinishDelete { task_id: id } if id == task_id)
        })
    }

    /// Returns the number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if no timer is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn clear(id: &str) -> TimerAction {
        TimerAction::ClearMark {
            task_id: TaskId::new(id),
            mark: CardMark::NewlyAdded,
        }
    }

    #[test]
    fn due_actions_come_out_in_deadline_order() {
        let start = Instant::now();
        let mut timers = CosmeticTimers::new();
        timers.schedule(start + Duration::from_millis(300), clear("b"));
        timers.schedule(start + Duration::from_millis(100), clear("a"));
        timers.schedule(start + Duration::from_millis(900), clear("c"));

        let due = timers.take_due(start + Duration::from_millis(300));
        assert_eq!(due, vec![clear("a"), clear("b")]);
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn nothing_due_leaves_timers_pending() {
        let start = Instant::now();
        let mut timers = CosmeticTimers::new();
        timers.schedule(start + Duration::from_secs(1), clear("a"));
        assert!(timers.take_due(start).is_empty());
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn is_deleting_tracks_pending_deletes() {
        let start = Instant::now();
        let mut timers = CosmeticTimers::new();
        let id = TaskId::new("task_001");
        timers.schedule(
            start,
            TimerAction::FinishDelete {
                task_id: id.clone(),
            },
        );
        assert!(timers.is_deleting(&id));
        assert!(!timers.is_deleting(&TaskId::new("task_002")));

        timers.take_due(start);
        assert!(!timers.is_deleting(&id));
    }
}
