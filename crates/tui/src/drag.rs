//! Drag-and-drop state machine.
//!
//! The terminal adapter turns mouse presses, motion and releases (and the
//! keyboard carry mode) into [`DragEvent`]s. [`DragController`] applies them
//! to the repository and the view:
//!
//! ```text
//!          start(card)                    over / enter / leave
//!   Idle ──────────────▶ Dragging ◀────────────────────────┐
//!    ▲                      │  └──────────────────────────┘
//!    └──── drop / end ──────┘
//! ```

use chrono::{DateTime, Utc};
use devboard_protocol::{TaskId, TaskStatus};
use devboard_store::{PersistentStore, TaskRepository};
use tracing::debug;

use crate::notify::{NotificationKind, Notifier};
use crate::view::{BoardView, CardMark};

/// A drag gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    /// A card was picked up.
    Start {
        /// The lifted card's task.
        task_id: TaskId,
    },
    /// The pointer is over a column.
    Over {
        /// The column under the pointer.
        column: TaskStatus,
    },
    /// The pointer entered a column.
    Enter {
        /// The column entered.
        column: TaskStatus,
    },
    /// The pointer left a column, or one of its children.
    Leave {
        /// The column left.
        column: TaskStatus,
        /// Whether the pointer is still within the column's bounds.
        pointer_still_inside: bool,
    },
    /// The card was released over a column.
    Drop {
        /// The column the card was dropped on.
        column: TaskStatus,
    },
    /// The drag ended without a drop.
    End,
}

/// The controller's current state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A card is being dragged.
    Dragging {
        /// The lifted card's task.
        task_id: TaskId,
        /// The column the card was lifted from.
        source: TaskStatus,
        /// The card's position in its source column.
        position: usize,
    },
}

/// What a gesture did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// A drag began.
    Started,
    /// The column accepts drops.
    Allowed,
    /// The column is now highlighted.
    Highlighted,
    /// The column highlight was removed.
    Cleared,
    /// The task changed column.
    Moved {
        /// The moved task.
        task_id: TaskId,
        /// Its new status.
        status: TaskStatus,
    },
    /// The drop target rejected the card.
    Rejected,
    /// The drag ended without a move.
    Cancelled,
    /// The gesture did not apply in the current state.
    Ignored,
}

/// Tracks a single drag at a time.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Returns `true` while a card is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Returns the task being dragged, if any.
    #[must_use]
    pub fn dragged_task(&self) -> Option<&TaskId> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging { task_id, .. } => Some(task_id),
        }
    }

    /// Applies one gesture.
    ///
    /// A successful drop re-renders the view from the repository, refreshes
    /// the counts and notifies `"Task moved successfully"`. Every drop or end
    /// clears the lifted mark and all drop-target highlights.
    pub fn handle<S, N>(
        &mut self,
        event: DragEvent,
        repo: &mut TaskRepository<S>,
        view: &mut BoardView,
        notifier: &mut N,
        now: DateTime<Utc>,
    ) -> DragOutcome
    where
        S: PersistentStore,
        N: Notifier + ?Sized,
    {
        match (self.dragged_task().cloned(), event) {
            (None, DragEvent::Start { task_id }) => {
                let Some((source, position)) = view.find_card(&task_id) else {
                    debug!(id = %task_id, "drag start on a card that is not shown");
                    return DragOutcome::Ignored;
                };
                if view.card(&task_id).is_some_and(|card| !card.draggable) {
                    return DragOutcome::Ignored;
                }
                view.set_mark(&task_id, CardMark::Lifted, true);
                debug!(id = %task_id, %source, position, "drag started");
                self.state = DragState::Dragging {
                    task_id,
                    source,
                    position,
                };
                DragOutcome::Started
            }
            (Some(_), DragEvent::Over { .. }) => DragOutcome::Allowed,
            (Some(_), DragEvent::Enter { column }) => {
                view.set_drop_target(column, true);
                DragOutcome::Highlighted
            }
            (
                Some(_),
                DragEvent::Leave {
                    column,
                    pointer_still_inside,
                },
            ) => {
                if pointer_still_inside {
                    DragOutcome::Ignored
                } else {
                    view.set_drop_target(column, false);
                    DragOutcome::Cleared
                }
            }
            (Some(task_id), DragEvent::Drop { column }) => {
                self.cleanup(view);

                if !repo.set_status(&task_id, column) {
                    debug!(id = %task_id, %column, "drop rejected");
                    return DragOutcome::Rejected;
                }
                let snapshot = repo.snapshot();
                view.render(&snapshot, now);
                view.update_counts(&snapshot);
                notifier.notify("Task moved successfully", NotificationKind::Success);
                debug!(id = %task_id, %column, "task moved");
                DragOutcome::Moved {
                    task_id,
                    status: column,
                }
            }
            (Some(_), DragEvent::End) => {
                self.cleanup(view);
                DragOutcome::Cancelled
            }
            (Some(_), DragEvent::Start { .. }) | (None, _) => DragOutcome::Ignored,
        }
    }

    fn cleanup(&mut self, view: &mut BoardView) {
        if let DragState::Dragging { task_id, .. } = &self.state {
            view.set_mark(task_id, CardMark::Lifted, false);
        }
        view.clear_drop_targets();
        self.state = DragState::Idle;
    }
}
