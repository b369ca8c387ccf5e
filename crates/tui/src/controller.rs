//! Board use cases.
//!
//! [`BoardController`] owns the repository, the rendered view, the drag
//! state machine, the cosmetic timers and the notifier, and wires them
//! together for create, delete and move.

use std::time::{Duration, Instant};

use chrono::Utc;
use devboard_config::UiConfig;
use devboard_protocol::{Task, TaskId, TaskStatus};
use devboard_store::{PersistentStore, TaskRepository};
use tracing::{debug, warn};

use crate::cosmetic::{CosmeticTimers, TimerAction};
use crate::drag::{DragController, DragEvent, DragOutcome};
use crate::notify::{NotificationKind, Notifier, Toasts};
use crate::view::{BoardView, CardMark};

/// Cosmetic delays used by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// How long a new card stays highlighted.
    pub highlight: Duration,
    /// How long a card shows as removing before it is deleted.
    pub remove_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self::from(&UiConfig::default())
    }
}

impl From<&UiConfig> for Timings {
    fn from(config: &UiConfig) -> Self {
        Self {
            highlight: config.highlight(),
            remove_delay: config.remove_delay(),
        }
    }
}

/// Coordinates board operations.
///
/// # Examples
///
/// ```
/// use std::time::Instant;
/// use devboard_store::{MemoryStore, TaskRepository};
/// use devboard_tui::controller::{BoardController, Timings};
/// use devboard_tui::notify::Toasts;
///
/// let mut repo = TaskRepository::new(MemoryStore::new(), "tasks");
/// repo.load();
/// let mut board = BoardController::new(repo, Toasts::default(), Timings::default());
///
/// let task = board.on_create_submit("Fix login bug", "", Instant::now());
/// assert!(task.is_some());
/// assert_eq!(board.view().counts().total(), 4);
/// ```
#[derive(Debug)]
pub struct BoardController<S, N = Toasts> {
    repo: TaskRepository<S>,
    view: BoardView,
    drag: DragController,
    timers: CosmeticTimers,
    notifier: N,
    timings: Timings,
}

impl<S: PersistentStore, N: Notifier> BoardController<S, N> {
    /// Creates a controller and renders the repository's current tasks.
    #[must_use]
    pub fn new(repo: TaskRepository<S>, notifier: N, timings: Timings) -> Self {
        let mut controller = Self {
            repo,
            view: BoardView::new(),
            drag: DragController::new(),
            timers: CosmeticTimers::new(),
            notifier,
            timings,
        };
        controller.refresh();
        controller
    }

    /// Re-renders every column and the counts from the repository.
    pub fn refresh(&mut self) {
        let snapshot = self.repo.snapshot();
        self.view.render(&snapshot, Utc::now());
        self.view.update_counts(&snapshot);
    }

    /// Creates a task from the new-task form.
    ///
    /// Returns the created task, or `None` if the title was empty or the
    /// repository refused it. The new card is inserted at the top of the
    /// todo column and highlighted until the highlight interval elapses.
    pub fn on_create_submit(
        &mut self,
        title: &str,
        description: &str,
        now: Instant,
    ) -> Option<Task> {
        let task = match self.repo.create(title, description) {
            Ok(task) => task,
            Err(e) if e.is_validation() => {
                self.notifier
                    .notify("Task title is required", NotificationKind::Error);
                return None;
            }
            Err(e) => {
                warn!(error = %e, "failed to create task");
                self.notifier
                    .notify("Failed to create task", NotificationKind::Error);
                return None;
            }
        };

        let id = task.id.clone();
        self.view.insert_card_top(task.clone(), Utc::now());
        self.view.set_mark(&id, CardMark::NewlyAdded, true);
        self.timers.schedule(
            now + self.timings.highlight,
            TimerAction::ClearMark {
                task_id: id,
                mark: CardMark::NewlyAdded,
            },
        );
        self.view.update_counts(&self.repo.snapshot());
        self.notifier
            .notify("Task created successfully", NotificationKind::Success);
        self.report_persist_failure();
        Some(task)
    }

    /// Starts deleting a task.
    ///
    /// The card is marked as removing and deleted once the removal delay
    /// elapses, or right away when the delay is zero or the card is not
    /// shown. Returns `false` if the delete failed immediately or one is
    /// already pending for this card.
    pub fn on_delete_request(&mut self, id: &TaskId, now: Instant) -> bool {
        if self.timers.is_deleting(id) {
            debug!(id = %id, "delete already pending");
            return false;
        }

        let shown = self.view.set_mark(id, CardMark::Removing, true);
        if !shown || self.timings.remove_delay.is_zero() {
            return self.finish_delete(id);
        }

        self.timers.schedule(
            now + self.timings.remove_delay,
            TimerAction::FinishDelete {
                task_id: id.clone(),
            },
        );
        true
    }

    /// Applies a drag gesture.
    pub fn drag(&mut self, event: DragEvent) -> DragOutcome {
        let outcome = self.drag.handle(
            event,
            &mut self.repo,
            &mut self.view,
            &mut self.notifier,
            Utc::now(),
        );
        if matches!(outcome, DragOutcome::Moved { .. }) {
            self.report_persist_failure();
        }
        outcome
    }

    /// Moves a task to another column, with the same effects as a drop.
    ///
    /// Returns `false` if the task does not exist.
    pub fn move_task(&mut self, id: &TaskId, status: TaskStatus) -> bool {
        if !self.repo.set_status(id, status) {
            return false;
        }
        self.refresh();
        self.notifier
            .notify("Task moved successfully", NotificationKind::Success);
        self.report_persist_failure();
        true
    }

    /// Runs due cosmetic timers and expires notifications.
    pub fn tick(&mut self, now: Instant) {
        for action in self.timers.take_due(now) {
            match action {
                TimerAction::ClearMark { task_id, mark } => {
                    self.view.set_mark(&task_id, mark, false);
                }
                TimerAction::FinishDelete { task_id } => {
                    self.finish_delete(&task_id);
                }
            }
        }
        self.notifier.tick(now);
    }

    /// Returns the rendered board.
    #[must_use]
    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// Returns the task repository.
    #[must_use]
    pub fn repository(&self) -> &TaskRepository<S> {
        &self.repo
    }

    /// Returns the notifier that receives user-facing messages.
    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Returns `true` while a card is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    fn finish_delete(&mut self, id: &TaskId) -> bool {
        if !self.repo.remove(id) {
            self.view.set_mark(id, CardMark::Removing, false);
            self.notifier
                .notify("Failed to delete task", NotificationKind::Error);
            return false;
        }

        self.view.detach_card(id);
        self.view.update_counts(&self.repo.snapshot());
        self.notifier.notify("Task deleted", NotificationKind::Success);
        self.report_persist_failure();
        true
    }

    fn report_persist_failure(&mut self) {
        if self.repo.take_persist_failure().is_some() {
            self.notifier
                .notify("Failed to save tasks", NotificationKind::Error);
        }
    }
}
