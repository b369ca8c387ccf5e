//! Status-partitioned board snapshots.
//!
//! A [`BoardSnapshot`] is a point-in-time copy of the task collection split
//! into the three status columns. Rendering and count updates are driven
//! from snapshots, never from live repository state.

use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskStatus};

/// Per-column task counts plus the board total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnCounts {
    /// Tasks in the todo column.
    pub todo: usize,
    /// Tasks in the in-progress column.
    pub in_progress: usize,
    /// Tasks in the done column.
    pub done: usize,
}

impl ColumnCounts {
    /// Returns the count for one column.
    #[must_use]
    pub const fn get(&self, status: TaskStatus) -> usize {
        match status {
            TaskStatus::Todo => self.todo,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Done => self.done,
        }
    }

    /// Returns the number of tasks across all columns.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.todo + self.in_progress + self.done
    }
}

/// An ordered copy of the board, partitioned by status.
///
/// Within each column, tasks keep the order they have in the collection.
///
/// # Examples
///
/// ```
/// use devboard_protocol::{BoardSnapshot, TaskStatus, sample_tasks};
///
/// let snapshot = BoardSnapshot::from_tasks(sample_tasks());
/// assert_eq!(snapshot.column(TaskStatus::Todo).len(), 1);
/// assert_eq!(snapshot.counts().total(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardSnapshot {
    columns: [Vec<Task>; 3],
}

impl BoardSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Partitions tasks into columns, preserving their relative order.
    #[must_use]
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut snapshot = Self::new();
        for task in tasks {
            snapshot.columns[task.status.index()].push(task);
        }
        snapshot
    }

    /// Returns the tasks of one column.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        &self.columns[status.index()]
    }

    /// Iterates over `(status, tasks)` pairs in column order.
    pub fn columns(&self) -> impl Iterator<Item = (TaskStatus, &[Task])> {
        TaskStatus::all()
            .into_iter()
            .map(|status| (status, self.column(status)))
    }

    /// Returns per-column counts.
    #[must_use]
    pub fn counts(&self) -> ColumnCounts {
        ColumnCounts {
            todo: self.column(TaskStatus::Todo).len(),
            in_progress: self.column(TaskStatus::InProgress).len(),
            done: self.column(TaskStatus::Done).len(),
        }
    }

    /// Returns `true` if no column holds a task.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(Vec::is_empty)
    }
}
