//! Task-related types for the Kanban board.
//!
//! This module defines the core task types used throughout the devboard
//! application, including task identifiers, statuses, priorities, and the
//! task structure itself, along with the JSON encoding of a task collection.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::classify;
use crate::error::{ProtocolError, Result};

/// Unique identifier for a task.
///
/// Identifiers are opaque strings. Tasks created by the repository use the
/// `task_<millis>_<suffix>` form, but persisted data may contain any string.
///
/// # Examples
///
/// ```
/// use devboard_protocol::TaskId;
///
/// let id = TaskId::new("task_1726540000000_k3j9x0a2b");
/// assert_eq!(id.short(), "9x0a2b");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Wraps a string as a task identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the last six characters of the identifier.
    ///
    /// Cards display this suffix as `#xxxxxx`. Identifiers shorter than six
    /// characters are returned whole.
    ///
    /// # Examples
    ///
    /// ```
    /// use devboard_protocol::TaskId;
    ///
    /// assert_eq!(TaskId::new("task_001").short(), "sk_001");
    /// assert_eq!(TaskId::new("abc").short(), "abc");
    /// ```
    #[must_use]
    pub fn short(&self) -> &str {
        let start = self
            .0
            .char_indices()
            .rev()
            .nth(5)
            .map_or(0, |(idx, _)| idx);
        &self.0[start..]
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// The workflow stage a task occupies.
///
/// Each status corresponds to exactly one board column. The serialized names
/// (`todo`, `inprogress`, `done`) are part of the persisted record format.
///
/// # Examples
///
/// ```
/// use devboard_protocol::TaskStatus;
///
/// let status: TaskStatus = "inprogress".parse().unwrap();
/// assert_eq!(status, TaskStatus::InProgress);
/// assert_eq!(status.display_name(), "In Progress");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Work that has not been started.
    #[default]
    Todo,
    /// Work currently being done.
    InProgress,
    /// Finished work.
    Done,
}

impl TaskStatus {
    /// Returns all statuses in column order.
    ///
    /// # Examples
    ///
    /// ```
    /// use devboard_protocol::TaskStatus;
    ///
    /// let statuses = TaskStatus::all();
    /// assert_eq!(statuses.len(), 3);
    /// assert_eq!(statuses[0], TaskStatus::Todo);
    /// ```
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Todo, Self::InProgress, Self::Done]
    }

    /// Returns the serialized name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inprogress",
            Self::Done => "done",
        }
    }

    /// Returns a human-readable column name for the status.
    ///
    /// # Examples
    ///
    /// ```
    /// use devboard_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Todo.display_name(), "To Do");
    /// assert_eq!(TaskStatus::Done.display_name(), "Done");
    /// ```
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }

    /// Returns the column index of this status (0-2).
    ///
    /// # Examples
    ///
    /// ```
    /// use devboard_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Todo.index(), 0);
    /// assert_eq!(TaskStatus::Done.index(), 2);
    /// ```
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Todo => 0,
            Self::InProgress => 1,
            Self::Done => 2,
        }
    }

    /// Creates a `TaskStatus` from its column index.
    ///
    /// Returns `None` if the index is out of range (>= 3).
    ///
    /// # Examples
    ///
    /// ```
    /// use devboard_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::from_index(1), Some(TaskStatus::InProgress));
    /// assert_eq!(TaskStatus::from_index(3), None);
    /// ```
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Todo),
            1 => Some(Self::InProgress),
            2 => Some(Self::Done),
            _ => None,
        }
    }

    /// Returns the status of the column to the left, if any.
    #[must_use]
    pub const fn prev(self) -> Option<Self> {
        match self {
            Self::Todo => None,
            Self::InProgress => Some(Self::Todo),
            Self::Done => Some(Self::InProgress),
        }
    }

    /// Returns the status of the column to the right, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "todo" => Ok(Self::Todo),
            "inprogress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(ProtocolError::InvalidStatus(other.to_string())),
        }
    }
}

/// How urgent a task is.
///
/// Set once at creation by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Housekeeping work.
    Low,
    /// The default when no keyword matches.
    #[default]
    Medium,
    /// Urgent work, bugs, and critical issues.
    High,
}

impl Priority {
    /// Returns the serialized name of the priority.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(ProtocolError::InvalidPriority(other.to_string())),
        }
    }
}

/// A task on the Kanban board.
///
/// The serialized form of this struct is the persisted record:
///
/// ```json
/// { "id": "task_001", "title": "...", "description": "...",
///   "status": "todo", "createdAt": "2025-09-17T02:25:00Z",
///   "priority": "high", "tags": ["backend", "security"] }
/// ```
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use devboard_protocol::{Priority, Task, TaskId, TaskStatus};
///
/// let task = Task::new(TaskId::new("task_1"), "  Tidy README  ", "minor cleanup", Utc::now());
/// assert_eq!(task.title, "Tidy README");
/// assert_eq!(task.status, TaskStatus::Todo);
/// assert_eq!(task.priority, Priority::Low);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,
    /// Short summary of the task.
    pub title: String,
    /// Free-form details, possibly empty.
    #[serde(default)]
    pub description: String,
    /// The column this task currently occupies.
    pub status: TaskStatus,
    /// When this task was created.
    pub created_at: DateTime<Utc>,
    /// Priority detected at creation.
    #[serde(default)]
    pub priority: Priority,
    /// Tags detected at creation, in classifier order.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Task {
    /// Creates a new `Todo` task, classifying its content.
    ///
    /// Title and description are trimmed. Priority and tags are derived from
    /// the text by [`classify`]. Title validation is the caller's concern.
    #[must_use]
    pub fn new(id: TaskId, title: &str, description: &str, created_at: DateTime<Utc>) -> Self {
        let title = title.trim();
        let description = description.trim();
        let classification = classify(title, description);
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            status: TaskStatus::Todo,
            created_at,
            priority: classification.priority,
            tags: classification.tags,
        }
    }

    /// Returns the task with its status replaced.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}

/// Encodes a task collection as a JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn encode_tasks(tasks: &[Task]) -> Result<Vec<u8>> {
    serde_json::to_vec(tasks).map_err(ProtocolError::Encode)
}

/// Decodes a JSON array of task records.
///
/// # Errors
///
/// Returns an error if the bytes are not a JSON array of valid records.
pub fn decode_tasks(bytes: &[u8]) -> Result<Vec<Task>> {
    serde_json::from_slice(bytes).map_err(ProtocolError::Decode)
}
