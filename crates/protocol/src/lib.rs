//! Shared protocol types for the devboard application.
//!
//! This crate defines the core types used across all devboard components,
//! including tasks, their statuses and priorities, the content classifier,
//! and the messages exchanged between the terminal adapter and the app.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`task`]: Task identifiers, statuses, priorities, and the `Task` struct
//! - [`board`]: Status-partitioned snapshots and column counts
//! - [`classify`]: Keyword-based priority and tag detection
//! - [`sample`]: The built-in sample board used when nothing is persisted
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! ```
//! use chrono::Utc;
//! use devboard_protocol::{Priority, Task, TaskId, TaskStatus};
//!
//! let task = Task::new(
//!     TaskId::new("task_1"),
//!     "Fix urgent login bug",
//!     "",
//!     Utc::now(),
//! );
//!
//! assert_eq!(task.status, TaskStatus::Todo);
//! assert_eq!(task.priority, Priority::High);
//! assert_eq!(task.tags, vec!["security", "bug"]);
//! ```

pub mod board;
pub mod classify;
pub mod error;
pub mod message;
pub mod sample;
pub mod task;

// Re-export primary types at crate root for convenience
pub use board::{BoardSnapshot, ColumnCounts};
pub use classify::{Classification, classify};
pub use error::{ProtocolError, Result};
pub use message::Message;
pub use sample::sample_tasks;
pub use task::{Priority, Task, TaskId, TaskStatus, decode_tasks, encode_tasks};
