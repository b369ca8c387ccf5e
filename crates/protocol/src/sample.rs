//! Built-in sample board.
//!
//! When nothing has been persisted yet (or the persisted data cannot be
//! read), the repository seeds itself with these three tasks, one per
//! status, so a fresh board is never empty.
//!
//! # Examples
//!
//! ```
//! use devboard_protocol::{TaskStatus, sample_tasks};
//!
//! let tasks = sample_tasks();
//! assert_eq!(tasks.len(), 3);
//! assert_eq!(tasks[0].status, TaskStatus::Todo);
//! assert_eq!(tasks[2].status, TaskStatus::Done);
//! ```

use chrono::{DateTime, TimeZone, Utc};

use crate::task::{Priority, Task, TaskId, TaskStatus};

/// A builder for sample tasks with fixed content.
///
/// Sample records carry hand-picked priorities and tags rather than
/// classifier output, so they bypass [`Task::new`].
struct SampleBuilder {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    priority: Priority,
    tags: &'static [&'static str],
}

impl SampleBuilder {
    fn build(self) -> Task {
        Task {
            id: TaskId::new(self.id),
            title: self.title.to_string(),
            description: self.description.to_string(),
            status: self.status,
            created_at: self.created_at,
            priority: self.priority,
            tags: self.tags.iter().map(|tag| (*tag).to_string()).collect(),
        }
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

/// Returns the built-in sample tasks in board order.
///
/// The set is fixed: ids `task_001` to `task_003`, spanning all three
/// statuses.
#[must_use]
pub fn sample_tasks() -> Vec<Task> {
    vec![
        SampleBuilder {
            id: "task_001",
            title: "implement_user_auth()",
            description: "// TODO: Add JWT token authentication\n\
                          // - Set up middleware\n\
                          // - Create login/logout endpoints\n\
                          // - Handle token refresh",
            status: TaskStatus::Todo,
            created_at: at(2025, 9, 17, 2, 25),
            priority: Priority::High,
            tags: &["backend", "security"],
        }
        .build(),
        SampleBuilder {
            id: "task_002",
            title: "refactor_api_endpoints",
            description: "/* Optimize REST API performance */\n\
                          const optimizations = {\n  \
                          caching: 'redis',\n  \
                          pagination: 'cursor-based',\n  \
                          compression: 'gzip'\n\
                          };",
            status: TaskStatus::InProgress,
            created_at: at(2025, 9, 16, 18, 30),
            priority: Priority::Medium,
            tags: &["api", "performance"],
        }
        .build(),
        SampleBuilder {
            id: "task_003",
            title: "unit_tests_coverage++;",
            description: "# Testing Checklist\n\
                          - [x] Component tests\n\
                          - [x] Integration tests\n\
                          - [x] E2E tests\n\
                          - [x] 95% coverage achieved",
            status: TaskStatus::Done,
            created_at: at(2025, 9, 15, 14, 15),
            priority: Priority::High,
            tags: &["testing", "quality"],
        }
        .build(),
    ]
}
