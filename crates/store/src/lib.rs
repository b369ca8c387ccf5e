//! Durable task storage for devboard.
//!
//! This crate owns the board's task collection and the blob stores it is
//! persisted to.
//!
//! - [`PersistentStore`]: the key-value blob store trait
//! - [`MemoryStore`]: an in-memory store, mostly for tests
//! - [`FileStore`]: one JSON file per key in the data directory
//! - [`TaskRepository`]: the ordered, indexed task collection
//!
//! # Examples
//!
//! ```
//! use devboard_store::{DEFAULT_STORAGE_KEY, LoadOutcome, MemoryStore, TaskRepository};
//!
//! let mut repo = TaskRepository::new(MemoryStore::new(), DEFAULT_STORAGE_KEY);
//! assert_eq!(repo.load(), LoadOutcome::Seeded);
//!
//! let err = repo.create("   ", "").unwrap_err();
//! assert!(err.is_validation());
//! ```

pub mod error;
pub mod file;
pub mod id;
pub mod repository;
pub mod store;

pub use error::{Result, StoreError};
pub use file::{FileStore, default_data_dir};
pub use id::generate_task_id;
pub use repository::{DEFAULT_STORAGE_KEY, LoadOutcome, TaskRepository};
pub use store::{MemoryStore, PersistentStore};
