//! Settings for devboard: where the board is stored, how long toasts stay
//! up, and how the board reacts to input.
//!
//! Values are layered, later layers winning:
//!
//! 1. built-in defaults
//! 2. the first config file found (see [`persistence`])
//! 3. `DEVBOARD_DATA_DIR` and `DEVBOARD_STORAGE_KEY`
//!
//! The result is validated as a whole before it is handed out.
//!
//! ```json5
//! {
//!   storage: { key: "devboard_tasks_v2" },
//!   notifications: { dismiss_after_ms: 3000 },
//!   // milliseconds
//!   ui: { highlight_ms: 300, remove_delay_ms: 200, mouse: true },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use devboard_config::Config;
//!
//! # async fn example() -> devboard_config::Result<()> {
//! let config = Config::load().await?;
//! println!("Toasts last {:?}", config.notifications.dismiss_after());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod notifications;
pub mod persistence;
pub mod storage;
pub mod ui;

pub use config::{Config, ENV_DATA_DIR, ENV_STORAGE_KEY};
pub use error::{ConfigError, Result};
pub use notifications::NotificationConfig;
pub use storage::{DEFAULT_STORAGE_KEY, StorageConfig};
pub use ui::UiConfig;
