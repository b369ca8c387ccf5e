//! Terminal UI for the devboard application.
//!
//! This crate provides a Ratatui-based terminal interface for the three
//! column task board: rendering, keyboard and mouse input, and the board
//! use cases that tie the task repository to what is on screen.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`controller`]: Create, delete and move use cases
//! - [`drag`]: Drag-and-drop state machine
//! - [`view`]: The rendered board model (cards, marks, drop targets)
//! - [`cosmetic`]: Delayed highlight and removal effects
//! - [`notify`]: Transient notifications
//! - [`form`]: New-task form input
//! - [`state`]: Selection and overlay state
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//!
//! # Example
//!
//! ```no_run
//! use devboard_config::Config;
//! use devboard_store::{FileStore, TaskRepository};
//! use devboard_tui::controller::{BoardController, Timings};
//! use devboard_tui::notify::Toasts;
//! use devboard_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut repo = TaskRepository::new(FileStore::new()?, "devboard_tasks_v2");
//!     repo.load();
//!     let board = BoardController::new(repo, Toasts::default(), Timings::default());
//!
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal(true)?;
//!     let mut app = App::new(board, Config::default());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod controller;
pub mod cosmetic;
pub mod drag;
pub mod event;
pub mod form;
pub mod layout;
pub mod notify;
pub mod state;
pub mod terminal;
pub mod view;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use controller::{BoardController, Timings};
pub use notify::{NotificationKind, Notifier, Toasts};
pub use state::{AppState, Focus};
