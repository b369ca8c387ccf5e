//! Widget components for the devboard TUI.
//!
//! Each widget is a plain function that renders part of the UI into a
//! buffer, which keeps them easy to test and compose.
//!
//! # Modules
//!
//! - [`board`]: Renders the complete board with three lanes
//! - [`lane`]: Renders individual lanes with their cards
//! - [`task_card`]: Renders task cards colored by status and priority
//! - [`status_bar`]: Renders the footer with notifications and key hints
//! - [`form`]: Renders the new-task form overlay
//! - [`help`]: Renders the help overlay
//!
//! # Color Coding
//!
//! | Status | Color |
//! |--------|-------|
//! | `Todo` | Yellow (`Color::Yellow`) |
//! | `InProgress` | Blue (`Color::Blue`) |
//! | `Done` | Green (`Color::Green`) |
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use devboard_protocol::{BoardSnapshot, sample_tasks};
//! use devboard_tui::view::BoardView;
//! use devboard_tui::widgets;
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//!
//! let snapshot = BoardSnapshot::from_tasks(sample_tasks());
//! let mut view = BoardView::new();
//! view.render(&snapshot, Utc::now());
//! view.update_counts(&snapshot);
//!
//! let area = Rect::new(0, 0, 80, 24);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_board(&view, 0, Some(0), area, &mut buf);
//! ```

pub mod board;
pub mod form;
pub mod help;
pub mod lane;
pub mod status_bar;
pub mod task_card;

// Re-export primary rendering functions for convenience
pub use board::render_board;
pub use form::render_task_form;
pub use help::render_help_overlay;
pub use lane::{LanePosition, calculate_scroll_offset, lane_inner_area, render_lane, visible_cards};
pub use status_bar::{HintMode, render_status_bar};
pub use task_card::{priority_color, render_task_card, status_color};

#[cfg(test)]
mod tests;
