//! Centralized layout measurements for the TUI.
//!
//! This module defines shared constants for layout dimensions used across
//! multiple rendering components, plus the column split that both the board
//! widget and mouse hit-testing rely on.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the header bar in rows.
///
/// The header displays the application title, the task total and help cue.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Height of each task card in rows.
///
/// This includes the border (2 rows) and content (3 rows: id and title,
/// description, then priority, tags and age).
pub const TASK_CARD_HEIGHT: u16 = 5;

/// Minimum terminal height for useful rendering (content area).
///
/// Below this height, we display a "terminal too small" message. The board
/// needs its lane borders and one full card, and the status bar its own
/// three rows.
pub const MIN_HEIGHT: u16 = 2 + TASK_CARD_HEIGHT + STATUS_BAR_HEIGHT;

/// Minimum terminal height for rendering with header.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_HEADER`,
/// we hide the header to reclaim 3 rows of content space.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// The board has 3 lanes; each lane needs at least 15 characters
/// for borders, the id label and a truncated title.
pub const MIN_WIDTH: u16 = 45;

/// Splits the board area into three equal-width lane areas.
#[must_use]
pub fn column_areas(area: Rect) -> [Rect; 3] {
    Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(area)
}

/// Centers a `width` x `height` popup in `area`, shrinking it to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
