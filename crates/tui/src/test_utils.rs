//! Test utilities for the TUI crate.
//!
//! This module provides common helper functions used across test modules
//! for rendering verification.

use chrono::{DateTime, TimeZone, Utc};
use devboard_protocol::{BoardSnapshot, sample_tasks};
use ratatui::buffer::Buffer;

use crate::view::BoardView;

/// Converts a ratatui [`Buffer`] to a string representation.
///
/// Each row of the buffer becomes a line in the output string. Trailing
/// whitespace is trimmed from each line to produce cleaner output.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        let trimmed = result.trim_end_matches(' ');
        result.truncate(trimmed.len());
        result.push('\n');
    }
    result
}

/// A fixed "now", a few days after the sample tasks were created.
#[must_use]
pub(crate) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 20, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// The sample board rendered at [`fixed_now`], with counts.
#[must_use]
pub(crate) fn sample_view() -> BoardView {
    let snapshot = BoardSnapshot::from_tasks(sample_tasks());
    let mut view = BoardView::new();
    view.render(&snapshot, fixed_now());
    view.update_counts(&snapshot);
    view
}
