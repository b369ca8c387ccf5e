//! Kanban board rendering widget.
//!
//! This module provides functions for rendering the complete board with its
//! three lanes arranged horizontally.

use ratatui::{buffer::Buffer, layout::Rect};

use super::lane::{LanePosition, render_lane};
use crate::layout::column_areas;
use crate::view::BoardView;

/// Renders the complete board to the buffer.
///
/// The board displays three lanes (To Do, In Progress, Done) arranged
/// horizontally with equal widths. Each lane shows its cards with the
/// selected lane and card highlighted.
///
/// # Arguments
///
/// * `view` - The rendered board model
/// * `selected_column` - Index of the currently focused lane (0-2)
/// * `selected_card` - Index of the selected card within the focused lane, if any
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
///
/// # Layout
///
/// ```text
/// ╭─To Do (1)──────┬─In Progress (1)┬─Done (1)──────╮
/// │╭──────────────╮│╭──────────────╮│╭─────────────╮│
/// ││#sk_001 impl… │││#sk_002 refa… │││#sk_003 uni… ││
/// ```
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use devboard_protocol::{BoardSnapshot, sample_tasks};
/// use devboard_tui::view::BoardView;
/// use devboard_tui::widgets::render_board;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let snapshot = BoardSnapshot::from_tasks(sample_tasks());
/// let mut view = BoardView::new();
/// view.render(&snapshot, Utc::now());
/// view.update_counts(&snapshot);
///
/// let area = Rect::new(0, 0, 90, 20);
/// let mut buf = Buffer::empty(area);
/// render_board(&view, 0, Some(0), area, &mut buf);
/// ```
pub fn render_board(
    view: &BoardView,
    selected_column: usize,
    selected_card: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
) {
    let lane_areas = column_areas(area);
    let counts = view.counts();
    let lane_count = lane_areas.len();

    for (i, (column, lane_area)) in view.columns().iter().zip(lane_areas).enumerate() {
        let is_focused = selected_column == i;

        // Only show card selection in the focused lane
        let card_selection = if is_focused { selected_card } else { None };

        // Check if the previous lane is focused (for shared border coloring)
        let prev_focused = i > 0 && selected_column == i - 1;

        render_lane(
            column,
            counts.get(column.status),
            is_focused,
            card_selection,
            lane_area,
            buf,
            LanePosition::of(i, lane_count),
            prev_focused,
        );
    }
}
