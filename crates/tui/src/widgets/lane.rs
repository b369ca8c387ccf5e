//! Lane rendering widget.
//!
//! This module provides functions for rendering individual board columns
//! with their headers and card lists.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::task_card::render_task_card;
use crate::layout::TASK_CARD_HEIGHT;
use crate::view::ColumnView;

/// Position of a lane in the horizontal layout.
///
/// Used to determine which borders to render for each lane, enabling
/// collapsed borders between adjacent lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanePosition {
    /// First (leftmost) lane - has left border with rounded corners.
    First,
    /// Middle lanes - has left border with T-connectors (no rounded corners on left).
    Middle,
    /// Last (rightmost) lane - has both borders, rounded on right, T-connectors on left.
    Last,
}

impl LanePosition {
    /// Returns the position of the lane at `index` among `count` lanes.
    #[must_use]
    pub const fn of(index: usize, count: usize) -> Self {
        if index == 0 {
            Self::First
        } else if index + 1 >= count {
            Self::Last
        } else {
            Self::Middle
        }
    }
}

/// Border set for the first (leftmost) lane: rounded corners on left, no right border.
const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─",
    bottom_left: "╰",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for middle lanes: T-connectors on left, no right border.
const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",
    top_right: "─",
    bottom_left: "┴",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Border set for the last (rightmost) lane: T-connectors on left, rounded on right.
const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Builds the lane's outer block without title or colors.
fn lane_block(position: LanePosition) -> Block<'static> {
    // Collapse borders between adjacent lanes: only the last lane draws a
    // right border, every other lane relies on its neighbor's left one.
    let open_right = Borders::TOP | Borders::BOTTOM | Borders::LEFT;
    let (borders, border_set) = match position {
        LanePosition::First => (open_right, BORDER_SET_FIRST),
        LanePosition::Middle => (open_right, BORDER_SET_MIDDLE),
        LanePosition::Last => (Borders::ALL, BORDER_SET_LAST),
    };
    Block::default().borders(borders).border_set(border_set)
}

/// Returns the area inside a lane's borders, where cards are laid out.
#[must_use]
pub fn lane_inner_area(area: Rect, position: LanePosition) -> Rect {
    lane_block(position).inner(area)
}

/// Returns how many cards fit in a lane's inner area. Always at least one.
#[must_use]
pub fn visible_cards(inner_area: Rect) -> usize {
    (inner_area.height / TASK_CARD_HEIGHT).max(1) as usize
}

/// Renders a single lane to the buffer.
///
/// A lane displays its header (name and task count) followed by a vertical
/// list of task cards. Empty lanes show a "No tasks" placeholder message.
/// A lane highlighted as a drop target is drawn in magenta.
///
/// # Arguments
///
/// * `column` - The column to render
/// * `count` - The task count shown in the title
/// * `is_focused` - Whether this lane currently has focus
/// * `selected_idx` - Index of the selected card within this lane, if any
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
/// * `position` - The lane's position in the horizontal layout, used to determine borders
/// * `prev_focused` - Whether the previous (left) lane is focused, for coloring shared borders
///
/// # Layout
///
/// ```text
/// ╭─To Do (2)────────────
/// │╭───────────────────╮
/// ││#sk_001 implement… │  <- Task cards
/// ││// TODO: Add JWT…  │
/// ││high backend 3d ago│
/// │╰───────────────────╯
/// ╰──────────────────────
/// ```
#[allow(clippy::too_many_arguments)]
pub fn render_lane(
    column: &ColumnView,
    count: usize,
    is_focused: bool,
    selected_idx: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
    position: LanePosition,
    prev_focused: bool,
) {
    let accent = if column.drop_target {
        Color::Magenta
    } else {
        Color::Cyan
    };
    let highlighted = is_focused || column.drop_target;

    // For the left border (shared with previous lane), highlight if either lane is focused.
    let left_border_highlighted = highlighted || prev_focused;
    let border_style = if highlighted {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut title = format!("{} ({})", column.status.display_name(), count);
    if column.drop_target {
        title.push_str(" ▼");
    }
    let title_style = if highlighted {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let block = lane_block(position)
        .title(Span::styled(title, title_style))
        .border_style(border_style);

    let inner_area = block.inner(area);
    block.render(area, buf);

    // The block was drawn gray; recolor the shared left border when the
    // previous lane is focused.
    if left_border_highlighted && !highlighted && area.width > 0 {
        let highlight_style = Style::default().fg(Color::Cyan);
        let x = area.x;
        for y in area.y..area.y.saturating_add(area.height) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(highlight_style);
            }
        }
    }

    if column.is_empty() {
        render_empty_placeholder(inner_area, buf);
        return;
    }

    let visible = visible_cards(inner_area);
    let scroll_offset = calculate_scroll_offset(selected_idx, column.len(), visible);

    let card_count = column.len().min(visible);
    let mut constraints: Vec<Constraint> = (0..card_count)
        .map(|_| Constraint::Length(TASK_CARD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let card_areas = Layout::vertical(constraints).split(inner_area);

    for (i, card_area) in card_areas.iter().take(card_count).enumerate() {
        let card_idx = scroll_offset + i;
        let Some(card) = column.cards.get(card_idx) else {
            break;
        };
        let is_selected = is_focused && selected_idx == Some(card_idx);
        render_task_card(card, is_selected, *card_area, buf);
    }
}

/// Renders a placeholder message for empty lanes.
fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    let placeholder = Paragraph::new(Line::from(Span::styled(
        "No tasks",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));

    placeholder.render(area, buf);
}

/// Calculates the scroll offset to keep the selected card visible.
#[must_use]
pub fn calculate_scroll_offset(
    selected_idx: Option<usize>,
    total_cards: usize,
    visible_cards: usize,
) -> usize {
    let Some(selected) = selected_idx else {
        return 0;
    };

    if total_cards <= visible_cards {
        return 0;
    }

    let max_offset = total_cards.saturating_sub(visible_cards);

    if selected < visible_cards / 2 {
        0
    } else {
        (selected.saturating_sub(visible_cards / 2)).min(max_offset)
    }
}
