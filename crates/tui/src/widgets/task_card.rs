//! Task card rendering widget.
//!
//! This module provides functions for rendering individual task cards with
//! color coding based on their column and transient marks.

use devboard_protocol::{Priority, TaskStatus};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::view::{CardMark, CardView};

/// Returns the color associated with a task status.
///
/// This provides consistent color coding across the application:
///
/// - `Todo`: Yellow - waiting to be picked up
/// - `InProgress`: Blue - actively being worked on
/// - `Done`: Green - finished
///
/// # Examples
///
/// ```
/// use devboard_protocol::TaskStatus;
/// use devboard_tui::widgets::status_color;
/// use ratatui::style::Color;
///
/// assert_eq!(status_color(TaskStatus::Todo), Color::Yellow);
/// assert_eq!(status_color(TaskStatus::InProgress), Color::Blue);
/// assert_eq!(status_color(TaskStatus::Done), Color::Green);
/// ```
#[must_use]
pub const fn status_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Todo => Color::Yellow,
        TaskStatus::InProgress => Color::Blue,
        TaskStatus::Done => Color::Green,
    }
}

/// Returns a brighter version of the status color for selected items.
#[must_use]
const fn status_color_bright(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Todo => Color::LightYellow,
        TaskStatus::InProgress => Color::LightBlue,
        TaskStatus::Done => Color::LightGreen,
    }
}

/// Returns the color of a priority label.
#[must_use]
pub const fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::DarkGray,
    }
}

/// Renders a task card to the buffer.
///
/// The border color reflects the task's column, with brighter colors used for
/// selected cards. Lifted cards get a thick magenta border, cards pending
/// removal are dimmed and struck through, and newly added cards glow green.
///
/// # Layout
///
/// ```text
/// ╭──────────────────────────╮
/// │#sk_001 implement_user_a… │
/// │// TODO: Add JWT token a… │
/// │high backend security 3d… │
/// ╰──────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use devboard_protocol::{BoardSnapshot, TaskStatus, sample_tasks};
/// use devboard_tui::view::BoardView;
/// use devboard_tui::widgets::render_task_card;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let mut view = BoardView::new();
/// view.render(&BoardSnapshot::from_tasks(sample_tasks()), Utc::now());
/// let card = view.card_at(TaskStatus::Todo, 0).unwrap();
///
/// let area = Rect::new(0, 0, 30, 5);
/// let mut buf = Buffer::empty(area);
/// render_task_card(card, false, area, &mut buf);
/// ```
pub fn render_task_card(card: &CardView, is_selected: bool, area: Rect, buf: &mut Buffer) {
    // Skip rendering if area is too small
    if area.width < 4 || area.height < 3 {
        return;
    }

    let task = &card.task;
    let removing = card.marks.has(CardMark::Removing);
    let lifted = card.marks.has(CardMark::Lifted);

    let border_color = if removing {
        Color::DarkGray
    } else if lifted {
        Color::Magenta
    } else if card.marks.has(CardMark::NewlyAdded) {
        Color::LightGreen
    } else if is_selected {
        status_color_bright(task.status)
    } else {
        status_color(task.status)
    };

    let mut title_style = if is_selected {
        Style::default()
            .fg(status_color_bright(task.status))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let mut desc_style = if is_selected {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    if removing {
        title_style = title_style
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT);
        desc_style = desc_style.fg(Color::DarkGray);
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let id_label = card.short_id();
    let title_width = inner_width.saturating_sub(id_label.chars().count() + 1);

    // Only the first line of a multi-line description fits on the card
    let first_line = task.description.lines().next().unwrap_or_default();

    let content = vec![
        Line::from(vec![
            Span::styled(id_label, Style::default().fg(status_color(task.status))),
            Span::raw(" "),
            Span::styled(truncate_string(&task.title, title_width), title_style),
        ]),
        Line::from(Span::styled(
            truncate_string(first_line, inner_width),
            desc_style,
        )),
        meta_line(card, inner_width),
    ];

    let border_type = if lifted {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };

    let card_widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(border_color)),
    );

    card_widget.render(area, buf);
}

/// Builds the priority, tags and age line, dropping tags that do not fit.
fn meta_line(card: &CardView, max_width: usize) -> Line<'static> {
    let priority = card.task.priority;
    let mut used = priority.as_str().len() + 1 + card.age.chars().count();
    let mut spans = vec![Span::styled(
        priority.as_str().to_string(),
        Style::default()
            .fg(priority_color(priority))
            .add_modifier(Modifier::BOLD),
    )];

    for tag in &card.task.tags {
        let needed = tag.chars().count() + 1;
        if used + needed > max_width {
            break;
        }
        used += needed;
        spans.push(Span::raw(" "));
        spans.push(Span::styled(tag.clone(), Style::default().fg(Color::Cyan)));
    }

    if used <= max_width {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            card.age.clone(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}

/// Truncates a string to fit within a given width, adding an ellipsis if needed.
pub(crate) fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 1 {
        let truncated: String = s.chars().take(max_width - 1).collect();
        format!("{truncated}…")
    } else {
        s.chars().take(max_width).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_to_string, sample_view};
    use devboard_protocol::TaskId;

    #[test]
    fn status_color_mapping() {
        assert_eq!(status_color(TaskStatus::Todo), Color::Yellow);
        assert_eq!(status_color(TaskStatus::InProgress), Color::Blue);
        assert_eq!(status_color(TaskStatus::Done), Color::Green);
    }

    #[test]
    fn priority_color_mapping() {
        assert_eq!(priority_color(Priority::High), Color::Red);
        assert_eq!(priority_color(Priority::Medium), Color::Yellow);
        assert_eq!(priority_color(Priority::Low), Color::DarkGray);
    }

    #[test]
    fn truncate_string_short() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
    }

    #[test]
    fn truncate_string_exact() {
        assert_eq!(truncate_string("Hello", 5), "Hello");
    }

    #[test]
    fn truncate_string_long() {
        assert_eq!(truncate_string("Hello, World!", 8), "Hello, …");
    }

    #[test]
    fn truncate_string_very_short_max() {
        assert_eq!(truncate_string("Hello", 1), "H");
    }

    #[test]
    fn card_shows_id_title_and_meta() {
        let view = sample_view();
        let card = view.card_at(TaskStatus::Todo, 0).expect("card");
        let area = Rect::new(0, 0, 48, 5);
        let mut buf = Buffer::empty(area);

        render_task_card(card, false, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("#sk_001 implement_user_auth()"));
        assert!(content.contains("// TODO: Add JWT token authentication"));
        assert!(content.contains("high backend security"));
    }

    #[test]
    fn narrow_card_drops_tags_that_do_not_fit() {
        let view = sample_view();
        let card = view.card_at(TaskStatus::Todo, 0).expect("card");
        let line = meta_line(card, 14);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with("high"));
        assert!(!text.contains("security"));
    }

    #[test]
    fn lifted_card_uses_thick_magenta_border() {
        let mut view = sample_view();
        view.set_mark(&TaskId::new("task_002"), CardMark::Lifted, true);
        let card = view.card_at(TaskStatus::InProgress, 0).expect("card");
        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);

        render_task_card(card, false, area, &mut buf);

        let corner = buf.cell((0, 0)).expect("cell");
        assert_eq!(corner.symbol(), "┏");
        assert_eq!(corner.fg, Color::Magenta);
    }

    #[test]
    fn render_task_card_handles_small_area() {
        let view = sample_view();
        let card = view.card_at(TaskStatus::Done, 0).expect("card");
        let area = Rect::new(0, 0, 2, 2);
        let mut buf = Buffer::empty(area);

        // Should not panic with tiny area
        render_task_card(card, false, area, &mut buf);
    }
}
