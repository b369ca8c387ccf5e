//! Key reference overlay, opened with `?`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::layout::centered_rect;

/// Key column width, including the two-space indent.
const KEY_WIDTH: usize = 15;

/// Bindings grouped by the context they apply in. An empty title starts
/// an untitled group.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Board",
        &[
            ("← →", "Switch column"),
            ("↑ ↓", "Select card"),
            ("n", "New task"),
            ("d / Del", "Delete selected"),
            ("Esc", "Deselect"),
        ],
    ),
    (
        "Moving cards",
        &[
            ("m", "Lift selected card"),
            ("← →", "Carry to column"),
            ("Enter / Space", "Drop here"),
            ("Esc", "Put it back"),
            ("Mouse drag", "Drag and drop"),
        ],
    ),
    (
        "New task form",
        &[
            ("Tab", "Switch field"),
            ("Enter", "Submit / new line"),
            ("Ctrl+S", "Submit"),
            ("Ctrl+U", "Clear fields"),
            ("Esc", "Close"),
        ],
    ),
    ("", &[("?", "Toggle help"), ("Ctrl+C", "Quit")]),
];

const FOOTER: &str = "Press any key to close";

/// Draws the key reference centered over `area`, sized to its content.
///
/// # Examples
///
/// ```
/// use devboard_tui::widgets::render_help_overlay;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let area = Rect::new(0, 0, 80, 30);
/// let mut buf = Buffer::empty(area);
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let lines = help_lines();
    let width = lines.iter().map(Line::width).max().unwrap_or_default() + 4;
    let height = lines.len() + 2;
    let popup = centered_rect(
        u16::try_from(width).unwrap_or(u16::MAX),
        u16::try_from(height).unwrap_or(u16::MAX),
        area,
    );

    let accent = Style::default().fg(Color::LightYellow);
    let block = Block::default()
        .title(Span::styled(" Help ", accent.add_modifier(Modifier::BOLD)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(accent);

    Clear.render(popup, buf);
    Paragraph::new(lines).block(block).render(popup, buf);
}

fn help_lines() -> Vec<Line<'static>> {
    let title = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key = Style::default().fg(Color::Green);

    let mut lines = Vec::new();
    for (heading, bindings) in SECTIONS {
        lines.push(Line::default());
        if !heading.is_empty() {
            lines.push(Line::styled(format!("  {heading}"), title));
        }
        lines.extend(bindings.iter().map(|(keys, action)| {
            Line::from(vec![
                Span::styled(format!("  {keys:<w$}", w = KEY_WIDTH - 2), key),
                Span::raw(*action),
            ])
        }));
    }
    lines.push(Line::default());
    lines.push(Line::styled(
        format!("  {FOOTER}"),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    ));
    lines
}
