//! Status bar rendering widget.
//!
//! This module provides functions for rendering the footer status bar with
//! the newest notification and keybinding hints for the current mode.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::notify::{NotificationKind, Toast};

/// Which set of key hints to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HintMode {
    /// Browsing the board.
    #[default]
    Board,
    /// Carrying a lifted card with the keyboard.
    Carrying,
    /// Typing into the new-task form.
    Form,
}

impl HintMode {
    fn hints(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Board => &[
                ("n", "New"),
                ("m", "Move"),
                ("d", "Delete"),
                ("←→↑↓", "Navigate"),
                ("?", "Help"),
                ("Ctrl+C", "Quit"),
            ],
            Self::Carrying => &[("←→", "Carry"), ("Enter", "Drop"), ("Esc", "Cancel")],
            Self::Form => &[
                ("Enter", "Submit"),
                ("Tab", "Switch field"),
                ("Ctrl+U", "Clear"),
                ("Esc", "Cancel"),
            ],
        }
    }
}

/// Renders the status bar.
///
/// The newest notification, if any, is shown first with a `// ` prefix,
/// green for success and red for errors, followed by the key hints.
///
/// # Layout
///
/// ```text
/// ┌──────────────────────────────────────────────────────────────┐
/// │// Task deleted  |  n New  m Move  d Delete  ? Help           │
/// └──────────────────────────────────────────────────────────────┘
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use devboard_tui::widgets::{HintMode, render_status_bar};
///
/// let area = Rect::new(0, 0, 80, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(None, HintMode::Board, area, &mut buf);
/// ```
pub fn render_status_bar(toast: Option<&Toast>, mode: HintMode, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let mut spans = Vec::new();
    if let Some(toast) = toast {
        let color = match toast.kind {
            NotificationKind::Success => Color::Green,
            NotificationKind::Error => Color::Red,
        };
        spans.push(Span::styled(
            format!("// {}", toast.message),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled("  |  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, action)) in mode.hints().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {action}"), text_style));
    }

    let status_bar =
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));

    status_bar.render(area, buf);
}
