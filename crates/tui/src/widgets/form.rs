//! New-task form overlay.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::form::{FormField, TaskForm, TextInput};
use crate::layout::centered_rect;

const FORM_WIDTH: u16 = 60;
const FORM_HEIGHT: u16 = 14;

/// Shown after the focused field's text.
const CURSOR: &str = "▏";

/// Renders the new-task form centered over `area`.
///
/// ```text
/// ╭ New task ──────────────────────────────────╮
/// │╭ title ───────────────────────────────────╮│
/// ││Fix login bug▏                            ││
/// │╰──────────────────────────────────────────╯│
/// │╭ description ─────────────────────────────╮│
/// ││                                          ││
/// │╰──────────────────────────────────────────╯│
/// ╰────────────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use devboard_tui::form::TaskForm;
/// use devboard_tui::widgets::render_task_form;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let mut form = TaskForm::new();
/// form.input('x');
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
/// render_task_form(&form, area, &mut buf);
/// ```
pub fn render_task_form(form: &TaskForm, area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(FORM_WIDTH, FORM_HEIGHT, area);
    Clear.render(popup_area, buf);

    let outer = Block::default()
        .title(Span::styled(
            " New task ",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightCyan));
    let inner = outer.inner(popup_area);
    outer.render(popup_area, buf);

    let [title_area, description_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(inner);

    render_field(
        "title",
        &form.title,
        form.focus == FormField::Title,
        title_area,
        buf,
    );
    render_field(
        "description",
        &form.description,
        form.focus == FormField::Description,
        description_area,
        buf,
    );
}

fn render_field(label: &str, input: &TextInput, focused: bool, area: Rect, buf: &mut Buffer) {
    let border_color = if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let mut lines: Vec<Line<'_>> = input
        .value()
        .split('\n')
        .map(|line| Line::from(line.to_string()))
        .collect();
    if focused && let Some(last) = lines.last_mut() {
        last.push_span(Span::styled(CURSOR, Style::default().fg(Color::Cyan)));
    }

    let field = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(format!(" {label} "))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        );
    field.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn form_shows_both_fields() {
        let mut form = TaskForm::new();
        for ch in "Fix login bug".chars() {
            form.input(ch);
        }
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        render_task_form(&form, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("New task"));
        assert!(content.contains("Fix login bug▏"));
        assert!(content.contains("description"));
    }

    #[test]
    fn multiline_description_renders_each_line() {
        let mut form = TaskForm::new();
        form.switch_field();
        form.input('a');
        form.newline();
        form.input('b');
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        render_task_form(&form, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.lines().any(|l| l.contains("│a") && !l.contains("b")));
        assert!(content.contains("b▏"));
    }

    #[test]
    fn form_handles_small_area() {
        let form = TaskForm::new();
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);

        // Should not panic with small area
        render_task_form(&form, area, &mut buf);
    }
}
