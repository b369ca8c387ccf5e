//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use devboard_protocol::Message;

use crate::form::FormField;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
///
/// When `form_focus` is set, keys are routed to the new-task form instead
/// of the board.
#[must_use]
pub fn event_to_message(event: &Event, form_focus: Option<FormField>) -> Option<Message> {
    match (event, form_focus) {
        (Event::Key(key), Some(field)) => key_to_form_message(*key, field),
        (Event::Key(key), None) => key_to_message(*key),
        (Event::Mouse(mouse), None) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// Only the left button is tracked: press, drag and release map to the
/// corresponding pointer messages.
#[must_use]
fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::MouseDown { column, row }),
        MouseEventKind::Drag(MouseButton::Left) => Some(Message::MouseDrag { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(Message::MouseUp { column, row }),
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// Returns `Some(Message)` if the key event maps to an action,
/// or `None` if the key is not bound.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Escape (cancel carry, close help, or clear selection) |
/// | `Left` | Navigate left |
/// | `Right` | Navigate right |
/// | `Up` | Navigate up |
/// | `Down` | Navigate down |
/// | `Enter` or `Space` | Select (drops a carried card) |
/// | `n` | New task |
/// | `d` or `Delete` | Delete selected task |
/// | `m` | Lift selected card |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Message::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        // Navigation (arrow keys only)
        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Select),

        KeyCode::Char('n') => Some(Message::NewTask),
        KeyCode::Char('d') | KeyCode::Delete => Some(Message::DeleteTask),
        KeyCode::Char('m') => Some(Message::LiftCard),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a key event to a form-specific message.
///
/// This function is used while the new-task form is open. `Enter` submits
/// from the title field and inserts a line break in the description.
///
/// # Key Bindings (Form Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+S` or `Ctrl+Enter` | Submit |
/// | `Ctrl+U` | Clear both fields |
/// | `Enter` | Submit (title) / new line (description) |
/// | `Tab` or `Shift+Tab` | Switch field |
/// | `Esc` | Close the form |
/// | `Backspace` | Delete last character |
/// | Any char | Input |
#[must_use]
pub fn key_to_form_message(key: KeyEvent, focus: FormField) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Message::Quit),
            KeyCode::Char('s') | KeyCode::Enter => Some(Message::FormSubmit),
            KeyCode::Char('u') => Some(Message::FormClear),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Message::FormCancel),
        KeyCode::Tab | KeyCode::BackTab => Some(Message::FormSwitchField),
        KeyCode::Enter => match focus {
            FormField::Title => Some(Message::FormSubmit),
            FormField::Description => Some(Message::FormNewline),
        },
        KeyCode::Backspace => Some(Message::FormBackspace),
        KeyCode::Char(ch) => Some(Message::FormInput { ch }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn make_key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_key_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: event::KeyEventState::NONE,
        }
    }

    fn make_mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn quit_keys() {
        assert_eq!(
            key_to_message(make_key_with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )),
            Some(Message::Quit)
        );
        assert_eq!(key_to_message(make_key(KeyCode::Char('q'))), None);
    }

    #[test]
    fn navigation_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Left)),
            Some(Message::NavigateLeft)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Right)),
            Some(Message::NavigateRight)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Up)),
            Some(Message::NavigateUp)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Down)),
            Some(Message::NavigateDown)
        );
    }

    #[test]
    fn vim_keys_not_mapped() {
        for ch in ['h', 'j', 'k', 'l'] {
            assert_eq!(key_to_message(make_key(KeyCode::Char(ch))), None);
        }
    }

    #[test]
    fn task_action_keys() {
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('n'))),
            Some(Message::NewTask)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('d'))),
            Some(Message::DeleteTask)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Delete)),
            Some(Message::DeleteTask)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('m'))),
            Some(Message::LiftCard)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Enter)),
            Some(Message::Select)
        );
        assert_eq!(
            key_to_message(make_key(KeyCode::Char('?'))),
            Some(Message::ToggleHelp)
        );
    }

    #[test]
    fn control_chords_do_not_trigger_plain_bindings() {
        assert_eq!(
            key_to_message(make_key_with_modifiers(
                KeyCode::Char('d'),
                KeyModifiers::CONTROL
            )),
            None
        );
    }

    #[test]
    fn form_enter_depends_on_field() {
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Enter), FormField::Title),
            Some(Message::FormSubmit)
        );
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Enter), FormField::Description),
            Some(Message::FormNewline)
        );
        assert_eq!(
            key_to_form_message(
                make_key_with_modifiers(KeyCode::Enter, KeyModifiers::CONTROL),
                FormField::Description
            ),
            Some(Message::FormSubmit)
        );
    }

    #[test]
    fn form_captures_text_input() {
        // Bound board keys are plain text inside the form
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Char('n')), FormField::Title),
            Some(Message::FormInput { ch: 'n' })
        );
        assert_eq!(
            key_to_form_message(
                make_key_with_modifiers(KeyCode::Char('A'), KeyModifiers::SHIFT),
                FormField::Title
            ),
            Some(Message::FormInput { ch: 'A' })
        );
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Backspace), FormField::Title),
            Some(Message::FormBackspace)
        );
    }

    #[test]
    fn form_control_keys() {
        let ctrl = |ch| make_key_with_modifiers(KeyCode::Char(ch), KeyModifiers::CONTROL);
        assert_eq!(
            key_to_form_message(ctrl('s'), FormField::Title),
            Some(Message::FormSubmit)
        );
        assert_eq!(
            key_to_form_message(ctrl('u'), FormField::Title),
            Some(Message::FormClear)
        );
        assert_eq!(
            key_to_form_message(ctrl('c'), FormField::Description),
            Some(Message::Quit)
        );
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Esc), FormField::Title),
            Some(Message::FormCancel)
        );
        assert_eq!(
            key_to_form_message(make_key(KeyCode::Tab), FormField::Title),
            Some(Message::FormSwitchField)
        );
    }

    #[test]
    fn mouse_left_button_lifecycle() {
        let down = Event::Mouse(make_mouse(MouseEventKind::Down(MouseButton::Left), 10, 5));
        let drag = Event::Mouse(make_mouse(MouseEventKind::Drag(MouseButton::Left), 40, 6));
        let up = Event::Mouse(make_mouse(MouseEventKind::Up(MouseButton::Left), 41, 6));

        assert_eq!(
            event_to_message(&down, None),
            Some(Message::MouseDown { column: 10, row: 5 })
        );
        assert_eq!(
            event_to_message(&drag, None),
            Some(Message::MouseDrag { column: 40, row: 6 })
        );
        assert_eq!(
            event_to_message(&up, None),
            Some(Message::MouseUp { column: 41, row: 6 })
        );
    }

    #[test]
    fn other_mouse_events_ignored() {
        let right = Event::Mouse(make_mouse(MouseEventKind::Down(MouseButton::Right), 1, 1));
        let scroll = Event::Mouse(make_mouse(MouseEventKind::ScrollDown, 1, 1));
        assert_eq!(event_to_message(&right, None), None);
        assert_eq!(event_to_message(&scroll, None), None);
    }

    #[test]
    fn mouse_ignored_while_form_open() {
        let down = Event::Mouse(make_mouse(MouseEventKind::Down(MouseButton::Left), 10, 5));
        assert_eq!(event_to_message(&down, Some(FormField::Title)), None);
    }

    #[test]
    fn event_routes_keys_by_form_focus() {
        let key = Event::Key(make_key(KeyCode::Char('n')));
        assert_eq!(event_to_message(&key, None), Some(Message::NewTask));
        assert_eq!(
            event_to_message(&key, Some(FormField::Description)),
            Some(Message::FormInput { ch: 'n' })
        );
    }

    #[test]
    fn resize_event_ignored() {
        assert_eq!(event_to_message(&Event::Resize(80, 24), None), None);
    }
}
