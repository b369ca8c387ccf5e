//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application to drive the board controller.
///
/// # Examples
///
/// ```
/// use devboard_protocol::Message;
///
/// let msg = Message::MouseDown { column: 4, row: 2 };
/// assert!(msg.is_mouse());
/// assert!(!Message::Quit.is_mouse());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection to the left column.
    NavigateLeft,
    /// Move selection to the right column.
    NavigateRight,
    /// Move selection up within the current column.
    NavigateUp,
    /// Move selection down within the current column.
    NavigateDown,
    /// Confirm: drops a carried card.
    Select,
    /// Escape: cancel a carry, close an overlay, or clear selection (contextual).
    Escape,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Open the new-task form.
    NewTask,
    /// Delete the selected card.
    DeleteTask,
    /// Lift the selected card to carry it with the arrow keys.
    LiftCard,

    // --- Mouse messages ---
    /// Left button pressed at coordinates (column, row).
    MouseDown {
        /// Column (x coordinate) of the press.
        column: u16,
        /// Row (y coordinate) of the press.
        row: u16,
    },
    /// Pointer moved with the left button held.
    MouseDrag {
        /// Column (x coordinate) of the pointer.
        column: u16,
        /// Row (y coordinate) of the pointer.
        row: u16,
    },
    /// Left button released at coordinates (column, row).
    MouseUp {
        /// Column (x coordinate) of the release.
        column: u16,
        /// Row (y coordinate) of the release.
        row: u16,
    },

    // --- Form messages ---
    /// Input a character into the focused form field.
    FormInput {
        /// The character that was input.
        ch: char,
    },
    /// Delete the last character of the focused form field.
    FormBackspace,
    /// Switch focus between the title and description fields.
    FormSwitchField,
    /// Insert a line break into the description.
    FormNewline,
    /// Submit the form.
    FormSubmit,
    /// Clear the form fields.
    FormClear,
    /// Close the form without submitting.
    FormCancel,
}

impl Message {
    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use devboard_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message is a pointer action.
    #[must_use]
    pub fn is_mouse(&self) -> bool {
        matches!(
            self,
            Self::MouseDown { .. } | Self::MouseDrag { .. } | Self::MouseUp { .. }
        )
    }
}
