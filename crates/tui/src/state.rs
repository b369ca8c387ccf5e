//! Application state management.
//!
//! This module defines the UI-side state of the TUI application: which card
//! is selected, which overlays are open, and where a carried card is. The
//! board itself lives in the [`BoardController`](crate::controller::BoardController);
//! navigation methods take the current [`BoardView`] to stay within bounds.

use devboard_protocol::{TaskId, TaskStatus};

use crate::form::TaskForm;
use crate::view::BoardView;

/// Number of board columns.
const COLUMN_COUNT: usize = 3;

/// The current focus area in the UI.
///
/// Determines which UI component receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Focus is on the board columns.
    #[default]
    Board,
    /// A lifted card is being carried with the keyboard.
    Carrying,
    /// The new-task form is open.
    Form,
}

/// The application state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Index of the currently selected column (0-2).
    pub selected_column: usize,
    /// Index of the selected card within the current column, if any.
    pub selected_card: Option<usize>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// The new-task form, while open.
    pub form: Option<TaskForm>,
    /// The column a keyboard-carried card is currently over.
    pub carry_target: Option<TaskStatus>,
    /// The column under the pointer during a mouse drag.
    pub pointer_column: Option<TaskStatus>,
    /// A card pressed with the mouse that has not moved yet.
    pub pressed_card: Option<(TaskId, TaskStatus)>,
}

impl AppState {
    /// Creates a new application state with the first column selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use devboard_tui::{AppState, Focus};
    ///
    /// let state = AppState::new();
    /// assert_eq!(state.selected_column, 0);
    /// assert_eq!(state.focus(), Focus::Board);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the area that receives keyboard input.
    #[must_use]
    pub fn focus(&self) -> Focus {
        if self.form.is_some() {
            Focus::Form
        } else if self.carry_target.is_some() {
            Focus::Carrying
        } else {
            Focus::Board
        }
    }

    /// Returns the status of the selected column.
    #[must_use]
    pub fn selected_status(&self) -> TaskStatus {
        TaskStatus::from_index(self.selected_column).unwrap_or_default()
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        if self.help_visible {
            self.help_visible = false;
            true
        } else {
            false
        }
    }

    /// Opens an empty new-task form.
    pub fn open_form(&mut self) {
        self.form = Some(TaskForm::new());
    }

    /// Closes the new-task form, discarding its contents.
    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Moves the column selection to the left, wrapping around if needed.
    pub fn navigate_left(&mut self, view: &BoardView) {
        self.selected_column = (self.selected_column + COLUMN_COUNT - 1) % COLUMN_COUNT;
        self.clamp_selection(view);
    }

    /// Moves the column selection to the right, wrapping around if needed.
    pub fn navigate_right(&mut self, view: &BoardView) {
        self.selected_column = (self.selected_column + 1) % COLUMN_COUNT;
        self.clamp_selection(view);
    }

    /// Moves the card selection up within the current column.
    pub fn navigate_up(&mut self, view: &BoardView) {
        let len = view.column(self.selected_status()).len();
        if len == 0 {
            self.selected_card = None;
            return;
        }

        self.selected_card = match self.selected_card {
            Some(idx) if idx > 0 => Some(idx - 1),
            // Wrap to bottom
            Some(_) => Some(len - 1),
            None => Some(0),
        };
    }

    /// Moves the card selection down within the current column.
    pub fn navigate_down(&mut self, view: &BoardView) {
        let len = view.column(self.selected_status()).len();
        if len == 0 {
            self.selected_card = None;
            return;
        }

        self.selected_card = match self.selected_card {
            Some(idx) if idx + 1 < len => Some(idx + 1),
            // Wrap to top
            Some(_) => Some(0),
            None => Some(0),
        };
    }

    /// Selects a card by position.
    pub fn select(&mut self, status: TaskStatus, index: usize) {
        self.selected_column = status.index();
        self.selected_card = Some(index);
    }

    /// Selects the card showing `id`, if it is displayed.
    pub fn select_task(&mut self, view: &BoardView, id: &TaskId) {
        if let Some((status, index)) = view.find_card(id) {
            self.select(status, index);
        }
    }

    /// Returns the id of the selected card's task.
    #[must_use]
    pub fn selected_task_id(&self, view: &BoardView) -> Option<TaskId> {
        let index = self.selected_card?;
        view.card_at(self.selected_status(), index)
            .map(|card| card.task.id.clone())
    }

    /// Clears the current card selection.
    pub fn clear_selection(&mut self) {
        self.selected_card = None;
    }

    /// Ensures the card selection is valid for the current column.
    pub fn clamp_selection(&mut self, view: &BoardView) {
        let len = view.column(self.selected_status()).len();
        if len == 0 {
            self.selected_card = None;
        } else if let Some(idx) = self.selected_card
            && idx >= len
        {
            self.selected_card = Some(len - 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::sample_view;

    #[test]
    fn new_state_has_correct_defaults() {
        let state = AppState::new();

        assert_eq!(state.focus(), Focus::Board);
        assert_eq!(state.selected_column, 0);
        assert_eq!(state.selected_card, None);
        assert!(!state.help_visible);
        assert!(state.form.is_none());
    }

    #[test]
    fn navigate_left_wraps_around() {
        let view = BoardView::new();
        let mut state = AppState::new();

        state.navigate_left(&view);
        assert_eq!(state.selected_column, 2);

        state.navigate_left(&view);
        assert_eq!(state.selected_column, 1);
    }

    #[test]
    fn navigate_right_wraps_around() {
        let view = BoardView::new();
        let mut state = AppState::new();

        state.selected_column = 2;
        state.navigate_right(&view);
        assert_eq!(state.selected_column, 0);
    }

    #[test]
    fn navigate_up_down_in_empty_column() {
        let view = BoardView::new();
        let mut state = AppState::new();

        state.navigate_up(&view);
        assert_eq!(state.selected_card, None);

        state.navigate_down(&view);
        assert_eq!(state.selected_card, None);
    }

    #[test]
    fn navigate_up_down_wraps() {
        let mut view = sample_view();
        for id in ["task_a", "task_b"] {
            let task = devboard_protocol::Task::new(
                TaskId::new(id),
                id,
                "",
                crate::test_utils::fixed_now(),
            );
            view.insert_card_top(task, crate::test_utils::fixed_now());
        }
        let mut state = AppState::new();

        state.navigate_down(&view);
        assert_eq!(state.selected_card, Some(0));
        state.navigate_down(&view);
        state.navigate_down(&view);
        assert_eq!(state.selected_card, Some(2));

        // Wrap around
        state.navigate_down(&view);
        assert_eq!(state.selected_card, Some(0));

        state.navigate_up(&view);
        assert_eq!(state.selected_card, Some(2));
    }

    #[test]
    fn selected_task_id_follows_selection() {
        let view = sample_view();
        let mut state = AppState::new();
        assert!(state.selected_task_id(&view).is_none());

        state.select(TaskStatus::Done, 0);
        assert_eq!(
            state.selected_task_id(&view),
            Some(TaskId::new("task_003"))
        );
    }

    #[test]
    fn clamp_selection_after_removal() {
        let mut view = sample_view();
        let mut state = AppState::new();
        state.select(TaskStatus::InProgress, 0);

        view.detach_card(&TaskId::new("task_002"));
        state.clamp_selection(&view);
        assert_eq!(state.selected_card, None);
    }

    #[test]
    fn focus_reflects_overlays() {
        let mut state = AppState::new();
        state.carry_target = Some(TaskStatus::Todo);
        assert_eq!(state.focus(), Focus::Carrying);

        state.open_form();
        assert_eq!(state.focus(), Focus::Form);

        state.close_form();
        state.carry_target = None;
        assert_eq!(state.focus(), Focus::Board);
    }

    #[test]
    fn dismiss_help_reports_change() {
        let mut state = AppState::new();
        assert!(!state.dismiss_help());
        state.toggle_help();
        assert!(state.dismiss_help());
        assert!(!state.help_visible);
    }
}
