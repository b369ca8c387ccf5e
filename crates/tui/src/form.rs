//! New-task form state.

/// A single-field text editor with a byte-offset cursor.
///
/// # Examples
///
/// ```
/// use devboard_tui::form::TextInput;
///
/// let mut input = TextInput::default();
/// for ch in "héllo".chars() {
///     input.insert_char(ch);
/// }
/// input.backspace();
/// assert_eq!(input.value(), "héll");
/// assert_eq!(input.cursor(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    /// Returns the current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the cursor position as a byte offset into the value.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Inserts a character at the cursor position.
    pub fn insert_char(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev_boundary = self.value[..self.cursor]
            .char_indices()
            .last()
            .map_or(0, |(i, _)| i);
        self.value.remove(prev_boundary);
        self.cursor = prev_boundary;
    }

    /// Empties the field.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns `true` if the field holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Which form field receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// The single-line title.
    #[default]
    Title,
    /// The multi-line description.
    Description,
}

/// The new-task form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskForm {
    /// Task title.
    pub title: TextInput,
    /// Task description; may span several lines.
    pub description: TextInput,
    /// The focused field.
    pub focus: FormField,
}

impl TaskForm {
    /// Creates an empty form with the title focused.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn focused_mut(&mut self) -> &mut TextInput {
        match self.focus {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
        }
    }

    /// Types a character into the focused field.
    pub fn input(&mut self, ch: char) {
        self.focused_mut().insert_char(ch);
    }

    /// Deletes a character from the focused field.
    pub fn backspace(&mut self) {
        self.focused_mut().backspace();
    }

    /// Inserts a line break. Only the description accepts one.
    pub fn newline(&mut self) {
        if self.focus == FormField::Description {
            self.description.insert_char('\n');
        }
    }

    /// Moves focus to the other field.
    pub fn switch_field(&mut self) {
        self.focus = match self.focus {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Title,
        };
    }

    /// Empties both fields and focuses the title.
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.focus = FormField::Title;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(form: &mut TaskForm, text: &str) {
        for ch in text.chars() {
            form.input(ch);
        }
    }

    #[test]
    fn input_goes_to_focused_field() {
        let mut form = TaskForm::new();
        type_str(&mut form, "Fix bug");
        form.switch_field();
        type_str(&mut form, "in login");

        assert_eq!(form.title.value(), "Fix bug");
        assert_eq!(form.description.value(), "in login");
    }

    #[test]
    fn newline_only_in_description() {
        let mut form = TaskForm::new();
        form.newline();
        assert!(form.title.is_empty());

        form.switch_field();
        type_str(&mut form, "a");
        form.newline();
        type_str(&mut form, "b");
        assert_eq!(form.description.value(), "a\nb");
    }

    #[test]
    fn backspace_on_empty_field_is_noop() {
        let mut form = TaskForm::new();
        form.backspace();
        assert_eq!(form, TaskForm::new());
    }

    #[test]
    fn backspace_handles_multibyte_chars() {
        let mut input = TextInput::default();
        for ch in "añ🦀".chars() {
            input.insert_char(ch);
        }
        input.backspace();
        assert_eq!(input.value(), "añ");
        input.backspace();
        assert_eq!(input.value(), "a");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn clear_resets_everything() {
        let mut form = TaskForm::new();
        type_str(&mut form, "title");
        form.switch_field();
        type_str(&mut form, "desc");
        form.clear();
        assert_eq!(form, TaskForm::new());
    }

    #[test]
    fn switch_field_toggles() {
        let mut form = TaskForm::new();
        form.switch_field();
        assert_eq!(form.focus, FormField::Description);
        form.switch_field();
        assert_eq!(form.focus, FormField::Title);
    }
}
