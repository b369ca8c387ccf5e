//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, and rendering.

use std::time::Instant;

use devboard_config::Config;
use devboard_protocol::{Message, TaskStatus};
use devboard_store::PersistentStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tracing::debug;

use crate::{
    AppState, Focus,
    controller::BoardController,
    drag::{DragEvent, DragOutcome},
    event::{event_to_message, poll_event},
    layout::{
        HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH, STATUS_BAR_HEIGHT,
        TASK_CARD_HEIGHT, column_areas,
    },
    terminal::AppTerminal,
    widgets::{
        HintMode, LanePosition, calculate_scroll_offset, lane_inner_area, render_board,
        render_help_overlay, render_status_bar, render_task_form, visible_cards,
    },
};

/// The main application struct.
///
/// Owns the board controller and the UI state, and provides the main
/// event loop.
#[derive(Debug)]
pub struct App<S> {
    board: BoardController<S>,
    state: AppState,
    should_quit: bool,
    /// Last known terminal area, used for mouse hit-testing.
    last_area: Rect,
    /// Whether the header was shown in the last render (affects hit-testing).
    header_visible: bool,
    config: Config,
}

impl<S: PersistentStore> App<S> {
    /// Creates a new application around a board controller.
    ///
    /// # Examples
    ///
    /// ```
    /// use devboard_config::Config;
    /// use devboard_store::{MemoryStore, TaskRepository};
    /// use devboard_tui::controller::{BoardController, Timings};
    /// use devboard_tui::notify::Toasts;
    /// use devboard_tui::App;
    ///
    /// let mut repo = TaskRepository::new(MemoryStore::new(), "tasks");
    /// repo.load();
    /// let board = BoardController::new(repo, Toasts::default(), Timings::default());
    /// let app = App::new(board, Config::default());
    /// assert_eq!(app.board().view().counts().total(), 3);
    /// ```
    #[must_use]
    pub fn new(board: BoardController<S>, config: Config) -> Self {
        let mut state = AppState::new();
        state.clamp_selection(board.view());
        Self {
            board,
            state,
            should_quit: false,
            last_area: Rect::default(),
            header_visible: true,
            config,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns the board controller.
    #[must_use]
    pub fn board(&self) -> &BoardController<S> {
        &self.board
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns `true` once the user asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Updates the application state based on a message.
    ///
    /// While the help overlay is visible, any key dismisses it instead of
    /// performing its action. Only `Quit` and `ToggleHelp` work normally.
    pub fn update(&mut self, msg: Message) {
        let now = Instant::now();

        if msg.is_terminating() {
            self.should_quit = true;
            return;
        }

        if self.state.help_visible {
            match msg {
                Message::ToggleHelp | Message::MouseDown { .. } => self.state.help_visible = false,
                _ if msg.is_mouse() => {}
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        match self.state.focus() {
            Focus::Form => self.update_form(msg, now),
            Focus::Carrying => self.update_carrying(msg),
            Focus::Board => self.update_board(msg, now),
        }
        self.state.clamp_selection(self.board.view());
    }

    /// Advances cosmetic timers and notification expiry.
    pub fn tick(&mut self, now: Instant) {
        self.board.tick(now);
        self.state.clamp_selection(self.board.view());
    }

    fn update_board(&mut self, msg: Message, now: Instant) {
        let view = self.board.view();
        match msg {
            Message::NavigateLeft => self.state.navigate_left(view),
            Message::NavigateRight => self.state.navigate_right(view),
            Message::NavigateUp => self.state.navigate_up(view),
            Message::NavigateDown => self.state.navigate_down(view),
            Message::Escape => self.state.clear_selection(),
            Message::ToggleHelp => self.state.toggle_help(),
            Message::NewTask => self.state.open_form(),
            Message::DeleteTask => {
                if let Some(id) = self.state.selected_task_id(view) {
                    self.board.on_delete_request(&id, now);
                }
            }
            Message::LiftCard => {
                let Some(task_id) = self.state.selected_task_id(view) else {
                    return;
                };
                let column = self.state.selected_status();
                if self.board.drag(DragEvent::Start { task_id }) == DragOutcome::Started {
                    self.board.drag(DragEvent::Enter { column });
                    self.state.carry_target = Some(column);
                }
            }
            Message::MouseDown { column, row } => self.handle_mouse_down(column, row),
            Message::MouseDrag { column, row } => self.handle_mouse_drag(column, row),
            Message::MouseUp { column, row } => self.handle_mouse_up(column, row),
            _ => {}
        }
    }

    fn update_carrying(&mut self, msg: Message) {
        let Some(from) = self.state.carry_target else {
            return;
        };
        match msg {
            Message::NavigateLeft | Message::NavigateRight => {
                if msg == Message::NavigateLeft {
                    self.state.navigate_left(self.board.view());
                } else {
                    self.state.navigate_right(self.board.view());
                }
                let to = self.state.selected_status();
                self.move_pointer(Some(from), Some(to));
                self.state.carry_target = Some(to);
            }
            Message::Select => {
                self.state.carry_target = None;
                self.finish_drag(DragEvent::Drop { column: from });
            }
            Message::Escape => {
                self.state.carry_target = None;
                self.finish_drag(DragEvent::End);
            }
            Message::ToggleHelp => self.state.toggle_help(),
            _ => {}
        }
    }

    fn update_form(&mut self, msg: Message, now: Instant) {
        let Some(form) = self.state.form.as_mut() else {
            return;
        };
        match msg {
            Message::FormInput { ch } => form.input(ch),
            Message::FormBackspace => form.backspace(),
            Message::FormNewline => form.newline(),
            Message::FormSwitchField => form.switch_field(),
            Message::FormClear => form.clear(),
            Message::FormCancel => self.state.close_form(),
            Message::FormSubmit => {
                let (title, description) = (
                    form.title.value().to_string(),
                    form.description.value().to_string(),
                );
                if let Some(task) = self.board.on_create_submit(&title, &description, now) {
                    self.state.close_form();
                    self.state.select_task(self.board.view(), &task.id);
                }
            }
            _ => {}
        }
    }

    /// Emits leave and enter gestures for a pointer changing column, then
    /// an over gesture for the column it is in.
    fn move_pointer(&mut self, from: Option<TaskStatus>, to: Option<TaskStatus>) {
        if from != to {
            if let Some(column) = from {
                self.board.drag(DragEvent::Leave {
                    column,
                    pointer_still_inside: false,
                });
            }
            if let Some(column) = to {
                self.board.drag(DragEvent::Enter { column });
            }
        }
        if let Some(column) = to {
            self.board.drag(DragEvent::Over { column });
        }
    }

    /// Drops or cancels the current drag and selects the moved card.
    fn finish_drag(&mut self, event: DragEvent) {
        if let DragOutcome::Moved { task_id, status } = self.board.drag(event) {
            debug!(id = %task_id, %status, "card dropped");
            self.state.select_task(self.board.view(), &task_id);
        }
    }

    /// Selects the card under the pointer. The drag only starts once the
    /// pointer moves, so a plain click never reaches the repository.
    fn handle_mouse_down(&mut self, column: u16, row: u16) {
        self.state.pressed_card = None;
        let Some((status, index)) = self.card_at(column, row) else {
            return;
        };
        self.state.select(status, index);
        self.state.pressed_card = self
            .state
            .selected_task_id(self.board.view())
            .map(|task_id| (task_id, status));
    }

    fn handle_mouse_drag(&mut self, column: u16, row: u16) {
        if let Some((task_id, status)) = self.state.pressed_card.take()
            && self.board.drag(DragEvent::Start { task_id }) == DragOutcome::Started
        {
            self.move_pointer(None, Some(status));
            self.state.pointer_column = Some(status);
        }
        if !self.board.is_dragging() {
            return;
        }
        let to = self.column_at(column, row).map(|(status, _)| status);
        self.move_pointer(self.state.pointer_column, to);
        self.state.pointer_column = to;
    }

    fn handle_mouse_up(&mut self, column: u16, row: u16) {
        self.state.pressed_card = None;
        if !self.board.is_dragging() {
            return;
        }
        self.state.pointer_column = None;
        match self.column_at(column, row) {
            Some((status, _)) => self.finish_drag(DragEvent::Drop { column: status }),
            None => self.finish_drag(DragEvent::End),
        }
    }

    /// Computes the board area from the last rendered frame.
    fn board_area(&self) -> Rect {
        let header_offset = if self.header_visible {
            HEADER_HEIGHT
        } else {
            0
        };
        Rect {
            x: self.last_area.x,
            y: self.last_area.y + header_offset,
            width: self.last_area.width,
            height: self
                .last_area
                .height
                .saturating_sub(header_offset + STATUS_BAR_HEIGHT),
        }
    }

    /// Returns the column under a screen position and its lane area.
    fn column_at(&self, column: u16, row: u16) -> Option<(TaskStatus, Rect)> {
        let board_area = self.board_area();
        if !board_area.contains((column, row).into()) {
            return None;
        }
        column_areas(board_area)
            .into_iter()
            .zip(TaskStatus::all())
            .find(|(area, _)| area.contains((column, row).into()))
            .map(|(area, status)| (status, area))
    }

    /// Returns the card under a screen position.
    fn card_at(&self, column: u16, row: u16) -> Option<(TaskStatus, usize)> {
        let (status, lane_area) = self.column_at(column, row)?;
        let inner = lane_inner_area(lane_area, LanePosition::of(status.index(), 3));
        if !inner.contains((column, row).into()) {
            return None;
        }

        let lane = self.board.view().column(status);
        let visible = visible_cards(inner);
        let slot = ((row - inner.y) / TASK_CARD_HEIGHT) as usize;
        if slot >= visible {
            return None;
        }

        // Only the focused lane is scrolled
        let selected = (status.index() == self.state.selected_column)
            .then_some(self.state.selected_card)
            .flatten();
        let index = calculate_scroll_offset(selected, lane.len(), visible) + slot;
        (index < lane.len()).then_some((status, index))
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - If terminal is below minimum dimensions, shows a "terminal too small" message.
    /// - If terminal is tight (below `MIN_HEIGHT_WITH_HEADER`), hides the header to reclaim space.
    /// - Otherwise, renders normally with header.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            self.render_terminal_too_small(frame, area);
            return;
        }

        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        self.header_visible = show_header;

        let header_height = if show_header { HEADER_HEIGHT } else { 0 };
        let [header_area, board_area, status_area] = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);

        if show_header {
            self.render_header(frame, header_area);
        }

        let buf = frame.buffer_mut();
        render_board(
            self.board.view(),
            self.state.selected_column,
            self.state.selected_card,
            board_area,
            buf,
        );

        let mode = match self.state.focus() {
            Focus::Board if self.board.is_dragging() => HintMode::Carrying,
            Focus::Board => HintMode::Board,
            Focus::Carrying => HintMode::Carrying,
            Focus::Form => HintMode::Form,
        };
        render_status_bar(self.board.notifier().latest(), mode, status_area, buf);

        if let Some(form) = &self.state.form {
            render_task_form(form, area, buf);
        }

        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: false });

        // Center the message vertically
        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Renders the header bar with title, task total and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, help_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(17)]).areas(inner);

        let total = self.board.view().counts().total();
        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "devboard",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled("Task Board", Style::default().fg(Color::White)),
            Span::styled(
                format!("  {total} tasks"),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }

    /// Runs the main application loop.
    ///
    /// Renders, advances timers, then polls for one event and applies it,
    /// until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use devboard_config::Config;
    /// use devboard_store::{MemoryStore, TaskRepository};
    /// use devboard_tui::controller::{BoardController, Timings};
    /// use devboard_tui::notify::Toasts;
    /// use devboard_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut repo = TaskRepository::new(MemoryStore::new(), "tasks");
    ///     repo.load();
    ///     let board = BoardController::new(repo, Toasts::default(), Timings::default());
    ///
    ///     let mut terminal = terminal::setup_terminal(true)?;
    ///     let mut app = App::new(board, Config::default());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.view(frame))?;
            self.tick(Instant::now());

            if let Some(event) = poll_event()? {
                let form_focus = self.state.form.as_ref().map(|form| form.focus);
                if let Some(msg) = event_to_message(&event, form_focus) {
                    self.update(msg);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}
