//! The rendered board model.
//!
//! [`BoardView`] is what the widgets draw: three columns of card view
//! models built from a [`BoardSnapshot`]. A render always replaces every
//! card; only the create path inserts a single card without a full render.
//! Cards and columns also carry transient cosmetic marks that the drag and
//! board controllers toggle.

use chrono::{DateTime, Utc};
use devboard_protocol::{BoardSnapshot, ColumnCounts, Task, TaskId, TaskStatus};

/// A transient visual state on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardMark {
    /// The card is being dragged.
    Lifted,
    /// A delete is pending for the card.
    Removing,
    /// The card was just created.
    NewlyAdded,
}

/// The set of marks currently on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardMarks {
    lifted: bool,
    removing: bool,
    newly_added: bool,
}

impl CardMarks {
    /// Returns `true` if `mark` is set.
    #[must_use]
    pub const fn has(&self, mark: CardMark) -> bool {
        match mark {
            CardMark::Lifted => self.lifted,
            CardMark::Removing => self.removing,
            CardMark::NewlyAdded => self.newly_added,
        }
    }

    /// Sets or clears `mark`.
    pub fn set(&mut self, mark: CardMark, on: bool) {
        match mark {
            CardMark::Lifted => self.lifted = on,
            CardMark::Removing => self.removing = on,
            CardMark::NewlyAdded => self.newly_added = on,
        }
    }

    /// Returns `true` if no mark is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.lifted || self.removing || self.newly_added)
    }
}

/// A card as displayed on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// The task this card shows.
    pub task: Task,
    /// Relative age label, e.g. `"yesterday"`.
    pub age: String,
    /// Transient cosmetic marks.
    pub marks: CardMarks,
    /// Whether the card accepts drag gestures.
    pub draggable: bool,
}

impl CardView {
    fn new(task: Task, now: DateTime<Utc>) -> Self {
        let age = relative_age(task.created_at, now);
        Self {
            task,
            age,
            marks: CardMarks::default(),
            draggable: true,
        }
    }

    /// Returns the id label shown on the card, e.g. `#9x0a2b`.
    #[must_use]
    pub fn short_id(&self) -> String {
        format!("#{}", self.task.id.short())
    }
}

/// One status column of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnView {
    /// The status this column represents.
    pub status: TaskStatus,
    /// Cards in display order.
    pub cards: Vec<CardView>,
    /// Whether the column is highlighted as a drop target.
    pub drop_target: bool,
}

impl ColumnView {
    fn new(status: TaskStatus) -> Self {
        Self {
            status,
            cards: Vec::new(),
            drop_target: false,
        }
    }

    /// Returns the number of cards in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the column shows no card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The three-column board as currently displayed.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use devboard_protocol::{BoardSnapshot, TaskStatus, sample_tasks};
/// use devboard_tui::view::BoardView;
///
/// let snapshot = BoardSnapshot::from_tasks(sample_tasks());
/// let mut view = BoardView::new();
/// view.render(&snapshot, Utc::now());
/// view.update_counts(&snapshot);
///
/// assert_eq!(view.column(TaskStatus::Done).len(), 1);
/// assert_eq!(view.counts().total(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    columns: [ColumnView; 3],
    counts: ColumnCounts,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            columns: TaskStatus::all().map(ColumnView::new),
            counts: ColumnCounts::default(),
        }
    }
}

impl BoardView {
    /// Creates an empty view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every column's cards with the snapshot's tasks.
    ///
    /// Marks and drop-target highlights are reset, and every card is made
    /// draggable. Counts are left alone; see [`BoardView::update_counts`].
    pub fn render(&mut self, snapshot: &BoardSnapshot, now: DateTime<Utc>) {
        for (status, tasks) in snapshot.columns() {
            let column = &mut self.columns[status.index()];
            column.cards = tasks
                .iter()
                .cloned()
                .map(|task| CardView::new(task, now))
                .collect();
            column.drop_target = false;
        }
    }

    /// Refreshes the per-column counts and total from the snapshot.
    pub fn update_counts(&mut self, snapshot: &BoardSnapshot) {
        self.counts = snapshot.counts();
    }

    /// Returns the counts shown in lane titles and the header.
    #[must_use]
    pub fn counts(&self) -> ColumnCounts {
        self.counts
    }

    /// Inserts a card at the head of the task's column without a full render.
    pub fn insert_card_top(&mut self, task: Task, now: DateTime<Utc>) {
        let status = task.status;
        self.columns[status.index()]
            .cards
            .insert(0, CardView::new(task, now));
    }

    /// Removes a card from the view.
    ///
    /// Returns `false` if the card is not displayed.
    pub fn detach_card(&mut self, id: &TaskId) -> bool {
        let Some((status, index)) = self.find_card(id) else {
            return false;
        };
        self.columns[status.index()].cards.remove(index);
        true
    }

    /// Sets or clears a mark on a card.
    ///
    /// Returns `false` if the card is not displayed. A card marked
    /// [`CardMark::Removing`] stops accepting drag gestures.
    pub fn set_mark(&mut self, id: &TaskId, mark: CardMark, on: bool) -> bool {
        let Some((status, index)) = self.find_card(id) else {
            return false;
        };
        let card = &mut self.columns[status.index()].cards[index];
        card.marks.set(mark, on);
        if mark == CardMark::Removing {
            card.draggable = !on;
        }
        true
    }

    /// Returns `true` if the card is displayed and carries `mark`.
    #[must_use]
    pub fn has_mark(&self, id: &TaskId, mark: CardMark) -> bool {
        self.card(id).is_some_and(|card| card.marks.has(mark))
    }

    /// Sets or clears a column's drop-target highlight.
    pub fn set_drop_target(&mut self, status: TaskStatus, on: bool) {
        self.columns[status.index()].drop_target = on;
    }

    /// Clears every column's drop-target highlight.
    pub fn clear_drop_targets(&mut self) {
        for column in &mut self.columns {
            column.drop_target = false;
        }
    }

    /// Locates a card by task id, returning its column and position.
    #[must_use]
    pub fn find_card(&self, id: &TaskId) -> Option<(TaskStatus, usize)> {
        self.columns.iter().find_map(|column| {
            column
                .cards
                .iter()
                .position(|card| &card.task.id == id)
                .map(|index| (column.status, index))
        })
    }

    /// Returns the card for a task id.
    #[must_use]
    pub fn card(&self, id: &TaskId) -> Option<&CardView> {
        let (status, index) = self.find_card(id)?;
        self.columns[status.index()].cards.get(index)
    }

    /// Returns the card at a position.
    #[must_use]
    pub fn card_at(&self, status: TaskStatus, index: usize) -> Option<&CardView> {
        self.columns[status.index()].cards.get(index)
    }

    /// Returns one column.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &ColumnView {
        &self.columns[status.index()]
    }

    /// Returns all columns in board order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnView; 3] {
        &self.columns
    }
}

/// Formats how long ago a task was created.
///
/// Whole elapsed days are counted in UTC: `today`, `yesterday`, `{n}d ago`
/// under a week, then the abbreviated month and day. Creation times in the
/// future count as today.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use devboard_tui::view::relative_age;
///
/// let created = Utc.with_ymd_and_hms(2025, 9, 17, 2, 25, 0).unwrap();
/// assert_eq!(relative_age(created, created + Duration::hours(30)), "yesterday");
/// assert_eq!(relative_age(created, created + Duration::days(3)), "3d ago");
/// assert_eq!(relative_age(created, created + Duration::days(10)), "Sep 17");
/// ```
#[must_use]
pub fn relative_age(created: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - created).num_days().max(0);
    match days {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        2..=6 => format!("{days}d ago"),
        _ => created.format("%b %-d").to_string(),
    }
}
