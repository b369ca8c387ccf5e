//! The task repository.
//!
//! [`TaskRepository`] is the single owner of the board's task collection. It
//! keeps tasks in insertion order alongside an id-to-position index, persists
//! the whole collection after every mutation, and hands out copies only.
//!
//! Persistence failures never roll back in-memory state. They are logged and
//! retained so the caller can surface them once via
//! [`TaskRepository::take_persist_failure`].

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use devboard_protocol::{
    BoardSnapshot, Task, TaskId, TaskStatus, decode_tasks, encode_tasks, sample_tasks,
};
use tracing::{debug, info, instrument, warn};

use crate::error::{Result, StoreError};
use crate::id::generate_task_id;
use crate::store::PersistentStore;

/// The storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "devboard_tasks_v2";

/// Where the collection came from on [`TaskRepository::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Persisted records were restored.
    Restored {
        /// Number of tasks kept.
        count: usize,
        /// Number of records dropped for repeating an earlier id.
        duplicates: usize,
    },
    /// Nothing usable was persisted; the sample board was seeded.
    Seeded,
}

/// Ordered, indexed task collection backed by a [`PersistentStore`].
///
/// # Examples
///
/// ```
/// use devboard_protocol::TaskStatus;
/// use devboard_store::{MemoryStore, TaskRepository};
///
/// let mut repo = TaskRepository::new(MemoryStore::new(), "tasks");
/// repo.load();
/// assert_eq!(repo.count(), 3);
///
/// let task = repo.create("Write docs", "").unwrap();
/// assert!(repo.set_status(&task.id, TaskStatus::Done));
/// assert_eq!(repo.by_status(TaskStatus::Done).len(), 2);
/// ```
#[derive(Debug)]
pub struct TaskRepository<S> {
    store: S,
    key: String,
    tasks: Vec<Task>,
    index: HashMap<TaskId, usize>,
    persist_failure: Option<StoreError>,
}

impl<S: PersistentStore> TaskRepository<S> {
    /// Creates an empty repository. Call [`load`](Self::load) to hydrate it.
    #[must_use]
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            tasks: Vec::new(),
            index: HashMap::new(),
            persist_failure: None,
        }
    }

    /// Replaces the collection with the persisted one.
    ///
    /// Falls back to the sample board when nothing is stored or the stored
    /// blob cannot be read or decoded. Records repeating an earlier id are
    /// dropped.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn load(&mut self) -> LoadOutcome {
        let decoded = match self.store.get(&self.key) {
            Ok(Some(bytes)) => match decode_tasks(&bytes) {
                Ok(tasks) => Some(tasks),
                Err(e) => {
                    warn!(error = %e, "persisted tasks are unreadable, seeding sample board");
                    None
                }
            },
            Ok(None) => {
                debug!("no persisted tasks, seeding sample board");
                None
            }
            Err(e) => {
                warn!(error = %e, "failed to read persisted tasks, seeding sample board");
                None
            }
        };

        let Some(tasks) = decoded else {
            self.tasks = sample_tasks();
            self.rebuild_index();
            return LoadOutcome::Seeded;
        };

        self.tasks.clear();
        self.index.clear();
        let mut duplicates = 0;
        for task in tasks {
            if self.index.contains_key(&task.id) {
                duplicates += 1;
                continue;
            }
            let id = task.id.clone();
            self.tasks.push(task);
            self.index.insert(id, self.tasks.len() - 1);
        }
        if duplicates > 0 {
            warn!(duplicates, "dropped persisted tasks with duplicate ids");
        }

        info!(count = self.tasks.len(), "loaded tasks");
        LoadOutcome::Restored {
            count: self.tasks.len(),
            duplicates,
        }
    }

    /// Creates a todo task stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyTitle`] if the trimmed title is empty. A
    /// failed write is not an error here; see
    /// [`take_persist_failure`](Self::take_persist_failure).
    pub fn create(&mut self, title: &str, description: &str) -> Result<Task> {
        self.create_at(title, description, Utc::now())
    }

    /// Creates a todo task stamped with `now`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyTitle`] if the trimmed title is empty.
    #[instrument(skip(self, description))]
    pub fn create_at(
        &mut self,
        title: &str,
        description: &str,
        now: DateTime<Utc>,
    ) -> Result<Task> {
        if title.trim().is_empty() {
            debug!("rejecting task without title");
            return Err(StoreError::EmptyTitle);
        }

        let id = loop {
            let candidate = generate_task_id(now);
            if !self.index.contains_key(&candidate) {
                break candidate;
            }
            debug!(id = %candidate, "generated id collides, retrying");
        };

        let task = Task::new(id, title, description, now);
        self.tasks.push(task.clone());
        self.index.insert(task.id.clone(), self.tasks.len() - 1);
        debug!(id = %task.id, priority = %task.priority, "created task");

        self.persist();
        Ok(task)
    }

    /// Removes a task. Returns `false` if the id is unknown.
    #[instrument(skip(self, id), fields(id = %id))]
    pub fn remove(&mut self, id: &TaskId) -> bool {
        let Some(&position) = self.index.get(id) else {
            debug!("remove of unknown task");
            return false;
        };

        self.tasks.remove(position);
        self.rebuild_index();
        debug!("removed task");

        self.persist();
        true
    }

    /// Moves a task to `status`. Returns `false` if the id is unknown.
    ///
    /// Setting the current status again still counts as success and still
    /// persists.
    #[instrument(skip(self, id), fields(id = %id))]
    pub fn set_status(&mut self, id: &TaskId, status: TaskStatus) -> bool {
        let Some(&position) = self.index.get(id) else {
            debug!("status change for unknown task");
            return false;
        };

        let task = &mut self.tasks[position];
        if task.status != status {
            debug!(from = %task.status, to = %status, "changing status");
        }
        task.status = status;

        self.persist();
        true
    }

    /// Returns a copy of one task.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<Task> {
        self.index
            .get(id)
            .and_then(|&position| self.tasks.get(position))
            .cloned()
    }

    /// Returns `true` if a task with this id exists.
    #[must_use]
    pub fn contains(&self, id: &TaskId) -> bool {
        self.index.contains_key(id)
    }

    /// Returns a copy of every task in insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Returns copies of the tasks with `status`, in insertion order.
    #[must_use]
    pub fn by_status(&self, status: TaskStatus) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.status == status)
            .cloned()
            .collect()
    }

    /// Returns all three status columns at once.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_tasks(self.tasks.iter().cloned())
    }

    /// Returns the number of tasks in the collection.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Deletes the persisted blob and empties the collection.
    ///
    /// A later [`load`](Self::load) seeds the sample board again.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot clear the key. The in-memory
    /// collection is left untouched in that case.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn clear(&mut self) -> Result<()> {
        self.store.clear(&self.key)?;
        self.tasks.clear();
        self.index.clear();
        info!("cleared stored tasks");
        Ok(())
    }

    /// Returns and forgets the most recent persistence failure.
    pub fn take_persist_failure(&mut self) -> Option<StoreError> {
        self.persist_failure.take()
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the underlying store mutably.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn rebuild_index(&mut self) {
        self.index = self
            .tasks
            .iter()
            .enumerate()
            .map(|(position, task)| (task.id.clone(), position))
            .collect();
    }

    /// Writes the whole collection. Returns `false` on failure.
    fn persist(&mut self) -> bool {
        let result = encode_tasks(&self.tasks)
            .map_err(StoreError::from)
            .and_then(|bytes| self.store.set(&self.key, &bytes));

        match result {
            Ok(()) => true,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to persist tasks");
                self.persist_failure = Some(e);
                false
            }
        }
    }
}

#[cfg(test)]
impl<S> TaskRepository<S> {
    /// Asserts that the index mirrors the list exactly.
    fn assert_consistent(&self) {
        assert_eq!(self.index.len(), self.tasks.len(), "index size diverged");
        for (position, task) in self.tasks.iter().enumerate() {
            assert_eq!(
                self.index.get(&task.id),
                Some(&position),
                "index entry for {} is stale",
                task.id
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::Duration;

    fn loaded_repo() -> TaskRepository<MemoryStore> {
        let mut repo = TaskRepository::new(MemoryStore::new(), DEFAULT_STORAGE_KEY);
        repo.load();
        repo
    }

    fn empty_repo() -> TaskRepository<MemoryStore> {
        let store = MemoryStore::with_entry(DEFAULT_STORAGE_KEY, "[]");
        let mut repo = TaskRepository::new(store, DEFAULT_STORAGE_KEY);
        repo.load();
        repo
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|task| task.id.as_str()).collect()
    }

    #[test]
    fn load_without_data_seeds_sample_board() {
        let mut repo = TaskRepository::new(MemoryStore::new(), DEFAULT_STORAGE_KEY);
        assert_eq!(repo.load(), LoadOutcome::Seeded);
        assert_eq!(repo.all(), sample_tasks());
        repo.assert_consistent();
    }

    #[test]
    fn load_with_corrupt_data_seeds_sample_board() {
        let store = MemoryStore::with_entry(DEFAULT_STORAGE_KEY, "{ not json");
        let mut repo = TaskRepository::new(store, DEFAULT_STORAGE_KEY);
        assert_eq!(repo.load(), LoadOutcome::Seeded);
        assert_eq!(repo.count(), 3);
    }

    #[test]
    fn load_respects_empty_array() {
        let repo = empty_repo();
        assert_eq!(repo.count(), 0);
        assert!(repo.snapshot().is_empty());
    }

    #[test]
    fn load_drops_duplicate_ids() {
        let mut tasks = sample_tasks();
        let mut copy = tasks[0].clone();
        copy.title = "shadow".to_string();
        tasks.push(copy);
        let bytes = encode_tasks(&tasks).expect("encode");

        let mut repo = TaskRepository::new(MemoryStore::with_entry("k", bytes), "k");
        assert_eq!(
            repo.load(),
            LoadOutcome::Restored {
                count: 3,
                duplicates: 1
            }
        );
        let first = repo.get(&TaskId::new("task_001")).expect("kept");
        assert_eq!(first.title, "implement_user_auth()");
        repo.assert_consistent();
    }

    #[test]
    fn load_does_not_write() {
        let repo = loaded_repo();
        assert_eq!(repo.store().writes(), 0);
    }

    #[test]
    fn create_yields_fresh_todo_task() {
        let mut repo = loaded_repo();
        let before: Vec<_> = repo.all().into_iter().map(|task| task.id).collect();
        let now = Utc::now();

        let task = repo.create("Add dark mode", "css tweaks").expect("create");

        assert!(!before.contains(&task.id));
        assert_eq!(task.status, TaskStatus::Todo);
        assert!(task.created_at <= Utc::now());
        assert!(task.created_at >= now);
        assert_eq!(task.tags, vec!["frontend"]);
        assert_eq!(repo.count(), 4);
        assert_eq!(repo.get(&task.id), Some(task));
        repo.assert_consistent();
    }

    #[test]
    fn create_appends_and_persists() {
        let mut repo = empty_repo();
        let first = repo.create("first", "").expect("create");
        let second = repo.create("second", "").expect("create");

        assert_eq!(ids(&repo.all()), vec![first.id.as_str(), second.id.as_str()]);
        assert_eq!(repo.store().writes(), 2);
    }

    #[test]
    fn create_trims_text() {
        let mut repo = empty_repo();
        let task = repo.create("  padded  ", "\n body \n").expect("create");
        assert_eq!(task.title, "padded");
        assert_eq!(task.description, "body");
    }

    #[test]
    fn create_rejects_blank_title_without_mutation() {
        let mut repo = loaded_repo();
        let before = repo.all();

        let err = repo.create("   ", "description").expect_err("blank title");

        assert!(err.is_validation());
        assert_eq!(repo.all(), before);
        assert_eq!(repo.store().writes(), 0);
    }

    #[test]
    fn remove_drops_task_from_every_view() {
        let mut repo = loaded_repo();
        let id = TaskId::new("task_002");

        assert!(repo.remove(&id));

        assert_eq!(repo.count(), 2);
        assert!(repo.get(&id).is_none());
        for status in TaskStatus::all() {
            assert!(repo.by_status(status).iter().all(|task| task.id != id));
        }
        repo.assert_consistent();
    }

    #[test]
    fn remove_unknown_id_is_false_and_does_not_persist() {
        let mut repo = loaded_repo();
        assert!(!repo.remove(&TaskId::new("missing")));
        assert_eq!(repo.count(), 3);
        assert_eq!(repo.store().writes(), 0);
    }

    #[test]
    fn set_status_unknown_id_leaves_collection_unchanged() {
        let mut repo = loaded_repo();
        let before = repo.all();
        assert!(!repo.set_status(&TaskId::new("missing"), TaskStatus::Done));
        assert_eq!(repo.all(), before);
    }

    #[test]
    fn set_status_moves_task_between_columns() {
        let mut repo = loaded_repo();
        let id = TaskId::new("task_001");

        assert!(repo.set_status(&id, TaskStatus::Done));

        assert!(repo.by_status(TaskStatus::Todo).is_empty());
        assert_eq!(ids(&repo.by_status(TaskStatus::Done)), vec!["task_001", "task_003"]);
    }

    #[test]
    fn set_same_status_succeeds_and_persists() {
        let mut repo = loaded_repo();
        let id = TaskId::new("task_003");
        let before = repo.all();

        assert!(repo.set_status(&id, TaskStatus::Done));

        assert_eq!(repo.all(), before);
        assert_eq!(repo.store().writes(), 1);
    }

    #[test]
    fn by_status_preserves_insertion_order() {
        let mut repo = empty_repo();
        let now = Utc::now();
        let a = repo.create_at("a", "", now).expect("a");
        let b = repo.create_at("b", "", now + Duration::seconds(1)).expect("b");
        let c = repo.create_at("c", "", now + Duration::seconds(2)).expect("c");
        repo.set_status(&b.id, TaskStatus::Done);

        let todo = repo.by_status(TaskStatus::Todo);
        assert_eq!(ids(&todo), vec![a.id.as_str(), c.id.as_str()]);
    }

    #[test]
    fn reads_return_copies() {
        let repo = loaded_repo();
        let mut copy = repo.all();
        copy[0].title = "mutated".to_string();
        assert_ne!(repo.all()[0].title, "mutated");
    }

    #[test]
    fn persisted_collection_reloads_equal() {
        let mut repo = loaded_repo();
        repo.create("Fix urgent bug in login", "").expect("create");
        repo.set_status(&TaskId::new("task_001"), TaskStatus::InProgress);
        let expected = repo.all();

        let mut reloaded = TaskRepository::new(repo.store().clone(), DEFAULT_STORAGE_KEY);
        assert_eq!(
            reloaded.load(),
            LoadOutcome::Restored {
                count: 4,
                duplicates: 0
            }
        );
        assert_eq!(reloaded.all(), expected);
    }

    #[test]
    fn persist_failure_keeps_state_and_is_reported_once() {
        let mut repo = loaded_repo();
        repo.store_mut().set_fail_writes(true);

        let task = repo.create("offline task", "").expect("create still succeeds");

        assert!(repo.contains(&task.id));
        assert!(matches!(
            repo.take_persist_failure(),
            Some(StoreError::WriteRejected { .. })
        ));
        assert!(repo.take_persist_failure().is_none());
    }

    #[test]
    fn clear_empties_and_next_load_reseeds() {
        let mut repo = loaded_repo();
        repo.create("temporary", "").expect("create");

        repo.clear().expect("clear");
        assert_eq!(repo.count(), 0);
        assert!(repo.store().get(DEFAULT_STORAGE_KEY).expect("get").is_none());

        assert_eq!(repo.load(), LoadOutcome::Seeded);
        assert_eq!(repo.count(), 3);
    }

    #[test]
    fn clear_failure_keeps_collection() {
        let mut repo = loaded_repo();
        repo.store_mut().set_fail_writes(true);
        assert!(repo.clear().is_err());
        assert_eq!(repo.count(), 3);
    }
}

#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::store::MemoryStore;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Create(String),
        Remove(usize),
        SetStatus(usize, usize),
        RemoveUnknown,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            "[ a-z]{0,12}".prop_map(Op::Create),
            (0usize..16).prop_map(Op::Remove),
            (0usize..16, 0usize..3).prop_map(|(i, s)| Op::SetStatus(i, s)),
            Just(Op::RemoveUnknown),
        ]
    }

    proptest! {
        /// Any sequence of operations keeps ids unique and the index exact.
        #[test]
        fn operations_keep_index_consistent(ops in prop::collection::vec(op_strategy(), 0..40)) {
            let mut repo = TaskRepository::new(MemoryStore::new(), DEFAULT_STORAGE_KEY);
            repo.load();

            for op in ops {
                let tasks = repo.all();
                match op {
                    Op::Create(title) => {
                        let before = repo.count();
                        let result = repo.create(&title, "");
                        if title.trim().is_empty() {
                            prop_assert!(result.is_err());
                            prop_assert_eq!(repo.count(), before);
                        } else {
                            prop_assert!(result.is_ok());
                            prop_assert_eq!(repo.count(), before + 1);
                        }
                    }
                    Op::Remove(i) if !tasks.is_empty() => {
                        let id = tasks[i % tasks.len()].id.clone();
                        prop_assert!(repo.remove(&id));
                        prop_assert!(!repo.contains(&id));
                    }
                    Op::SetStatus(i, s) if !tasks.is_empty() => {
                        let id = tasks[i % tasks.len()].id.clone();
                        let status = TaskStatus::from_index(s).unwrap_or_default();
                        prop_assert!(repo.set_status(&id, status));
                        prop_assert_eq!(repo.get(&id).map(|t| t.status), Some(status));
                    }
                    Op::Remove(_) | Op::SetStatus(..) => {}
                    Op::RemoveUnknown => {
                        prop_assert!(!repo.remove(&TaskId::new("never_issued")));
                    }
                }
                repo.assert_consistent();
                let snapshot = repo.snapshot();
                prop_assert_eq!(snapshot.counts().total(), repo.count());
            }
        }
    }
}
