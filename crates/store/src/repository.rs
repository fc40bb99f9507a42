//! CRUD operations over the persisted task list.
//!
//! The repository keeps no copy of the tasks: every read decodes the
//! `tasks` key and every mutation is a read-modify-write that saves before
//! returning.

use taskboard_protocol::{
    NewTask, ProtocolError, Task, TaskId, TaskUpdate, decode_tasks, encode_tasks,
};
use tracing::{debug, instrument};

use crate::error::{Result, StoreError};
use crate::keys;
use crate::storage::Storage;

/// Task CRUD backed by a [`Storage`].
///
/// # Examples
///
/// ```
/// use taskboard_protocol::{NewTask, TaskStatus, TaskUpdate};
/// use taskboard_store::{MemoryStorage, TaskRepository};
///
/// # fn main() -> taskboard_store::Result<()> {
/// let mut repo = TaskRepository::new(MemoryStorage::new());
///
/// let task = repo.create_task(NewTask::new("Ship it", "Launch"))?.unwrap();
/// repo.update_task(&task.id, TaskUpdate::new("Ship it", "today", TaskStatus::Doing))?;
///
/// let stored = repo.get_task(&task.id)?.unwrap();
/// assert_eq!(stored.status, TaskStatus::Doing);
/// assert_eq!(stored.board, "Launch");
///
/// assert!(repo.delete_task(&task.id)?);
/// assert!(repo.get_tasks()?.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TaskRepository<S> {
    storage: S,
}

impl<S: Storage> TaskRepository<S> {
    /// Wraps a storage handle.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Returns the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the underlying storage mutably, for the UI flags.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Consumes the repository, returning the storage.
    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Returns every stored task in list order.
    ///
    /// A missing `tasks` key reads as an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Decode`] if the stored value is not a task
    /// array, or an error if storage cannot be read.
    pub fn get_tasks(&self) -> Result<Vec<Task>> {
        match self.storage.get_item(keys::TASKS)? {
            Some(raw) => decode_tasks(&raw).map_err(StoreError::Decode),
            None => Ok(Vec::new()),
        }
    }

    /// Replaces the whole stored list.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be encoded or written.
    pub fn save_tasks(&mut self, tasks: &[Task]) -> Result<()> {
        let encoded = encode_tasks(tasks).map_err(StoreError::Encode)?;
        self.storage.set_item(keys::TASKS, &encoded)?;
        debug!(count = tasks.len(), "saved tasks");
        Ok(())
    }

    /// Looks up a task by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored tasks cannot be read.
    pub fn get_task(&self, id: &TaskId) -> Result<Option<Task>> {
        Ok(self.get_tasks()?.into_iter().find(|task| &task.id == id))
    }

    /// Creates a task with a fresh id and appends it to the list.
    ///
    /// Returns `Ok(None)` without touching storage when the title is blank.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored tasks cannot be read or written.
    #[instrument(skip(self, new), fields(board = %new.board))]
    pub fn create_task(&mut self, new: NewTask) -> Result<Option<Task>> {
        if let Err(ProtocolError::InvalidTaskTitle) = new.validate() {
            debug!("ignoring task with blank title");
            return Ok(None);
        }

        let mut tasks = self.get_tasks()?;
        let task = Task::from_new(TaskId::generate(), new);
        tasks.push(task.clone());
        self.save_tasks(&tasks)?;

        debug!(id = %task.id, "created task");
        Ok(Some(task))
    }

    /// Overwrites the editable fields of the task with `id`.
    ///
    /// The board is left untouched. When no task has `id`, a new task with
    /// that id, the supplied fields and no board is appended instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored tasks cannot be read or written.
    #[instrument(skip_all, fields(id = %id))]
    pub fn update_task(&mut self, id: &TaskId, update: TaskUpdate) -> Result<Task> {
        let task = match self.get_task(id)? {
            Some(mut existing) => {
                existing.apply(update);
                existing
            }
            None => {
                debug!("task not found, appending");
                Task::from_update(id.clone(), update)
            }
        };

        self.put_task(&task)?;
        Ok(task)
    }

    /// Replaces the task with the same id, or appends it.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored tasks cannot be read or written.
    pub fn put_task(&mut self, task: &Task) -> Result<()> {
        let mut tasks = self.get_tasks()?;
        match tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => *slot = task.clone(),
            None => tasks.push(task.clone()),
        }
        self.save_tasks(&tasks)
    }

    /// Removes the task with `id`, returning whether one was removed.
    ///
    /// An unknown id leaves storage untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored tasks cannot be read or written.
    #[instrument(skip_all, fields(id = %id))]
    pub fn delete_task(&mut self, id: &TaskId) -> Result<bool> {
        let mut tasks = self.get_tasks()?;
        let before = tasks.len();
        tasks.retain(|task| &task.id != id);

        if tasks.len() == before {
            debug!("no task to delete");
            return Ok(false);
        }

        self.save_tasks(&tasks)?;
        debug!("deleted task");
        Ok(true)
    }
}
