//! Task-related types for the task board.
//!
//! This module defines the task record persisted under the `tasks` key,
//! its identifier, the fixed status columns, and the partial records used
//! to create and update tasks.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ProtocolError, Result};

/// Unique identifier for a task.
///
/// Identifiers are opaque strings. Freshly created tasks receive a UUID v4,
/// but any string is a valid identifier: the default dataset uses short
/// numeric ids and the update path accepts caller-supplied ids.
///
/// Numeric ids found in stored JSON are accepted and normalized to their
/// decimal string form.
///
/// # Examples
///
/// ```
/// use taskboard_protocol::TaskId;
///
/// let id = TaskId::new("42");
/// assert_eq!(id.as_str(), "42");
///
/// let fresh = TaskId::generate();
/// assert_ne!(fresh, TaskId::generate());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Creates an identifier from an existing string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh, globally unique identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Number(number) => Self(number.to_string()),
        })
    }
}

/// The status of a task, which determines the column it is rendered in.
///
/// Only [`Todo`](Self::Todo), [`Doing`](Self::Doing) and [`Done`](Self::Done)
/// have columns. Any other stored value is kept verbatim in
/// [`Other`](Self::Other) so that a load/save cycle never loses data; such
/// tasks are never rendered.
///
/// # Examples
///
/// ```
/// use taskboard_protocol::TaskStatus;
///
/// assert_eq!(TaskStatus::from("doing"), TaskStatus::Doing);
/// assert_eq!(TaskStatus::Done.as_str(), "done");
/// assert!(!TaskStatus::from("blocked").is_column());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    /// Work that has not started.
    #[default]
    Todo,
    /// Work in progress.
    Doing,
    /// Finished work.
    Done,
    /// A status with no column.
    Other(String),
}

impl TaskStatus {
    /// Returns the column statuses in display order.
    #[must_use]
    pub fn columns() -> [Self; 3] {
        [Self::Todo, Self::Doing, Self::Done]
    }

    /// Returns the stored string form of the status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
            Self::Other(other) => other,
        }
    }

    /// Returns `true` if this status has a column on the board.
    #[must_use]
    pub const fn is_column(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Returns the column header label, e.g. `TODO`.
    #[must_use]
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }

    /// Returns the column status `delta` steps away, wrapping around.
    ///
    /// Non-column statuses cycle from `todo`.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_protocol::TaskStatus;
    ///
    /// assert_eq!(TaskStatus::Todo.cycle(1), TaskStatus::Doing);
    /// assert_eq!(TaskStatus::Todo.cycle(-1), TaskStatus::Done);
    /// assert_eq!(TaskStatus::Done.cycle(1), TaskStatus::Todo);
    /// ```
    #[must_use]
    pub fn cycle(&self, delta: i32) -> Self {
        let columns = Self::columns();
        let len = columns.len() as i32;
        let current = columns.iter().position(|s| s == self).unwrap_or(0) as i32;
        let next = (current + delta).rem_euclid(len) as usize;
        columns[next].clone()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for TaskStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "todo" => Self::Todo,
            "doing" => Self::Doing,
            "done" => Self::Done,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for TaskStatus {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<TaskStatus> for String {
    fn from(value: TaskStatus) -> Self {
        match value {
            TaskStatus::Other(other) => other,
            column => column.as_str().to_string(),
        }
    }
}

/// A task on the board.
///
/// This is the record stored in the `tasks` array. Identity is the `id`
/// field; the board a task belongs to is the plain `board` name.
///
/// # Examples
///
/// ```
/// use taskboard_protocol::{NewTask, Task, TaskId, TaskStatus};
///
/// let task = Task::from_new(TaskId::new("7"), NewTask::new("Plan sprint", "Team"));
/// assert_eq!(task.status, TaskStatus::Todo);
/// assert_eq!(task.board, "Team");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for this task.
    pub id: TaskId,
    /// Short summary of the task.
    pub title: String,
    /// Longer free-form description.
    #[serde(default)]
    pub description: String,
    /// Which column the task is shown in.
    pub status: TaskStatus,
    /// Name of the board the task belongs to. Empty when unassigned.
    #[serde(default)]
    pub board: String,
}

impl Task {
    /// Builds a task from a creation request and an assigned id.
    #[must_use]
    pub fn from_new(id: TaskId, new: NewTask) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            status: new.status,
            board: new.board,
        }
    }

    /// Builds a task from an update for an id that did not exist.
    ///
    /// The resulting task has no board. Missing fields take their defaults.
    #[must_use]
    pub fn from_update(id: TaskId, update: TaskUpdate) -> Self {
        Self {
            id,
            title: update.title.unwrap_or_default(),
            description: update.description.unwrap_or_default(),
            status: update.status.unwrap_or_default(),
            board: String::new(),
        }
    }

    /// Overwrites the fields `update` carries. The board is left untouched.
    pub fn apply(&mut self, update: TaskUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }

    /// Returns `true` if this task is shown in `status`'s column of `board`.
    #[must_use]
    pub fn is_in_column(&self, board: &str, status: &TaskStatus) -> bool {
        self.board == board && &self.status == status
    }
}

/// The fields supplied when creating a task; the id is assigned on creation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewTask {
    /// Short summary. Must not be blank.
    pub title: String,
    /// Longer free-form description.
    pub description: String,
    /// Initial status.
    pub status: TaskStatus,
    /// Board the task is created on.
    pub board: String,
}

impl NewTask {
    /// Creates a request for a `todo` task with an empty description.
    #[must_use]
    pub fn new(title: impl Into<String>, board: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            board: board.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the initial status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Checks that the request carries a non-blank title.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidTaskTitle`] if the title is empty or
    /// only whitespace.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ProtocolError::InvalidTaskTitle);
        }
        Ok(())
    }
}

/// Changes to the editable fields of an existing task.
///
/// Fields left as `None` keep their current value.
///
/// # Examples
///
/// ```
/// use taskboard_protocol::{NewTask, Task, TaskId, TaskStatus, TaskUpdate};
///
/// let mut task = Task::from_new(
///     TaskId::new("1"),
///     NewTask::new("Draft", "Team").with_status(TaskStatus::Doing),
/// );
/// task.apply(TaskUpdate::default().with_title("Final"));
/// assert_eq!(task.title, "Final");
/// assert_eq!(task.status, TaskStatus::Doing);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskUpdate {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New status.
    pub status: Option<TaskStatus>,
}

impl TaskUpdate {
    /// Creates an update carrying all three editable fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: TaskStatus,
    ) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            status: Some(status),
        }
    }

    /// Sets the new title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the new description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the new status.
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Encodes a task list as the JSON array stored under the `tasks` key.
///
/// # Errors
///
/// Returns [`ProtocolError::SerializationFailed`] if encoding fails.
pub fn encode_tasks(tasks: &[Task]) -> Result<String> {
    serde_json::to_string(tasks).map_err(ProtocolError::SerializationFailed)
}

/// Decodes the JSON array stored under the `tasks` key.
///
/// # Errors
///
/// Returns [`ProtocolError::DeserializationFailed`] if the text is not a
/// well-formed task array.
pub fn decode_tasks(json: &str) -> Result<Vec<Task>> {
    serde_json::from_str(json).map_err(ProtocolError::DeserializationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_status_default_is_todo() {
        assert_eq!(TaskStatus::default(), TaskStatus::Todo);
    }

    #[test]
    fn task_status_json_format() {
        let json = serde_json::to_string(&TaskStatus::Doing).expect("serialize");
        assert_eq!(json, r#""doing""#);

        let parsed: TaskStatus = serde_json::from_str(r#""done""#).expect("deserialize");
        assert_eq!(parsed, TaskStatus::Done);
    }

    #[test]
    fn unknown_status_is_preserved() {
        let parsed: TaskStatus = serde_json::from_str(r#""blocked""#).expect("deserialize");
        assert_eq!(parsed, TaskStatus::Other("blocked".to_string()));
        assert!(!parsed.is_column());

        let json = serde_json::to_string(&parsed).expect("serialize");
        assert_eq!(json, r#""blocked""#);
    }

    #[test]
    fn status_labels_are_uppercase() {
        let labels: Vec<String> = TaskStatus::columns().iter().map(TaskStatus::label).collect();
        assert_eq!(labels, vec!["TODO", "DOING", "DONE"]);
    }

    #[test]
    fn status_cycle_from_other_starts_at_todo() {
        let other = TaskStatus::from("someday");
        assert_eq!(other.cycle(1), TaskStatus::Doing);
    }

    #[test]
    fn task_json_shape() {
        let task = Task::from_new(
            TaskId::new("1"),
            NewTask::new("Title", "Board")
                .with_description("Desc")
                .with_status(TaskStatus::Done),
        );
        let value = serde_json::to_value(&task).expect("serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "id": "1",
                "title": "Title",
                "description": "Desc",
                "status": "done",
                "board": "Board",
            })
        );
    }

    #[test]
    fn task_accepts_numeric_id_and_missing_fields() {
        let tasks = decode_tasks(r#"[{"id": 3, "title": "Old", "status": "todo"}]"#)
            .expect("decode");
        assert_eq!(tasks[0].id, TaskId::new("3"));
        assert_eq!(tasks[0].description, "");
        assert_eq!(tasks[0].board, "");
    }

    #[test]
    fn decode_rejects_malformed_json() {
        let err = decode_tasks("{not json").unwrap_err();
        assert!(matches!(err, ProtocolError::DeserializationFailed(_)));
    }

    #[test]
    fn new_task_validation() {
        assert!(NewTask::new("Real title", "B").validate().is_ok());
        assert!(matches!(
            NewTask::new("", "B").validate(),
            Err(ProtocolError::InvalidTaskTitle)
        ));
        assert!(NewTask::new("   ", "B").validate().is_err());
    }

    #[test]
    fn apply_keeps_board() {
        let mut task = Task::from_new(TaskId::new("1"), NewTask::new("Old", "Keep"));
        task.apply(TaskUpdate::new("New", "Details", TaskStatus::Doing));

        assert_eq!(task.title, "New");
        assert_eq!(task.description, "Details");
        assert_eq!(task.status, TaskStatus::Doing);
        assert_eq!(task.board, "Keep");
    }

    #[test]
    fn apply_title_only_keeps_other_fields() {
        let mut task = Task::from_new(
            TaskId::new("2"),
            NewTask::new("Old", "Keep")
                .with_description("Details")
                .with_status(TaskStatus::Doing),
        );
        task.apply(TaskUpdate::default().with_title("X"));

        assert_eq!(task.title, "X");
        assert_eq!(task.description, "Details");
        assert_eq!(task.status, TaskStatus::Doing);
        assert_eq!(task.board, "Keep");
    }

    #[test]
    fn from_update_defaults_missing_fields() {
        let task = Task::from_update(
            TaskId::new("9"),
            TaskUpdate::default().with_status(TaskStatus::Done),
        );
        assert_eq!(task.title, "");
        assert_eq!(task.description, "");
        assert_eq!(task.status, TaskStatus::Done);
    }

    #[test]
    fn from_update_has_no_board() {
        let task = Task::from_update(
            TaskId::new("new-id"),
            TaskUpdate::new("T", "", TaskStatus::Todo),
        );
        assert_eq!(task.id.as_str(), "new-id");
        assert!(task.board.is_empty());
    }

    #[test]
    fn generated_ids_are_unique() {
        let ids: std::collections::HashSet<TaskId> = (0..100).map(|_| TaskId::generate()).collect();
        assert_eq!(ids.len(), 100);
    }
}
