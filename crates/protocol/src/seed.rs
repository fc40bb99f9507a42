//! The default dataset written to empty storage on first start.
//!
//! # Examples
//!
//! ```
//! use taskboard_protocol::{default_tasks, derive_boards};
//!
//! let tasks = default_tasks();
//! assert_eq!(tasks.len(), 8);
//! assert_eq!(derive_boards(&tasks), vec!["Launch Career", "Roadmap"]);
//! ```

use crate::task::{Task, TaskId, TaskStatus};

/// A builder for seed tasks, reducing boilerplate in [`default_tasks`].
struct SeedTask {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    status: TaskStatus,
    board: &'static str,
}

impl SeedTask {
    fn new(id: &'static str, title: &'static str, board: &'static str) -> Self {
        Self {
            id,
            title,
            description: "",
            status: TaskStatus::Todo,
            board,
        }
    }

    fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    fn status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    fn build(self) -> Task {
        Task {
            id: TaskId::new(self.id),
            title: self.title.to_string(),
            description: self.description.to_string(),
            status: self.status,
            board: self.board.to_string(),
        }
    }
}

/// Returns the fixed dataset seeded into empty storage.
///
/// The dataset spans two boards:
///
/// - **Launch Career**: 3 tasks across all three columns
/// - **Roadmap**: 5 tasks, mostly in `todo`
#[must_use]
pub fn default_tasks() -> Vec<Task> {
    vec![
        SeedTask::new("1", "Launch Epic Career", "Launch Career")
            .description("Create a killer resume and start applying")
            .build(),
        SeedTask::new("2", "Master JavaScript", "Launch Career")
            .description("Get comfortable with the fundamentals")
            .status(TaskStatus::Doing)
            .build(),
        SeedTask::new("3", "Keep on Going", "Launch Career")
            .description("You're almost there")
            .status(TaskStatus::Done)
            .build(),
        SeedTask::new("4", "Conquer React", "Roadmap")
            .description("Components, hooks and state")
            .build(),
        SeedTask::new("5", "Understand Databases", "Roadmap")
            .description("Relational modelling and indexes")
            .build(),
        SeedTask::new("6", "Crush Frameworks", "Roadmap").build(),
        SeedTask::new("7", "Explore ES6 Features", "Roadmap")
            .status(TaskStatus::Doing)
            .build(),
        SeedTask::new("8", "Have fun", "Roadmap")
            .description("Celebrate every milestone")
            .status(TaskStatus::Done)
            .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{derive_boards, tasks_in_column};

    #[test]
    fn seed_ids_are_unique() {
        let tasks = default_tasks();
        let ids: std::collections::HashSet<_> = tasks.iter().map(|t| &t.id).collect();
        assert_eq!(ids.len(), tasks.len());
    }

    #[test]
    fn seed_covers_every_column_of_first_board() {
        let tasks = default_tasks();
        let first = &derive_boards(&tasks)[0];
        for status in TaskStatus::columns() {
            assert!(tasks_in_column(&tasks, first, &status).next().is_some());
        }
    }

    #[test]
    fn seed_titles_are_valid() {
        assert!(default_tasks().iter().all(|t| !t.title.trim().is_empty()));
    }
}
