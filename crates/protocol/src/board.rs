//! Board derivation.
//!
//! Boards are not stored entities: a board exists only while at least one
//! task names it. This module derives the ordered board index from a task
//! list and resolves which board is active.

use indexmap::IndexSet;

use crate::task::{Task, TaskStatus};

/// Derives the distinct board names referenced by `tasks`.
///
/// Names are returned in first-seen order; empty board names are skipped.
///
/// # Examples
///
/// ```
/// use taskboard_protocol::{NewTask, Task, TaskId, derive_boards};
///
/// let tasks: Vec<Task> = ["B1", "B2", "B1", ""]
///     .iter()
///     .enumerate()
///     .map(|(i, board)| Task::from_new(TaskId::new(i.to_string()), NewTask::new("t", *board)))
///     .collect();
///
/// assert_eq!(derive_boards(&tasks), vec!["B1", "B2"]);
/// ```
#[must_use]
pub fn derive_boards(tasks: &[Task]) -> Vec<String> {
    let boards: IndexSet<&str> = tasks
        .iter()
        .map(|task| task.board.as_str())
        .filter(|board| !board.is_empty())
        .collect();
    boards.into_iter().map(str::to_string).collect()
}

/// Picks the active board.
///
/// Returns the persisted board when it is still one of `boards`, otherwise
/// the first board, or `None` when there are no boards at all.
///
/// # Examples
///
/// ```
/// use taskboard_protocol::resolve_active_board;
///
/// let boards = vec!["Roadmap".to_string(), "Launch".to_string()];
/// assert_eq!(resolve_active_board(Some("Launch"), &boards), Some("Launch".to_string()));
/// assert_eq!(resolve_active_board(Some("Gone"), &boards), Some("Roadmap".to_string()));
/// assert_eq!(resolve_active_board(None, &[]), None);
/// ```
#[must_use]
pub fn resolve_active_board(persisted: Option<&str>, boards: &[String]) -> Option<String> {
    persisted
        .and_then(|name| boards.iter().find(|board| board.as_str() == name))
        .or_else(|| boards.first())
        .cloned()
}

/// Returns the tasks shown in `status`'s column of `board`, in list order.
pub fn tasks_in_column<'a>(
    tasks: &'a [Task],
    board: &'a str,
    status: &'a TaskStatus,
) -> impl Iterator<Item = &'a Task> + 'a {
    tasks
        .iter()
        .filter(move |task| task.is_in_column(board, status))
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use crate::task::{NewTask, TaskId};
    use proptest::prelude::*;

    proptest! {
        /// Every non-empty board appears exactly once, and only those.
        #[test]
        fn derived_boards_are_distinct_and_complete(
            names in proptest::collection::vec("[A-C]?", 0..30)
        ) {
            let tasks: Vec<Task> = names
                .iter()
                .enumerate()
                .map(|(i, b)| Task::from_new(TaskId::new(i.to_string()), NewTask::new("t", b.as_str())))
                .collect();
            let boards = derive_boards(&tasks);

            let mut seen = std::collections::HashSet::new();
            for board in &boards {
                prop_assert!(!board.is_empty());
                prop_assert!(seen.insert(board.clone()));
            }
            for name in names.iter().filter(|n| !n.is_empty()) {
                prop_assert!(boards.contains(name));
            }
        }

        /// The resolved board is always one of the derived boards.
        #[test]
        fn resolved_board_is_member(
            boards in proptest::collection::vec("[a-z]{1,5}", 1..8),
            persisted in proptest::option::of("[a-z]{1,5}"),
        ) {
            let active = resolve_active_board(persisted.as_deref(), &boards);
            prop_assert!(active.is_some_and(|a| boards.contains(&a)));
        }
    }
}
