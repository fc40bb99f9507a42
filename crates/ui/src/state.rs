//! Explicit interaction state.
//!
//! The controller owns one [`AppState`] and threads it through every event;
//! nothing about the interaction lives in globals.

use taskboard_protocol::TaskId;

/// Which modal, if any, is open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    /// No modal is open.
    #[default]
    Closed,
    /// The add-task form is open.
    AddTask,
    /// The edit form is open for the given task.
    EditTask(TaskId),
}

impl ModalState {
    /// Returns `true` if a modal is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Returns the task being edited, if any.
    #[must_use]
    pub fn editing(&self) -> Option<&TaskId> {
        match self {
            Self::EditTask(id) => Some(id),
            _ => None,
        }
    }
}

/// Interaction state of the board.
///
/// # Examples
///
/// ```
/// use taskboard_ui::{AppState, ModalState};
///
/// let state = AppState::default();
/// assert_eq!(state.active_board, None);
/// assert_eq!(state.modal, ModalState::Closed);
/// assert!(!state.modal.is_open());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    /// The board whose tasks are shown. `None` only while no task names a
    /// board.
    pub active_board: Option<String>,
    /// The open modal.
    pub modal: ModalState,
}
