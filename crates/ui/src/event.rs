//! Events the controller reacts to.

use taskboard_protocol::TaskId;

/// A user interaction with the board.
///
/// Clicks on document elements resolve to one of these through the
/// controller's listener table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// "Add new task" clicked.
    OpenAddTask,
    /// Add-task form submitted.
    SubmitAddTask,
    /// Add-task form cancelled.
    CancelAddTask,
    /// Backdrop behind the add-task modal clicked.
    BackdropClicked,
    /// A task card clicked.
    OpenEditTask(TaskId),
    /// "Save changes" clicked in the edit form.
    SaveTaskChanges,
    /// "Delete" clicked in the edit form.
    DeleteTask,
    /// Edit form cancelled.
    CancelEdit,
    /// A board button clicked.
    SwitchBoard(String),
    /// "Hide sidebar" clicked.
    HideSidebar,
    /// "Show sidebar" clicked.
    ShowSidebar,
    /// Theme switch changed.
    ToggleTheme,
}

impl UiEvent {
    /// Returns `true` if the event belongs to one of the modals.
    #[must_use]
    pub fn is_modal(&self) -> bool {
        matches!(
            self,
            Self::SubmitAddTask
                | Self::CancelAddTask
                | Self::BackdropClicked
                | Self::SaveTaskChanges
                | Self::DeleteTask
                | Self::CancelEdit
        )
    }
}
