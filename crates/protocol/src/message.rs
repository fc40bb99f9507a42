//! TUI message types for event handling.
//!
//! This module defines the message enum produced by the terminal input
//! handler. The terminal front end turns each message into a click on the
//! matching document element or into an edit of the focused form field.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// # Examples
///
/// ```
/// use taskboard_protocol::Message;
///
/// let msg = Message::NextBoard;
/// assert!(!msg.is_form());
/// assert!(Message::FormInput { ch: 'a' }.is_form());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move the card cursor to the left column.
    NavigateLeft,
    /// Move the card cursor to the right column.
    NavigateRight,
    /// Move the card cursor up within the current column.
    NavigateUp,
    /// Move the card cursor down within the current column.
    NavigateDown,
    /// Open the card under the cursor.
    Select,
    /// Clear the card cursor.
    Escape,
    /// Open the add-task form.
    NewTask,
    /// Switch to the next board.
    NextBoard,
    /// Switch to the previous board.
    PrevBoard,
    /// Show or hide the sidebar.
    ToggleSidebar,
    /// Switch between the light and dark theme.
    ToggleTheme,
    /// Toggle help overlay.
    ToggleHelp,
    /// Quit the application.
    Quit,

    // --- Form messages ---
    /// Type a character into the focused field.
    FormInput {
        /// The character that was typed.
        ch: char,
    },
    /// Delete the last character of the focused field.
    FormBackspace,
    /// Focus the next field.
    FormNextField,
    /// Focus the previous field.
    FormPrevField,
    /// Cycle the status field.
    FormCycleStatus {
        /// Direction to cycle (positive = forward, negative = backward).
        delta: i32,
    },
    /// Submit the add form or save the edit form.
    FormSubmit,
    /// Delete the task being edited.
    FormDelete,
    /// Close the open form without saving.
    FormCancel,
}

impl Message {
    /// Returns `true` if this message moves the card cursor.
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateLeft | Self::NavigateRight | Self::NavigateUp | Self::NavigateDown
        )
    }

    /// Returns `true` if this message should terminate the application.
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message is only meaningful while a form is open.
    #[must_use]
    pub fn is_form(&self) -> bool {
        matches!(
            self,
            Self::FormInput { .. }
                | Self::FormBackspace
                | Self::FormNextField
                | Self::FormPrevField
                | Self::FormCycleStatus { .. }
                | Self::FormSubmit
                | Self::FormDelete
                | Self::FormCancel
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_navigation_detection() {
        assert!(Message::NavigateLeft.is_navigation());
        assert!(Message::NavigateDown.is_navigation());
        assert!(!Message::Select.is_navigation());
        assert!(!Message::NextBoard.is_navigation());
    }

    #[test]
    fn message_terminating_detection() {
        assert!(Message::Quit.is_terminating());
        assert!(!Message::Escape.is_terminating());
        assert!(!Message::FormCancel.is_terminating());
    }

    #[test]
    fn message_form_detection() {
        assert!(Message::FormSubmit.is_form());
        assert!(Message::FormCycleStatus { delta: -1 }.is_form());
        assert!(Message::FormBackspace.is_form());
        assert!(!Message::NewTask.is_form());
        assert!(!Message::ToggleTheme.is_form());
    }

    #[test]
    fn message_json_format() {
        let json = serde_json::to_string(&Message::ToggleSidebar).expect("serialize");
        assert_eq!(json, r#""toggle_sidebar""#);

        let json = serde_json::to_string(&Message::FormInput { ch: 'x' }).expect("serialize");
        assert_eq!(json, r#"{"form_input":{"ch":"x"}}"#);
    }
}
