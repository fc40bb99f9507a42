//! Event polling and key mappings.
//!
//! Two key maps exist: one for the board and one for an open form. The
//! run loop picks the map from whether a modal is open.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use taskboard_protocol::Message;

/// How long [`poll_event`] waits for input before returning.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event.
///
/// Returns `None` if nothing arrived within the poll timeout.
///
/// # Errors
///
/// Returns an error if reading from the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal event to a message.
///
/// Only key presses are mapped; releases, repeats on some platforms, mouse
/// and resize events yield `None`.
#[must_use]
pub fn event_to_message(event: &Event, in_form: bool) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if in_form {
                key_to_form_message(*key)
            } else {
                key_to_message(*key)
            }
        }
        _ => None,
    }
}

fn is_ctrl(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}

/// Maps a key pressed on the board.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | Arrows | Move the card cursor |
/// | `Enter` | Open the selected card |
/// | `Esc` | Clear the card cursor |
/// | `n` | New task |
/// | `Tab` / `Shift+Tab` | Next / previous board |
/// | `s` | Toggle sidebar |
/// | `t` | Toggle theme |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl(key, 'c') {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),
        KeyCode::Enter => Some(Message::Select),
        KeyCode::Tab => Some(Message::NextBoard),
        KeyCode::BackTab => Some(Message::PrevBoard),
        KeyCode::Char('n') => Some(Message::NewTask),
        KeyCode::Char('s') => Some(Message::ToggleSidebar),
        KeyCode::Char('t') => Some(Message::ToggleTheme),
        KeyCode::Char('?') => Some(Message::ToggleHelp),
        _ => None,
    }
}

/// Maps a key pressed while the add or edit form is open.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | Any char | Type into the focused field |
/// | `Backspace` | Delete the last character |
/// | `Tab` / `Shift+Tab` | Next / previous field |
/// | `Left` / `Right` | Cycle the status |
/// | `Enter` | Submit or save |
/// | `Ctrl+D` | Delete the task being edited |
/// | `Esc` | Cancel |
#[must_use]
pub fn key_to_form_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl(key, 'c') {
        return Some(Message::Quit);
    }
    if is_ctrl(key, 'd') {
        return Some(Message::FormDelete);
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(Message::FormCancel),
        KeyCode::Enter => Some(Message::FormSubmit),
        KeyCode::Backspace => Some(Message::FormBackspace),
        KeyCode::Tab | KeyCode::Down => Some(Message::FormNextField),
        KeyCode::BackTab | KeyCode::Up => Some(Message::FormPrevField),
        KeyCode::Left => Some(Message::FormCycleStatus { delta: -1 }),
        KeyCode::Right => Some(Message::FormCycleStatus { delta: 1 }),
        KeyCode::Char(ch) => Some(Message::FormInput { ch }),
        _ => None,
    }
}
