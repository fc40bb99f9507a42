//! Typed access to the persisted UI flags.

use tracing::warn;

use crate::error::Result;
use crate::keys;
use crate::storage::Storage;

/// Reads and writes the sidebar, theme and active-board flags.
///
/// Implemented for every [`Storage`], so the flags are available directly
/// on any storage handle.
///
/// # Examples
///
/// ```
/// use taskboard_store::{MemoryStorage, Storage, UiFlags};
///
/// # fn main() -> taskboard_store::Result<()> {
/// let mut storage = MemoryStorage::new();
/// assert!(!storage.light_theme()?);
///
/// storage.set_light_theme(true)?;
/// assert_eq!(storage.get_item("light-theme")?.as_deref(), Some("enabled"));
///
/// storage.set_active_board("Roadmap")?;
/// assert_eq!(storage.get_item("activeBoard")?.as_deref(), Some("\"Roadmap\""));
/// # Ok(())
/// # }
/// ```
pub trait UiFlags {
    /// Returns `true` only when the sidebar flag is exactly `"true"`.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    fn show_sidebar(&self) -> Result<bool>;

    /// Persists sidebar visibility.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be written.
    fn set_show_sidebar(&mut self, visible: bool) -> Result<()>;

    /// Returns `true` only when the theme flag is exactly `"enabled"`.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    fn light_theme(&self) -> Result<bool>;

    /// Persists the theme selection.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be written.
    fn set_light_theme(&mut self, enabled: bool) -> Result<()>;

    /// Returns the persisted active board name.
    ///
    /// A value that is not a JSON string is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read.
    fn active_board(&self) -> Result<Option<String>>;

    /// Persists the active board name as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be written.
    fn set_active_board(&mut self, name: &str) -> Result<()>;

    /// Forgets the active board.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be written.
    fn clear_active_board(&mut self) -> Result<()>;
}

impl<S: Storage + ?Sized> UiFlags for S {
    fn show_sidebar(&self) -> Result<bool> {
        Ok(self.get_item(keys::SHOW_SIDEBAR)?.as_deref() == Some(keys::TRUE))
    }

    fn set_show_sidebar(&mut self, visible: bool) -> Result<()> {
        let value = if visible { keys::TRUE } else { keys::FALSE };
        self.set_item(keys::SHOW_SIDEBAR, value)
    }

    fn light_theme(&self) -> Result<bool> {
        Ok(self.get_item(keys::LIGHT_THEME)?.as_deref() == Some(keys::ENABLED))
    }

    fn set_light_theme(&mut self, enabled: bool) -> Result<()> {
        let value = if enabled { keys::ENABLED } else { keys::DISABLED };
        self.set_item(keys::LIGHT_THEME, value)
    }

    fn active_board(&self) -> Result<Option<String>> {
        let Some(raw) = self.get_item(keys::ACTIVE_BOARD)? else {
            return Ok(None);
        };
        match serde_json::from_str::<String>(&raw) {
            Ok(name) => Ok(Some(name)),
            Err(e) => {
                warn!(value = %raw, error = %e, "ignoring undecodable active board");
                Ok(None)
            }
        }
    }

    fn set_active_board(&mut self, name: &str) -> Result<()> {
        // Encoding a plain string cannot fail.
        let value = serde_json::Value::String(name.to_string()).to_string();
        self.set_item(keys::ACTIVE_BOARD, &value)
    }

    fn clear_active_board(&mut self) -> Result<()> {
        self.remove_item(keys::ACTIVE_BOARD)
    }
}
