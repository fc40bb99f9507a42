//! First-run population of empty storage.

use taskboard_protocol::{Task, encode_tasks};
use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::flags::UiFlags;
use crate::keys;
use crate::storage::Storage;

/// Writes `dataset` and a visible sidebar when no tasks are stored yet.
///
/// Storage that already has a `tasks` key is left untouched, even when the
/// stored list is empty. Returns whether seeding happened.
///
/// # Errors
///
/// Returns an error if storage cannot be read or written.
///
/// # Examples
///
/// ```
/// use taskboard_protocol::default_tasks;
/// use taskboard_store::{MemoryStorage, seed_if_empty};
///
/// # fn main() -> taskboard_store::Result<()> {
/// let mut storage = MemoryStorage::new();
/// assert!(seed_if_empty(&mut storage, &default_tasks())?);
/// assert!(!seed_if_empty(&mut storage, &default_tasks())?);
/// # Ok(())
/// # }
/// ```
pub fn seed_if_empty<S: Storage + ?Sized>(storage: &mut S, dataset: &[Task]) -> Result<bool> {
    if storage.get_item(keys::TASKS)?.is_some() {
        debug!("data already exists in storage, skipping seed");
        return Ok(false);
    }

    let encoded = encode_tasks(dataset).map_err(StoreError::Encode)?;
    storage.set_item(keys::TASKS, &encoded)?;
    storage.set_show_sidebar(true)?;

    info!(tasks = dataset.len(), "seeded storage with default data");
    Ok(true)
}
