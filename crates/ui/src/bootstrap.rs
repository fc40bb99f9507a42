//! Application start-up.

use taskboard_protocol::{Task, default_tasks};
use taskboard_store::{Storage, seed_if_empty};
use tracing::{info, instrument};

use crate::controller::Controller;
use crate::dom::Document;
use crate::error::Result;

/// Starts the board on `storage`, drawing into `document`.
///
/// Seeds the default dataset into empty storage, then hands over to
/// [`bootstrap_with`].
///
/// # Errors
///
/// Returns an error if storage cannot be read or written.
///
/// # Examples
///
/// ```
/// use taskboard_store::MemoryStorage;
/// use taskboard_ui::bootstrap;
/// use taskboard_ui::dom::Document;
///
/// # fn main() -> taskboard_ui::Result<()> {
/// let controller = bootstrap(MemoryStorage::new(), Document::board_layout())?;
/// assert_eq!(controller.state().active_board.as_deref(), Some("Launch Career"));
/// assert!(controller.listeners_attached());
/// # Ok(())
/// # }
/// ```
pub fn bootstrap<S: Storage>(storage: S, document: Document) -> Result<Controller<S>> {
    bootstrap_with(storage, document, &default_tasks())
}

/// Starts the board, seeding `dataset` into empty storage.
///
/// The sequence is: seed, restore the sidebar and theme flags, resolve and
/// persist the active board, render the header, board list and columns,
/// then attach the event listeners.
///
/// # Errors
///
/// Returns an error if storage cannot be read or written.
#[instrument(skip_all, fields(dataset = dataset.len()))]
pub fn bootstrap_with<S: Storage>(
    mut storage: S,
    document: Document,
    dataset: &[Task],
) -> Result<Controller<S>> {
    seed_if_empty(&mut storage, dataset)?;

    let mut controller = Controller::new(storage, document);
    controller.restore_flags()?;
    controller.restore_active_board()?;
    controller.refresh()?;
    controller.attach_listeners();

    info!(
        active_board = controller.state().active_board.as_deref().unwrap_or_default(),
        "board ready"
    );
    Ok(controller)
}
