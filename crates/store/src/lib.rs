//! Persistence layer for the taskboard application.
//!
//! Everything the board remembers between sessions lives in a flat
//! string-to-string key-value store, modelled on browser local storage:
//!
//! - [`Storage`]: the key-value trait, with [`MemoryStorage`] and
//!   [`FileStorage`] implementations
//! - [`keys`]: the well-known keys and their value encodings
//! - [`UiFlags`]: typed accessors for the sidebar, theme and active board
//! - [`TaskRepository`]: CRUD over the JSON task array under `tasks`
//! - [`seed_if_empty`]: first-run population with the default dataset
//!
//! # Examples
//!
//! ```
//! use taskboard_protocol::{NewTask, default_tasks};
//! use taskboard_store::{MemoryStorage, TaskRepository, UiFlags, seed_if_empty};
//!
//! # fn main() -> taskboard_store::Result<()> {
//! let mut storage = MemoryStorage::new();
//! assert!(seed_if_empty(&mut storage, &default_tasks())?);
//! assert!(storage.show_sidebar()?);
//!
//! let mut repo = TaskRepository::new(storage);
//! repo.create_task(NewTask::new("Write docs", "Roadmap"))?;
//! assert_eq!(repo.get_tasks()?.len(), 9);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod file;
pub mod flags;
pub mod keys;
pub mod repository;
pub mod seed;
pub mod storage;

pub use error::{Result, StoreError};
pub use file::FileStorage;
pub use flags::UiFlags;
pub use repository::TaskRepository;
pub use seed::seed_if_empty;
pub use storage::{MemoryStorage, Storage};
