//! The board user interface: document, render layer and controller.
//!
//! This crate draws the task board into an in-memory element tree and
//! reacts to clicks on that tree. It knows nothing about terminals or
//! browsers; a host displays the [`dom::Document`] and forwards clicks.
//!
//! # Overview
//!
//! - [`dom`]: the element tree
//! - [`layout`]: the page skeleton and its element ids
//! - [`render`]: drawing boards, columns and cards; applying UI flags
//! - [`state`]: explicit interaction state
//! - [`event`]: events the controller reacts to
//! - [`controller`]: event handling, persistence and re-rendering
//! - [`bootstrap()`]: the start-up sequence
//!
//! # Examples
//!
//! ```
//! use taskboard_store::MemoryStorage;
//! use taskboard_ui::bootstrap;
//! use taskboard_ui::dom::Document;
//! use taskboard_ui::layout::classes;
//!
//! # fn main() -> taskboard_ui::Result<()> {
//! let controller = bootstrap(MemoryStorage::new(), Document::board_layout())?;
//! let doc = controller.document();
//! assert_eq!(doc.query_by_class(classes::BOARD_BTN).len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod bootstrap;
pub mod controller;
pub mod dom;
pub mod error;
pub mod event;
pub mod layout;
pub mod render;
pub mod state;

// Re-export primary types at crate root for convenience
pub use bootstrap::{bootstrap, bootstrap_with};
pub use controller::{Controller, DEFAULT_BOARD_NAME};
pub use error::{Result, UiError};
pub use event::UiEvent;
pub use state::{AppState, ModalState};
