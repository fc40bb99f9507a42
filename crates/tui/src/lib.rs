//! Terminal host for the taskboard.
//!
//! This crate paints the board document produced by `taskboard-ui` with
//! Ratatui and turns key presses into clicks on that document.
//!
//! # Overview
//!
//! - [`app`]: the application struct, update, view and run loop
//! - [`view`]: a snapshot of the document for painting
//! - [`cursor`]: card cursor and focused form field
//! - [`event`]: event polling and key mappings
//! - [`widgets`]: sidebar, header, columns, forms and help
//! - [`theme`]: light and dark palettes
//! - [`terminal`]: terminal setup, teardown and panic handling
//!
//! # Example
//!
//! ```no_run
//! use taskboard_store::MemoryStorage;
//! use taskboard_tui::{App, terminal};
//! use taskboard_ui::{bootstrap, dom::Document};
//!
//! fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let controller = bootstrap(MemoryStorage::new(), Document::board_layout())?;
//!
//!     let mut terminal = terminal::setup_terminal()?;
//!     let result = App::new(controller).run(&mut terminal);
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod cursor;
pub mod event;
pub mod layout;
pub mod terminal;
pub mod theme;
pub mod view;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use view::BoardView;
