//! Widgets painting the board view.
//!
//! Each widget is a plain function drawing part of a [`BoardView`] into a
//! buffer, so it can be tested against a bare [`Buffer`].
//!
//! - [`sidebar`]: board list
//! - [`header`]: active board name and hints
//! - [`column`]: status columns and task cards
//! - [`form`]: add and edit modals
//! - [`help`]: key binding overlay
//!
//! [`BoardView`]: crate::view::BoardView
//! [`Buffer`]: ratatui::buffer::Buffer

pub mod column;
pub mod form;
pub mod header;
pub mod help;
pub mod sidebar;

pub use column::{render_card, render_column, render_columns};
pub use form::render_form;
pub use header::render_header;
pub use help::render_help_overlay;
pub use sidebar::render_sidebar;
