//! Layout measurements shared by the widgets and the app.

/// Height of the header bar in rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Width of the sidebar when it is shown.
pub const SIDEBAR_WIDTH: u16 = 24;

/// Height of a task card: one title row between two border rows.
pub const CARD_HEIGHT: u16 = 3;

/// Minimum terminal height for drawing the board.
///
/// Below this a "terminal too small" notice is shown instead.
pub const MIN_HEIGHT: u16 = 10;

/// Minimum height for drawing the header as well.
///
/// Between [`MIN_HEIGHT`] and this value the header is dropped to give the
/// columns room.
pub const MIN_HEIGHT_WITH_HEADER: u16 = MIN_HEIGHT + HEADER_HEIGHT;

/// Minimum terminal width: three readable columns.
pub const MIN_WIDTH: u16 = 45;

/// Width of the add and edit forms.
pub const FORM_WIDTH: u16 = 52;

/// Height of the add and edit forms.
pub const FORM_HEIGHT: u16 = 14;
