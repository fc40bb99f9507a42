//! Well-known storage keys and their value encodings.

/// JSON array of every task.
pub const TASKS: &str = "tasks";

/// Sidebar visibility, stored as [`TRUE`] or [`FALSE`].
pub const SHOW_SIDEBAR: &str = "showSideBar";

/// Name of the active board, stored as a JSON string.
pub const ACTIVE_BOARD: &str = "activeBoard";

/// Theme selection, stored as [`ENABLED`] or [`DISABLED`].
pub const LIGHT_THEME: &str = "light-theme";

/// Stored form of a visible sidebar.
pub const TRUE: &str = "true";

/// Stored form of a hidden sidebar.
pub const FALSE: &str = "false";

/// Stored form of the light theme.
pub const ENABLED: &str = "enabled";

/// Stored form of the dark theme.
pub const DISABLED: &str = "disabled";
