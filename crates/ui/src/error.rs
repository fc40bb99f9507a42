//! Error types for the board UI.

use taskboard_store::StoreError;

/// Errors raised while handling board events.
///
/// Missing document elements are not errors: they are logged and the
/// affected render step is skipped.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// Persisted state could not be read or written.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// A specialized Result type for UI operations.
pub type Result<T> = std::result::Result<T, UiError>;
