//! Error types for the taskboard-protocol crate.
//!
//! This module defines the errors that can occur when encoding, decoding or
//! validating protocol types.

use thiserror::Error;

/// Errors that can occur during protocol operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Failed to serialize a protocol type to JSON.
    #[error("failed to serialize to JSON: {0}")]
    SerializationFailed(#[source] serde_json::Error),

    /// Failed to deserialize a protocol type from JSON.
    #[error("failed to deserialize from JSON: {0}")]
    DeserializationFailed(#[source] serde_json::Error),

    /// A task title was empty or blank.
    #[error("invalid task title: title cannot be empty")]
    InvalidTaskTitle,
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ProtocolError::InvalidTaskTitle;
        assert_eq!(err.to_string(), "invalid task title: title cannot be empty");

        let source = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = ProtocolError::DeserializationFailed(source);
        assert!(err.to_string().starts_with("failed to deserialize from JSON"));
    }
}
