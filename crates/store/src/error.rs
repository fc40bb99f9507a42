//! Error types for storage operations.

use std::path::PathBuf;

use taskboard_protocol::ProtocolError;

/// Errors that can occur while reading or writing persisted state.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The storage file exists but could not be read.
    #[error("failed to read storage file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The storage file could not be written.
    #[error("failed to write storage file at {path}: {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The storage file is not a JSON object of string values.
    #[error("storage file at {path} is corrupt: {source}")]
    CorruptFile {
        /// The offending file.
        path: PathBuf,
        /// The parse error.
        #[source]
        source: serde_json::Error,
    },

    /// The storage area could not be serialized.
    #[error("failed to serialize storage: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The value under the `tasks` key is not a valid task array.
    #[error("stored tasks could not be decoded: {0}")]
    Decode(#[source] ProtocolError),

    /// The task list could not be encoded.
    #[error("tasks could not be encoded: {0}")]
    Encode(#[source] ProtocolError),
}

/// A specialized Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;
