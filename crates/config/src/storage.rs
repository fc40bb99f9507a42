//! Storage location configuration.
//!
//! This module provides the [`StorageConfig`] type, which decides where the
//! key-value storage file holding tasks and UI flags lives.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::persistence::default_storage_path;

/// Configuration for the persistent key-value storage.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use taskboard_config::StorageConfig;
///
/// let config = StorageConfig::at("/tmp/boards.json");
/// assert_eq!(config.resolve_path().unwrap(), PathBuf::from("/tmp/boards.json"));
/// assert!(!config.in_memory);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the storage file. Defaults to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Keep everything in memory; nothing survives the session.
    #[serde(default)]
    pub in_memory: bool,
}

impl StorageConfig {
    /// Creates a configuration pointing at a specific file.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            in_memory: false,
        }
    }

    /// Creates an in-memory configuration.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            path: None,
            in_memory: true,
        }
    }

    /// Returns the storage file path, falling back to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if no path is configured and the platform data
    /// directory cannot be determined.
    pub fn resolve_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => default_storage_path(),
        }
    }

    /// Validates the storage configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStoragePath`] if an explicit path is empty.
    pub fn validate(&self) -> Result<()> {
        if self.path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
            return Err(ConfigError::EmptyStoragePath);
        }
        Ok(())
    }
}
