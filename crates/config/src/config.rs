//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the taskboard application.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::logging::LoggingConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};
use crate::storage::StorageConfig;

/// Environment variable overriding the storage file path.
pub const ENV_STORAGE_PATH: &str = "TASKBOARD_STORAGE_PATH";

/// Environment variable selecting in-memory storage (`1` or `true`).
pub const ENV_IN_MEMORY: &str = "TASKBOARD_IN_MEMORY";

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "TASKBOARD_LOG_LEVEL";

/// Environment variable overriding the log file.
pub const ENV_LOG_FILE: &str = "TASKBOARD_LOG_FILE";

/// The main configuration struct for the taskboard application.
///
/// # Examples
///
/// ```
/// use taskboard_config::{Config, LoggingConfig, StorageConfig};
///
/// // Create a default config
/// let config = Config::default();
/// assert!(config.storage.path.is_none());
///
/// // Create a custom config
/// let config = Config {
///     storage: StorageConfig::at("/tmp/boards.json"),
///     logging: LoggingConfig::default(),
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where tasks and UI flags are persisted.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Log level and destination.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations and environment.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./taskboard.json5` or `./taskboard.json`
    /// 2. User: `~/.config/taskboard/config.json5` or `~/.config/taskboard/config.json`
    ///
    /// If no configuration file is found, starts from the defaults.
    /// `TASKBOARD_*` environment variables are applied last.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read or parsed, or if the final configuration is invalid.
    pub fn load() -> Result<Self> {
        let mut config = match find_config_file() {
            Some(path) => read_config_file(&path)?,
            None => Self::default(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file.
    ///
    /// Environment variables are not consulted.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// configuration is invalid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use taskboard_config::Config;
    ///
    /// # fn example() -> taskboard_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn validate(&self) -> Result<()> {
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Applies `TASKBOARD_*` overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Applies `TASKBOARD_*` overrides using `lookup` to read variables.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_config::Config;
    ///
    /// let mut config = Config::default();
    /// config.apply_env_from(|key| match key {
    ///     "TASKBOARD_LOG_LEVEL" => Some("debug".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(config.logging.level, "debug");
    /// ```
    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(ENV_STORAGE_PATH) {
            self.storage.path = Some(path.into());
        }
        if let Some(flag) = lookup(ENV_IN_MEMORY) {
            self.storage.in_memory = matches!(flag.as_str(), "1" | "true");
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(file) = lookup(ENV_LOG_FILE) {
            self.logging.file = Some(file.into());
        }
    }
}
