//! Configuration management for the taskboard application.
//!
//! This crate handles loading, validating, and persisting configuration
//! from files, environment variables and defaults.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`storage`]: Where the task data lives
//! - [`logging`]: Log level and log file settings
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from multiple sources with the following priority
//! (highest to lowest):
//!
//! 1. Environment variables (`TASKBOARD_*`)
//! 2. Local config (`./taskboard.json5` or `./taskboard.json`)
//! 3. User config (`~/.config/taskboard/config.json5` or `~/.config/taskboard/config.json`)
//! 4. Built-in defaults
//!
//! # Example File
//!
//! ```json5
//! {
//!   storage: { path: "/home/me/boards.json" },
//!   logging: { level: "debug", file: "/tmp/taskboard.log" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use taskboard_config::Config;
//!
//! # fn example() -> taskboard_config::Result<()> {
//! let config = Config::load()?;
//! println!("Tasks are stored in {}", config.storage.resolve_path()?.display());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod storage;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use logging::LoggingConfig;
pub use storage::StorageConfig;
