//! Shared protocol types for the taskboard application.
//!
//! This crate defines the core types used across all taskboard components:
//! task records and their identifiers, the fixed set of status columns, the
//! derived board index, the default dataset seeded on first run, and the
//! messages produced by the terminal front end.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`task`]: Task identifiers, statuses, and the `Task` record
//! - [`board`]: Board derivation and active-board resolution
//! - [`seed`]: The default dataset written to empty storage
//! - [`message`]: Terminal UI messages
//! - [`error`]: Error types for protocol operations
//!
//! # Examples
//!
//! Deriving boards from a task list:
//!
//! ```
//! use taskboard_protocol::{NewTask, Task, TaskId, TaskStatus, derive_boards};
//!
//! let tasks = vec![
//!     Task::from_new(TaskId::new("1"), NewTask::new("Write docs", "Docs")),
//!     Task::from_new(TaskId::new("2"), NewTask::new("Ship it", "Release")),
//!     Task::from_new(
//!         TaskId::new("3"),
//!         NewTask::new("Review", "Docs").with_status(TaskStatus::Doing),
//!     ),
//! ];
//!
//! assert_eq!(derive_boards(&tasks), vec!["Docs", "Release"]);
//! ```

pub mod board;
pub mod error;
pub mod message;
pub mod seed;
pub mod task;

// Re-export primary types at crate root for convenience
pub use board::{derive_boards, resolve_active_board, tasks_in_column};
pub use error::{ProtocolError, Result};
pub use message::Message;
pub use seed::default_tasks;
pub use task::{NewTask, Task, TaskId, TaskStatus, TaskUpdate, decode_tasks, encode_tasks};
