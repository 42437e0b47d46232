//! gridedit - in-memory CSV table editing
//!
//! This crate provides the core types and logic for a tabular data editor
//! implementing the Elm Architecture pattern: delimited text is parsed into
//! a grid, edited through messages, and serialized back to text.

pub mod commands;
pub mod config;
pub mod config_paths;
pub mod csv;
pub mod error;
pub mod messages;
pub mod session;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use crate::commands::Cmd;
pub use crate::config::EditorConfig;
pub use crate::csv::{Grid, GridError, Table};
pub use crate::error::Error;
pub use crate::messages::GridMsg;
pub use crate::session::{LoadReport, Mode, Session};
