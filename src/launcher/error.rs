//! Error types for command launching.

use thiserror::Error;

/// Errors from starting a command.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Failed to start '{command}': {reason}")]
    Spawn { command: String, reason: String },

    #[error("Command line is empty")]
    EmptyCommand,
}
