//! Error types for the watch supervisor.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from watcher operations.
///
/// None of these terminate the process: each is logged where it occurs.
/// Launch failures have their own type, [`crate::launcher::LaunchError`].
#[derive(Error, Debug)]
pub enum WatchError {
    #[error("Cannot watch path {path}: {reason}")]
    RegistrationFailed { path: PathBuf, reason: String },

    #[error("Notification buffer overflow on {path}, events were dropped")]
    NotificationOverflow { path: PathBuf },

    #[error("Watched directory {path} not accessible: {reason}")]
    AccessLost { path: PathBuf, reason: String },

    #[error("Invalid filter pattern '{pattern}': {reason}")]
    InvalidFilter { pattern: String, reason: String },

    #[error("Gave up re-enabling {path} after {attempts} attempts")]
    RecoveryExhausted { path: PathBuf, attempts: u32 },

    #[error("Unknown subscription {id}")]
    UnknownSubscription { id: usize },
}

impl From<notify::Error> for WatchError {
    fn from(e: notify::Error) -> Self {
        let path = e.paths.first().cloned().unwrap_or_default();
        WatchError::RegistrationFailed {
            path,
            reason: e.to_string(),
        }
    }
}
