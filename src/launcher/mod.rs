//! Command launching for watch targets.
//!
//! A [`CommandLauncher`] turns a template plus the triggering path into a
//! running, detached process. [`ShellLauncher`] is the production
//! implementation; tests substitute a recorder.

mod error;
mod shell;
pub mod template;

pub use error::LaunchError;
pub use shell::ShellLauncher;

use std::path::Path;

/// A started process. The process is never awaited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessHandle {
    /// OS process id, when the platform reports one.
    pub pid: Option<u32>,
    /// The rendered command line that was started.
    pub command_line: String,
}

/// Starts command lines for the dispatcher.
///
/// Implementations must not block waiting for the started process.
pub trait CommandLauncher: Send + Sync {
    /// Launcher name for logging.
    fn name(&self) -> &str;

    /// Start an already rendered command line.
    fn spawn(&self, command_line: &str) -> Result<ProcessHandle, LaunchError>;

    /// Render `template` for `path` and start it.
    fn launch(&self, template: &str, path: &Path) -> Result<ProcessHandle, LaunchError> {
        let command_line = template::render(template, path);
        crate::debug_event!(self.name(), "rendered", "{command_line}");
        self.spawn(&command_line)
    }
}
