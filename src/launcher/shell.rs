//! Launcher that hands command lines to the platform shell.

use std::process::Stdio;

use tokio::process::Command;
use tokio::runtime::Handle;

use super::{CommandLauncher, LaunchError, ProcessHandle};
use crate::config::LauncherConfig;

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

#[cfg(windows)]
const DEFAULT_SHELL: &str = "cmd";
#[cfg(not(windows))]
const DEFAULT_SHELL: &str = "sh";

/// Runs command lines through `sh -c` (or `cmd /C` on Windows).
///
/// Started processes are detached: stdin is closed, output is inherited and
/// nothing waits for the exit status. Children are spawned on the tokio
/// runtime so they are reaped in the background once they exit.
pub struct ShellLauncher {
    shell: String,
    runtime: Handle,
}

impl ShellLauncher {
    /// Create a launcher using the platform default shell.
    pub fn new(runtime: Handle) -> Self {
        Self::with_shell(runtime, DEFAULT_SHELL)
    }

    /// Create a launcher using a specific shell executable.
    pub fn with_shell(runtime: Handle, shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            runtime,
        }
    }

    /// Create a launcher from the `[launcher]` settings.
    pub fn from_config(runtime: Handle, config: &LauncherConfig) -> Self {
        match &config.shell {
            Some(shell) if !shell.trim().is_empty() => Self::with_shell(runtime, shell.trim()),
            _ => Self::new(runtime),
        }
    }

    /// The shell executable in use.
    pub fn shell(&self) -> &str {
        &self.shell
    }

    /// Flag that makes the shell execute its next argument.
    fn command_flag(&self) -> &'static str {
        let name = std::path::Path::new(&self.shell)
            .file_stem()
            .map(|s| s.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        if name == "cmd" { "/C" } else { "-c" }
    }

    fn build_command(&self, command_line: &str) -> Command {
        let mut command = Command::new(&self.shell);
        command.arg(self.command_flag());

        // cmd.exe does its own quote parsing, so pass the line through untouched
        #[cfg(windows)]
        {
            command.raw_arg(command_line);
            command.creation_flags(CREATE_NO_WINDOW);
        }
        #[cfg(not(windows))]
        command.arg(command_line);

        command.stdin(Stdio::null());
        command
    }
}

impl CommandLauncher for ShellLauncher {
    fn name(&self) -> &str {
        "launcher"
    }

    fn spawn(&self, command_line: &str) -> Result<ProcessHandle, LaunchError> {
        if command_line.trim().is_empty() {
            return Err(LaunchError::EmptyCommand);
        }

        crate::log_event!(self.name(), "starting", "{command_line}");

        let _guard = self.runtime.enter();
        let child = self
            .build_command(command_line)
            .spawn()
            .map_err(|e| LaunchError::Spawn {
                command: command_line.to_string(),
                reason: e.to_string(),
            })?;

        // Dropping the child detaches it; the runtime reaps it on exit.
        Ok(ProcessHandle {
            pid: child.id(),
            command_line: command_line.to_string(),
        })
    }
}
