//! Maps file system events to the command template configured for them.

use std::sync::Arc;

use super::event::{FsEvent, FsEventKind};
use super::target::WatchTarget;
use crate::launcher::{CommandLauncher, LaunchError, ProcessHandle};

/// Result of dispatching one event.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// No template is configured for this kind of event.
    Skipped,
    /// The command was started.
    Launched(ProcessHandle),
    /// The command could not be started. Already logged.
    Failed(LaunchError),
}

/// Resolves templates and hands them to a launcher.
///
/// Runs on whichever thread the notification backend delivers events on.
/// Launch failures are logged and reported as [`DispatchOutcome::Failed`];
/// they never propagate further.
#[derive(Clone)]
pub struct Dispatcher {
    launcher: Arc<dyn CommandLauncher>,
}

impl Dispatcher {
    pub fn new(launcher: Arc<dyn CommandLauncher>) -> Self {
        Self { launcher }
    }

    pub fn dispatch(&self, event: &FsEvent, target: &WatchTarget) -> DispatchOutcome {
        crate::debug_event!("dispatch", event.kind, "{}", event.path.display());

        let Some(template) = target.template_for(event.kind) else {
            return DispatchOutcome::Skipped;
        };

        match (event.kind, &event.old_path) {
            (FsEventKind::Renamed, Some(old)) => crate::log_event!(
                "dispatch",
                "file renamed",
                "{} -> {}",
                old.display(),
                event.path.display()
            ),
            (kind, _) => crate::log_event!("dispatch", kind, "{}", event.path.display()),
        }

        match self.launcher.launch(template, &event.path) {
            Ok(handle) => DispatchOutcome::Launched(handle),
            Err(e) => {
                tracing::error!("[dispatch] {e}");
                DispatchOutcome::Failed(e)
            }
        }
    }
}
