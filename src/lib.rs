pub mod cli;
pub mod config;
pub mod launcher;
pub mod logging;
pub mod watcher;

pub use config::Settings;
pub use launcher::{CommandLauncher, LaunchError, ProcessHandle, ShellLauncher};
pub use watcher::{
    DispatchOutcome, Dispatcher, FsEvent, FsEventKind, RecoveryPolicy, WatchError, WatchSupervisor,
    WatchTarget,
};
