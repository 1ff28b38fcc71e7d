//! The watch routine: register every target, then block.

use std::sync::Arc;

use tokio::runtime::Handle;

use crate::cli::Cli;
use crate::config::Settings;
use crate::launcher::ShellLauncher;
use crate::watcher::{Dispatcher, WatchSupervisor};

/// Build the supervisor for the CLI targets.
///
/// Registration failures are logged by the supervisor and do not stop the
/// remaining targets.
pub fn build_supervisor(cli: &Cli, settings: &Settings, runtime: Handle) -> WatchSupervisor {
    let launcher = ShellLauncher::from_config(runtime.clone(), &settings.launcher);
    crate::debug_event!("launcher", "shell", "{}", launcher.shell());

    let dispatcher = Dispatcher::new(Arc::new(launcher));
    let mut supervisor = WatchSupervisor::new(dispatcher, settings.recovery.policy(), runtime);

    let targets = cli.watch_targets();
    if targets.is_empty() {
        tracing::warn!("[watcher] no path given, nothing to watch");
    }

    let active = supervisor.register_all(targets);
    crate::log_event!("watcher", "started", "{active} active subscription(s)");

    supervisor
}

/// Watch until the process is terminated externally.
pub async fn run_watch(cli: &Cli, settings: &Settings) -> anyhow::Result<()> {
    let _supervisor = build_supervisor(cli, settings, Handle::current());

    // Subscriptions run on backend threads; keep them alive forever.
    std::future::pending::<()>().await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_build_supervisor_from_cli() {
        let dir = TempDir::new().unwrap();
        let cli = Cli::try_parse_from([
            "dirwatch",
            dir.path().to_str().unwrap(),
            "*.txt",
            "--oncreated",
            "echo {{filename}}",
        ])
        .unwrap();

        let supervisor = build_supervisor(&cli, &Settings::default(), Handle::current());

        assert_eq!(supervisor.active_count(), 1);
        assert_eq!(
            supervisor.target(0).and_then(|t| t.on_created.as_deref()),
            Some("echo {{filename}}")
        );
    }

    #[tokio::test]
    async fn test_no_path_builds_empty_supervisor() {
        let cli = Cli::try_parse_from(["dirwatch"]).unwrap();
        let supervisor = build_supervisor(&cli, &Settings::default(), Handle::current());
        assert!(supervisor.is_empty());
    }

    #[tokio::test]
    async fn test_recover_flag_reaches_policy() {
        let cli = Cli::try_parse_from(["dirwatch", "--recover"]).unwrap();
        let mut settings = Settings::default();
        settings.recovery.enabled = cli.recover;

        let supervisor = build_supervisor(&cli, &settings, Handle::current());
        assert!(supervisor.policy().enabled);
    }
}
