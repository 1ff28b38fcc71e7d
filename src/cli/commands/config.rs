//! Settings loading and display.

use std::path::PathBuf;

use anyhow::bail;

use crate::cli::Cli;
use crate::config::{CONFIG_DIR, CONFIG_FILE, Settings};

/// Load settings from `--config` or the workspace, then apply CLI overrides.
///
/// A broken settings file is reported and defaults are used instead.
pub fn load_settings(cli: &Cli) -> Settings {
    let loaded = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };

    let mut settings = loaded.unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        eprintln!("Using default configuration.");
        Settings::default()
    });

    if cli.recover {
        settings.recovery.enabled = true;
    }

    settings
}

/// Print the effective settings as TOML.
pub fn run_show_config(settings: &Settings) -> anyhow::Result<()> {
    println!("Current Configuration:");
    println!("{}", "=".repeat(50));
    println!("{}", settings.to_toml()?);
    Ok(())
}

/// Write the effective settings to `--config` or `.dirwatch/settings.toml`.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn run_init_config(cli: &Cli, settings: &Settings) -> anyhow::Result<PathBuf> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));

    if config_path.exists() && !cli.force {
        bail!(
            "Configuration file already exists at: {} (use --force to overwrite)",
            config_path.display()
        );
    }

    settings
        .save(&config_path)
        .map_err(|e| anyhow::anyhow!("Cannot write {}: {e}", config_path.display()))?;

    println!("Created configuration file at: {}", config_path.display());
    Ok(config_path)
}
