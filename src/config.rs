//! Configuration module for dirwatch.
//!
//! This module provides a layered configuration system that supports:
//! - Default values
//! - TOML configuration file
//! - Environment variable overrides
//! - CLI argument overrides (applied by the caller)
//!
//! Watch targets are never read from here; they come from the command line.
//!
//! # Environment Variables
//!
//! Environment variables must be prefixed with `DIRWATCH_` and use double
//! underscores to separate nested levels:
//! - `DIRWATCH_RECOVERY__ENABLED=true` sets `recovery.enabled`
//! - `DIRWATCH_RECOVERY__MAX_ATTEMPTS=10` sets `recovery.max_attempts`
//! - `DIRWATCH_LOGGING__DEFAULT=debug` sets `logging.default`

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::watcher::RecoveryPolicy;

/// Directory searched for in the current directory and its ancestors.
pub const CONFIG_DIR: &str = ".dirwatch";
/// Settings file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "settings.toml";
/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "DIRWATCH_";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    /// Version of the configuration schema
    #[serde(default = "default_version")]
    pub version: u32,

    /// Log levels
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Re-enable policy for subscriptions that lose access to their directory
    #[serde(default)]
    pub recovery: RecoveryConfig,

    /// How commands are started
    #[serde(default)]
    pub launcher: LauncherConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Level applied to every target without an override
    #[serde(default = "default_log_level")]
    pub default: String,

    /// Per-target overrides, e.g. `"dirwatch::launcher" = "debug"`
    #[serde(default)]
    pub modules: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RecoveryConfig {
    /// Attempt to re-enable a subscription after its directory became inaccessible
    #[serde(default = "default_false")]
    pub enabled: bool,

    /// Number of re-enable attempts before giving up
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Seconds to wait after each failed attempt
    #[serde(default = "default_retry_interval_secs")]
    pub retry_interval_secs: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct LauncherConfig {
    /// Shell used to run command lines. Uses `sh` (or `cmd` on Windows) when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shell: Option<String>,
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_false() -> bool {
    false
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_max_attempts() -> u32 {
    120
}
fn default_retry_interval_secs() -> u64 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            logging: LoggingConfig::default(),
            recovery: RecoveryConfig::default(),
            launcher: LauncherConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default: default_log_level(),
            modules: BTreeMap::new(),
        }
    }
}

impl Default for RecoveryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_attempts: default_max_attempts(),
            retry_interval_secs: default_retry_interval_secs(),
        }
    }
}

impl RecoveryConfig {
    /// The policy handed to the watch supervisor.
    pub fn policy(&self) -> RecoveryPolicy {
        RecoveryPolicy {
            enabled: self.enabled,
            max_attempts: self.max_attempts,
            retry_interval: Duration::from_secs(self.retry_interval_secs),
        }
    }
}

impl Settings {
    /// Load configuration from all sources, locating the settings file
    /// by walking up from the current directory.
    pub fn load() -> Result<Self, Box<figment::Error>> {
        let config_path = Self::find_workspace_config()
            .unwrap_or_else(|| PathBuf::from(CONFIG_DIR).join(CONFIG_FILE));
        Self::load_from(config_path)
    }

    /// Load configuration from a specific file.
    ///
    /// A missing file is not an error: defaults and environment still apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<figment::Error>> {
        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Toml::file(path.as_ref()))
            // Double underscore separates nested levels, single underscore stays
            .merge(
                Env::prefixed(ENV_PREFIX)
                    .map(|key| key.as_str().to_lowercase().replace("__", ".").into()),
            )
            .extract()
            .map_err(Box::new)
    }

    /// Find `.dirwatch/settings.toml` in the current directory or an ancestor.
    fn find_workspace_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;

        for ancestor in current.ancestors() {
            let config_dir = ancestor.join(CONFIG_DIR);
            if config_dir.is_dir() {
                return Some(config_dir.join(CONFIG_FILE));
            }
        }

        None
    }

    /// Render the settings as pretty TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Save current configuration to file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let parent = path.as_ref().parent().ok_or("Invalid path")?;
        std::fs::create_dir_all(parent)?;

        std::fs::write(path, self.to_toml()?)?;

        Ok(())
    }
}
