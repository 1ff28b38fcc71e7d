//! CLI argument parsing using clap.

use clap::{
    Parser,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::path::PathBuf;

use crate::watcher::WatchTarget;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Watch a directory and run commands when files change
#[derive(Parser, Debug)]
#[command(
    name = "dirwatch",
    version = env!("CARGO_PKG_VERSION"),
    about = "Watch a directory and run commands when files change",
    long_about = "Watch a directory tree and launch a shell command for every created, \
                  changed, deleted or renamed file. In command templates, %1 and \
                  {{filename}} expand to the quoted path of the file.",
    after_help = concat!(
        "Examples:\n",
        "  dirwatch ./inbox \"*.csv|*.tsv\" --oncreated \"import-tool {{filename}}\"\n",
        "  dirwatch /var/log \"*.log\" --onchanged \"logger -t dirwatch %1\"",
    ),
    next_line_help = true,
    styles = clap_cargo_style()
)]
pub struct Cli {
    /// Directory to watch (recursively). Nothing is watched when omitted.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// File name filter, e.g. "*.txt|*.log". All files when omitted.
    #[arg(value_name = "FILTER")]
    pub filter: Option<String>,

    /// Command template run when a file is created
    #[arg(long = "oncreated", value_name = "COMMAND")]
    pub on_created: Option<String>,

    /// Command template run when a file is changed
    #[arg(long = "onchanged", value_name = "COMMAND")]
    pub on_changed: Option<String>,

    /// Command template run when a file is deleted
    #[arg(long = "ondeleted", value_name = "COMMAND")]
    pub on_deleted: Option<String>,

    /// Command template run when a file is renamed
    #[arg(long = "onrenamed", value_name = "COMMAND")]
    pub on_renamed: Option<String>,

    /// Path to custom settings.toml file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Re-enable the watch when the directory becomes inaccessible
    #[arg(long)]
    pub recover: bool,

    /// Print the effective settings and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write the effective settings to the config file and exit
    #[arg(long)]
    pub init_config: bool,

    /// Overwrite an existing file with --init-config
    #[arg(long, requires = "init_config")]
    pub force: bool,
}

impl Cli {
    /// Watch targets described by the arguments. Empty when no path was given.
    pub fn watch_targets(&self) -> Vec<WatchTarget> {
        let Some(path) = &self.path else {
            return Vec::new();
        };

        vec![WatchTarget {
            path: path.clone(),
            filter: self.filter.clone().unwrap_or_default(),
            on_created: self.on_created.clone(),
            on_changed: self.on_changed.clone(),
            on_deleted: self.on_deleted.clone(),
            on_renamed: self.on_renamed.clone(),
        }]
    }
}
