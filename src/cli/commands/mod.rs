//! Top-level routines invoked from `main`.

pub mod config;
pub mod watch;

pub use config::{load_settings, run_init_config, run_show_config};
pub use watch::run_watch;
