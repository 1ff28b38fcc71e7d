//! Command-line interface for dirwatch.
//!
//! Provides argument parsing and the top-level run routines used by `main`.

pub mod args;
pub mod commands;

pub use args::Cli;
