//! CLI module for docguard
//!
//! Provides the command-line interface:
//! - check: validate a JSON record against a document definition
//! - list: show the definitions in a directory

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check, list, run, run_command};
pub use errors::{CliError, CliResult};
