//! CLI command implementations.

use std::fs;
use std::path::Path;

use crate::document::DocumentRegistry;
use crate::value::Record;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parses arguments and dispatches to the requested command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatches a parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Check {
            definitions,
            document,
            record,
        } => check(&definitions, &document, &record),
        Command::List { definitions } => list(&definitions),
    }
}

/// Validates a JSON record file against a named document definition.
///
/// Prints `ok` on a clean pass; any violation propagates and the process
/// exits non-zero.
pub fn check(definitions_dir: &Path, document_name: &str, record_path: &Path) -> CliResult<()> {
    let mut registry = DocumentRegistry::new(definitions_dir);
    registry.load_all()?;
    let document = registry.require(document_name)?;

    let content = fs::read_to_string(record_path)
        .map_err(|e| CliError::record_unreadable(record_path, e))?;
    let json: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| CliError::record_not_json(record_path, e))?;
    let record = Record::from_json(&json)?;

    document.validate(&record)?;
    println!("ok");
    Ok(())
}

/// Prints the names of the definitions found in a directory.
pub fn list(definitions_dir: &Path) -> CliResult<()> {
    let mut registry = DocumentRegistry::new(definitions_dir);
    registry.load_all()?;

    let mut names: Vec<&str> = registry.names().collect();
    names.sort_unstable();
    for name in names {
        println!("{}", name);
    }
    Ok(())
}
