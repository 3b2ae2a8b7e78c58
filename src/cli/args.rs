//! CLI argument definitions using clap
//!
//! Commands:
//! - docguard check --definitions <dir> --document <name> <record.json>
//! - docguard list --definitions <dir>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// docguard - strict pre-persistence document validation
#[derive(Parser, Debug)]
#[command(name = "docguard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a JSON record against a document definition
    Check {
        /// Directory of document definition files
        #[arg(long, default_value = "./definitions")]
        definitions: PathBuf,

        /// Name of the document definition to validate against
        #[arg(long)]
        document: String,

        /// Path to the JSON record to validate
        record: PathBuf,
    },

    /// List the document definitions in a directory
    List {
        /// Directory of document definition files
        #[arg(long, default_value = "./definitions")]
        definitions: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
