//! CLI-specific error types.
//!
//! Everything the `check` command can trip over on the way to a verdict:
//! unreadable inputs, unknown definitions, and the validation verdict
//! itself. All of them exit non-zero.

use std::path::Path;

use thiserror::Error;

use crate::document::DefinitionError;
use crate::validation::ValidationError;
use crate::value::RecordError;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error.
#[derive(Debug, Error)]
pub enum CliError {
    /// Record file could not be read
    #[error("failed to read record file '{path}': {source}")]
    RecordUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Record file was not valid JSON
    #[error("record file '{path}' is not valid JSON: {source}")]
    RecordNotJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Record JSON could not be converted to field values
    #[error(transparent)]
    Record(#[from] RecordError),

    /// Definition loading or lookup failed
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    /// The record violated its document definition
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CliError {
    /// Wraps an I/O failure while reading a record file.
    pub fn record_unreadable(path: &Path, source: std::io::Error) -> Self {
        Self::RecordUnreadable {
            path: path.display().to_string(),
            source,
        }
    }

    /// Wraps a JSON parse failure of a record file.
    pub fn record_not_json(path: &Path, source: serde_json::Error) -> Self {
        Self::RecordNotJson {
            path: path.display().to_string(),
            source,
        }
    }
}
