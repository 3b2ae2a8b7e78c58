//! Document definitions and their registry.
//!
//! A document definition names a record shape and bundles the per-type
//! field declarations for it. Definitions live as one JSON file per
//! document in a definitions directory and are loaded into an in-memory
//! registry at startup. A definition's `validate` is the full
//! pre-persistence pass: required fields first, then types.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::{
    validate_data_types, validate_required_fields, Declarations, ValidationResult,
};
use crate::value::Record;

/// Result type for definition loading and lookup.
pub type DefinitionResult<T> = Result<T, DefinitionError>;

/// Errors around definition files and the registry.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// Definitions directory could not be read
    #[error("failed to read definitions directory '{path}': {source}")]
    DirectoryUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// A definition file could not be read or parsed
    #[error("malformed document definition '{path}': {reason}")]
    Malformed { path: String, reason: String },
    /// Two definitions claimed the same document name
    #[error("duplicate document definition '{0}'")]
    Duplicate(String),
    /// Lookup of an unregistered document name
    #[error("document definition '{0}' not found")]
    NotFound(String),
}

/// A named document definition: which fields must exist and what types the
/// declared fields carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document name, unique within a registry
    pub name: String,
    /// Per-type field declarations
    #[serde(default)]
    pub declarations: Declarations,
}

impl Document {
    /// Creates a definition from a name and declarations.
    pub fn new(name: impl Into<String>, declarations: Declarations) -> Self {
        Self {
            name: name.into(),
            declarations,
        }
    }

    /// Runs the full validation pass against a candidate record.
    ///
    /// Required fields are checked first, then declared types; the first
    /// violation aborts. A clean pass returns `Ok(())` and the record is
    /// fit to persist.
    pub fn validate(&self, record: &Record) -> ValidationResult<()> {
        validate_required_fields(record, &self.declarations.required)?;
        validate_data_types(record, &self.declarations)
    }
}

/// Directory-backed registry of document definitions.
pub struct DocumentRegistry {
    /// Directory containing `<name>.json` definition files
    definitions_dir: PathBuf,
    /// Loaded definitions indexed by document name
    documents: HashMap<String, Document>,
}

impl DocumentRegistry {
    /// Creates an empty registry rooted at the given directory.
    pub fn new(definitions_dir: impl Into<PathBuf>) -> Self {
        Self {
            definitions_dir: definitions_dir.into(),
            documents: HashMap::new(),
        }
    }

    /// Returns the definitions directory path.
    pub fn definitions_dir(&self) -> &Path {
        &self.definitions_dir
    }

    /// Loads every `*.json` definition file from the directory.
    ///
    /// A missing directory is treated as an empty registry. Malformed files
    /// and duplicate names abort the load.
    pub fn load_all(&mut self) -> DefinitionResult<()> {
        if !self.definitions_dir.exists() {
            return Ok(());
        }

        let entries = fs::read_dir(&self.definitions_dir).map_err(|source| {
            DefinitionError::DirectoryUnreadable {
                path: self.definitions_dir.display().to_string(),
                source,
            }
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| DefinitionError::DirectoryUnreadable {
                path: self.definitions_dir.display().to_string(),
                source,
            })?;

            let path = entry.path();
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            self.load_definition_file(&path)?;
        }

        Ok(())
    }

    fn load_definition_file(&mut self, path: &Path) -> DefinitionResult<()> {
        let content = fs::read_to_string(path).map_err(|e| DefinitionError::Malformed {
            path: path.display().to_string(),
            reason: format!("failed to read file: {}", e),
        })?;

        let document: Document =
            serde_json::from_str(&content).map_err(|e| DefinitionError::Malformed {
                path: path.display().to_string(),
                reason: format!("invalid JSON: {}", e),
            })?;

        self.register(document)
    }

    /// Registers a definition directly.
    pub fn register(&mut self, document: Document) -> DefinitionResult<()> {
        if self.documents.contains_key(&document.name) {
            return Err(DefinitionError::Duplicate(document.name));
        }
        self.documents.insert(document.name.clone(), document);
        Ok(())
    }

    /// Looks up a definition by name.
    pub fn get(&self, name: &str) -> Option<&Document> {
        self.documents.get(name)
    }

    /// Looks up a definition by name, failing when unregistered.
    pub fn require(&self, name: &str) -> DefinitionResult<&Document> {
        self.get(name)
            .ok_or_else(|| DefinitionError::NotFound(name.to_string()))
    }

    /// Names of the loaded definitions, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    /// Number of loaded definitions.
    pub fn count(&self) -> usize {
        self.documents.len()
    }
}
