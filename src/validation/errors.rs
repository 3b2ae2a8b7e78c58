//! Validation error taxonomy.
//!
//! Two kinds, both terminal to the in-progress validation: a required field
//! is missing, or a present field has the wrong type. Errors are never
//! caught or recovered internally; they propagate to the persistence
//! pipeline, which aborts the write.

use thiserror::Error;

use super::types::FieldKind;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// A validation failure. First violation wins; no further fields are checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A declared-required field is absent from the record
    #[error("Missing required field: '{field}'")]
    MissingRequiredField {
        /// The missing field's name
        field: String,
    },

    /// A present field's value does not match its declared type
    #[error("Field '{field}' must be of type '{expected}'")]
    InvalidFieldType {
        /// The declared type the field failed to satisfy
        expected: FieldKind,
        /// The offending field's name
        field: String,
    },
}

impl ValidationError {
    /// Creates a missing-required-field error.
    pub fn missing_required(field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
        }
    }

    /// Creates an invalid-field-type error.
    pub fn invalid_type(expected: FieldKind, field: impl Into<String>) -> Self {
        Self::InvalidFieldType {
            expected,
            field: field.into(),
        }
    }

    /// The offending field's name.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingRequiredField { field } => field,
            Self::InvalidFieldType { field, .. } => field,
        }
    }
}
