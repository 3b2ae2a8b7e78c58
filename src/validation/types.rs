//! Semantic type labels and field declarations.
//!
//! A document definition declares, per semantic type, an ordered list of
//! field names. The validator trusts these lists as supplied: it does not
//! cross-check that a field appears in only one list.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The semantic types a field can be declared as.
///
/// These are validation rule categories, not host-language types: `Email`
/// and `ObjectId` fields hold strings at runtime but carry extra format
/// rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Numeric primitive
    Number,
    /// Text primitive
    String,
    /// Boolean primitive
    Boolean,
    /// Storage-layer identifier (24-character hex form or constructed id)
    ObjectId,
    /// Email address text
    Email,
    /// Date value holding a real calendar instant
    Date,
}

impl FieldKind {
    /// The expected-type label carried in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Number => "Number",
            FieldKind::String => "String",
            FieldKind::Boolean => "Boolean",
            FieldKind::ObjectId => "ObjectId",
            FieldKind::Email => "Email",
            FieldKind::Date => "Date",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-type field-name lists for one document definition.
///
/// Each list is ordered: order decides which field's violation is reported
/// first when several fields are bad. Absent lists deserialize as empty and
/// are skipped entirely during dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Declarations {
    /// Fields that must be present (any value, including null)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    /// Fields declared numeric
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub number_fields: Vec<String>,
    /// Fields declared text
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub text_fields: Vec<String>,
    /// Fields declared boolean
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub boolean_fields: Vec<String>,
    /// Fields declared storage identifiers
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub object_id_fields: Vec<String>,
    /// Fields declared email addresses
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub email_fields: Vec<String>,
    /// Fields declared dates
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub date_fields: Vec<String>,
}

impl Declarations {
    /// Creates an empty declaration set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a required field.
    pub fn required_field(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    /// Declares a numeric field.
    pub fn number_field(mut self, name: impl Into<String>) -> Self {
        self.number_fields.push(name.into());
        self
    }

    /// Declares a text field.
    pub fn text_field(mut self, name: impl Into<String>) -> Self {
        self.text_fields.push(name.into());
        self
    }

    /// Declares a boolean field.
    pub fn boolean_field(mut self, name: impl Into<String>) -> Self {
        self.boolean_fields.push(name.into());
        self
    }

    /// Declares a storage-identifier field.
    pub fn object_id_field(mut self, name: impl Into<String>) -> Self {
        self.object_id_fields.push(name.into());
        self
    }

    /// Declares an email field.
    pub fn email_field(mut self, name: impl Into<String>) -> Self {
        self.email_fields.push(name.into());
        self
    }

    /// Declares a date field.
    pub fn date_field(mut self, name: impl Into<String>) -> Self {
        self.date_fields.push(name.into());
        self
    }
}
