//! Candidate records and their dynamic field values.
//!
//! A record is an open key-value structure: keys are field names, values are
//! whatever the caller put there. Validation only ever reads a record; it
//! never mutates one.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

use crate::oid::ObjectId;
use crate::time::Timestamp;

/// A dynamically typed field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Explicit null. Counts as present for the required-field check.
    Null,
    /// Boolean
    Bool(bool),
    /// Numeric value
    Number(f64),
    /// UTF-8 text
    String(String),
    /// An already-constructed storage identifier
    ObjectId(ObjectId),
    /// A date value, possibly holding the invalid sentinel
    Date(Timestamp),
}

impl FieldValue {
    /// Returns the value's type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "boolean",
            FieldValue::Number(_) => "number",
            FieldValue::String(_) => "string",
            FieldValue::ObjectId(_) => "object id",
            FieldValue::Date(_) => "date",
        }
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Number(v as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::String(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::String(v)
    }
}

impl From<ObjectId> for FieldValue {
    fn from(v: ObjectId) -> Self {
        FieldValue::ObjectId(v)
    }
}

impl From<Timestamp> for FieldValue {
    fn from(v: Timestamp) -> Self {
        FieldValue::Date(v)
    }
}

/// Errors converting external data into a record.
#[derive(Debug, Clone, Error)]
pub enum RecordError {
    /// Top-level JSON was not an object
    #[error("record must be a JSON object, got {0}")]
    NotAnObject(&'static str),
    /// A field held a JSON shape with no field-value counterpart
    #[error("field '{field}' holds unsupported JSON value of type {json_type}")]
    UnsupportedValue {
        field: String,
        json_type: &'static str,
    },
    /// An `$oid` wrapper carried malformed identifier text
    #[error("field '{field}' holds malformed object id: {source}")]
    MalformedObjectId {
        field: String,
        #[source]
        source: crate::oid::ObjectIdError,
    },
}

/// The candidate record being checked before persistence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, FieldValue>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Builder form of [`insert`](Record::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns the value of a field, if present.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Own-key presence test. A `Null` value still counts as present.
    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields on the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Builds a record from a JSON object.
    ///
    /// Scalars map directly. Two wrapper forms are recognized so records in
    /// files can carry the non-JSON value types:
    /// `{"$oid": "<24 hex chars>"}` becomes an identifier value and
    /// `{"$date": "<text>"}` becomes a date value (unparseable text becomes
    /// the invalid-date sentinel, which the type check then rejects).
    /// Arrays and other nested objects are out of scope and are refused.
    pub fn from_json(json: &Value) -> Result<Self, RecordError> {
        let obj = json
            .as_object()
            .ok_or_else(|| RecordError::NotAnObject(json_type_name(json)))?;

        let mut record = Record::new();
        for (name, value) in obj {
            record
                .fields
                .insert(name.clone(), convert_value(name, value)?);
        }
        Ok(record)
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

fn convert_value(field: &str, value: &Value) -> Result<FieldValue, RecordError> {
    match value {
        Value::Null => Ok(FieldValue::Null),
        Value::Bool(b) => Ok(FieldValue::Bool(*b)),
        Value::Number(n) => n.as_f64().map(FieldValue::Number).ok_or_else(|| {
            RecordError::UnsupportedValue {
                field: field.to_string(),
                json_type: "number",
            }
        }),
        Value::String(s) => Ok(FieldValue::String(s.clone())),
        Value::Object(map) if map.len() == 1 => match map.iter().next() {
            Some((k, Value::String(s))) if k == "$oid" => ObjectId::parse_str(s)
                .map(FieldValue::ObjectId)
                .map_err(|source| RecordError::MalformedObjectId {
                    field: field.to_string(),
                    source,
                }),
            Some((k, Value::String(s))) if k == "$date" => {
                Ok(FieldValue::Date(Timestamp::parse(s)))
            }
            _ => Err(RecordError::UnsupportedValue {
                field: field.to_string(),
                json_type: "object",
            }),
        },
        Value::Array(_) | Value::Object(_) => Err(RecordError::UnsupportedValue {
            field: field.to_string(),
            json_type: json_type_name(value),
        }),
    }
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
