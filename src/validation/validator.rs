//! Type checks for declared fields.
//!
//! Categories are dispatched in a fixed order (number, text, boolean,
//! object id, email, date), so when a record violates several categories
//! the earlier category's violation is the one reported. Within a category,
//! fields are checked in declared order. Only fields actually present on
//! the record are checked — required-ness is the required-field checker's
//! job, not this one's.

use crate::oid::ObjectId;
use crate::value::{FieldValue, Record};

use super::email::is_valid_email;
use super::errors::{ValidationError, ValidationResult};
use super::types::{Declarations, FieldKind};

/// Checks every declared, present field against its category's rule.
///
/// Fail-fast: the first violating field anywhere aborts the invocation.
/// Empty categories are skipped entirely. Stateless and deterministic.
pub fn validate_data_types(record: &Record, declarations: &Declarations) -> ValidationResult<()> {
    if !declarations.number_fields.is_empty() {
        validate_numbers(record, &declarations.number_fields)?;
    }
    if !declarations.text_fields.is_empty() {
        validate_strings(record, &declarations.text_fields)?;
    }
    if !declarations.boolean_fields.is_empty() {
        validate_booleans(record, &declarations.boolean_fields)?;
    }
    if !declarations.object_id_fields.is_empty() {
        validate_object_ids(record, &declarations.object_id_fields)?;
    }
    if !declarations.email_fields.is_empty() {
        validate_emails(record, &declarations.email_fields)?;
    }
    if !declarations.date_fields.is_empty() {
        validate_dates(record, &declarations.date_fields)?;
    }
    Ok(())
}

fn validate_numbers(record: &Record, fields: &[String]) -> ValidationResult<()> {
    for field in fields {
        match record.get(field) {
            None | Some(FieldValue::Number(_)) => {}
            Some(_) => return Err(ValidationError::invalid_type(FieldKind::Number, field.clone())),
        }
    }
    Ok(())
}

fn validate_strings(record: &Record, fields: &[String]) -> ValidationResult<()> {
    for field in fields {
        match record.get(field) {
            None | Some(FieldValue::String(_)) => {}
            Some(_) => return Err(ValidationError::invalid_type(FieldKind::String, field.clone())),
        }
    }
    Ok(())
}

fn validate_booleans(record: &Record, fields: &[String]) -> ValidationResult<()> {
    for field in fields {
        match record.get(field) {
            None | Some(FieldValue::Bool(_)) => {}
            Some(_) => {
                return Err(ValidationError::invalid_type(FieldKind::Boolean, field.clone()))
            }
        }
    }
    Ok(())
}

/// An identifier field passes when it holds an already-constructed id, or
/// text that satisfies the storage layer's own validity predicate. The
/// encoding rules live in [`crate::oid`], not here.
fn validate_object_ids(record: &Record, fields: &[String]) -> ValidationResult<()> {
    for field in fields {
        match record.get(field) {
            None | Some(FieldValue::ObjectId(_)) => {}
            Some(FieldValue::String(s)) if ObjectId::is_valid(s) => {}
            Some(_) => {
                return Err(ValidationError::invalid_type(FieldKind::ObjectId, field.clone()))
            }
        }
    }
    Ok(())
}

/// Email values are expected to be text; anything else fails with the email
/// violation rather than panicking on a type confusion.
fn validate_emails(record: &Record, fields: &[String]) -> ValidationResult<()> {
    for field in fields {
        match record.get(field) {
            None => {}
            Some(FieldValue::String(s)) if is_valid_email(s) => {}
            Some(_) => return Err(ValidationError::invalid_type(FieldKind::Email, field.clone())),
        }
    }
    Ok(())
}

/// A date field must hold a date value AND that value must be a real
/// calendar instant; the invalid-date sentinel is the right type with the
/// wrong contents and still fails.
fn validate_dates(record: &Record, fields: &[String]) -> ValidationResult<()> {
    for field in fields {
        match record.get(field) {
            None => {}
            Some(FieldValue::Date(ts)) if ts.is_valid() => {}
            Some(_) => return Err(ValidationError::invalid_type(FieldKind::Date, field.clone())),
        }
    }
    Ok(())
}
