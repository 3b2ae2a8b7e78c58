//! Pre-persistence validation subsystem.
//!
//! Two stateless checks run against a candidate record before it is written,
//! in order: the required-field check, then the type check. Either aborts
//! the write by returning the first violation found.
//!
//! # Design principles
//!
//! - Validation happens before anything is persisted
//! - The record is read-only input; nothing is mutated
//! - Fail-fast: first violation wins, no error accumulation
//! - Deterministic: outcome is a pure function of record and declarations
//! - No coercion: a numeric string is not a number

mod email;
mod errors;
mod required;
mod types;
mod validator;

pub use email::is_valid_email;
pub use errors::{ValidationError, ValidationResult};
pub use required::validate_required_fields;
pub use types::{Declarations, FieldKind};
pub use validator::validate_data_types;
