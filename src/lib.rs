//! docguard - strict pre-persistence document validation
//!
//! Before a record is persisted, two stateless checks run against it: the
//! required-field check ([`validation::validate_required_fields`]) and the
//! type check ([`validation::validate_data_types`]). A [`Document`]
//! definition bundles the declarations for one record shape and runs both
//! in order via [`Document::validate`].
//!
//! ```
//! use docguard::{Declarations, Document, Record};
//!
//! let articles = Document::new(
//!     "articles",
//!     Declarations::new()
//!         .required_field("name")
//!         .text_field("name")
//!         .number_field("price"),
//! );
//!
//! let record = Record::new().with("name", "intro").with("price", 9.5);
//! assert!(articles.validate(&record).is_ok());
//!
//! let record = Record::new().with("name", "intro").with("price", "9.5");
//! assert!(articles.validate(&record).is_err());
//! ```

pub mod cli;
pub mod document;
pub mod oid;
pub mod time;
pub mod validation;
pub mod value;

pub use document::{DefinitionError, Document, DocumentRegistry};
pub use oid::ObjectId;
pub use time::Timestamp;
pub use validation::{
    validate_data_types, validate_required_fields, Declarations, FieldKind, ValidationError,
    ValidationResult,
};
pub use value::{FieldValue, Record, RecordError};
