//! Required-field presence check.

use crate::value::Record;

use super::errors::{ValidationError, ValidationResult};

/// Checks that every required field exists on the record.
///
/// Presence is structural: a field set to `Null` still counts as present.
/// Names are matched case-sensitively against the record's own keys. The
/// list is walked in declared order and the first missing field is
/// reported; an empty list is a no-op. Pure inspection, no side effects.
pub fn validate_required_fields(record: &Record, required: &[String]) -> ValidationResult<()> {
    for field in required {
        if !record.contains_field(field) {
            return Err(ValidationError::missing_required(field.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::FieldValue;

    fn required(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_list_is_noop() {
        let record = Record::new();
        assert!(validate_required_fields(&record, &[]).is_ok());
    }

    #[test]
    fn test_empty_record_fails_first_required() {
        let record = Record::new();
        let err = validate_required_fields(&record, &required(&["name"])).unwrap_err();
        assert_eq!(err, ValidationError::missing_required("name"));
    }

    #[test]
    fn test_first_missing_field_in_declared_order_is_reported() {
        let record = Record::new().with("b", 1.0);
        let err =
            validate_required_fields(&record, &required(&["a", "b", "c"])).unwrap_err();
        assert_eq!(err.field(), "a");

        // Both a and c missing, a declared first.
        let err =
            validate_required_fields(&record, &required(&["c", "a"])).unwrap_err();
        assert_eq!(err.field(), "c");
    }

    #[test]
    fn test_null_value_counts_as_present() {
        let record = Record::new().with("name", FieldValue::Null);
        assert!(validate_required_fields(&record, &required(&["name"])).is_ok());
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let record = Record::new().with("Name", "x");
        assert!(validate_required_fields(&record, &required(&["name"])).is_err());
    }

    #[test]
    fn test_all_present_passes_regardless_of_values() {
        let record = Record::new()
            .with("name", "Alice")
            .with("price", FieldValue::Null)
            .with("active", false);
        assert!(
            validate_required_fields(&record, &required(&["name", "price", "active"])).is_ok()
        );
    }
}
