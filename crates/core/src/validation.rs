// Field-level validation for domain records
//
// Records are checked once, at the ingestion boundary, before they reach the
// store or the aggregation engine. Everything downstream assumes valid input.

use thiserror::Error;

/// Lowest semester number accepted on any record.
pub const MIN_SEMESTER: i32 = 1;

/// Highest semester number accepted on any record.
pub const MAX_SEMESTER: i32 = 12;

/// The single error kind raised when a record violates the domain model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A numeric field is outside its allowed range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A participation status string is not one of the two allowed literals.
    #[error("status must be one of \"Attended\", \"Missed\", got {0:?}")]
    InvalidStatus(String),

    /// The record could not be decoded at all (missing field, wrong type, ...).
    #[error("malformed record: {0}")]
    Malformed(String),
}

impl ValidationError {
    /// Create a malformed-record error
    pub fn malformed(msg: impl Into<String>) -> Self {
        ValidationError::Malformed(msg.into())
    }
}

/// Validate that a semester field lies in `[MIN_SEMESTER, MAX_SEMESTER]`.
pub fn validate_semester(field: &'static str, value: i32) -> Result<(), ValidationError> {
    if !(MIN_SEMESTER..=MAX_SEMESTER).contains(&value) {
        tracing::warn!(
            "{} out of range: {} (allowed: {}..={})",
            field,
            value,
            MIN_SEMESTER,
            MAX_SEMESTER
        );
        return Err(ValidationError::OutOfRange {
            field,
            value: i64::from(value),
            min: i64::from(MIN_SEMESTER),
            max: i64::from(MAX_SEMESTER),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_semester_bounds() {
        assert!(validate_semester("semester", MIN_SEMESTER).is_ok());
        assert!(validate_semester("semester", MAX_SEMESTER).is_ok());
        assert!(validate_semester("semester", 6).is_ok());
    }

    #[test]
    fn test_invalid_semester() {
        assert_eq!(
            validate_semester("semester", 0),
            Err(ValidationError::OutOfRange {
                field: "semester",
                value: 0,
                min: 1,
                max: 12,
            })
        );
        assert!(validate_semester("current_semester", 13).is_err());
        assert!(validate_semester("current_semester", -4).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = validate_semester("semester", 13).unwrap_err();
        assert_eq!(err.to_string(), "semester must be between 1 and 12, got 13");

        let err = ValidationError::InvalidStatus("Late".to_string());
        assert_eq!(
            err.to_string(),
            "status must be one of \"Attended\", \"Missed\", got \"Late\""
        );
    }
}
