//! Validation error types

use std::fmt;

/// Validation error for client-supplied fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is missing or empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Field doesn't parse as the expected shape
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },

    /// Numeric field outside its accepted range
    OutOfRange { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} is required", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::OutOfRange { field, value } => {
                write!(f, "{} out of range: '{}'", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "username",
            max: 64,
        };
        assert_eq!(
            err.to_string(),
            "username exceeds maximum length of 64 characters"
        );

        let err = ValidationError::Empty { field: "description" };
        assert_eq!(err.to_string(), "description is required");
    }
}
