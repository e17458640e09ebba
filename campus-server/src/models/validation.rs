//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Value doesn't parse into the required shape (e.g. a numeric id)
    InvalidFormat { field: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::InvalidFormat { field } => write!(f, "Invalid '{}'", field),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Empty { field: "title" };
        assert_eq!(err.to_string(), "title cannot be empty");
    }

    #[test]
    fn invalid_format_names_the_parameter() {
        let err = ValidationError::InvalidFormat {
            field: "courseId".into(),
        };
        assert_eq!(err.to_string(), "Invalid 'courseId'");
    }
}
