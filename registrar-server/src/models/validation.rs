//! Validation error types and field checks

use std::fmt;

/// Maximum length of `VARCHAR(100)` name columns
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of the building address column
pub const MAX_ADDRESS_LEN: usize = 255;

/// Validation error for incoming payloads
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Value doesn't match the required format (e.g., email)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Body, path or query could not be decoded into the expected shape
    Malformed { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::Malformed { reason } => write!(f, "malformed request: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a required text field against emptiness and a column width.
pub fn require_text(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(())
}

/// Check a required `TEXT` field (no width limit).
pub fn require_present(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "name",
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "name exceeds maximum length of 100 characters"
        );
    }

    #[test]
    fn require_text_rules() {
        assert!(require_text("name", "Databases", MAX_NAME_LEN).is_ok());
        assert!(matches!(
            require_text("name", "   ", MAX_NAME_LEN),
            Err(ValidationError::Empty { field: "name" })
        ));

        // Width is counted in characters, matching VARCHAR semantics
        let cyrillic = "я".repeat(MAX_NAME_LEN);
        assert!(require_text("name", &cyrillic, MAX_NAME_LEN).is_ok());

        let too_long = "a".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(
            require_text("name", &too_long, MAX_NAME_LEN),
            Err(ValidationError::TooLong { max: 100, .. })
        ));
    }

    #[test]
    fn require_present_rejects_blank() {
        assert!(require_present("description", "Intro").is_ok());
        assert!(require_present("description", "\n\t").is_err());
    }
}
