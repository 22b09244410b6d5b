//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a valid `DD.MM.YYYY` date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Enter your name"),
            Self::InvalidPhone(phone) => write!(f, "Enter a valid phone number: {}", phone),
            Self::InvalidBirthday(date) => {
                write!(f, "Invalid date format. Use DD.MM.YYYY: {}", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::EmptyName.to_string(), "Enter your name");
        assert!(ValidationError::InvalidPhone("12".to_string())
            .to_string()
            .starts_with("Enter a valid phone number"));
        assert!(ValidationError::InvalidBirthday("1990-01-01".to_string())
            .to_string()
            .contains("DD.MM.YYYY"));
    }
}
