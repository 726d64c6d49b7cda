//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The input was not a string at all (number, boolean, null, collection).
    NotText,

    /// The provided date is not a real `DD-MM-YYYY` calendar date.
    InvalidDate(String),

    /// The provided booking date lies before today.
    DateInPast(String),

    /// The provided birth date lies after today.
    DateInFuture(String),

    /// The provided time is not a valid `HH:MM` wall-clock time.
    InvalidTime(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotText => write!(f, "Input is not text"),
            Self::InvalidDate(date) => {
                write!(f, "Invalid date: '{}'. Expected format dd-mm-yyyy", date)
            }
            Self::DateInPast(date) => write!(f, "Date is in the past: '{}'", date),
            Self::DateInFuture(date) => write!(f, "Date is in the future: '{}'", date),
            Self::InvalidTime(time) => write!(f, "Invalid time: '{}'. Expected format hh:mm", time),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: '{}'", email),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number: '{}'. Start with + or 00, digits, spaces, -().",
                phone
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_value() {
        let err = ValidationError::InvalidDate("30-02-2030".to_string());
        assert!(err.to_string().contains("30-02-2030"));
        assert!(err.to_string().contains("dd-mm-yyyy"));

        let err = ValidationError::InvalidTime("25:00".to_string());
        assert!(err.to_string().contains("hh:mm"));
    }
}
