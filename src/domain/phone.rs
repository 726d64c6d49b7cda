//! PhoneNumber value object.

use super::errors::ValidationError;
use super::input::RawInput;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+|00)[1-9][0-9 \-().]{7,16}$").expect("phone pattern is valid")
});

/// True if `input` is an international phone number.
pub fn validate_phone<I: RawInput + ?Sized>(input: &I) -> bool {
    input.as_text().is_some_and(PhoneNumber::is_valid)
}

/// A type-safe wrapper for international phone numbers.
///
/// # Validation Rules
///
/// - Must start with `+` or `00`
/// - The first digit after the prefix is 1-9
/// - Followed by 7 to 16 digits, spaces, hyphens, parentheses or periods
///
/// # Example
///
/// ```
/// use booking_desk::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1 234567").unwrap();
/// assert_eq!(phone.as_str(), "+1 234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    fn is_valid(phone: &str) -> bool {
        PHONE.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
