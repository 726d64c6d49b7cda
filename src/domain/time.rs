//! BookingTime value object.

use super::errors::ValidationError;
use super::input::RawInput;
use chrono::NaiveTime;
use serde::{Serialize, Serializer};
use std::fmt;

/// chrono format string of the canonical form.
pub const TIME_FORMAT: &str = "%H:%M";

/// True if `input` is exactly `HH:MM` on a 24-hour clock.
pub fn validate_time<I: RawInput + ?Sized>(input: &I) -> bool {
    BookingTime::parse(input).is_ok()
}

/// A wall-clock time in `HH:MM`, no timezone.
///
/// The input must already be in canonical form: `1:00` and `01:0` are
/// rejected rather than padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookingTime(NaiveTime);

impl BookingTime {
    /// # Errors
    ///
    /// `NotText`, or `InvalidTime` for anything but a canonical `HH:MM`.
    pub fn parse<I: RawInput + ?Sized>(input: &I) -> Result<Self, ValidationError> {
        let text = input.as_text().ok_or(ValidationError::NotText)?;
        let invalid = || ValidationError::InvalidTime(text.to_string());

        let time = NaiveTime::parse_from_str(text, TIME_FORMAT).map_err(|_| invalid())?;
        if time.format(TIME_FORMAT).to_string() != text {
            return Err(invalid());
        }
        Ok(Self(time))
    }

    pub fn as_time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for BookingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

impl Serialize for BookingTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formats() {
        assert!(validate_time("18:00"));
        assert!(validate_time("00:00"));
        assert!(validate_time("23:59"));
        assert!(!validate_time("25:00"));
        assert!(!validate_time("12:60"));
        assert!(!validate_time("1:00"));
        assert!(!validate_time("111:00"));
        assert!(!validate_time("ab:cd"));
        assert!(!validate_time(""));
    }

    #[test]
    fn test_display_round_trips_input() {
        let time = BookingTime::parse("09:05").unwrap();
        assert_eq!(time.to_string(), "09:05");
    }
}
