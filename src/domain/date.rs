//! Calendar date value objects: booking dates and birth dates.
//!
//! Dates are typed by staff as `DD-MM-YYYY`, but `.`, `,` and `/` are accepted as
//! separators and single-digit days and months are allowed. The canonical form is
//! always zero-padded `DD-MM-YYYY`.

use super::errors::ValidationError;
use super::input::RawInput;
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// chrono format string of the canonical form.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

// Backslash is not a separator; `10\10\2030` stays as typed and fails to parse.
static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[/,.]").expect("separator pattern is valid"));

static DAY_MONTH_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})-(\d{1,2})-(\d{4})$").expect("date pattern is valid")
});

/// Today's date on the local clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Render a date in the canonical `DD-MM-YYYY` form.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Replace `.`, `,` and `/` with `-`. Non-text input yields `None`.
pub fn normalize_date_separators<I: RawInput + ?Sized>(input: &I) -> Option<String> {
    let text = input.as_text()?;
    Some(SEPARATORS.replace_all(text, "-").into_owned())
}

/// Parse `D-M-YYYY` / `DD-MM-YYYY` (after separator normalization) into a real
/// calendar date.
pub fn parse_date<I: RawInput + ?Sized>(input: &I) -> Option<NaiveDate> {
    let normalized = normalize_date_separators(input)?;
    let caps = DAY_MONTH_YEAR.captures(&normalized)?;

    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Canonical booking date if `input` is a real date not before today.
pub fn validate_booking_date<I: RawInput + ?Sized>(input: &I) -> Option<String> {
    validate_booking_date_on(input, today())
}

/// [`validate_booking_date`] against an explicit "today".
pub fn validate_booking_date_on<I: RawInput + ?Sized>(
    input: &I,
    today: NaiveDate,
) -> Option<String> {
    BookingDate::parse_on(input, today)
        .ok()
        .map(|date| date.to_string())
}

/// Canonical birth date if `input` is a real date accepted by `policy`.
pub fn validate_birth_date<I: RawInput + ?Sized>(
    input: &I,
    policy: BirthDatePolicy,
) -> Option<String> {
    validate_birth_date_on(input, policy, today())
}

/// [`validate_birth_date`] against an explicit "today".
pub fn validate_birth_date_on<I: RawInput + ?Sized>(
    input: &I,
    policy: BirthDatePolicy,
    today: NaiveDate,
) -> Option<String> {
    BirthDate::parse_on(input, policy, today)
        .ok()
        .map(|date| date.to_string())
}

fn parse_or_reject<I: RawInput + ?Sized>(input: &I) -> Result<NaiveDate, ValidationError> {
    let text = input.as_text().ok_or(ValidationError::NotText)?;
    parse_date(text).ok_or_else(|| ValidationError::InvalidDate(text.to_string()))
}

/// A date a booking can be made for: today or later.
///
/// # Example
///
/// ```
/// use booking_desk::domain::BookingDate;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
/// let date = BookingDate::parse_on("5/1/2030", today).unwrap();
/// assert_eq!(date.to_string(), "05-01-2030");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookingDate(NaiveDate);

impl BookingDate {
    /// Parse against the local clock.
    pub fn parse<I: RawInput + ?Sized>(input: &I) -> Result<Self, ValidationError> {
        Self::parse_on(input, today())
    }

    /// Parse against an explicit "today".
    ///
    /// # Errors
    ///
    /// `NotText`, `InvalidDate`, or `DateInPast` when the date is strictly before
    /// `today`.
    pub fn parse_on<I: RawInput + ?Sized>(
        input: &I,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let date = parse_or_reject(input)?;
        if date < today {
            return Err(ValidationError::DateInPast(format_date(date)));
        }
        Ok(Self(date))
    }

    pub fn as_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for BookingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_date(self.0))
    }
}

impl Serialize for BookingDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Whether a birth date may lie in the future.
///
/// Some deployments enter customers' birthdays before the year is known and
/// use placeholder future years; others want a hard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BirthDatePolicy {
    /// Any real calendar date.
    AnyDate,

    /// Today or earlier.
    #[default]
    NotInFuture,
}

impl FromStr for BirthDatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" => Ok(Self::AnyDate),
            "not-in-future" => Ok(Self::NotInFuture),
            other => Err(format!(
                "expected 'any' or 'not-in-future', got: {}",
                other
            )),
        }
    }
}

/// A customer's birth date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Parse against the local clock.
    pub fn parse<I: RawInput + ?Sized>(
        input: &I,
        policy: BirthDatePolicy,
    ) -> Result<Self, ValidationError> {
        Self::parse_on(input, policy, today())
    }

    /// Parse against an explicit "today".
    pub fn parse_on<I: RawInput + ?Sized>(
        input: &I,
        policy: BirthDatePolicy,
        today: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let date = parse_or_reject(input)?;
        if policy == BirthDatePolicy::NotInFuture && date > today {
            return Err(ValidationError::DateInFuture(format_date(date)));
        }
        Ok(Self(date))
    }

    pub fn as_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_date(self.0))
    }
}

impl Serialize for BirthDate {
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

    fn day(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_normalize_separators() {
        assert_eq!(normalize_date_separators("10/10/2022").unwrap(), "10-10-2022");
        assert_eq!(normalize_date_separators("10.10.2022").unwrap(), "10-10-2022");
        assert_eq!(normalize_date_separators("10,10,2022").unwrap(), "10-10-2022");
        assert_eq!(normalize_date_separators("string").unwrap(), "string");
    }

    #[test]
    fn test_backslash_is_not_a_separator() {
        assert_eq!(
            normalize_date_separators("10\\10\\2022").unwrap(),
            "10\\10\\2022"
        );
        assert!(parse_date("10\\10\\2022").is_none());
    }

    #[test]
    fn test_parse_date_patterns() {
        assert_eq!(parse_date("10-10-2022"), Some(day(10, 10, 2022)));
        assert_eq!(parse_date("1-10-2022"), Some(day(1, 10, 2022)));
        assert_eq!(parse_date("01-10-2022"), Some(day(1, 10, 2022)));
        assert_eq!(parse_date("10/10/2022"), Some(day(10, 10, 2022)));
        assert_eq!(parse_date("30-02-2022"), None);
        assert_eq!(parse_date("10-20-2022"), None);
        assert_eq!(parse_date("10-10-22"), None);
        assert_eq!(parse_date("string"), None);
        assert_eq!(parse_date(" 10-10-2022"), None);
    }

    #[test]
    fn test_booking_date_today_or_later() {
        let today = day(17, 10, 2026);
        assert_eq!(
            validate_booking_date_on("17.10.2026", today).unwrap(),
            "17-10-2026"
        );
        assert_eq!(
            validate_booking_date_on("1/1/2027", today).unwrap(),
            "01-01-2027"
        );
        assert!(validate_booking_date_on("16-10-2026", today).is_none());
        assert!(matches!(
            BookingDate::parse_on("16-10-2026", today),
            Err(ValidationError::DateInPast(_))
        ));
    }

    #[test]
    fn test_single_digit_forms_share_canonical_form() {
        let today = day(1, 1, 2030);
        assert_eq!(
            validate_booking_date_on("1-10-2030", today),
            validate_booking_date_on("01-10-2030", today)
        );
    }

    #[test]
    fn test_booking_date_is_idempotent() {
        let today = day(17, 10, 2026);
        for raw in ["3/4/2027", "03.04.2027", "3,4,2027", "17-10-2026"] {
            let once = validate_booking_date_on(raw, today).unwrap();
            let twice = validate_booking_date_on(once.as_str(), today).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_birth_date_policies() {
        let today = day(17, 10, 2026);
        assert_eq!(
            validate_birth_date_on("10/10/2000", BirthDatePolicy::NotInFuture, today).unwrap(),
            "10-10-2000"
        );
        assert!(validate_birth_date_on("10.10.2027", BirthDatePolicy::NotInFuture, today).is_none());
        assert_eq!(
            validate_birth_date_on("10.10.2027", BirthDatePolicy::AnyDate, today).unwrap(),
            "10-10-2027"
        );
        assert!(validate_birth_date_on("31-04-2000", BirthDatePolicy::AnyDate, today).is_none());
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("any".parse::<BirthDatePolicy>(), Ok(BirthDatePolicy::AnyDate));
        assert_eq!(
            "Not-In-Future".parse::<BirthDatePolicy>(),
            Ok(BirthDatePolicy::NotInFuture)
        );
        assert!("sometimes".parse::<BirthDatePolicy>().is_err());
    }

    #[test]
    fn test_serializes_canonical_form() {
        let date = BookingDate::parse_on("2/3/2030", day(1, 1, 2030)).unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"02-03-2030\"");
    }
}
