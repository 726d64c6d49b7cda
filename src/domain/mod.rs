//! Domain value objects and validators.
//!
//! Type-safe wrappers for the values staff type at the prompt: booking and
//! birth dates, booking times, email addresses and phone numbers. Each has a
//! boolean or `Option` validator for quick checks and a constructor returning
//! [`ValidationError`] for callers that want the reason.

pub mod date;
pub mod email;
pub mod errors;
pub mod input;
pub mod phone;
pub mod time;

pub use date::{
    format_date, normalize_date_separators, parse_date, today, validate_birth_date,
    validate_birth_date_on, validate_booking_date, validate_booking_date_on, BirthDate,
    BirthDatePolicy, BookingDate, DATE_FORMAT,
};
pub use email::{validate_email, EmailAddress};
pub use errors::ValidationError;
pub use input::RawInput;
pub use phone::{validate_phone, PhoneNumber};
pub use time::{validate_time, BookingTime, TIME_FORMAT};
