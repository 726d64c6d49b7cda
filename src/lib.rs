//! Booking Desk - a command-line booking manager for small service businesses.
//!
//! Staff log in, keep customer records, and take, confirm, reschedule and
//! cancel bookings. Everything persistent lives in a spreadsheet reached over
//! its HTTP values API.
//!
//! # Architecture
//!
//! - **domain**: Validators and value objects for dates, times, emails and phones
//! - **navigation**: Step navigation (back one level / home) over a line console
//! - **models**: Records and the booking, customer and staff views over them
//! - **store**: The record store trait, the spreadsheet client, retry prompts
//! - **matching**: "Did you mean" suggestions for mistyped names
//! - **workflows**: The interactive session: login, menus, bookings, statistics
//! - **metrics**: Counters of store traffic
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod metrics;
pub mod models;
pub mod navigation;
pub mod store;
pub mod workflows;

// Re-export commonly used types
pub use config::Config;
pub use domain::{BirthDate, BirthDatePolicy, BookingDate, BookingTime, EmailAddress, PhoneNumber};
pub use error::{ConfigError, SessionError, StoreError};
pub use matching::NameMatcher;
pub use metrics::{Metrics, MetricsSummary, RequestTimer};
pub use models::{Booking, Customer, Record, RecordKey, Sheet, Staff};
pub use navigation::{Console, NavHint, Navigation, Navigator, StdConsole, Step, StepOutcome};
pub use store::{RecordStore, SheetsClient};
pub use workflows::Session;
