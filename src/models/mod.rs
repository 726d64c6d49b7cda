//! Data models for the booking desk.
//!
//! [`Record`] is the untyped row as the store sees it; [`Booking`],
//! [`Customer`] and [`Staff`] are typed views the workflows work with.

pub mod booking;
pub mod customer;
pub mod record;
pub mod staff;

pub use booking::Booking;
pub use customer::Customer;
pub use record::{Record, RecordKey, Sheet};
pub use staff::Staff;
