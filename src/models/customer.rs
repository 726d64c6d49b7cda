//! Customer model: one row of the `customers` sheet.

use super::record::{Record, RecordKey};
use crate::domain::{parse_date, BirthDate, EmailAddress, PhoneNumber};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A customer of the business.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub email: String,

    /// Birth date as stored, `DD-MM-YYYY`
    pub birth_date: String,

    /// Bookings ever made
    pub bookings: u32,

    /// Bookings cancelled
    pub cancelled: u32,
}

impl Customer {
    pub const NAME: &'static str = "NAME";
    pub const PHONE: &'static str = "PHONE";
    pub const EMAIL: &'static str = "EMAIL";
    pub const BIRTH_DATE: &'static str = "BD";
    pub const BOOKINGS: &'static str = "NUM OF BOOKINGS";
    pub const CANCELLED: &'static str = "CANCELLED";

    /// Column order of the sheet.
    pub const COLUMNS: [&'static str; 6] = [
        Self::NAME,
        Self::PHONE,
        Self::EMAIL,
        Self::BIRTH_DATE,
        Self::BOOKINGS,
        Self::CANCELLED,
    ];

    /// A new customer with no booking history.
    pub fn new(
        name: impl Into<String>,
        phone: &PhoneNumber,
        email: &EmailAddress,
        birth_date: BirthDate,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.to_string(),
            email: email.to_string(),
            birth_date: birth_date.to_string(),
            bookings: 0,
            cancelled: 0,
        }
    }

    /// Counters that do not parse are read as zero, with a warning.
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.get(Self::NAME).to_string(),
            phone: record.get(Self::PHONE).to_string(),
            email: record.get(Self::EMAIL).to_string(),
            birth_date: record.get(Self::BIRTH_DATE).to_string(),
            bookings: counter(record, Self::BOOKINGS),
            cancelled: counter(record, Self::CANCELLED),
        }
    }

    pub fn to_record(&self) -> Record {
        Record::new()
            .with(Self::NAME, self.name.as_str())
            .with(Self::PHONE, self.phone.as_str())
            .with(Self::EMAIL, self.email.as_str())
            .with(Self::BIRTH_DATE, self.birth_date.as_str())
            .with(Self::BOOKINGS, self.bookings.to_string())
            .with(Self::CANCELLED, self.cancelled.to_string())
    }

    pub fn key(&self) -> RecordKey {
        RecordKey::by_name(self.name.as_str())
    }

    pub fn birthday(&self) -> Option<NaiveDate> {
        parse_date(self.birth_date.as_str())
    }
}

/// A counter cell. Whole numbers typed as decimals (`3.0`) still count.
fn counter(record: &Record, field: &str) -> u32 {
    let cell = record.get(field).trim();
    if let Ok(count) = cell.parse::<u32>() {
        return count;
    }
    match cell.parse::<f64>() {
        Ok(value) if value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) => {
            value as u32
        }
        _ => {
            warn!(
                "Unreadable {} '{}' for customer '{}', counting it as 0",
                field,
                cell,
                record.get(Customer::NAME)
            );
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BirthDatePolicy;

    #[test]
    fn test_new_customer_starts_without_history() {
        let phone = PhoneNumber::new("+44 20 7123 4567").unwrap();
        let email = EmailAddress::new("ann@example.com").unwrap();
        let birth = BirthDate::parse("1/2/1990", BirthDatePolicy::AnyDate).unwrap();

        let customer = Customer::new("Ann", &phone, &email, birth);
        let record = customer.to_record();

        assert_eq!(record.get("BD"), "01-02-1990");
        assert_eq!(record.get("NUM OF BOOKINGS"), "0");
        assert_eq!(record.get("CANCELLED"), "0");
    }

    #[test]
    fn test_from_record_tolerates_bad_counters() {
        let record = Record::new()
            .with("NAME", "Ann")
            .with("NUM OF BOOKINGS", " 7 ")
            .with("CANCELLED", "n/a");
        let customer = Customer::from_record(&record);
        assert_eq!(customer.bookings, 7);
        assert_eq!(customer.cancelled, 0);
    }

    #[test]
    fn test_decimal_counters_keep_history() {
        let record = Record::new()
            .with("NAME", "Ann")
            .with("NUM OF BOOKINGS", "3.0")
            .with("CANCELLED", "1.5");
        let customer = Customer::from_record(&record);
        assert_eq!(customer.bookings, 3);
        assert_eq!(customer.cancelled, 0);
    }
}
