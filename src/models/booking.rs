//! Booking model: one row of the `bookings` sheet.

use super::record::{Record, RecordKey};
use crate::domain::{parse_date, BookingDate, BookingTime, TIME_FORMAT};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A table booking or appointment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Canonical `DD-MM-YYYY`
    pub date: String,

    /// `HH:MM`
    pub time: String,

    /// Customer name
    pub name: String,

    /// Party size as stored
    pub people: String,

    /// Staff member who took the booking
    pub created_by: String,

    /// "yes" once confirmed with the customer
    pub confirmed: String,

    /// "yes" once cancelled
    pub cancelled: String,
}

impl Booking {
    pub const DATE: &'static str = "DATE";
    pub const TIME: &'static str = "TIME";
    pub const NAME: &'static str = "NAME";
    pub const PEOPLE: &'static str = "PEOPLE";
    pub const CREATED: &'static str = "CREATED";
    pub const CONF: &'static str = "CONF";
    pub const CANC: &'static str = "CANC";

    /// Column order of the sheet.
    pub const COLUMNS: [&'static str; 7] = [
        Self::DATE,
        Self::TIME,
        Self::NAME,
        Self::PEOPLE,
        Self::CREATED,
        Self::CONF,
        Self::CANC,
    ];

    /// A fresh, unconfirmed booking.
    pub fn new(
        date: BookingDate,
        time: BookingTime,
        name: impl Into<String>,
        people: u32,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            date: date.to_string(),
            time: time.to_string(),
            name: name.into(),
            people: people.to_string(),
            created_by: created_by.into(),
            confirmed: "-".to_string(),
            cancelled: String::new(),
        }
    }

    pub fn from_record(record: &Record) -> Self {
        Self {
            date: record.get(Self::DATE).to_string(),
            time: record.get(Self::TIME).to_string(),
            name: record.get(Self::NAME).to_string(),
            people: record.get(Self::PEOPLE).to_string(),
            created_by: record.get(Self::CREATED).to_string(),
            confirmed: record.get(Self::CONF).to_string(),
            cancelled: record.get(Self::CANC).to_string(),
        }
    }

    pub fn to_record(&self) -> Record {
        Record::new()
            .with(Self::DATE, self.date.as_str())
            .with(Self::TIME, self.time.as_str())
            .with(Self::NAME, self.name.as_str())
            .with(Self::PEOPLE, self.people.as_str())
            .with(Self::CREATED, self.created_by.as_str())
            .with(Self::CONF, self.confirmed.as_str())
            .with(Self::CANC, self.cancelled.as_str())
    }

    pub fn key(&self) -> RecordKey {
        RecordKey::by_name_and_date(self.name.as_str(), self.date.as_str())
    }

    /// The booking's date, if the stored cell is a real date.
    pub fn day(&self) -> Option<NaiveDate> {
        parse_date(self.date.as_str())
    }

    pub fn start_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.time, TIME_FORMAT).ok()
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed == "yes"
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled == "yes"
    }

    /// Today or later and not cancelled. Rows with unreadable dates are never
    /// active.
    pub fn is_active(&self, today: NaiveDate) -> bool {
        !self.is_cancelled() && self.day().is_some_and(|day| day >= today)
    }

    pub fn status_symbol(&self) -> &'static str {
        if self.is_confirmed() {
            "\\/"
        } else {
            "--"
        }
    }
}

/// Active bookings only.
pub fn active(bookings: Vec<Booking>, today: NaiveDate) -> Vec<Booking> {
    bookings
        .into_iter()
        .filter(|booking| booking.is_active(today))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32, m: u32, y: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn booking(date: &str, cancelled: &str) -> Booking {
        Booking {
            date: date.to_string(),
            time: "18:00".to_string(),
            name: "Ann".to_string(),
            cancelled: cancelled.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_booking_row() {
        let today = day(1, 1, 2030);
        let date = BookingDate::parse_on("2-1-2030", today).unwrap();
        let time = BookingTime::parse("19:30").unwrap();
        let booking = Booking::new(date, time, "Ann", 4, "Bob");

        let header: Vec<String> = Booking::COLUMNS.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            booking.to_record().to_row(&header),
            vec!["02-01-2030", "19:30", "Ann", "4", "Bob", "-", ""]
        );
    }

    #[test]
    fn test_active_filter() {
        let today = day(10, 5, 2030);
        let bookings = vec![
            booking("09-05-2030", ""),
            booking("10-05-2030", ""),
            booking("11-05-2030", "yes"),
            booking("garbage", ""),
        ];
        let active = active(bookings, today);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].date, "10-05-2030");
    }

    #[test]
    fn test_status_symbol() {
        let mut b = booking("10-05-2030", "");
        assert_eq!(b.status_symbol(), "--");
        b.confirmed = "yes".to_string();
        assert_eq!(b.status_symbol(), "\\/");
    }

    #[test]
    fn test_record_round_trip_keeps_key() {
        let b = booking("10-05-2030", "");
        let restored = Booking::from_record(&b.to_record());
        assert_eq!(restored, b);
        assert!(b.key().matches(&b.to_record()));
    }
}
