//! Staff model: one row of the `staff` sheet.

use super::record::{Record, RecordKey};
use serde::Serialize;

/// A member of staff who can log in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Staff {
    pub name: String,

    #[serde(skip_serializing)]
    pub password: String,

    /// Contact phone number
    pub contact: String,
}

impl Staff {
    pub const NAME: &'static str = "NAME";
    pub const PASSWORD: &'static str = "PASSWORD";
    pub const CONTACT: &'static str = "CONTACT";

    /// Column order of the sheet.
    pub const COLUMNS: [&'static str; 3] = [Self::NAME, Self::PASSWORD, Self::CONTACT];

    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.get(Self::NAME).to_string(),
            password: record.get(Self::PASSWORD).to_string(),
            contact: record.get(Self::CONTACT).to_string(),
        }
    }

    pub fn to_record(&self) -> Record {
        Record::new()
            .with(Self::NAME, self.name.as_str())
            .with(Self::PASSWORD, self.password.as_str())
            .with(Self::CONTACT, self.contact.as_str())
    }

    pub fn key(&self) -> RecordKey {
        RecordKey::by_name(self.name.as_str())
    }

    pub fn check_password(&self, password: &str) -> bool {
        self.password == password
    }
}
