//! Spreadsheet records: one row of a sheet keyed by its header.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The sheets the desk reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sheet {
    Bookings,
    Customers,
    Staff,
}

impl Sheet {
    /// Worksheet name in the spreadsheet.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sheet::Bookings => "bookings",
            Sheet::Customers => "customers",
            Sheet::Staff => "staff",
        }
    }
}

impl fmt::Display for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name to cell value. Missing fields read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record(BTreeMap<String, String>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair header cells with row cells. Short rows are padded with empty
    /// cells; cells beyond the header are dropped.
    pub fn from_row(header: &[String], row: &[String]) -> Self {
        let fields = header
            .iter()
            .enumerate()
            .map(|(i, key)| (key.clone(), row.get(i).cloned().unwrap_or_default()))
            .collect();
        Self(fields)
    }

    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cells in `header` order.
    pub fn to_row(&self, header: &[String]) -> Vec<String> {
        header.iter().map(|key| self.get(key).to_string()).collect()
    }
}

/// How the store locates the row behind a record for a cell update.
///
/// Customers and staff are unique by name. A customer can hold several
/// bookings, so a booking row is matched on name and date together. A
/// cancelled booking may share name and date with the one that replaced it,
/// so booking keys only ever match rows that are not cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordKey {
    pub name: String,
    pub date: Option<String>,
}

impl RecordKey {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: None,
        }
    }

    pub fn by_name_and_date(name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: Some(date.into()),
        }
    }

    /// Key of an existing record in `sheet`.
    pub fn for_record(sheet: Sheet, record: &Record) -> Self {
        match sheet {
            Sheet::Bookings => Self::by_name_and_date(record.get("NAME"), record.get("DATE")),
            Sheet::Customers | Sheet::Staff => Self::by_name(record.get("NAME")),
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        if record.get("NAME") != self.name {
            return false;
        }
        match self.date.as_deref() {
            Some(date) => record.get("DATE") == date && record.get("CANC") != "yes",
            None => true,
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.date {
            Some(date) => write!(f, "{} on {}", self.name, date),
            None => write!(f, "{}", self.name),
        }
    }
}
