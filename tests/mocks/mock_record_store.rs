use booking_desk::error::{StoreError, StoreResult};
use booking_desk::models::{Booking, Customer, Record, RecordKey, Sheet, Staff};
use booking_desk::store::RecordStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct SheetData {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Mock record store for testing.
///
/// Provides an in-memory implementation of RecordStore that is seeded with
/// the desk's three sheets, tracks method calls for verification, and can be
/// told to fail the next N calls of a method.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockRecordStore {
    sheets: Arc<Mutex<HashMap<Sheet, SheetData>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failures: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockRecordStore {
    /// Create a store with empty sheets and the standard headers.
    pub fn new() -> Self {
        let mut sheets = HashMap::new();
        sheets.insert(Sheet::Bookings, Self::empty_sheet(&Booking::COLUMNS));
        sheets.insert(Sheet::Customers, Self::empty_sheet(&Customer::COLUMNS));
        sheets.insert(Sheet::Staff, Self::empty_sheet(&Staff::COLUMNS));

        Self {
            sheets: Arc::new(Mutex::new(sheets)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            failures: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn empty_sheet(columns: &[&str]) -> SheetData {
        SheetData {
            header: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a raw row to a sheet.
    pub fn add_row(&self, sheet: Sheet, row: &[&str]) {
        let mut sheets = self.sheets.lock().unwrap();
        let data = sheets.entry(sheet).or_default();
        data.rows.push(row.iter().map(|c| c.to_string()).collect());
    }

    pub fn add_staff(&self, name: &str, password: &str, contact: &str) {
        self.add_row(Sheet::Staff, &[name, password, contact]);
    }

    pub fn add_customer(&self, name: &str, phone: &str, birth_date: &str, bookings: u32, cancelled: u32) {
        let email = format!("{}@example.com", name.to_lowercase());
        let bookings = bookings.to_string();
        let cancelled = cancelled.to_string();
        self.add_row(
            Sheet::Customers,
            &[
                name,
                phone,
                email.as_str(),
                birth_date,
                bookings.as_str(),
                cancelled.as_str(),
            ],
        );
    }

    pub fn add_booking(&self, date: &str, time: &str, name: &str, people: &str, conf: &str, canc: &str) {
        self.add_row(Sheet::Bookings, &[date, time, name, people, "Bob", conf, canc]);
    }

    /// Replace a sheet's header row.
    pub fn set_header(&self, sheet: Sheet, header: &[&str]) {
        let mut sheets = self.sheets.lock().unwrap();
        sheets.entry(sheet).or_default().header = header.iter().map(|c| c.to_string()).collect();
    }

    /// Data rows of a sheet as records.
    pub fn records(&self, sheet: Sheet) -> Vec<Record> {
        let sheets = self.sheets.lock().unwrap();
        sheets
            .get(&sheet)
            .map(|data| {
                data.rows
                    .iter()
                    .map(|row| Record::from_row(&data.header, row))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Raw data rows of a sheet.
    pub fn rows(&self, sheet: Sheet) -> Vec<Vec<String>> {
        let sheets = self.sheets.lock().unwrap();
        sheets.get(&sheet).map(|data| data.rows.clone()).unwrap_or_default()
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.records(Sheet::Bookings).iter().map(Booking::from_record).collect()
    }

    pub fn customers(&self) -> Vec<Customer> {
        self.records(Sheet::Customers).iter().map(Customer::from_record).collect()
    }

    pub fn customer(&self, name: &str) -> Option<Customer> {
        self.customers().into_iter().find(|c| c.name == name)
    }

    pub fn staff(&self) -> Vec<Staff> {
        self.records(Sheet::Staff).iter().map(Staff::from_record).collect()
    }

    /// Make the next `times` calls of `method` fail.
    pub fn fail_next(&self, method: &str, times: usize) {
        let mut failures = self.failures.lock().unwrap();
        failures.insert(method.to_string(), times);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        let mut counts = self.call_counts.lock().unwrap();
        counts.clear();
    }

    fn track_call(&self, method: &str) -> StoreResult<()> {
        {
            let mut counts = self.call_counts.lock().unwrap();
            *counts.entry(method.to_string()).or_insert(0) += 1;
        }
        let mut failures = self.failures.lock().unwrap();
        match failures.get_mut(method) {
            Some(remaining) if *remaining > 0 => {
                *remaining -= 1;
                Err(StoreError::ApiError {
                    status: 503,
                    message: format!("injected failure in {}", method),
                })
            }
            _ => Ok(()),
        }
    }
}

impl Default for MockRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MockRecordStore {
    fn fetch_all(&self, sheet: Sheet) -> StoreResult<Vec<Record>> {
        self.track_call("fetch_all")?;
        Ok(self.records(sheet))
    }

    fn header(&self, sheet: Sheet) -> StoreResult<Vec<String>> {
        self.track_call("header")?;
        let sheets = self.sheets.lock().unwrap();
        sheets
            .get(&sheet)
            .map(|data| data.header.clone())
            .ok_or_else(|| StoreError::NotFound(sheet.to_string()))
    }

    fn append(&self, sheet: Sheet, values: &[String]) -> StoreResult<()> {
        self.track_call("append")?;
        let mut sheets = self.sheets.lock().unwrap();
        sheets.entry(sheet).or_default().rows.push(values.to_vec());
        Ok(())
    }

    fn update_cell(
        &self,
        sheet: Sheet,
        key: &RecordKey,
        field: &str,
        value: &str,
    ) -> StoreResult<Record> {
        self.track_call("update_cell")?;
        let mut sheets = self.sheets.lock().unwrap();
        let data = sheets
            .get_mut(&sheet)
            .ok_or_else(|| StoreError::NotFound(sheet.to_string()))?;

        let column = data
            .header
            .iter()
            .position(|name| name == field)
            .ok_or_else(|| StoreError::MissingColumn {
                sheet: sheet.to_string(),
                column: field.to_string(),
            })?;

        let header = data.header.clone();
        let row = data
            .rows
            .iter_mut()
            .find(|row| key.matches(&Record::from_row(&header, row.as_slice())))
            .ok_or_else(|| StoreError::NotFound(key.to_string()))?;

        if row.len() <= column {
            row.resize(column + 1, String::new());
        }
        row[column] = value.to_string();
        Ok(Record::from_row(&header, row))
    }
}
