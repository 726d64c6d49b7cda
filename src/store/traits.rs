use crate::error::StoreResult;
use crate::models::{Record, RecordKey, Sheet};

/// Table-shaped persistence for the desk.
///
/// Provides abstraction over where the sheets live, enabling different
/// implementations (spreadsheet API client, in-memory double).
///
/// Every call either succeeds or returns a [`StoreError`](crate::error::StoreError);
/// a partial or stale result is never returned as success.
pub trait RecordStore {
    /// All data rows of a sheet, keyed by its header row.
    fn fetch_all(&self, sheet: Sheet) -> StoreResult<Vec<Record>>;

    /// The sheet's field names in column order.
    fn header(&self, sheet: Sheet) -> StoreResult<Vec<String>>;

    /// Append one row; `values` are in header order.
    fn append(&self, sheet: Sheet, values: &[String]) -> StoreResult<()>;

    /// Overwrite one field of the record identified by `key` and return the
    /// record as it now reads.
    fn update_cell(
        &self,
        sheet: Sheet,
        key: &RecordKey,
        field: &str,
        value: &str,
    ) -> StoreResult<Record>;
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn fetch_all(&self, sheet: Sheet) -> StoreResult<Vec<Record>> {
        (**self).fetch_all(sheet)
    }

    fn header(&self, sheet: Sheet) -> StoreResult<Vec<String>> {
        (**self).header(sheet)
    }

    fn append(&self, sheet: Sheet, values: &[String]) -> StoreResult<()> {
        (**self).append(sheet, values)
    }

    fn update_cell(
        &self,
        sheet: Sheet,
        key: &RecordKey,
        field: &str,
        value: &str,
    ) -> StoreResult<Record> {
        (**self).update_cell(sheet, key, field, value)
    }
}
