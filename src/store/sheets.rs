//! HTTP client for the spreadsheet values API.
//!
//! Each sheet is a worksheet whose first row is the header. Reads pull the
//! whole worksheet; writes append a row or overwrite a single A1 cell.

use super::traits::RecordStore;
use crate::config::Config;
use crate::error::{StoreError, StoreResult};
use crate::metrics::{Metrics, RequestTimer};
use crate::models::{Record, RecordKey, Sheet};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

/// Response body of a values read.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    /// Range actually returned, e.g. `bookings!A1:G12`
    #[serde(default)]
    pub range: Option<String>,

    /// Rows of cells; trailing empty cells and rows are omitted by the API
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

/// Spreadsheet cells come back as strings by default, but numeric and boolean
/// cells may be typed. Everything is read as text.
pub fn cell_to_string(cell: &Value) -> String {
    match cell {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        other => other.to_string(),
    }
}

/// A1 notation for a 1-based row and column, e.g. `(3, 28)` is `AB3`.
pub fn a1_cell(row: usize, column: usize) -> String {
    let mut letters = Vec::new();
    let mut n = column;
    while n > 0 {
        n -= 1;
        letters.push((b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    letters.reverse();
    format!("{}{}", letters.into_iter().collect::<String>(), row)
}

/// HTTP client for the spreadsheet holding the desk's sheets.
///
/// This client uses `ureq` for synchronous HTTP requests.
#[derive(Clone)]
pub struct SheetsClient {
    /// Base URL of one spreadsheet, without a trailing `/values`
    base_url: String,

    /// Bearer token for authentication
    token: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl SheetsClient {
    /// Create a new SheetsClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.sheet_url.clone(),
            token: config.sheet_token.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a SheetsClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, token: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            token,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    fn values_path(sheet: Sheet) -> String {
        format!("/values/{}", urlencoding::encode(sheet.as_str()))
    }

    fn authorization(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Execute a GET request with authentication.
    fn get(&self, path: &str) -> StoreResult<ureq::Response> {
        let timer = RequestTimer::new(self.metrics.clone());
        let url = self.build_url(path);
        tracing::debug!("GET {}", url);

        let result = self
            .agent
            .get(&url)
            .set("Authorization", &self.authorization())
            .call()
            .map_err(|e| self.map_error(e));

        timer.finish(result.is_err());
        result
    }

    /// Execute a POST or PUT request with authentication and JSON body.
    fn send(&self, method: &str, path: &str, body: &Value) -> StoreResult<ureq::Response> {
        let timer = RequestTimer::new(self.metrics.clone());
        let url = self.build_url(path);

        tracing::debug!("{} {}", method, url);
        tracing::debug!("Request body: {}", body);

        let result = self
            .agent
            .request(method, &url)
            .set("Authorization", &self.authorization())
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e));

        match &result {
            Ok(response) => {
                tracing::debug!("{} {} - Success (status: {})", method, url, response.status());
            }
            Err(e) => {
                tracing::error!("{} {} - Error: {:?}", method, url, e);
            }
        }
        timer.finish(result.is_err());
        result
    }

    /// Map a ureq error to a StoreError.
    fn map_error(&self, error: ureq::Error) -> StoreError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 | 403 => StoreError::Unauthorized,
                    404 => StoreError::NotFound(message),
                    429 => StoreError::RateLimitExceeded,
                    _ => StoreError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    StoreError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    StoreError::Timeout
                } else {
                    StoreError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Every row of a worksheet, header included, as text cells.
    pub fn get_values(&self, sheet: Sheet) -> StoreResult<Vec<Vec<String>>> {
        let response = self.get(&Self::values_path(sheet))?;
        let body = response
            .into_string()
            .map_err(|e| StoreError::HttpError(e.to_string()))?;

        let range: ValueRange = serde_json::from_str(&body).map_err(StoreError::JsonError)?;

        Ok(range
            .values
            .iter()
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect())
    }

    fn split_header(
        sheet: Sheet,
        mut rows: Vec<Vec<String>>,
    ) -> StoreResult<(Vec<String>, Vec<Vec<String>>)> {
        if rows.is_empty() {
            return Err(StoreError::NotFound(format!(
                "header row of sheet '{}'",
                sheet
            )));
        }
        let header = rows.remove(0);
        Ok((header, rows))
    }
}

impl RecordStore for SheetsClient {
    fn fetch_all(&self, sheet: Sheet) -> StoreResult<Vec<Record>> {
        let rows = self.get_values(sheet)?;
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let (header, rows) = Self::split_header(sheet, rows)?;

        let records: Vec<Record> = rows
            .iter()
            .map(|row| Record::from_row(&header, row))
            .collect();

        self.metrics.record_rows_fetched(records.len());
        Ok(records)
    }

    fn header(&self, sheet: Sheet) -> StoreResult<Vec<String>> {
        let rows = self.get_values(sheet)?;
        Self::split_header(sheet, rows).map(|(header, _)| header)
    }

    fn append(&self, sheet: Sheet, values: &[String]) -> StoreResult<()> {
        let path = format!(
            "{}:append?valueInputOption=RAW&insertDataOption=INSERT_ROWS",
            Self::values_path(sheet)
        );
        let body = json!({ "values": [values] });

        self.send("POST", &path, &body)?;
        self.metrics.record_row_appended();
        Ok(())
    }

    fn update_cell(
        &self,
        sheet: Sheet,
        key: &RecordKey,
        field: &str,
        value: &str,
    ) -> StoreResult<Record> {
        let (header, rows) = Self::split_header(sheet, self.get_values(sheet)?)?;

        let column = header
            .iter()
            .position(|name| name == field)
            .ok_or_else(|| StoreError::MissingColumn {
                sheet: sheet.to_string(),
                column: field.to_string(),
            })?;

        let (index, mut record) = rows
            .iter()
            .map(|row| Record::from_row(&header, row))
            .enumerate()
            .find(|(_, record)| key.matches(record))
            .ok_or_else(|| StoreError::NotFound(format!("'{}' in sheet '{}'", key, sheet)))?;

        // Data rows start on sheet row 2, below the header.
        let cell = a1_cell(index + 2, column + 1);
        let path = format!(
            "{}!{}?valueInputOption=RAW",
            Self::values_path(sheet),
            cell
        );
        let body = json!({ "values": [[value]] });

        self.send("PUT", &path, &body)?;
        self.metrics.record_cell_updated();

        record.set(field, value);
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a1_cell() {
        assert_eq!(a1_cell(1, 1), "A1");
        assert_eq!(a1_cell(2, 7), "G2");
        assert_eq!(a1_cell(3, 26), "Z3");
        assert_eq!(a1_cell(3, 28), "AB3");
        assert_eq!(a1_cell(10, 703), "AAA10");
    }

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&json!("yes")), "yes");
        assert_eq!(cell_to_string(&json!(4)), "4");
        assert_eq!(cell_to_string(&json!(true)), "TRUE");
        assert_eq!(cell_to_string(&Value::Null), "");
    }

    #[test]
    fn test_build_url_joins_slashes() {
        let client = SheetsClient::with_base_url(
            "https://sheets.example.com/v4/spreadsheets/abc/".to_string(),
            "token".to_string(),
        );
        assert_eq!(
            client.build_url("/values/bookings"),
            "https://sheets.example.com/v4/spreadsheets/abc/values/bookings"
        );
    }
}
