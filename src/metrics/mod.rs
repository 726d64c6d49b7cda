//! Store traffic counters.
//!
//! Counts requests, failures, and rows moved through the record store so a
//! session can log what it cost at exit.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared between the store client and the session.
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    /// Total number of store requests made
    requests_total: Arc<AtomicU64>,

    /// Total number of failed store requests
    errors_total: Arc<AtomicU64>,

    /// Total duration of all store requests in milliseconds
    duration_total_ms: Arc<AtomicU64>,

    /// Data rows read
    rows_fetched_total: Arc<AtomicU64>,

    /// Rows appended
    rows_appended_total: Arc<AtomicU64>,

    /// Single cells rewritten
    cells_updated_total: Arc<AtomicU64>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a request with its duration.
    pub fn record_request(&self, duration: Duration) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rows_fetched(&self, count: usize) {
        self.rows_fetched_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_row_appended(&self) {
        self.rows_appended_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cell_updated(&self) {
        self.cells_updated_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn requests_total(&self) -> u64 {
        self.requests_total.load(Ordering::Relaxed)
    }

    pub fn errors_total(&self) -> u64 {
        self.errors_total.load(Ordering::Relaxed)
    }

    pub fn duration_total_ms(&self) -> u64 {
        self.duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average request duration in milliseconds.
    pub fn duration_avg_ms(&self) -> f64 {
        let total = self.duration_total_ms();
        let count = self.requests_total();
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            requests_total: self.requests_total(),
            errors_total: self.errors_total(),
            duration_total_ms: self.duration_total_ms(),
            duration_avg_ms: self.duration_avg_ms(),
            rows_fetched_total: self.rows_fetched_total.load(Ordering::Relaxed),
            rows_appended_total: self.rows_appended_total.load(Ordering::Relaxed),
            cells_updated_total: self.cells_updated_total.load(Ordering::Relaxed),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSummary {
    pub requests_total: u64,
    pub errors_total: u64,
    pub duration_total_ms: u64,
    pub duration_avg_ms: f64,
    pub rows_fetched_total: u64,
    pub rows_appended_total: u64,
    pub cells_updated_total: u64,
}

/// Times one store request.
pub struct RequestTimer {
    start: Instant,
    metrics: Metrics,
}

impl RequestTimer {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Record the duration; count an error too when `failed`.
    pub fn finish(self, failed: bool) {
        self.metrics.record_request(self.start.elapsed());
        if failed {
            self.metrics.record_error();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert_eq!(metrics.requests_total(), 0);
        assert_eq!(metrics.errors_total(), 0);
        assert_eq!(metrics.duration_total_ms(), 0);
        assert_eq!(metrics.duration_avg_ms(), 0.0);
    }

    #[test]
    fn test_average_duration() {
        let metrics = Metrics::new();
        metrics.record_request(Duration::from_millis(100));
        metrics.record_request(Duration::from_millis(200));
        assert_eq!(metrics.requests_total(), 2);
        assert_eq!(metrics.duration_total_ms(), 300);
        assert_eq!(metrics.duration_avg_ms(), 150.0);
    }

    #[test]
    fn test_summary() {
        let metrics = Metrics::new();
        metrics.record_request(Duration::from_millis(100));
        metrics.record_error();
        metrics.record_rows_fetched(3);
        metrics.record_row_appended();
        metrics.record_cell_updated();
        metrics.record_cell_updated();

        let summary = metrics.summary();
        assert_eq!(summary.requests_total, 1);
        assert_eq!(summary.errors_total, 1);
        assert_eq!(summary.rows_fetched_total, 3);
        assert_eq!(summary.rows_appended_total, 1);
        assert_eq!(summary.cells_updated_total, 2);
    }

    #[test]
    fn test_request_timer() {
        let metrics = Metrics::new();
        let timer = RequestTimer::new(metrics.clone());
        thread::sleep(Duration::from_millis(10));
        timer.finish(false);

        assert_eq!(metrics.requests_total(), 1);
        assert_eq!(metrics.errors_total(), 0);
        assert!(metrics.duration_total_ms() >= 10);

        RequestTimer::new(metrics.clone()).finish(true);
        assert_eq!(metrics.errors_total(), 1);
    }
}
