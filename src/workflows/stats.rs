//! Customer statistics: ages, age groups, booking and cancellation totals.
//!
//! The report is printed as a summary and written as pretty JSON to
//! `{reports_dir}/{YYYY-MM-DD}_stats.json`.

use super::Session;
use crate::domain::{format_date, parse_date, ValidationError};
use crate::error::SessionResult;
use crate::models::Customer;
use crate::navigation::Console;
use crate::store::RecordStore;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Whole years between `birth_date` and `today`.
///
/// # Errors
///
/// `DateInFuture` when the birth date lies after `today`.
pub fn calculate_age(birth_date: NaiveDate, today: NaiveDate) -> Result<u32, ValidationError> {
    if birth_date > today {
        return Err(ValidationError::DateInFuture(format_date(birth_date)));
    }
    let birthday_to_come = (today.month(), today.day()) < (birth_date.month(), birth_date.day());
    let years = today.year() - birth_date.year() - i32::from(birthday_to_come);
    Ok(years.max(0) as u32)
}

/// Age bands of the report; the lower bound is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AgeGroup {
    #[serde(rename = "below 20")]
    Below20,
    #[serde(rename = "20-30")]
    Twenties,
    #[serde(rename = "30-40")]
    Thirties,
    #[serde(rename = "40-50")]
    Forties,
    #[serde(rename = "50-60")]
    Fifties,
    #[serde(rename = "60+")]
    Over60,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 6] = [
        Self::Below20,
        Self::Twenties,
        Self::Thirties,
        Self::Forties,
        Self::Fifties,
        Self::Over60,
    ];

    pub fn for_age(age: u32) -> Self {
        match age {
            0..=19 => Self::Below20,
            20..=29 => Self::Twenties,
            30..=39 => Self::Thirties,
            40..=49 => Self::Forties,
            50..=59 => Self::Fifties,
            _ => Self::Over60,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Below20 => "below 20",
            Self::Twenties => "20-30",
            Self::Thirties => "30-40",
            Self::Forties => "40-50",
            Self::Fifties => "50-60",
            Self::Over60 => "60+",
        }
    }
}

/// Customers in one age group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeGroupShare {
    pub group: AgeGroup,
    pub count: usize,

    /// Share of customers with a usable age, rounded to two decimals
    pub percent: f64,
}

/// The statistics report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerStats {
    /// `DD-MM-YYYY`
    pub generated_on: String,
    pub customers: usize,

    /// Age of every customer with a usable birth date, in sheet order
    pub ages: Vec<u32>,

    /// Customers whose birth date is unreadable or in the future
    pub skipped_birth_dates: usize,
    pub age_groups: Vec<AgeGroupShare>,
    pub total_bookings: u64,
    pub cancelled: u64,

    /// Cancelled bookings as a percentage of all bookings
    pub cancellation_rate: f64,
    pub bookings_per_customer: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn percent(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        round2(part / whole * 100.0)
    }
}

impl CustomerStats {
    pub fn from_customers(customers: &[Customer], today: NaiveDate) -> Self {
        let ages: Vec<u32> = customers
            .iter()
            .filter_map(|customer| parse_date(customer.birth_date.as_str()))
            .filter_map(|birth_date| calculate_age(birth_date, today).ok())
            .collect();

        let age_groups = AgeGroup::ALL
            .iter()
            .map(|group| {
                let count = ages
                    .iter()
                    .filter(|age| AgeGroup::for_age(**age) == *group)
                    .count();
                AgeGroupShare {
                    group: *group,
                    count,
                    percent: percent(count as f64, ages.len() as f64),
                }
            })
            .collect();

        let total_bookings: u64 = customers.iter().map(|c| u64::from(c.bookings)).sum();
        let cancelled: u64 = customers.iter().map(|c| u64::from(c.cancelled)).sum();
        let bookings_per_customer = if customers.is_empty() {
            0.0
        } else {
            round2(total_bookings as f64 / customers.len() as f64)
        };

        Self {
            generated_on: format_date(today),
            customers: customers.len(),
            skipped_birth_dates: customers.len() - ages.len(),
            ages,
            age_groups,
            total_bookings,
            cancelled,
            cancellation_rate: percent(cancelled as f64, total_bookings as f64),
            bookings_per_customer,
        }
    }

    /// Summary lines for the console.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("\tCustomers: {}", self.customers),
            format!(
                "\tBookings: {}, cancelled: {} ({}%)",
                self.total_bookings, self.cancelled, self.cancellation_rate
            ),
            format!("\tBookings per customer: {}", self.bookings_per_customer),
            "\tAge groups:".to_string(),
        ];
        lines.extend(self.age_groups.iter().map(|share| {
            format!(
                "\t\t{}: {} ({}%)",
                share.group.label(),
                share.count,
                share.percent
            )
        }));
        if self.skipped_birth_dates > 0 {
            lines.push(format!(
                "\t{} customer(s) without a usable birth date",
                self.skipped_birth_dates
            ));
        }
        lines
    }
}

/// File name of the report generated on `today`.
pub fn report_file_name(today: NaiveDate) -> String {
    format!("{}_stats.json", today.format("%Y-%m-%d"))
}

/// Write the report into `dir`, creating it if needed.
pub fn write_report(stats: &CustomerStats, dir: &Path, today: NaiveDate) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(report_file_name(today));
    let json = serde_json::to_string_pretty(stats)?;
    fs::write(&path, json)?;
    Ok(path)
}

impl<S: RecordStore, C: Console> Session<S, C> {
    /// Build the statistics report, print it and save it.
    pub fn customer_stats(&mut self) -> SessionResult<CustomerStats> {
        let customers = self.customers()?;
        let stats = CustomerStats::from_customers(&customers, self.today);
        self.framed(stats.summary_lines())?;

        match write_report(&stats, &self.reports_dir, self.today) {
            Ok(path) => {
                info!("Statistics report written to {}", path.display());
                self.print("\tYour stats is ready! Check your Reports folder.")?;
            }
            Err(e) => {
                warn!("Could not write statistics report: {}", e);
                self.print(&format!("\tCould not save the report: {}", e))?;
            }
        }
        Ok(stats)
    }
}
