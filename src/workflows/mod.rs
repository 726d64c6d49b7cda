//! Interactive desk workflows.
//!
//! A [`Session`] owns the record store, the console and the navigation
//! settings for one logged-in run of the desk. The workflows are methods on
//! it, split by area:
//!
//! - [`auth`]: login and password checks
//! - [`menu`]: the start menu
//! - [`booking`]: viewing, adding and editing bookings
//! - [`customer`]: customer lookup, listing and creation
//! - [`staff`]: staff listing and self-service edits
//! - [`stats`]: customer statistics and the JSON report
//!
//! Every store call goes through the session's recovery-wrapped helpers, so a
//! workflow only ever sees good data or a [`SessionError::Aborted`].

/// Take the value of a completed step, or return its `Cancelled`/`Home` from
/// the enclosing workflow.
macro_rules! step_value {
    ($nav:expr) => {
        match $nav {
            $crate::navigation::Navigation::Value(value) => value,
            $crate::navigation::Navigation::Cancelled => {
                return Ok($crate::navigation::Navigation::Cancelled)
            }
            $crate::navigation::Navigation::Home => {
                return Ok($crate::navigation::Navigation::Home)
            }
        }
    };
}

pub mod auth;
pub mod booking;
pub mod customer;
pub mod menu;
pub mod staff;
pub mod stats;

pub use booking::Period;
pub use stats::{calculate_age, AgeGroup, CustomerStats};

use crate::config::Config;
use crate::domain::{today, BirthDatePolicy};
use crate::error::{SessionError, SessionResult};
use crate::matching::NameMatcher;
use crate::models::{Booking, Customer, Record, RecordKey, Sheet, Staff};
use crate::navigation::{Console, Navigation, Navigator, Step, StepOutcome};
use crate::store::{recovery, RecordStore};
use chrono::NaiveDate;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Width of the `*` frame around listings.
const FRAME_WIDTH: usize = 65;

/// One run of the desk: store, console and navigation settings.
pub struct Session<S, C> {
    store: S,
    console: C,
    navigator: Navigator,
    matcher: NameMatcher,
    birth_date_policy: BirthDatePolicy,
    max_password_attempts: usize,
    reports_dir: PathBuf,
    today: NaiveDate,
}

impl<S: RecordStore, C: Console> Session<S, C> {
    pub fn new(store: S, console: C, config: &Config) -> Self {
        Self {
            store,
            console,
            navigator: Navigator::from_config(config),
            matcher: NameMatcher::new(config.max_name_suggestions),
            birth_date_policy: config.birth_date_policy,
            max_password_attempts: config.max_password_attempts,
            reports_dir: config.reports_dir.clone(),
            today: today(),
        }
    }

    /// Pin "today", for deterministic runs.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }

    /// Give back the store and console.
    pub fn into_parts(self) -> (S, C) {
        (self.store, self.console)
    }

    /// Run one navigation step with this session as the handler context.
    pub fn step<T, F>(&mut self, step: &Step<'_>, handler: F) -> SessionResult<Navigation<T>>
    where
        F: FnMut(&mut Self, &str) -> SessionResult<StepOutcome<T>>,
    {
        let navigator = self.navigator.clone();
        navigator.run_step(self, step, handler)
    }

    /// Print lines framed by rows of `*`.
    pub(crate) fn framed<I>(&mut self, lines: I) -> SessionResult<()>
    where
        I: IntoIterator<Item = String>,
    {
        let frame = "*".repeat(FRAME_WIDTH);
        self.print("")?;
        self.print(&frame)?;
        for line in lines {
            self.print(&line)?;
        }
        self.print(&frame)?;
        Ok(())
    }

    /// Print "did you mean" suggestions for an unknown name, if any.
    pub(crate) fn suggest_names(
        &mut self,
        indent: &str,
        query: &str,
        names: &[String],
    ) -> SessionResult<()> {
        let suggestions = self
            .matcher
            .suggest(query, names.iter().map(String::as_str));
        if !suggestions.is_empty() {
            self.print(&format!("{}Did you mean: {}?", indent, suggestions.join(", ")))?;
        }
        Ok(())
    }

    // ==================== Store access ====================

    pub(crate) fn fetch(&mut self, sheet: Sheet) -> SessionResult<Vec<Record>> {
        recovery::fetch_all(
            &self.store,
            &mut self.console,
            self.navigator.cancel_token(),
            sheet,
        )
    }

    pub(crate) fn bookings(&mut self) -> SessionResult<Vec<Booking>> {
        Ok(self
            .fetch(Sheet::Bookings)?
            .iter()
            .map(Booking::from_record)
            .collect())
    }

    pub(crate) fn customers(&mut self) -> SessionResult<Vec<Customer>> {
        Ok(self
            .fetch(Sheet::Customers)?
            .iter()
            .map(Customer::from_record)
            .collect())
    }

    pub(crate) fn staff_members(&mut self) -> SessionResult<Vec<Staff>> {
        Ok(self
            .fetch(Sheet::Staff)?
            .iter()
            .map(Staff::from_record)
            .collect())
    }

    /// The customer with exactly this name, freshly read.
    pub(crate) fn customer_named(&mut self, name: &str) -> SessionResult<Option<Customer>> {
        Ok(self.customers()?.into_iter().find(|c| c.name == name))
    }

    /// Append a record in the sheet's current column order.
    ///
    /// Returns `false` when the user chose to continue without saving.
    pub(crate) fn append(&mut self, sheet: Sheet, record: &Record) -> SessionResult<bool> {
        let give_up = self.navigator.cancel_token().to_string();
        let header = recovery::header(&self.store, &mut self.console, &give_up, sheet)?;
        let row = record.to_row(&header);
        let saved = recovery::append(&self.store, &mut self.console, &give_up, sheet, &row)?;
        if saved {
            info!("Appended row to {}", sheet);
        }
        Ok(saved)
    }

    /// Overwrite one field of the record behind `key`.
    pub(crate) fn update(
        &mut self,
        sheet: Sheet,
        key: &RecordKey,
        field: &str,
        value: &str,
    ) -> SessionResult<Record> {
        let record = recovery::update_cell(
            &self.store,
            &mut self.console,
            self.navigator.cancel_token(),
            sheet,
            key,
            field,
            value,
        )?;
        info!("Updated {} of '{}' in {}", field, key, sheet);
        self.print(&format!(
            "\t\t{} info was successfully updated!",
            capitalize(sheet.as_str())
        ))?;
        Ok(record)
    }
}

impl<S: RecordStore, C: Console> Console for Session<S, C> {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.console.read_line(prompt)
    }

    fn read_secret(&mut self, prompt: &str) -> io::Result<String> {
        self.console.read_secret(prompt)
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        self.console.print(text)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Treat a session the user ended on purpose as finished: `Ok(None)`.
pub fn finished<T>(result: SessionResult<T>) -> SessionResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(SessionError::Aborted) => {
            info!("Session ended by user");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("bookings"), "Bookings");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_finished_swallows_abort_only() {
        assert!(matches!(finished::<()>(Err(SessionError::Aborted)), Ok(None)));
        assert!(matches!(finished(Ok(7)), Ok(Some(7))));

        let io_err = io::Error::new(io::ErrorKind::UnexpectedEof, "closed");
        assert!(finished::<()>(Err(SessionError::Io(io_err))).is_err());
    }
}
