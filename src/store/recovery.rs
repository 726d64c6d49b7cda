//! Retry-or-abort handling around store calls made from a session.
//!
//! A failed read or cell update offers "try again" or "exit"; a failed append
//! offers "try again" or "continue without saving". Callers therefore get a
//! good result, a deliberate skip, or [`SessionError::Aborted`].

use super::traits::RecordStore;
use crate::error::{SessionError, SessionResult, StoreResult};
use crate::models::{Record, RecordKey, Sheet};
use crate::navigation::Console;
use tracing::{info, warn};

const RETRY: &str = "1";

enum Choice {
    Retry,
    GiveUp,
}

fn ask<C: Console>(console: &mut C, give_up: &str, give_up_label: &str) -> SessionResult<Choice> {
    let prompt = format!(
        "press {} - Try again\npress {} - {}\n",
        RETRY, give_up, give_up_label
    );
    loop {
        let input = console.read_line(&prompt)?;
        if input == RETRY {
            return Ok(Choice::Retry);
        }
        if input == give_up {
            return Ok(Choice::GiveUp);
        }
        console.print("Invalid input. Please, use options above.")?;
    }
}

fn retry_or_exit<C, T>(
    console: &mut C,
    give_up: &str,
    mut op: impl FnMut() -> StoreResult<T>,
) -> SessionResult<T>
where
    C: Console,
{
    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(e) => {
                warn!("Store request failed: {}", e);
                console.print("\nSorry, something went wrong accessing database.")?;
                match ask(console, give_up, "Exit")? {
                    Choice::Retry => info!("Retrying store request"),
                    Choice::GiveUp => return Err(SessionError::Aborted),
                }
            }
        }
    }
}

/// [`RecordStore::fetch_all`] with the retry-or-exit prompt.
pub fn fetch_all<S, C>(store: &S, console: &mut C, give_up: &str, sheet: Sheet) -> SessionResult<Vec<Record>>
where
    S: RecordStore + ?Sized,
    C: Console,
{
    retry_or_exit(console, give_up, || store.fetch_all(sheet))
}

/// [`RecordStore::header`] with the retry-or-exit prompt.
pub fn header<S, C>(store: &S, console: &mut C, give_up: &str, sheet: Sheet) -> SessionResult<Vec<String>>
where
    S: RecordStore + ?Sized,
    C: Console,
{
    retry_or_exit(console, give_up, || store.header(sheet))
}

/// [`RecordStore::update_cell`] with the retry-or-exit prompt.
pub fn update_cell<S, C>(
    store: &S,
    console: &mut C,
    give_up: &str,
    sheet: Sheet,
    key: &RecordKey,
    field: &str,
    value: &str,
) -> SessionResult<Record>
where
    S: RecordStore + ?Sized,
    C: Console,
{
    retry_or_exit(console, give_up, || store.update_cell(sheet, key, field, value))
}

/// [`RecordStore::append`] with a retry-or-skip prompt.
///
/// Returns `false` when the user chose to continue without saving.
pub fn append<S, C>(
    store: &S,
    console: &mut C,
    give_up: &str,
    sheet: Sheet,
    values: &[String],
) -> SessionResult<bool>
where
    S: RecordStore + ?Sized,
    C: Console,
{
    loop {
        match store.append(sheet, values) {
            Ok(()) => {
                console.print("\n\t\tSaved successfully!\n")?;
                return Ok(true);
            }
            Err(e) => {
                warn!("Append to {} failed: {}", sheet, e);
                console.print("\nDatabase is not available, I couldn't save your data")?;
                match ask(console, give_up, "Continue without saving")? {
                    Choice::Retry => info!("Retrying append to {}", sheet),
                    Choice::GiveUp => {
                        warn!("Row for {} discarded by user", sheet);
                        return Ok(false);
                    }
                }
            }
        }
    }
}
