//! Record store: the spreadsheet behind the desk.
//!
//! [`RecordStore`] is the seam; [`SheetsClient`] talks to the spreadsheet
//! API and the [`recovery`] helpers wrap calls made from an interactive
//! session with a retry prompt.

pub mod recovery;
mod sheets;
mod traits;

pub use sheets::{a1_cell, cell_to_string, SheetsClient, ValueRange};
pub use traits::RecordStore;
