//! Raw, untrusted input as it reaches the validators.
//!
//! Interactive prompts produce strings, but spreadsheet cells arrive as JSON
//! values and optional fields may be missing entirely. Every validator takes
//! `&impl RawInput` and fails closed when there is no text to look at.

use serde_json::Value;

/// Anything a validator may be handed.
pub trait RawInput {
    /// The text content, or `None` when the input is not a string.
    fn as_text(&self) -> Option<&str>;
}

impl RawInput for str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl RawInput for String {
    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: RawInput + ?Sized> RawInput for &T {
    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }
}

impl<T: RawInput> RawInput for Option<T> {
    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(|inner| inner.as_text())
    }
}

impl RawInput for Value {
    fn as_text(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}
