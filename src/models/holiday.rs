//! Holidays supplied by an external calendar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A public or school holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// Holiday date.
    pub date: NaiveDate,
    /// Display title.
    pub title: String,
    /// Optional notes from the source.
    #[serde(default)]
    pub notes: String,
}

impl Holiday {
    /// Creates a holiday with empty notes.
    pub fn new(date: NaiveDate, title: impl Into<String>) -> Self {
        Self {
            date,
            title: title.into(),
            notes: String::new(),
        }
    }

    /// Sets the notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Signed distance in days from `date` to this holiday.
    ///
    /// Positive when the holiday falls after `date`.
    pub fn days_from(&self, date: NaiveDate) -> i64 {
        (self.date - date).num_days()
    }
}
