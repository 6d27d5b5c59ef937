//! Withheld calendar dates.
//!
//! An excluded date keeps its slot in the season calendar but never hosts
//! a generated round. It appears in the output as a single row of its kind.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Purpose a date is withheld for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionKind {
    /// Reserved for replaying postponed matches.
    Catchup,
    /// A week off.
    Free,
    /// A special event (cup night, tournament, social).
    Special,
}

/// A caller-supplied date withheld from automatic match assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedDate {
    /// The withheld date.
    pub date: NaiveDate,
    /// Why it is withheld.
    pub kind: ExclusionKind,
    /// Free-form notes carried onto the output row.
    #[serde(default)]
    pub notes: String,
}

impl ExcludedDate {
    /// Creates an exclusion with empty notes.
    pub fn new(date: NaiveDate, kind: ExclusionKind) -> Self {
        Self {
            date,
            kind,
            notes: String::new(),
        }
    }

    /// Creates a catch-up week.
    pub fn catchup(date: NaiveDate) -> Self {
        Self::new(date, ExclusionKind::Catchup)
    }

    /// Creates a free week.
    pub fn free(date: NaiveDate) -> Self {
        Self::new(date, ExclusionKind::Free)
    }

    /// Creates a special-event week.
    pub fn special(date: NaiveDate) -> Self {
        Self::new(date, ExclusionKind::Special)
    }

    /// Sets the notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}
