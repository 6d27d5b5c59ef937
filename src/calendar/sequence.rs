//! Weekly match-date enumeration.
//!
//! # Algorithm
//! Scan forward from the season start until the target weekday is hit
//! (at most six steps), then step by exactly seven days until the season
//! end is passed. An empty range yields an empty sequence.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::{Error, Result};

/// Canonical weekday names accepted by [`parse_weekday`].
pub const WEEKDAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Parses a canonical English weekday name, ignoring case and surrounding
/// whitespace.
///
/// Abbreviations are rejected.
///
/// ```
/// use chrono::Weekday;
/// use u_fixture::calendar::parse_weekday;
///
/// assert_eq!(parse_weekday("Wednesday").unwrap(), Weekday::Wed);
/// assert!(parse_weekday("funday").is_err());
/// ```
pub fn parse_weekday(name: &str) -> Result<Weekday> {
    let normalized = name.trim().to_ascii_lowercase();
    let weekday = match normalized.as_str() {
        "monday" => Weekday::Mon,
        "tuesday" => Weekday::Tue,
        "wednesday" => Weekday::Wed,
        "thursday" => Weekday::Thu,
        "friday" => Weekday::Fri,
        "saturday" => Weekday::Sat,
        "sunday" => Weekday::Sun,
        _ => {
            return Err(Error::InvalidInput(format!(
                "unrecognized weekday '{name}', expected one of: {}",
                WEEKDAY_NAMES.join(", ")
            )))
        }
    };
    Ok(weekday)
}

/// Every date falling on `weekday` within `[start, end]`, ascending.
///
/// Fails with [`Error::InvalidInput`] when `end` precedes `start`.
pub fn weekly_dates(weekday: Weekday, start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>> {
    if end < start {
        return Err(Error::InvalidInput(format!(
            "season end {end} precedes season start {start}"
        )));
    }

    let mut cursor = Some(start);
    while let Some(date) = cursor {
        if date > end || date.weekday() == weekday {
            break;
        }
        cursor = date.succ_opt();
    }

    let mut dates = Vec::new();
    while let Some(date) = cursor {
        if date > end {
            break;
        }
        dates.push(date);
        cursor = date.checked_add_days(Days::new(7));
    }
    Ok(dates)
}

/// An ascending arena of season dates with stable indices.
///
/// Every later stage refers to dates by their index here, so date equality
/// never depends on formatting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateSequence {
    dates: Vec<NaiveDate>,
}

impl DateSequence {
    /// Enumerates the weekly dates of a season.
    pub fn weekly(weekday: Weekday, start: NaiveDate, end: NaiveDate) -> Result<Self> {
        Ok(Self {
            dates: weekly_dates(weekday, start, end)?,
        })
    }

    /// Builds a sequence from arbitrary dates (sorted, duplicates removed).
    pub fn from_dates(mut dates: Vec<NaiveDate>) -> Self {
        dates.sort_unstable();
        dates.dedup();
        Self { dates }
    }

    /// Number of dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Date at an index.
    pub fn get(&self, index: usize) -> Option<NaiveDate> {
        self.dates.get(index).copied()
    }

    /// Index of a date, if it is part of the sequence.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.dates.binary_search(&date).ok()
    }

    /// All dates, ascending.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Iterates `(index, date)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, NaiveDate)> + '_ {
        self.dates.iter().copied().enumerate()
    }
}
