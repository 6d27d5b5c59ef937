//! Holiday proximity warnings.
//!
//! Holidays come from an external [`HolidaySource`]. Annotation is
//! advisory: when the source fails the rows are returned unannotated and
//! generation carries on.

use chrono::{Days, NaiveDate};
use thiserror::Error;
use tracing::warn;

use crate::models::{Holiday, ScheduleRow};

/// Failure to obtain holidays from a source.
#[derive(Debug, Error)]
#[error("holiday source unavailable: {0}")]
pub struct HolidayError(pub String);

/// Supplier of holidays for a date range.
pub trait HolidaySource {
    /// Holidays falling within `[start, end]`.
    fn fetch(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Holiday>, HolidayError>;
}

impl HolidaySource for [Holiday] {
    fn fetch(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Holiday>, HolidayError> {
        Ok(self
            .iter()
            .filter(|h| h.date >= start && h.date <= end)
            .cloned()
            .collect())
    }
}

impl HolidaySource for Vec<Holiday> {
    fn fetch(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Holiday>, HolidayError> {
        self.as_slice().fetch(start, end)
    }
}

/// The holiday closest to a date, with its signed distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayMatch<'a> {
    /// The nearest holiday.
    pub holiday: &'a Holiday,
    /// Days from the date to the holiday; positive when the holiday is later.
    pub offset_days: i64,
}

impl HolidayMatch<'_> {
    /// Short advisory text for a schedule row.
    pub fn warning(&self) -> String {
        let title = &self.holiday.title;
        let days = self.offset_days.unsigned_abs();
        let unit = if days == 1 { "day" } else { "days" };
        match self.offset_days {
            0 => format!("Holiday: {title}"),
            n if n > 0 => format!("{days} {unit} before {title}"),
            _ => format!("{days} {unit} after {title}"),
        }
    }
}

/// Finds the holiday nearest to `date` within `± window_days`.
///
/// Ties go to the earlier holiday.
pub fn nearest_holiday(
    date: NaiveDate,
    holidays: &[Holiday],
    window_days: u32,
) -> Option<HolidayMatch<'_>> {
    holidays
        .iter()
        .map(|holiday| HolidayMatch {
            holiday,
            offset_days: holiday.days_from(date),
        })
        .filter(|m| m.offset_days.unsigned_abs() <= u64::from(window_days))
        .min_by_key(|m| (m.offset_days.unsigned_abs(), m.holiday.date))
}

/// Warning for a single date, if a holiday is within the window.
pub fn check_date(date: NaiveDate, holidays: &[Holiday], window_days: u32) -> Option<String> {
    nearest_holiday(date, holidays, window_days).map(|m| m.warning())
}

/// Returns the rows with `holiday_warning` set from the given holidays.
///
/// Rows without a nearby holiday have their warning cleared.
pub fn annotate_holidays(
    rows: &[ScheduleRow],
    holidays: &[Holiday],
    window_days: u32,
) -> Vec<ScheduleRow> {
    rows.iter()
        .map(|row| ScheduleRow {
            holiday_warning: check_date(row.date, holidays, window_days),
            ..row.clone()
        })
        .collect()
}

/// Fetches holidays around the rows' dates and annotates the rows.
///
/// The fetch covers the first to last row date widened by the window. A
/// source failure is logged and the rows come back unchanged.
pub fn annotate_from_source<H>(
    rows: &[ScheduleRow],
    source: &H,
    window_days: u32,
) -> Vec<ScheduleRow>
where
    H: HolidaySource + ?Sized,
{
    let (Some(first), Some(last)) = (
        rows.iter().map(|r| r.date).min(),
        rows.iter().map(|r| r.date).max(),
    ) else {
        return rows.to_vec();
    };

    let window = Days::new(u64::from(window_days));
    let start = first.checked_sub_days(window).unwrap_or(first);
    let end = last.checked_add_days(window).unwrap_or(last);

    match source.fetch(start, end) {
        Ok(holidays) => annotate_holidays(rows, &holidays, window_days),
        Err(err) => {
            warn!(error = %err, "skipping holiday annotation");
            rows.to_vec()
        }
    }
}
