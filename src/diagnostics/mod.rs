//! Post-generation diagnostics.
//!
//! None of these checks block a schedule; they produce warnings for the
//! caller to surface.
//!
//! - [`balance`]: every ordered pair of teams meets exactly once.
//! - [`conflict`]: no team plays twice on one date.
//! - [`holiday`]: advisory warnings for dates close to holidays.

pub mod balance;
pub mod conflict;
pub mod holiday;

pub use balance::{validate_balance, BalanceIssue};
pub use conflict::{conflicting_rows, detect_conflicts, Conflict};
pub use holiday::{
    annotate_from_source, annotate_holidays, check_date, nearest_holiday, HolidayError,
    HolidayMatch, HolidaySource,
};
