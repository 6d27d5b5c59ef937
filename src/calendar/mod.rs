//! Season calendar: weekly match dates and withheld weeks.
//!
//! - [`sequence`]: enumerates every date on the match weekday in the season.
//! - [`exclusion`]: attaches caller-withheld dates to that sequence and
//!   derives the dates available for rounds.

pub mod exclusion;
pub mod sequence;

pub use exclusion::ResolvedDates;
pub use sequence::{parse_weekday, weekly_dates, DateSequence, WEEKDAY_NAMES};
