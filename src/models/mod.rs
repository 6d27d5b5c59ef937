//! Season scheduling domain models.
//!
//! Plain data types shared by every stage of the engine: the request,
//! the roster and its bye padding, withheld dates, generated pairings,
//! and the row-based schedule handed back to callers.
//!
//! # Lifecycles
//!
//! | Type | Produced by | Lifetime |
//! |------|-------------|----------|
//! | `SeasonRequest`, `ExcludedDate` | caller | one request, immutable |
//! | `Pairing`, `Round` | pairing generator | never mutated |
//! | `ScheduleRow`, `Schedule` | assembler | reordered by the caller |
//! | `Holiday` | external holiday source | one annotation pass |

mod exclusion;
mod holiday;
mod pairing;
mod request;
mod schedule;
mod team;

pub use exclusion::{ExcludedDate, ExclusionKind};
pub use holiday::Holiday;
pub use pairing::{Pairing, Round};
pub use request::SeasonRequest;
pub use schedule::{RowType, Schedule, ScheduleRow, ScheduleStatus};
pub use team::{Participant, Team};
