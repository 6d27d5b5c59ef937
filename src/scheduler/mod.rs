//! Season assembly and KPI evaluation.
//!
//! # Assembly
//!
//! `assemble` walks the season's dates once, placing rounds on available
//! dates in order. Withheld dates keep their own rows; dates left after the
//! last round become free weeks.
//!
//! # Scheduler
//!
//! `SeasonScheduler` runs the whole pipeline for a request: validation,
//! calendar, pairings, assembly, balance check and optional holiday
//! annotation.
//!
//! # KPI
//!
//! `SeasonKpi` summarizes a schedule per team (home, away, byes, streaks)
//! and season-wide (match, free and withheld weeks).

mod assembler;
mod kpi;
mod season;

pub use assembler::{assemble, Assembly};
pub use kpi::{SeasonKpi, TeamKpi};
pub use season::SeasonScheduler;
