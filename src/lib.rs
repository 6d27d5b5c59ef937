//! Balanced double round-robin season scheduling.
//!
//! Turns a roster, a match weekday and a season date range into a
//! chronological fixture list in which every team hosts and visits every
//! other team exactly once, withheld weeks are kept in place, and spare
//! weeks become free weeks.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `SeasonRequest`, `Team`, `Participant`,
//!   `ExcludedDate`, `Pairing`, `Round`, `ScheduleRow`, `Schedule`, `Holiday`
//! - **`calendar`**: Weekly date enumeration and exclusion resolution
//! - **`pairing`**: Circle-method round generation with home/away alternation
//! - **`scheduler`**: Calendar assembly, the end-to-end `SeasonScheduler`,
//!   and season KPIs
//! - **`diagnostics`**: Balance, conflict and holiday proximity checks
//! - **`reorder`**: Manual row moves with displacement of locked weeks
//! - **`validation`**: Request integrity checks (roster, weekday, dates)
//! - **`config`**: Engine settings, loadable from TOML
//!
//! # Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use u_fixture::models::{ExcludedDate, SeasonRequest};
//! use u_fixture::SeasonScheduler;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
//! let request = SeasonRequest::new(["Ajax", "Benfica", "Celtic"], "Tuesday", start, end)
//!     .with_exclusion(ExcludedDate::catchup(NaiveDate::from_ymd_opt(2024, 10, 1).unwrap()));
//!
//! let schedule = SeasonScheduler::new().generate(&request).unwrap();
//! assert!(schedule.is_complete());
//! assert_eq!(schedule.match_rows().count(), 6);
//! ```
//!
//! # References
//!
//! - de Werra (1981), "Scheduling in Sports"
//! - Rasmussen & Trick (2008), "Round robin scheduling: a survey"

pub mod calendar;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod models;
pub mod pairing;
pub mod reorder;
pub mod scheduler;
pub mod validation;

pub use config::EngineConfig;
pub use error::{Error, Result};
pub use scheduler::SeasonScheduler;
