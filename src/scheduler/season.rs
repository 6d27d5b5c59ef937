//! End-to-end season generation.
//!
//! # Pipeline
//!
//! 1. Validate the request (nothing is generated for invalid input).
//! 2. Enumerate the weekly dates and resolve withheld weeks.
//! 3. Generate the double round-robin rounds.
//! 4. Assemble rounds onto the calendar.
//! 5. Check home/away balance and report any shortfall.
//! 6. Optionally annotate rows with holiday warnings.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use super::assembler::{assemble, Assembly};
use crate::calendar::{parse_weekday, DateSequence, ResolvedDates};
use crate::config::EngineConfig;
use crate::diagnostics::{annotate_from_source, check_date, validate_balance, HolidaySource};
use crate::error::{Error, Result};
use crate::models::{Holiday, Schedule, ScheduleStatus, SeasonRequest, Team};
use crate::pairing::generate_rounds;
use crate::validation::validate_request;

/// Generates balanced double round-robin seasons.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_fixture::models::{ScheduleStatus, SeasonRequest};
/// use u_fixture::scheduler::SeasonScheduler;
///
/// let request = SeasonRequest::new(
///     ["A", "B"],
///     "wednesday",
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
/// );
///
/// let schedule = SeasonScheduler::new().generate(&request).unwrap();
/// assert_eq!(schedule.status, ScheduleStatus::Ok);
/// assert_eq!(schedule.rows.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeasonScheduler {
    config: EngineConfig,
}

impl SeasonScheduler {
    /// Creates a scheduler with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler with the given configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Generates a season schedule.
    ///
    /// Too few available dates is not an error: the rounds that fit are
    /// placed, `status` becomes [`ScheduleStatus::TooFewDates`], and the
    /// message states the shortfall.
    ///
    /// # Errors
    /// [`Error::Validation`] or [`Error::InvalidInput`] for a rejected
    /// request.
    pub fn generate(&self, request: &SeasonRequest) -> Result<Schedule> {
        validate_request(request).map_err(Error::Validation)?;

        let weekday = parse_weekday(&request.weekday)?;
        let sequence = DateSequence::weekly(weekday, request.season_start, request.season_end)?;
        let resolved = ResolvedDates::resolve(sequence, &request.exclude_dates);
        debug!(
            dates = resolved.sequence().len(),
            available = resolved.available_count(),
            excluded = resolved.excluded_count(),
            "resolved season calendar"
        );

        let rounds = generate_rounds(&self.roster(request))?;
        let assembly = assemble(&resolved, &rounds, &self.config.spare_week_notes);

        Ok(self.finish(request, &resolved, rounds.len(), assembly))
    }

    /// Generates a season schedule and annotates it with holiday warnings.
    ///
    /// A failing holiday source only drops the warnings.
    pub fn generate_with_holidays<H>(&self, request: &SeasonRequest, source: &H) -> Result<Schedule>
    where
        H: HolidaySource + ?Sized,
    {
        let mut schedule = self.generate(request)?;
        schedule.rows = annotate_from_source(
            &schedule.rows,
            source,
            self.config.season_holiday_window_days,
        );
        Ok(schedule)
    }

    /// Holiday warning for a single date, using the wider ad-hoc window.
    pub fn check_date(&self, date: NaiveDate, holidays: &[Holiday]) -> Option<String> {
        check_date(date, holidays, self.config.single_date_holiday_window_days)
    }

    /// The roster in pairing order.
    fn roster(&self, request: &SeasonRequest) -> Vec<Team> {
        let mut teams = request.roster();
        if let Some(seed) = self.config.shuffle_seed {
            let mut rng = StdRng::seed_from_u64(seed);
            teams.shuffle(&mut rng);
        }
        teams
    }

    fn finish(
        &self,
        request: &SeasonRequest,
        resolved: &ResolvedDates,
        required: usize,
        assembly: Assembly,
    ) -> Schedule {
        let available = resolved.available_count();
        let shortfall = assembly.shortfall(required);

        let (status, mut message) = if shortfall > 0 {
            warn!(required, available, shortfall, "too few dates for a full season");
            (
                ScheduleStatus::TooFewDates,
                format!(
                    "Too few dates: {required} rounds required but only {available} available, \
                     short by {shortfall} date{}. Scheduled {} of {required} rounds.",
                    plural(shortfall),
                    assembly.scheduled_rounds
                ),
            )
        } else {
            (
                ScheduleStatus::Ok,
                format!(
                    "Scheduled {required} rounds on {available} available dates; \
                     {} spare week{} set as free weeks.",
                    assembly.spare_weeks,
                    plural(assembly.spare_weeks)
                ),
            )
        };

        let warnings: Vec<String> = validate_balance(&request.teams, &assembly.rows)
            .iter()
            .map(ToString::to_string)
            .collect();
        if !warnings.is_empty() {
            warn!(count = warnings.len(), "home/away balance not met");
            if self.config.append_balance_warnings {
                message.push_str(" Balance warnings: ");
                message.push_str(&warnings.join("; "));
            }
        }

        info!(
            teams = request.teams.len(),
            rows = assembly.rows.len(),
            rounds = assembly.scheduled_rounds,
            status = ?status,
            "season generated"
        );

        Schedule {
            rows: assembly.rows,
            required_dates: required,
            scheduled_rounds: assembly.scheduled_rounds,
            status,
            message,
            warnings,
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExcludedDate, RowType};

    fn ymd(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn request(teams: &[&str], end: NaiveDate) -> SeasonRequest {
        SeasonRequest::new(teams.iter().copied(), "Wednesday", ymd(1, 1), end)
    }

    #[test]
    fn test_generate_ok_with_spare_weeks() {
        let schedule = SeasonScheduler::new()
            .generate(&request(&["A", "B"], ymd(1, 31)))
            .unwrap();
        assert_eq!(schedule.status, ScheduleStatus::Ok);
        assert_eq!(schedule.required_dates, 2);
        assert_eq!(schedule.scheduled_rounds, 2);
        assert!(schedule.message.contains("3 spare weeks"));
        assert!(schedule.warnings.is_empty());
    }

    #[test]
    fn test_generate_exact_fit_reports_zero_spare() {
        let schedule = SeasonScheduler::new()
            .generate(&request(&["A", "B"], ymd(1, 10)))
            .unwrap();
        assert!(schedule.message.contains("0 spare weeks"));
    }

    #[test]
    fn test_generate_shortfall() {
        // Four teams need six rounds; January has five Wednesdays.
        let schedule = SeasonScheduler::new()
            .generate(&request(&["A", "B", "C", "D"], ymd(1, 31)))
            .unwrap();
        assert_eq!(schedule.status, ScheduleStatus::TooFewDates);
        assert_eq!(schedule.shortfall(), 1);
        assert!(schedule.message.contains("short by 1 date."));
        assert!(!schedule.warnings.is_empty());
        assert!(schedule.message.contains("Balance warnings:"));
    }

    #[test]
    fn test_balance_warnings_can_stay_out_of_message() {
        let scheduler =
            SeasonScheduler::with_config(EngineConfig::new().with_balance_warnings(false));
        let schedule = scheduler
            .generate(&request(&["A", "B", "C", "D"], ymd(1, 31)))
            .unwrap();
        assert!(!schedule.warnings.is_empty());
        assert!(!schedule.message.contains("Balance warnings"));
    }

    #[test]
    fn test_invalid_request_produces_nothing() {
        let mut req = request(&["A", "B"], ymd(1, 31));
        req.weekday = "funday".into();
        let err = SeasonScheduler::new().generate(&req).unwrap_err();
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_exclusions_are_kept() {
        let req = request(&["A", "B"], ymd(1, 31))
            .with_exclusion(ExcludedDate::catchup(ymd(1, 3)).with_notes("Pitch works"));
        let schedule = SeasonScheduler::new().generate(&req).unwrap();
        assert_eq!(schedule.rows[0].row_type, RowType::Catchup);
        assert_eq!(schedule.rows[0].notes.as_deref(), Some("Pitch works"));
        assert_eq!(schedule.rows[1].row_type, RowType::Match);
        assert_eq!(schedule.rows[1].date, ymd(1, 10));
    }

    #[test]
    fn test_custom_spare_notes() {
        let scheduler =
            SeasonScheduler::with_config(EngineConfig::new().with_spare_week_notes("Rest Week"));
        let schedule = scheduler.generate(&request(&["A", "B"], ymd(1, 31))).unwrap();
        let last = schedule.rows.last().unwrap();
        assert_eq!(last.row_type, RowType::Free);
        assert_eq!(last.notes.as_deref(), Some("Rest Week"));
    }

    #[test]
    fn test_shuffle_seed_is_reproducible_and_balanced() {
        let scheduler = SeasonScheduler::with_config(EngineConfig::new().with_shuffle_seed(11));
        let req = request(&["A", "B", "C", "D", "E", "F"], ymd(6, 30));
        let first = scheduler.generate(&req).unwrap();
        let second = scheduler.generate(&req).unwrap();
        assert_eq!(first, second);
        assert!(first.is_complete());
        assert!(first.warnings.is_empty());
    }

    #[test]
    fn test_generate_with_holidays() {
        let holidays = vec![Holiday::new(ymd(1, 1), "New Year's Day")];
        let schedule = SeasonScheduler::new()
            .generate_with_holidays(&request(&["A", "B"], ymd(1, 31)), &holidays)
            .unwrap();
        assert_eq!(
            schedule.rows[0].holiday_warning.as_deref(),
            Some("2 days after New Year's Day")
        );
        assert!(schedule.rows[1].holiday_warning.is_none());
    }

    #[test]
    fn test_check_date_uses_single_date_window() {
        let holidays = [Holiday::new(ymd(12, 25), "Christmas Day")];
        let scheduler = SeasonScheduler::new();
        assert_eq!(
            scheduler.check_date(ymd(12, 16), &holidays).as_deref(),
            Some("9 days before Christmas Day")
        );
        assert!(scheduler.check_date(ymd(12, 10), &holidays).is_none());
    }
}
