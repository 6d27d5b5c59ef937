//! Season quality metrics (KPIs).
//!
//! Computes per-team and season-wide indicators from a schedule's rows.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Home / Away | Match rows hosted / visited |
//! | Byes | Bye rows naming the team |
//! | Longest home streak | Most consecutive home matches |
//! | Longest away streak | Most consecutive away matches |
//! | Match weeks | Distinct dates hosting a match or bye |
//! | Free / withheld weeks | Rows of those kinds |
//!
//! Streaks follow row order and skip byes. The generator's alternation rule
//! is best-effort, so streaks are reported here rather than bounded.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::{RowType, Schedule, ScheduleRow};

/// Per-team indicators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamKpi {
    /// Team name.
    pub team: String,
    /// Home matches.
    pub home: usize,
    /// Away matches.
    pub away: usize,
    /// Byes.
    pub byes: usize,
    /// Most consecutive home matches.
    pub longest_home_streak: usize,
    /// Most consecutive away matches.
    pub longest_away_streak: usize,
}

impl TeamKpi {
    fn calculate(team: &str, rows: &[ScheduleRow]) -> Self {
        let mut kpi = Self {
            team: team.to_string(),
            home: 0,
            away: 0,
            byes: 0,
            longest_home_streak: 0,
            longest_away_streak: 0,
        };
        let mut home_run = 0;
        let mut away_run = 0;

        for row in rows {
            match row.row_type {
                RowType::Bye if row.home_team.as_deref() == Some(team) => kpi.byes += 1,
                RowType::Match if row.home_team.as_deref() == Some(team) => {
                    kpi.home += 1;
                    home_run += 1;
                    away_run = 0;
                    kpi.longest_home_streak = kpi.longest_home_streak.max(home_run);
                }
                RowType::Match if row.away_team.as_deref() == Some(team) => {
                    kpi.away += 1;
                    away_run += 1;
                    home_run = 0;
                    kpi.longest_away_streak = kpi.longest_away_streak.max(away_run);
                }
                _ => {}
            }
        }
        kpi
    }

    /// Matches played.
    pub fn matches(&self) -> usize {
        self.home + self.away
    }

    /// Longest run on one side.
    pub fn longest_streak(&self) -> usize {
        self.longest_home_streak.max(self.longest_away_streak)
    }
}

/// Season indicators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonKpi {
    /// Per-team indicators, in roster order.
    pub teams: Vec<TeamKpi>,
    /// Match rows.
    pub match_count: usize,
    /// Distinct dates hosting a match or bye.
    pub match_weeks: usize,
    /// Free rows (withheld or spare).
    pub free_weeks: usize,
    /// Catch-up and special rows.
    pub withheld_weeks: usize,
    /// First date in the schedule.
    pub first_date: Option<NaiveDate>,
    /// Last date in the schedule.
    pub last_date: Option<NaiveDate>,
}

impl SeasonKpi {
    /// Computes KPIs for a roster from a schedule.
    pub fn calculate<S: AsRef<str>>(schedule: &Schedule, teams: &[S]) -> Self {
        Self::from_rows(&schedule.rows, teams)
    }

    /// Computes KPIs for a roster from bare rows.
    pub fn from_rows<S: AsRef<str>>(rows: &[ScheduleRow], teams: &[S]) -> Self {
        let match_weeks: HashSet<NaiveDate> = rows
            .iter()
            .filter(|r| r.row_type.is_fixture())
            .map(|r| r.date)
            .collect();

        Self {
            teams: teams
                .iter()
                .map(|t| TeamKpi::calculate(t.as_ref(), rows))
                .collect(),
            match_count: rows.iter().filter(|r| r.row_type == RowType::Match).count(),
            match_weeks: match_weeks.len(),
            free_weeks: rows.iter().filter(|r| r.row_type == RowType::Free).count(),
            withheld_weeks: rows
                .iter()
                .filter(|r| matches!(r.row_type, RowType::Catchup | RowType::Special))
                .count(),
            first_date: rows.iter().map(|r| r.date).min(),
            last_date: rows.iter().map(|r| r.date).max(),
        }
    }

    /// Indicators for one team.
    pub fn team(&self, name: &str) -> Option<&TeamKpi> {
        self.teams.iter().find(|t| t.team == name)
    }

    /// Whether every team hosts as often as it visits.
    pub fn is_home_away_even(&self) -> bool {
        self.teams.iter().all(|t| t.home == t.away)
    }

    /// Longest single-side run across all teams.
    pub fn max_streak(&self) -> usize {
        self.teams
            .iter()
            .map(TeamKpi::longest_streak)
            .max()
            .unwrap_or(0)
    }
}
