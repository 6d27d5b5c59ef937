//! Schedule rows and the season schedule response.
//!
//! A schedule is the chronological row list exposed to callers: one row per
//! fixture or bye on a match date, one row per withheld date, one row per
//! spare week. Rows carry a dense `order` that manual edits keep intact.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ExcludedDate, ExclusionKind};

/// Classification of a schedule row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowType {
    /// A fixture between two teams.
    Match,
    /// Catch-up week.
    Catchup,
    /// Free week (withheld or spare).
    Free,
    /// Special event.
    Special,
    /// A team sitting out its round.
    Bye,
}

impl RowType {
    /// Whether this row stands for a withheld or spare week.
    #[inline]
    pub fn is_exclusion(self) -> bool {
        matches!(self, RowType::Catchup | RowType::Free | RowType::Special)
    }

    /// Whether this row belongs to a generated round.
    #[inline]
    pub fn is_fixture(self) -> bool {
        matches!(self, RowType::Match | RowType::Bye)
    }
}

impl From<ExclusionKind> for RowType {
    fn from(kind: ExclusionKind) -> Self {
        match kind {
            ExclusionKind::Catchup => RowType::Catchup,
            ExclusionKind::Free => RowType::Free,
            ExclusionKind::Special => RowType::Special,
        }
    }
}

/// One line of the season schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRow {
    /// Calendar date of the row.
    pub date: NaiveDate,
    /// Row classification.
    pub row_type: RowType,
    /// Home team, or the team sitting out for a bye row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_team: Option<String>,
    /// Away team (match rows only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub away_team: Option<String>,
    /// Notes (withheld and spare weeks).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Position in the schedule, dense from 0.
    pub order: usize,
    /// Advisory text when the date is close to a holiday.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holiday_warning: Option<String>,
}

impl ScheduleRow {
    fn blank(date: NaiveDate, row_type: RowType) -> Self {
        Self {
            date,
            row_type,
            home_team: None,
            away_team: None,
            notes: None,
            order: 0,
            holiday_warning: None,
        }
    }

    /// Creates a match row.
    pub fn fixture(date: NaiveDate, home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home_team: Some(home.into()),
            away_team: Some(away.into()),
            ..Self::blank(date, RowType::Match)
        }
    }

    /// Creates a bye row naming only the team sitting out.
    pub fn bye(date: NaiveDate, team: impl Into<String>) -> Self {
        Self {
            home_team: Some(team.into()),
            ..Self::blank(date, RowType::Bye)
        }
    }

    /// Creates the row for a withheld date, preserving its kind and notes.
    pub fn exclusion(excluded: &ExcludedDate) -> Self {
        Self {
            notes: Some(excluded.notes.clone()),
            ..Self::blank(excluded.date, excluded.kind.into())
        }
    }

    /// Creates a free row for a spare week.
    pub fn free(date: NaiveDate, notes: impl Into<String>) -> Self {
        Self {
            notes: Some(notes.into()),
            ..Self::blank(date, RowType::Free)
        }
    }

    /// Sets the order.
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Teams named on this row (home first).
    pub fn teams(&self) -> impl Iterator<Item = &str> {
        self.home_team
            .as_deref()
            .into_iter()
            .chain(self.away_team.as_deref())
    }

    /// Whether the team is named on this row.
    pub fn involves(&self, team: &str) -> bool {
        self.teams().any(|t| t == team)
    }
}

/// Outcome classification of a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    /// Every round was placed.
    #[default]
    Ok,
    /// Fewer available dates than rounds; the schedule is partial.
    TooFewDates,
}

/// A generated season schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Chronological rows.
    pub rows: Vec<ScheduleRow>,
    /// Rounds (dates) needed for the full double round-robin.
    pub required_dates: usize,
    /// Rounds actually placed on dates.
    #[serde(default)]
    pub scheduled_rounds: usize,
    /// Completion status.
    pub status: ScheduleStatus,
    /// Human-readable summary, with any balance warnings appended.
    pub message: String,
    /// Balance warnings detected after assembly.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl Schedule {
    /// Whether every required round was placed.
    pub fn is_complete(&self) -> bool {
        self.status == ScheduleStatus::Ok
    }

    /// Number of rounds that could not be placed.
    pub fn shortfall(&self) -> usize {
        self.required_dates.saturating_sub(self.scheduled_rounds)
    }

    /// All match rows.
    pub fn match_rows(&self) -> impl Iterator<Item = &ScheduleRow> {
        self.rows.iter().filter(|r| r.row_type == RowType::Match)
    }

    /// Rows falling on a date.
    pub fn rows_on(&self, date: NaiveDate) -> Vec<&ScheduleRow> {
        self.rows.iter().filter(|r| r.date == date).collect()
    }

    /// Match and bye rows naming a team.
    pub fn fixtures_for(&self, team: &str) -> Vec<&ScheduleRow> {
        self.rows
            .iter()
            .filter(|r| r.row_type.is_fixture() && r.involves(team))
            .collect()
    }

    /// Distinct dates in row order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = Vec::new();
        for row in &self.rows {
            if !dates.contains(&row.date) {
                dates.push(row.date);
            }
        }
        dates
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
