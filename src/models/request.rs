//! Season generation request.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ExcludedDate, Team};
use crate::error::Result;

/// Input for generating one season.
///
/// # Example
///
/// ```
/// use u_fixture::models::SeasonRequest;
///
/// let request = SeasonRequest::from_json(r#"{
///     "teams": ["A", "B", "C"],
///     "weekday": "Wednesday",
///     "seasonStart": "2024-01-01",
///     "seasonEnd": "2024-03-31",
///     "excludeDates": [{"date": "2024-02-14", "kind": "special", "notes": "Gala"}]
/// }"#).unwrap();
/// assert_eq!(request.teams.len(), 3);
/// assert_eq!(request.exclude_dates.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonRequest {
    /// Team names (at least two, unique).
    pub teams: Vec<String>,
    /// Match weekday name, `monday` through `sunday`, any case.
    pub weekday: String,
    /// First day of the season (inclusive).
    pub season_start: NaiveDate,
    /// Last day of the season (inclusive, after `season_start`).
    pub season_end: NaiveDate,
    /// Dates withheld from match assignment.
    #[serde(default)]
    pub exclude_dates: Vec<ExcludedDate>,
}

impl SeasonRequest {
    /// Creates a request with no exclusions.
    pub fn new<I, S>(
        teams: I,
        weekday: impl Into<String>,
        season_start: NaiveDate,
        season_end: NaiveDate,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            teams: teams.into_iter().map(Into::into).collect(),
            weekday: weekday.into(),
            season_start,
            season_end,
            exclude_dates: Vec::new(),
        }
    }

    /// Adds a withheld date.
    pub fn with_exclusion(mut self, excluded: ExcludedDate) -> Self {
        self.exclude_dates.push(excluded);
        self
    }

    /// Adds several withheld dates.
    pub fn with_exclusions(mut self, excluded: impl IntoIterator<Item = ExcludedDate>) -> Self {
        self.exclude_dates.extend(excluded);
        self
    }

    /// Parses a JSON request body.
    ///
    /// Malformed JSON or dates are reported as [`Error::InvalidInput`](crate::Error::InvalidInput).
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// The roster as teams, in request order.
    pub fn roster(&self) -> Vec<Team> {
        self.teams.iter().map(|name| Team::new(name.as_str())).collect()
    }
}
