//! Input validation for season requests.
//!
//! Checks structural integrity of a request before any round is generated.
//! Detects:
//! - Rosters with fewer than two teams
//! - Blank or duplicate team names
//! - Unrecognized weekday names
//! - Season ranges whose end does not follow the start
//! - Two exclusions on the same date
//!
//! Every issue is collected, so a caller can fix a request in one pass.

use std::collections::HashSet;

use crate::calendar::parse_weekday;
use crate::models::SeasonRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Fewer than two teams.
    TooFewTeams,
    /// Two teams share a name.
    DuplicateTeam,
    /// A team name is blank.
    EmptyTeamName,
    /// The weekday is not one of the seven canonical names.
    UnknownWeekday,
    /// The season end is not after the season start.
    InvalidDateRange,
    /// Two exclusions target the same date.
    DuplicateExclusion,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a season request.
///
/// Checks:
/// 1. At least two teams
/// 2. No blank team names
/// 3. No duplicate team names
/// 4. The weekday parses
/// 5. `season_end` is after `season_start`
/// 6. No duplicate exclusion dates
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(request: &SeasonRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.teams.len() < 2 {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooFewTeams,
            format!(
                "At least 2 teams are required, got {}",
                request.teams.len()
            ),
        ));
    }

    let mut names = HashSet::new();
    for name in &request.teams {
        if name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyTeamName,
                "Team names must not be blank",
            ));
            continue;
        }
        if !names.insert(name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateTeam,
                format!("Duplicate team: {name}"),
            ));
        }
    }

    if let Err(err) = parse_weekday(&request.weekday) {
        errors.push(ValidationError::new(
            ValidationErrorKind::UnknownWeekday,
            err.to_string(),
        ));
    }

    if request.season_end <= request.season_start {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDateRange,
            format!(
                "Season end {} must be after season start {}",
                request.season_end, request.season_start
            ),
        ));
    }

    let mut excluded = HashSet::new();
    for exclusion in &request.exclude_dates {
        if !excluded.insert(exclusion.date) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateExclusion,
                format!("Date {} is excluded more than once", exclusion.date),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
