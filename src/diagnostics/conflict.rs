//! Same-day double booking detection.
//!
//! A generated schedule never books a team twice on one date, since each
//! round uses every team at most once. Manual edits can; this check finds
//! every such team together with the rows responsible.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::DateSequence;
use crate::models::ScheduleRow;

/// A team booked more than once on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// The contested date.
    pub date: NaiveDate,
    /// The double-booked team.
    pub team: String,
    /// Indices of the rows naming the team on that date, ascending.
    pub rows: Vec<usize>,
}

/// One team's appearances on a date.
struct Booking<'a> {
    team: &'a str,
    appearances: usize,
    rows: Vec<usize>,
}

/// Finds every team booked more than once on the same date.
///
/// Match and bye rows count; a bye books the team sitting out. A match
/// naming one team on both sides books it twice. Withheld weeks are
/// ignored. Conflicts are ordered by date, then by the team's first row.
pub fn detect_conflicts(rows: &[ScheduleRow]) -> Vec<Conflict> {
    let dates = DateSequence::from_dates(rows.iter().map(|r| r.date).collect());
    let mut bookings: Vec<Vec<Booking<'_>>> = (0..dates.len()).map(|_| Vec::new()).collect();

    for (idx, row) in rows.iter().enumerate() {
        if !row.row_type.is_fixture() {
            continue;
        }
        let Some(slot) = dates.index_of(row.date) else {
            continue;
        };
        let day = &mut bookings[slot];
        for team in row.teams() {
            match day.iter_mut().find(|b| b.team == team) {
                Some(booking) => {
                    booking.appearances += 1;
                    if booking.rows.last() != Some(&idx) {
                        booking.rows.push(idx);
                    }
                }
                None => day.push(Booking {
                    team,
                    appearances: 1,
                    rows: vec![idx],
                }),
            }
        }
    }

    dates
        .iter()
        .flat_map(|(slot, date)| {
            bookings[slot]
                .iter()
                .filter(|b| b.appearances > 1)
                .map(move |b| Conflict {
                    date,
                    team: b.team.to_string(),
                    rows: b.rows.clone(),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Row indices involved in any conflict, for highlighting.
pub fn conflicting_rows(conflicts: &[Conflict]) -> BTreeSet<usize> {
    conflicts
        .iter()
        .flat_map(|c| c.rows.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn test_no_conflicts() {
        let rows = vec![
            ScheduleRow::fixture(d(3), "A", "B"),
            ScheduleRow::fixture(d(3), "C", "D"),
            ScheduleRow::fixture(d(10), "A", "C"),
        ];
        assert!(detect_conflicts(&rows).is_empty());
    }

    #[test]
    fn test_double_booking() {
        let rows = vec![
            ScheduleRow::fixture(d(3), "A", "B"),
            ScheduleRow::fixture(d(10), "C", "D"),
            ScheduleRow::fixture(d(3), "C", "A"),
        ];
        let conflicts = detect_conflicts(&rows);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].date, d(3));
        assert_eq!(conflicts[0].team, "A");
        assert_eq!(conflicts[0].rows, vec![0, 2]);
        assert_eq!(conflicting_rows(&conflicts).into_iter().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_bye_and_match_same_date() {
        let rows = vec![
            ScheduleRow::fixture(d(3), "A", "B"),
            ScheduleRow::bye(d(3), "A"),
        ];
        let conflicts = detect_conflicts(&rows);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].team, "A");
        assert_eq!(conflicts[0].rows, vec![0, 1]);
    }

    #[test]
    fn test_bye_on_other_date_is_fine() {
        let rows = vec![
            ScheduleRow::fixture(d(3), "A", "B"),
            ScheduleRow::bye(d(3), "C"),
            ScheduleRow::bye(d(10), "A"),
            ScheduleRow::free(d(10), "Free Week"),
        ];
        assert!(detect_conflicts(&rows).is_empty());
    }

    #[test]
    fn test_team_against_itself() {
        let rows = vec![
            ScheduleRow::fixture(d(3), "A", "A"),
            ScheduleRow::fixture(d(3), "B", "C"),
        ];
        let conflicts = detect_conflicts(&rows);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].team, "A");
        assert_eq!(conflicts[0].rows, vec![0]);
    }

    #[test]
    fn test_conflicts_ordered_by_date() {
        let rows = vec![
            ScheduleRow::fixture(d(10), "C", "D"),
            ScheduleRow::fixture(d(10), "D", "E"),
            ScheduleRow::fixture(d(3), "A", "B"),
            ScheduleRow::fixture(d(3), "B", "A"),
        ];
        let conflicts = detect_conflicts(&rows);
        let summary: Vec<_> = conflicts
            .iter()
            .map(|c| (c.date, c.team.as_str()))
            .collect();
        assert_eq!(summary, vec![(d(3), "A"), (d(3), "B"), (d(10), "D")]);
    }
}
