//! Merges generated rounds with the season calendar.
//!
//! # Algorithm
//!
//! Walk the full date sequence once with a round cursor:
//! 1. A withheld date emits one row of its kind, carrying its notes.
//!    The cursor does not move.
//! 2. Otherwise, if rounds remain, every pairing of the current round is
//!    emitted on this date (bye pairings as bye rows) and the cursor moves.
//! 3. Otherwise the date is a spare week and emits a free row.
//!
//! `order` counts every emitted row from 0. Rounds that find no date are
//! simply left out; the caller reports the shortfall.

use tracing::trace;

use crate::calendar::ResolvedDates;
use crate::models::{Participant, Round, ScheduleRow};

/// Rows produced by one assembly pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assembly {
    /// Chronological rows with dense `order`.
    pub rows: Vec<ScheduleRow>,
    /// Rounds placed on a date.
    pub scheduled_rounds: usize,
    /// Spare dates emitted as free rows.
    pub spare_weeks: usize,
}

impl Assembly {
    /// Rounds that found no date, given the total generated.
    pub fn shortfall(&self, total_rounds: usize) -> usize {
        total_rounds.saturating_sub(self.scheduled_rounds)
    }
}

/// Places rounds on the available dates of a resolved calendar.
pub fn assemble(resolved: &ResolvedDates, rounds: &[Round], spare_week_notes: &str) -> Assembly {
    let mut assembly = Assembly::default();
    let mut pending = rounds.iter();

    for (date, excluded) in resolved.iter() {
        if let Some(excluded) = excluded {
            push(&mut assembly.rows, ScheduleRow::exclusion(excluded));
            continue;
        }

        match pending.next() {
            Some(round) => {
                trace!(%date, round = round.index, "placing round");
                for pairing in &round.pairings {
                    let row = match &pairing.away {
                        Participant::Team(away) => {
                            ScheduleRow::fixture(date, pairing.home.name(), away.name())
                        }
                        Participant::Bye => ScheduleRow::bye(date, pairing.home.name()),
                    };
                    push(&mut assembly.rows, row);
                }
                assembly.scheduled_rounds += 1;
            }
            None => {
                push(&mut assembly.rows, ScheduleRow::free(date, spare_week_notes));
                assembly.spare_weeks += 1;
            }
        }
    }

    assembly
}

fn push(rows: &mut Vec<ScheduleRow>, row: ScheduleRow) {
    let order = rows.len();
    rows.push(row.with_order(order));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::DateSequence;
    use crate::models::{ExcludedDate, RowType, Team};
    use crate::pairing::generate_rounds;
    use chrono::{NaiveDate, Weekday};

    fn ymd(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn roster(names: &[&str]) -> Vec<Team> {
        names.iter().map(|n| Team::new(*n)).collect()
    }

    fn wednesdays(end: NaiveDate, exclusions: &[ExcludedDate]) -> ResolvedDates {
        let seq = DateSequence::weekly(Weekday::Wed, ymd(1, 1), end).unwrap();
        ResolvedDates::resolve(seq, exclusions)
    }

    #[test]
    fn test_exact_fit() {
        let rounds = generate_rounds(&roster(&["A", "B"])).unwrap();
        let resolved = wednesdays(ymd(1, 10), &[]);
        let assembly = assemble(&resolved, &rounds, "Free Week");

        assert_eq!(assembly.rows.len(), 2);
        assert_eq!(assembly.scheduled_rounds, 2);
        assert_eq!(assembly.spare_weeks, 0);
        assert_eq!(assembly.rows[0].date, ymd(1, 3));
        assert_eq!(assembly.rows[1].date, ymd(1, 10));
    }

    #[test]
    fn test_spare_weeks_become_free_rows() {
        let rounds = generate_rounds(&roster(&["A", "B"])).unwrap();
        let resolved = wednesdays(ymd(1, 31), &[]);
        let assembly = assemble(&resolved, &rounds, "Free Week");

        assert_eq!(assembly.spare_weeks, 3);
        let free: Vec<_> = assembly
            .rows
            .iter()
            .filter(|r| r.row_type == RowType::Free)
            .collect();
        assert_eq!(free.len(), 3);
        assert!(free.iter().all(|r| r.notes.as_deref() == Some("Free Week")));
    }

    #[test]
    fn test_exclusion_holds_cursor() {
        let rounds = generate_rounds(&roster(&["A", "B"])).unwrap();
        let resolved = wednesdays(
            ymd(1, 17),
            &[ExcludedDate::catchup(ymd(1, 10)).with_notes("Catch-up")],
        );
        let assembly = assemble(&resolved, &rounds, "Free Week");

        let types: Vec<_> = assembly.rows.iter().map(|r| r.row_type).collect();
        assert_eq!(types, vec![RowType::Match, RowType::Catchup, RowType::Match]);
        assert_eq!(assembly.rows[1].notes.as_deref(), Some("Catch-up"));
        // Second round lands on the 17th.
        assert_eq!(assembly.rows[2].home_team.as_deref(), Some("B"));
        assert_eq!(assembly.rows[2].date, ymd(1, 17));
    }

    #[test]
    fn test_round_rows_share_date_and_orders_dense() {
        let rounds = generate_rounds(&roster(&["A", "B", "C"])).unwrap();
        let resolved = wednesdays(ymd(3, 31), &[]);
        let assembly = assemble(&resolved, &rounds, "Free Week");

        for (i, row) in assembly.rows.iter().enumerate() {
            assert_eq!(row.order, i);
        }
        // Three teams: each round is one match plus one bye on one date.
        for pair in assembly.rows[..12].chunks(2) {
            assert_eq!(pair[0].date, pair[1].date);
            assert_eq!(
                pair.iter().filter(|r| r.row_type == RowType::Bye).count(),
                1
            );
        }
    }

    #[test]
    fn test_shortfall_keeps_partial_rounds() {
        let rounds = generate_rounds(&roster(&["A", "B", "C", "D"])).unwrap();
        let resolved = wednesdays(ymd(1, 24), &[]); // 4 dates, 6 rounds
        let assembly = assemble(&resolved, &rounds, "Free Week");

        assert_eq!(assembly.scheduled_rounds, 4);
        assert_eq!(assembly.shortfall(rounds.len()), 2);
        assert_eq!(assembly.rows.len(), 8);
        assert_eq!(assembly.spare_weeks, 0);
    }

    #[test]
    fn test_empty_calendar() {
        let rounds = generate_rounds(&roster(&["A", "B"])).unwrap();
        let assembly = assemble(&ResolvedDates::default(), &rounds, "Free Week");
        assert!(assembly.rows.is_empty());
        assert_eq!(assembly.shortfall(2), 2);
    }
}
