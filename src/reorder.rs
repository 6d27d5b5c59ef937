//! Manual reordering of schedule rows.
//!
//! Every operation takes a row list and returns a new one with `order`
//! renumbered densely from 0. Nothing is persisted.
//!
//! # Displacement
//!
//! Rows are grouped into movable units once per call. A withheld week
//! (catch-up, free, special) that shares its date with match or bye rows
//! locks that whole date into one unit: moving any of its rows moves all
//! of them together, in their existing relative order. Every other row is
//! a unit of its own.
//!
//! Row dates are left untouched; a move that lands a fixture among another
//! date's rows is surfaced by conflict detection, not corrected here.

use serde::{Deserialize, Serialize};

use crate::calendar::DateSequence;
use crate::models::ScheduleRow;

/// Direction for a block move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    /// One unit toward the start of the schedule.
    Up,
    /// One unit toward the end of the schedule.
    Down,
}

/// Rows partitioned into units that move as a whole.
struct Units {
    /// Row indices per unit, in list order.
    members: Vec<Vec<usize>>,
    /// Unit index per row.
    unit_of: Vec<usize>,
}

impl Units {
    fn group(rows: &[ScheduleRow]) -> Self {
        let dates = DateSequence::from_dates(rows.iter().map(|r| r.date).collect());
        let slot_of: Vec<usize> = rows
            .iter()
            .map(|r| dates.index_of(r.date).unwrap_or_default())
            .collect();

        let mut has_exclusion = vec![false; dates.len()];
        let mut has_fixture = vec![false; dates.len()];
        let mut by_date: Vec<Vec<usize>> = vec![Vec::new(); dates.len()];
        for (idx, row) in rows.iter().enumerate() {
            let slot = slot_of[idx];
            has_exclusion[slot] |= row.row_type.is_exclusion();
            has_fixture[slot] |= row.row_type.is_fixture();
            by_date[slot].push(idx);
        }

        let mut members: Vec<Vec<usize>> = Vec::with_capacity(rows.len());
        let mut unit_of = vec![usize::MAX; rows.len()];
        for idx in 0..rows.len() {
            if unit_of[idx] != usize::MAX {
                continue;
            }
            let slot = slot_of[idx];
            let unit = if has_exclusion[slot] && has_fixture[slot] {
                by_date[slot].clone()
            } else {
                vec![idx]
            };
            for &member in &unit {
                unit_of[member] = members.len();
            }
            members.push(unit);
        }

        Self { members, unit_of }
    }

    fn len(&self) -> usize {
        self.members.len()
    }

    /// Flattens units in the given order into renumbered rows.
    fn flatten(&self, rows: &[ScheduleRow], unit_order: &[usize]) -> Vec<ScheduleRow> {
        unit_order
            .iter()
            .flat_map(|&unit| self.members[unit].iter())
            .enumerate()
            .map(|(order, &idx)| rows[idx].clone().with_order(order))
            .collect()
    }
}

/// Returns the rows with `order` set to each row's position.
pub fn renumber(rows: Vec<ScheduleRow>) -> Vec<ScheduleRow> {
    rows.into_iter()
        .enumerate()
        .map(|(order, row)| row.with_order(order))
        .collect()
}

/// Moves the row at `from` to position `to`.
///
/// Works like removing the row and reinserting it at `to`. If the row is
/// locked into a date unit, the whole unit moves and lands where the unit
/// holding `to` stood. Out-of-range indices, `from == to`, or a target
/// inside the moved unit leave the rows unchanged.
///
/// ```
/// use chrono::NaiveDate;
/// use u_fixture::models::ScheduleRow;
/// use u_fixture::reorder::{move_row, renumber};
///
/// let d = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
/// let rows = renumber(vec![
///     ScheduleRow::fixture(d, "A", "B"),
///     ScheduleRow::fixture(d, "C", "D"),
///     ScheduleRow::fixture(d, "E", "F"),
/// ]);
///
/// let moved = move_row(&rows, 2, 0);
/// assert_eq!(moved[0].home_team.as_deref(), Some("E"));
/// assert_eq!(moved[0].order, 0);
/// ```
pub fn move_row(rows: &[ScheduleRow], from: usize, to: usize) -> Vec<ScheduleRow> {
    if from >= rows.len() || to >= rows.len() || from == to {
        return rows.to_vec();
    }

    let units = Units::group(rows);
    let (source, target) = (units.unit_of[from], units.unit_of[to]);
    if source == target {
        return rows.to_vec();
    }

    let mut unit_order: Vec<usize> = (0..units.len()).collect();
    let moved = unit_order.remove(source);
    unit_order.insert(target.min(unit_order.len()), moved);
    units.flatten(rows, &unit_order)
}

/// Moves a selection of rows one unit up or down as a single block.
///
/// The selected units are lifted out in their existing relative order and
/// reinserted contiguously just above the unit preceding the first
/// selected unit (`Up`) or just below the unit following the last one
/// (`Down`). A non-contiguous selection therefore closes up into one
/// block. An empty selection or any out-of-range index leaves the rows
/// unchanged.
pub fn move_block(
    rows: &[ScheduleRow],
    selected: &[usize],
    direction: MoveDirection,
) -> Vec<ScheduleRow> {
    if selected.is_empty() || selected.iter().any(|&idx| idx >= rows.len()) {
        return rows.to_vec();
    }

    let units = Units::group(rows);
    let mut chosen: Vec<usize> = selected.iter().map(|&idx| units.unit_of[idx]).collect();
    chosen.sort_unstable();
    chosen.dedup();

    let (first, last) = match (chosen.first(), chosen.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return rows.to_vec(),
    };

    let remaining: Vec<usize> = (0..units.len())
        .filter(|unit| chosen.binary_search(unit).is_err())
        .collect();
    let insert_at = match direction {
        MoveDirection::Up => {
            let anchor = first.saturating_sub(1);
            remaining.iter().filter(|&&unit| unit < anchor).count()
        }
        MoveDirection::Down => {
            let anchor = last + 1;
            remaining.iter().filter(|&&unit| unit <= anchor).count()
        }
    };

    let unit_order: Vec<usize> = remaining[..insert_at]
        .iter()
        .chain(chosen.iter())
        .chain(remaining[insert_at..].iter())
        .copied()
        .collect();
    units.flatten(rows, &unit_order)
}
