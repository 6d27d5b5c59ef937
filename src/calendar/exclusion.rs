//! Resolution of withheld dates against the season calendar.
//!
//! Withheld dates override the weekly sequence: a date is available iff it
//! belongs to the sequence AND carries no exclusion. The full sequence is
//! kept so withheld and spare weeks still land in their chronological slot.

use chrono::NaiveDate;
use tracing::debug;

use super::DateSequence;
use crate::models::ExcludedDate;

/// The season calendar with exclusions attached by date index.
#[derive(Debug, Clone, Default)]
pub struct ResolvedDates {
    sequence: DateSequence,
    slots: Vec<Option<ExcludedDate>>,
    available: Vec<usize>,
    unmatched: Vec<ExcludedDate>,
}

impl ResolvedDates {
    /// Attaches exclusions to their dates.
    ///
    /// Exclusions whose date is not in the sequence (another weekday, or
    /// outside the season) cannot withhold anything and are kept aside in
    /// [`unmatched`](Self::unmatched). When two exclusions share a date the
    /// later one wins.
    pub fn resolve(sequence: DateSequence, exclusions: &[ExcludedDate]) -> Self {
        let mut slots: Vec<Option<ExcludedDate>> = vec![None; sequence.len()];
        let mut unmatched = Vec::new();

        for excluded in exclusions {
            match sequence.index_of(excluded.date) {
                Some(idx) => slots[idx] = Some(excluded.clone()),
                None => unmatched.push(excluded.clone()),
            }
        }

        let available: Vec<usize> = slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(idx, _)| idx)
            .collect();

        if !unmatched.is_empty() {
            debug!(
                count = unmatched.len(),
                "exclusions outside the match-day sequence ignored"
            );
        }

        Self {
            sequence,
            slots,
            available,
            unmatched,
        }
    }

    /// The full chronological sequence.
    pub fn sequence(&self) -> &DateSequence {
        &self.sequence
    }

    /// The exclusion attached to a date index.
    pub fn exclusion_at(&self, index: usize) -> Option<&ExcludedDate> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Whether a date index is withheld.
    pub fn is_excluded(&self, index: usize) -> bool {
        self.exclusion_at(index).is_some()
    }

    /// Indices of dates eligible to host a round, ascending.
    pub fn available(&self) -> &[usize] {
        &self.available
    }

    /// Dates eligible to host a round, ascending.
    pub fn available_dates(&self) -> Vec<NaiveDate> {
        self.available
            .iter()
            .filter_map(|&idx| self.sequence.get(idx))
            .collect()
    }

    /// Number of dates eligible to host a round.
    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    /// Number of withheld dates inside the sequence.
    pub fn excluded_count(&self) -> usize {
        self.sequence.len() - self.available.len()
    }

    /// Exclusions that matched no date of the sequence.
    pub fn unmatched(&self) -> &[ExcludedDate] {
        &self.unmatched
    }

    /// Iterates every date with its exclusion, chronologically.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, Option<&ExcludedDate>)> + '_ {
        self.sequence
            .dates()
            .iter()
            .copied()
            .zip(self.slots.iter().map(Option::as_ref))
    }
}
