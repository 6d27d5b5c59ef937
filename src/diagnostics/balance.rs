//! Home/away balance check.
//!
//! A complete double round-robin has every ordered pair of distinct teams
//! exactly once among its match rows. Any deviation is reported, never
//! corrected: it is the expected trace of a date shortfall or of manual
//! edits.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{RowType, ScheduleRow};

/// An ordered pairing whose count deviates from the expectation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceIssue {
    /// Home team.
    pub home: String,
    /// Away team.
    pub away: String,
    /// Times this fixture appears.
    pub count: usize,
    /// Times it should appear (1 within the roster, 0 otherwise).
    pub expected: usize,
}

impl fmt::Display for BalanceIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {} (home {}) scheduled {} time{}, expected {}",
            self.home,
            self.away,
            self.home,
            self.count,
            if self.count == 1 { "" } else { "s" },
            self.expected
        )
    }
}

/// Tallies match rows per ordered pair and reports every deviation.
///
/// Pairs within the roster are reported in roster order; fixtures naming a
/// team outside the roster, or a team against itself, follow sorted by name.
pub fn validate_balance<S: AsRef<str>>(teams: &[S], rows: &[ScheduleRow]) -> Vec<BalanceIssue> {
    let mut counts: HashMap<(&str, &str), usize> = HashMap::new();
    for row in rows.iter().filter(|r| r.row_type == RowType::Match) {
        if let (Some(home), Some(away)) = (row.home_team.as_deref(), row.away_team.as_deref()) {
            *counts.entry((home, away)).or_insert(0) += 1;
        }
    }

    let roster: Vec<&str> = teams.iter().map(AsRef::as_ref).collect();
    let members: HashSet<&str> = roster.iter().copied().collect();
    let mut issues = Vec::new();

    for &home in &roster {
        for &away in &roster {
            if home == away {
                continue;
            }
            let count = counts.get(&(home, away)).copied().unwrap_or(0);
            if count != 1 {
                issues.push(BalanceIssue {
                    home: home.to_string(),
                    away: away.to_string(),
                    count,
                    expected: 1,
                });
            }
        }
    }

    let strays: BTreeMap<(&str, &str), usize> = counts
        .into_iter()
        .filter(|((home, away), _)| {
            home == away || !members.contains(home) || !members.contains(away)
        })
        .collect();
    issues.extend(strays.into_iter().map(|((home, away), count)| BalanceIssue {
        home: home.to_string(),
        away: away.to_string(),
        count,
        expected: 0,
    }));

    issues
}
