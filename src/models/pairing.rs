//! Pairings and rounds produced by the round-robin generator.

use serde::{Deserialize, Serialize};

use super::{Participant, Team};

/// One fixture of a round: a home team against a team or the bye.
///
/// Pairings are produced only by the generator and never mutated; the
/// assembler reinterprets them into schedule rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    /// Home side. For a bye pairing, the team sitting out.
    pub home: Team,
    /// Away side, or the bye.
    pub away: Participant,
    /// Zero-based index of the round this pairing belongs to.
    pub round_index: usize,
}

impl Pairing {
    /// Creates a pairing.
    pub fn new(home: Team, away: Participant, round_index: usize) -> Self {
        Self {
            home,
            away,
            round_index,
        }
    }

    /// Whether this pairing is a bye for the home team.
    #[inline]
    pub fn is_bye(&self) -> bool {
        self.away.is_bye()
    }

    /// Whether the given team plays in this pairing.
    pub fn involves(&self, team: &Team) -> bool {
        &self.home == team || self.away.team() == Some(team)
    }

    /// The same fixture with home and away exchanged, placed in another round.
    ///
    /// A bye pairing keeps its team in the home slot.
    pub fn reversed(&self, round_index: usize) -> Self {
        match &self.away {
            Participant::Team(away) => Self::new(
                away.clone(),
                Participant::Team(self.home.clone()),
                round_index,
            ),
            Participant::Bye => Self::new(self.home.clone(), Participant::Bye, round_index),
        }
    }
}

/// A bundle of pairings using every participant exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// Zero-based round index across the whole season.
    pub index: usize,
    /// Pairings in this round, including any bye pairing.
    pub pairings: Vec<Pairing>,
}

impl Round {
    /// Creates a round.
    pub fn new(index: usize, pairings: Vec<Pairing>) -> Self {
        Self { index, pairings }
    }

    /// Pairings between two real teams.
    pub fn matches(&self) -> impl Iterator<Item = &Pairing> {
        self.pairings.iter().filter(|p| !p.is_bye())
    }

    /// The bye pairing of this round, if the roster is odd.
    pub fn bye(&self) -> Option<&Pairing> {
        self.pairings.iter().find(|p| p.is_bye())
    }

    /// Number of pairings (including the bye).
    pub fn len(&self) -> usize {
        self.pairings.len()
    }

    /// Whether the round has no pairings.
    pub fn is_empty(&self) -> bool {
        self.pairings.is_empty()
    }
}
