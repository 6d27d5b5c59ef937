//! Double round-robin pairing generation.
//!
//! # Algorithm (circle method)
//!
//! 1. Pad an odd roster with [`Participant::Bye`] so `m` participants remain.
//! 2. Fix participant 0 and rotate the other `m - 1` one slot per round.
//!    In each round, slot `i` meets slot `m - 1 - i` for `i < m / 2`.
//!    After `m - 1` rounds every unordered pair has met exactly once.
//! 3. Hosts are chosen per fixture by the greedy rule in
//!    [`AlternationState`], threaded through the rounds as an accumulator.
//! 4. The second half repeats the first half round by round with home and
//!    away swapped, which alone guarantees every pair meets once in each
//!    direction.
//!
//! A bye pairing keeps its real team in the home slot and does not count
//! as an appearance for alternation.
//!
//! # Complexity
//! O(m²) pairings for `m` participants.
//!
//! # Reference
//! Kirkman (1847); de Werra (1981), "Scheduling in Sports", for the
//! circle (polygon) construction.

mod alternation;

pub use alternation::AlternationState;

use std::collections::HashSet;

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Pairing, Participant, Round, Team};

/// Participants after padding an odd roster with the bye.
pub fn padded_size(team_count: usize) -> usize {
    team_count + team_count % 2
}

/// Rounds needed for a full double round-robin of `team_count` teams.
///
/// `2 × (m − 1)` where `m` is the padded participant count; zero for fewer
/// than two teams.
///
/// ```
/// use u_fixture::pairing::required_rounds;
///
/// assert_eq!(required_rounds(4), 6);
/// assert_eq!(required_rounds(5), 10);
/// ```
pub fn required_rounds(team_count: usize) -> usize {
    if team_count < 2 {
        return 0;
    }
    2 * (padded_size(team_count) - 1)
}

/// Generates the full season of rounds for a roster.
///
/// Fails with [`Error::InvalidInput`] for fewer than two teams or a
/// repeated team name.
pub fn generate_rounds(teams: &[Team]) -> Result<Vec<Round>> {
    let participants = pad_roster(teams)?;
    let first_half = first_half(&participants);
    let half = first_half.len();

    let second_half: Vec<Round> = first_half
        .iter()
        .map(|round| {
            let index = round.index + half;
            Round::new(
                index,
                round.pairings.iter().map(|p| p.reversed(index)).collect(),
            )
        })
        .collect();

    let mut rounds = first_half;
    rounds.extend(second_half);

    debug!(
        teams = teams.len(),
        participants = participants.len(),
        rounds = rounds.len(),
        "generated double round-robin"
    );
    Ok(rounds)
}

fn pad_roster(teams: &[Team]) -> Result<Vec<Participant>> {
    if teams.len() < 2 {
        return Err(Error::InvalidInput(format!(
            "at least 2 teams are required, got {}",
            teams.len()
        )));
    }

    let mut seen = HashSet::new();
    for team in teams {
        if !seen.insert(team) {
            return Err(Error::InvalidInput(format!("duplicate team: {team}")));
        }
    }

    let mut participants: Vec<Participant> =
        teams.iter().cloned().map(Participant::Team).collect();
    if participants.len() % 2 == 1 {
        participants.push(Participant::Bye);
    }
    Ok(participants)
}

/// Slot arrangement for a round: the fixed participant, then the rotation.
///
/// After `round` right-rotations the rotating ring has shifted by `round`.
fn circle_arrangement(participants: usize, round: usize) -> Vec<usize> {
    let ring = participants - 1;
    let shift = round % ring;
    std::iter::once(0)
        .chain((0..ring).map(|k| 1 + (k + ring - shift) % ring))
        .collect()
}

fn first_half(participants: &[Participant]) -> Vec<Round> {
    let m = participants.len();
    let (rounds, _) = (0..m - 1).fold(
        (Vec::with_capacity(m - 1), AlternationState::new(m)),
        |(mut rounds, state), round_index| {
            let (round, state) = pair_round(participants, round_index, state);
            rounds.push(round);
            (rounds, state)
        },
    );
    rounds
}

/// Builds one round from the circle arrangement, returning the next state.
fn pair_round(
    participants: &[Participant],
    round_index: usize,
    state: AlternationState,
) -> (Round, AlternationState) {
    let m = participants.len();
    let slots = circle_arrangement(m, round_index);

    let mut pairings = Vec::with_capacity(m / 2);
    let mut state = state;
    for i in 0..m / 2 {
        let (a, b) = (slots[i], slots[m - 1 - i]);
        match (&participants[a], &participants[b]) {
            (Participant::Team(team), Participant::Bye)
            | (Participant::Bye, Participant::Team(team)) => {
                pairings.push(Pairing::new(team.clone(), Participant::Bye, round_index));
            }
            (Participant::Team(team_a), Participant::Team(team_b)) => {
                let (home, away) = state.choose_home(a, b, round_index);
                state = state.record(home, away);
                let (home_team, away_team) = if home == a {
                    (team_a, team_b)
                } else {
                    (team_b, team_a)
                };
                pairings.push(Pairing::new(
                    home_team.clone(),
                    Participant::Team(away_team.clone()),
                    round_index,
                ));
            }
            // A padded roster holds a single bye.
            (Participant::Bye, Participant::Bye) => {}
        }
    }

    (Round::new(round_index, pairings), state)
}
