//! Team and round-robin participant models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A team taking part in the season.
///
/// Teams are opaque names, unique within one request. The engine never
/// owns their lifecycle; a fresh roster is supplied per request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team(String);

impl Team {
    /// Creates a team from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The team name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Team {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Team {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// One slot of a round-robin pairing.
///
/// Odd rosters are padded with [`Participant::Bye`]; a team drawn against
/// the bye sits the round out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Participant {
    /// A real team.
    Team(Team),
    /// The phantom opponent of an odd roster.
    Bye,
}

impl Participant {
    /// The real team in this slot, if any.
    pub fn team(&self) -> Option<&Team> {
        match self {
            Participant::Team(team) => Some(team),
            Participant::Bye => None,
        }
    }

    /// Whether this slot is the bye.
    #[inline]
    pub fn is_bye(&self) -> bool {
        matches!(self, Participant::Bye)
    }
}

impl From<Team> for Participant {
    fn from(team: Team) -> Self {
        Participant::Team(team)
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Participant::Team(team) => fmt::Display::fmt(team, f),
            Participant::Bye => f.write_str("BYE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_name_and_display() {
        let t = Team::new("Rovers");
        assert_eq!(t.name(), "Rovers");
        assert_eq!(t.to_string(), "Rovers");
        assert_eq!(Team::from("Rovers"), t);
    }

    #[test]
    fn test_participant_accessors() {
        let p = Participant::from(Team::new("A"));
        assert_eq!(p.team().map(Team::name), Some("A"));
        assert!(!p.is_bye());

        assert!(Participant::Bye.is_bye());
        assert!(Participant::Bye.team().is_none());
        assert_eq!(Participant::Bye.to_string(), "BYE");
    }

    #[test]
    fn test_team_serializes_as_plain_string() {
        let json = serde_json::to_string(&Team::new("A")).unwrap();
        assert_eq!(json, "\"A\"");
    }
}
