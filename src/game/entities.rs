use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::ranking::CareerStats;

/// Type alias for athlete identifiers.
pub type AthleteId = Uuid;

/// Type alias for team identifiers.
pub type TeamId = Uuid;

/// Type alias for match identifiers.
pub type MatchId = Uuid;

/// Phantom team id marking a walkover slot in the bracket. A match with
/// this on one side is decided without being played.
pub const BYE_TEAM_ID: TeamId = Uuid::nil();

/// A registered player. Athletes outlive tournaments: their career
/// stats accumulate across every tournament they place in.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Athlete {
    pub id: AthleteId,
    pub name: String,
    #[serde(default)]
    pub stats: CareerStats,
}

impl Athlete {
    /// Create an athlete with a fresh id and a zeroed career record.
    /// The name is trimmed; callers reject empty or duplicate names.
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            stats: CareerStats::default(),
        }
    }
}

impl fmt::Display for Athlete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)
    }
}

/// Cumulative per-tournament team stats, reset only by starting a new
/// tournament state.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct TeamStats {
    /// Group-standings points: 3 per win, 1 per loss.
    pub classification_points: u32,
    pub sets_won: u32,
    pub sets_lost: u32,
    pub points_scored: u32,
    pub points_conceded: u32,
    pub wins: u32,
    pub losses: u32,
}

impl TeamStats {
    /// Set-difference standings key.
    pub fn set_diff(&self) -> i64 {
        i64::from(self.sets_won) - i64::from(self.sets_lost)
    }

    /// Point-difference standings key.
    pub fn point_diff(&self) -> i64 {
        i64::from(self.points_scored) - i64::from(self.points_conceded)
    }
}

/// A pair of athletes registered for the current tournament. The athlete
/// ids are weak references into the athlete registry; a team never owns
/// athlete lifetimes.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub athletes: [AthleteId; 2],
    #[serde(default)]
    pub stats: TeamStats,
}

impl Team {
    pub fn new(name: &str, athlete1: AthleteId, athlete2: AthleteId) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            athletes: [athlete1, athlete2],
            stats: TeamStats::default(),
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)
    }
}

/// Which stage of the tournament a match belongs to.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPhase {
    Group,
    Elimination,
}

/// Labels for the two round-2 bracket matches.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalSlot {
    Final1v2,
    Final3v4,
}

impl fmt::Display for FinalSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Final1v2 => "Finale 1º-2º",
            Self::Final3v4 => "Finale 3º-4º",
        };
        write!(f, "{repr}")
    }
}

/// Court side, used for the serving indicator.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    One,
    Two,
}

/// Final point totals of one played set, side 1 first.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SetScore(pub u32, pub u32);

/// A single fixture between two teams, either inside a group's round
/// robin or in the elimination bracket.
///
/// Invariant: `winner` is `Some` if and only if `confirmed` is true, and
/// the winner is whichever side took strictly more sets. A match flips
/// from unconfirmed to confirmed exactly once; there is no revision path.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Match {
    pub id: MatchId,
    pub team1: TeamId,
    pub team2: TeamId,
    pub phase: MatchPhase,
    /// Index of the owning group, group-phase matches only.
    #[serde(default)]
    pub group: Option<usize>,
    /// Elimination round: 0 = first knockout round, 1 = semifinals,
    /// 2 = finals.
    #[serde(default)]
    pub round: u8,
    #[serde(default)]
    pub slot: Option<FinalSlot>,
    #[serde(default)]
    pub sets1: u32,
    #[serde(default)]
    pub sets2: u32,
    #[serde(default)]
    pub scores: Vec<SetScore>,
    #[serde(default)]
    pub serving: Side,
    #[serde(default)]
    pub confirmed: bool,
    #[serde(default)]
    pub winner: Option<TeamId>,
}

impl Match {
    fn new(team1: TeamId, team2: TeamId, phase: MatchPhase) -> Self {
        Self {
            id: Uuid::new_v4(),
            team1,
            team2,
            phase,
            group: None,
            round: 0,
            slot: None,
            sets1: 0,
            sets2: 0,
            scores: Vec::new(),
            serving: Side::One,
            confirmed: false,
            winner: None,
        }
    }

    /// Create an unconfirmed group-phase fixture.
    pub fn group(team1: TeamId, team2: TeamId, group: usize) -> Self {
        let mut m = Self::new(team1, team2, MatchPhase::Group);
        m.group = Some(group);
        m
    }

    /// Create an unconfirmed elimination fixture for the given round.
    pub fn elimination(team1: TeamId, team2: TeamId, round: u8) -> Self {
        let mut m = Self::new(team1, team2, MatchPhase::Elimination);
        m.round = round;
        m
    }

    /// Tag the match as one of the two finals.
    pub fn with_slot(mut self, slot: FinalSlot) -> Self {
        self.slot = Some(slot);
        self
    }

    /// Whether one side of the match is the bye sentinel.
    pub fn involves_bye(&self) -> bool {
        self.team1 == BYE_TEAM_ID || self.team2 == BYE_TEAM_ID
    }

    /// The non-winning side of a decided match.
    pub fn loser(&self) -> Option<TeamId> {
        self.winner
            .map(|w| if w == self.team2 { self.team1 } else { self.team2 })
    }

    /// Total points accumulated over all recorded sets, per side.
    pub fn points_total(&self) -> (u32, u32) {
        self.scores
            .iter()
            .fold((0, 0), |(p1, p2), s| (p1 + s.0, p2 + s.1))
    }
}

/// A round-robin sub-tournament among a subset of the registered teams.
/// All pairs are generated once; match order is irrelevant afterwards.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Group {
    pub name: String,
    pub teams: Vec<TeamId>,
    pub matches: Vec<Match>,
}

/// Look up an athlete in the registry.
pub fn athlete_by_id(athletes: &[Athlete], id: AthleteId) -> Option<&Athlete> {
    athletes.iter().find(|a| a.id == id)
}

/// Look up a team in the registry.
pub fn team_by_id(teams: &[Team], id: TeamId) -> Option<&Team> {
    teams.iter().find(|t| t.id == id)
}
