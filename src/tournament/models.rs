//! Tournament configuration and the root state aggregate.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::game::entities::{Athlete, Group, Match, MatchId, Team, TeamId};

/// Overall tournament structure.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BracketType {
    /// Group stage feeding a knockout bracket.
    #[default]
    GroupsPlayoff,
    /// Declared in configuration; progression currently matches
    /// [`BracketType::GroupsPlayoff`].
    DoubleElimination,
    /// One all-play-all group, no separate group stage.
    SingleGroup,
}

/// Match length.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SetFormat {
    #[default]
    SingleSet,
    BestOfThree,
}

/// How qualifiers are picked from the groups. Only [`Standings`] is
/// implemented; `HeadToHead` is accepted in configuration but standings
/// ranking does not consult it.
///
/// [`Standings`]: AdvanceCriterion::Standings
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvanceCriterion {
    #[default]
    Standings,
    HeadToHead,
}

/// Tournament configuration. Every field has a default so documents
/// saved by older versions load with the missing keys backfilled.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct TournamentConfig {
    /// Tournament display name.
    pub name: String,
    /// Tournament date.
    pub date: NaiveDate,
    /// Venue, free text.
    pub venue: String,
    pub bracket_type: BracketType,
    pub set_format: SetFormat,
    /// Points needed to win a regular set.
    pub max_points: u32,
    /// Points needed to win a tie-break set.
    pub tie_break_points: u32,
    /// Number of groups the teams are dealt into.
    pub num_groups: usize,
    /// Teams advancing to the bracket from each group.
    pub advance_per_group: usize,
    pub advance_criterion: AdvanceCriterion,
    /// Single all-play-all group regardless of `num_groups`.
    pub single_group: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            date: Utc::now().date_naive(),
            venue: String::new(),
            bracket_type: BracketType::default(),
            set_format: SetFormat::default(),
            max_points: 21,
            tie_break_points: 15,
            num_groups: 2,
            advance_per_group: 2,
            advance_criterion: AdvanceCriterion::default(),
            single_group: false,
        }
    }
}

impl TournamentConfig {
    /// Whether the group stage collapses into one all-play-all group.
    pub fn is_single_group(&self) -> bool {
        self.single_group || self.bracket_type == BracketType::SingleGroup
    }
}

/// The tournament lifecycle, strictly forward-moving.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentPhase {
    #[default]
    Setup,
    Groups,
    Elimination,
    Proclamation,
}

impl fmt::Display for TournamentPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Setup => "setup",
            Self::Groups => "groups",
            Self::Elimination => "elimination",
            Self::Proclamation => "proclamation",
        };
        write!(f, "{repr}")
    }
}

/// One step of the final podium.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PodiumEntry {
    /// Finishing position, 1-indexed.
    pub position: u8,
    pub team: TeamId,
}

/// The root aggregate: the whole tournament lives in this one document.
///
/// It is loaded wholesale at session start and saved wholesale after
/// each mutation; every operation takes it as an explicit handle, so
/// multiple independent tournaments can coexist in one process. Every
/// field defaults independently for forward-compatible loading.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct TournamentState {
    pub phase: TournamentPhase,
    pub config: TournamentConfig,
    pub athletes: Vec<Athlete>,
    pub teams: Vec<Team>,
    pub groups: Vec<Group>,
    pub bracket: Vec<Match>,
    pub podium: Vec<PodiumEntry>,
    pub winner: Option<TeamId>,
    /// Whether simulated elimination results also feed standings and the
    /// final placements feed the athlete ranking.
    pub commit_simulated_to_ranking: bool,
}

impl Default for TournamentState {
    fn default() -> Self {
        Self {
            phase: TournamentPhase::default(),
            config: TournamentConfig::default(),
            athletes: Vec::new(),
            teams: Vec::new(),
            groups: Vec::new(),
            bracket: Vec::new(),
            podium: Vec::new(),
            winner: None,
            commit_simulated_to_ranking: true,
        }
    }
}

impl TournamentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a match by id across all groups and the bracket.
    pub fn match_mut(&mut self, id: MatchId) -> Option<&mut Match> {
        self.groups
            .iter_mut()
            .flat_map(|g| g.matches.iter_mut())
            .chain(self.bracket.iter_mut())
            .find(|m| m.id == id)
    }

    /// Whether every group fixture has a confirmed result.
    pub fn groups_complete(&self) -> bool {
        !self.groups.is_empty()
            && self
                .groups
                .iter()
                .flat_map(|g| g.matches.iter())
                .all(|m| m.confirmed)
    }
}
