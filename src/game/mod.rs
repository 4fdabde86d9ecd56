//! Core match-level engine: entities, randomized simulation, and group
//! standings.
//!
//! Everything here operates on plain data passed in by the caller; the
//! tournament orchestration that ties these pieces together lives in
//! [`crate::tournament`].

pub mod entities;
pub mod simulation;
pub mod standings;

pub use entities::{
    Athlete, AthleteId, BYE_TEAM_ID, FinalSlot, Group, Match, MatchId, MatchPhase, SetScore, Side,
    Team, TeamId, TeamStats,
};
pub use simulation::{simulate_match, simulate_set};
pub use standings::{apply_result, rank_group};
