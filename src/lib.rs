//! # Beach Volley
//!
//! A beach volley tournament engine: registration, round-robin groups,
//! an elimination bracket, score entry and simulation, and a persistent
//! per-athlete ranking with a bounded overall rating.
//!
//! The whole tournament lives in one [`TournamentState`] document that
//! every operation takes as an explicit handle. A session loads it once,
//! drives it through the phases, and saves it back after each mutation:
//!
//! - **Setup**: athletes and teams register.
//! - **Groups**: the scheduler deals teams into round-robin groups;
//!   results (entered or simulated) feed the group standings.
//! - **Elimination**: the bracket is seeded from the standings and grows
//!   round by round as results confirm, byes advancing by walkover.
//! - **Proclamation**: winner and podium are derived and the placements
//!   fold into each athlete's career record.
//!
//! ## Core Modules
//!
//! - [`game`]: entities, randomized match simulation, group standings
//! - [`tournament`]: scheduling, bracket progression, and the operation
//!   surface driving a tournament end to end
//! - [`ranking`]: career records and the 40-99 overall rating
//! - [`db`]: whole-document JSON persistence
//!
//! ## Example
//!
//! ```
//! use beach_volley::TournamentState;
//!
//! // A fresh tournament in the setup phase
//! let state = TournamentState::new();
//! assert!(state.athletes.is_empty());
//! ```

/// Persistence for the tournament document.
pub mod db;
pub use db::{StateStore, StoreConfig, StoreError};

/// Match-level engine: entities, simulation, standings.
pub mod game;
pub use game::{
    entities::{self, Athlete, BYE_TEAM_ID, Group, Match, Team},
    simulation, standings,
};

/// Persistent athlete ranking.
pub mod ranking;
pub use ranking::{CareerStats, PlacementRecord, compute_overall};

/// Tournament orchestration and operations.
pub mod tournament;
pub use tournament::{
    TournamentError, TournamentResult,
    models::{TournamentConfig, TournamentPhase, TournamentState},
};
