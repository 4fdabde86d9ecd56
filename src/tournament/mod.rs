//! Tournament orchestration: configuration and state, group scheduling,
//! the elimination bracket, and the operations that drive a tournament
//! from setup to proclamation.
//!
//! ## Example
//!
//! ```
//! use beach_volley::tournament::{manager, models::TournamentState};
//!
//! let mut state = TournamentState::new();
//! state.config.name = "Summer Cup".to_string();
//! let a1 = manager::register_athlete(&mut state, "Anna").unwrap();
//! let a2 = manager::register_athlete(&mut state, "Marta").unwrap();
//! manager::register_team(&mut state, "Sabbia", a1, a2).unwrap();
//! ```

pub mod bracket;
pub mod manager;
pub mod models;
pub mod scheduler;

pub use manager::{TournamentError, TournamentResult};
pub use models::{
    AdvanceCriterion, BracketType, PodiumEntry, SetFormat, TournamentConfig, TournamentPhase,
    TournamentState,
};
