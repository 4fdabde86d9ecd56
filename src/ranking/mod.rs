//! Persistent athlete ranking: career records, placement transfer, and
//! the bounded overall rating derived from them.

pub mod manager;
pub mod models;

pub use manager::{commit_placements, compute_overall, overall_ranking};
pub use models::{CareerStats, PlacementRecord};
