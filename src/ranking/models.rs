//! Career record data models.

use serde::{Deserialize, Serialize};

/// One finishing position in an athlete's career history.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PlacementRecord {
    /// Tournament display name.
    pub tournament: String,
    /// Finishing position, 1-indexed.
    pub position: u8,
    /// How many teams entered the tournament. Older saved documents
    /// predate this field, so it stays optional on load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_size: Option<u32>,
}

/// Cumulative per-athlete career stats, mutated only when a finished
/// tournament's placements are committed.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct CareerStats {
    pub tournaments: u32,
    pub wins: u32,
    pub losses: u32,
    pub sets_won: u32,
    pub sets_lost: u32,
    pub points_scored: u32,
    pub points_conceded: u32,
    /// Ordered history of (tournament, position) placements.
    pub history: Vec<PlacementRecord>,
}
