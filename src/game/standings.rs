//! Group standings: stat accumulation after a confirmed match and the
//! four-key ranking order.

use log::warn;
use std::cmp::Reverse;

use crate::game::entities::{Match, Team, TeamId};

/// Fold a confirmed match into both teams' cumulative stats.
///
/// Set wins/losses and aggregate points go to both sides; the winner gets
/// +3 classification points and a win, the loser +1 and a loss. Skips
/// silently when the match is unconfirmed or a side does not resolve in
/// the registry (a caller-validated precondition, not an error path).
///
/// NOT idempotent: calling this twice for the same match double-counts.
/// `tournament::manager` is the single call site and invokes it exactly
/// once per confirmed match.
pub fn apply_result(teams: &mut [Team], m: &Match) {
    if !m.confirmed {
        warn!("ignoring standings update for unconfirmed match {}", m.id);
        return;
    }
    let Some(i1) = teams.iter().position(|t| t.id == m.team1) else {
        warn!("standings skip: team {} not in registry", m.team1);
        return;
    };
    let Some(i2) = teams.iter().position(|t| t.id == m.team2) else {
        warn!("standings skip: team {} not in registry", m.team2);
        return;
    };

    let (points1, points2) = m.points_total();
    let team1_won = m.winner == Some(m.team1);

    {
        let s = &mut teams[i1].stats;
        s.sets_won += m.sets1;
        s.sets_lost += m.sets2;
        s.points_scored += points1;
        s.points_conceded += points2;
        if team1_won {
            s.wins += 1;
            s.classification_points += 3;
        } else {
            s.losses += 1;
            s.classification_points += 1;
        }
    }
    {
        let s = &mut teams[i2].stats;
        s.sets_won += m.sets2;
        s.sets_lost += m.sets1;
        s.points_scored += points2;
        s.points_conceded += points1;
        if team1_won {
            s.losses += 1;
            s.classification_points += 1;
        } else {
            s.wins += 1;
            s.classification_points += 3;
        }
    }
}

/// Order the given group members best-first.
///
/// Descending by classification points, then wins, then set difference,
/// then point difference. The sort is stable, so teams equal on all four
/// keys keep their insertion order. Member ids that do not resolve are
/// skipped.
pub fn rank_group<'a>(teams: &'a [Team], members: &[TeamId]) -> Vec<&'a Team> {
    let mut ranked: Vec<&Team> = members
        .iter()
        .filter_map(|id| teams.iter().find(|t| t.id == *id))
        .collect();
    ranked.sort_by_key(|t| {
        (
            Reverse(t.stats.classification_points),
            Reverse(t.stats.wins),
            Reverse(t.stats.set_diff()),
            Reverse(t.stats.point_diff()),
        )
    });
    ranked
}
