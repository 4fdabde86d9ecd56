//! Elimination bracket: seeding from group standings, bye walkovers,
//! round advancement, and podium derivation.
//!
//! The bracket grows incrementally: round 0 is seeded from the groups,
//! and each later round is appended only once every match of the current
//! round is confirmed. Supported shapes are 2 or 4 matches at round 0
//! (4 or 8 seeds); anything else stalls after round 0 with no further
//! rounds generated.

use log::{debug, info, warn};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::game::entities::{BYE_TEAM_ID, FinalSlot, Match, SetScore, TeamId};
use crate::game::standings::rank_group;
use crate::tournament::models::{PodiumEntry, TournamentState};

/// Walkover scoreline awarded to the real team of a bye pairing.
const WALKOVER_POINTS: u32 = 21;

/// Seed the first knockout round from the final group standings.
///
/// The top `advance_per_group` teams of each group qualify, in standings
/// order. An odd seed count gets a bye sentinel appended, then seeds are
/// shuffled and paired consecutively, so pairings ignore group ranking.
/// A pairing against the bye is confirmed immediately as a 21-0
/// walkover.
pub fn build_bracket_from_groups<R: Rng>(rng: &mut R, state: &TournamentState) -> Vec<Match> {
    let advance = state.config.advance_per_group;
    let mut seeds: Vec<TeamId> = Vec::new();
    for group in &state.groups {
        for team in rank_group(&state.teams, &group.teams).into_iter().take(advance) {
            seeds.push(team.id);
        }
    }

    if seeds.len() % 2 == 1 {
        seeds.push(BYE_TEAM_ID);
    }
    seeds.shuffle(rng);

    let mut bracket = Vec::with_capacity(seeds.len() / 2);
    for pair in seeds.chunks_exact(2) {
        let (a, b) = (pair[0], pair[1]);
        if a == BYE_TEAM_ID || b == BYE_TEAM_ID {
            bracket.push(walkover(a, b));
        } else {
            bracket.push(Match::elimination(a, b, 0));
        }
    }
    info!("seeded bracket with {} round-0 match(es)", bracket.len());
    bracket
}

/// An auto-confirmed round-0 match where one side is the bye sentinel.
fn walkover(a: TeamId, b: TeamId) -> Match {
    let winner = if a == BYE_TEAM_ID { b } else { a };
    let mut m = Match::elimination(a, b, 0);
    m.confirmed = true;
    m.winner = Some(winner);
    if winner == a {
        m.sets1 = 1;
        m.scores = vec![SetScore(WALKOVER_POINTS, 0)];
    } else {
        m.sets2 = 1;
        m.scores = vec![SetScore(0, WALKOVER_POINTS)];
    }
    debug!("walkover: {winner} advances without playing");
    m
}

/// Grow the bracket once the current round is fully decided.
///
/// Waits (no-op) while any match of the highest round present is still
/// unconfirmed. Then:
/// - round 0 with 4 matches appends the two semifinals;
/// - round 0 with 2 matches skips semifinals and appends the two finals
///   directly (winners to 1st-2nd, losers to 3rd-4th);
/// - round 1 appends the two finals from the semifinal results.
///
/// Each transition is guarded against duplicate creation, so calling
/// this after every confirmation is safe.
pub fn advance_round(bracket: &mut Vec<Match>) {
    let Some(max_round) = bracket.iter().map(|m| m.round).max() else {
        return;
    };
    let current: Vec<&Match> = bracket.iter().filter(|m| m.round == max_round).collect();
    if !current.iter().all(|m| m.confirmed) {
        return;
    }

    let winners: Vec<TeamId> = current.iter().filter_map(|m| m.winner).collect();
    let losers: Vec<TeamId> = current.iter().filter_map(|m| m.loser()).collect();

    match (max_round, current.len()) {
        (0, 4) => {
            if bracket.iter().any(|m| m.round == 1) {
                return;
            }
            info!("round 0 complete, creating semifinals");
            bracket.push(Match::elimination(winners[0], winners[1], 1));
            bracket.push(Match::elimination(winners[2], winners[3], 1));
        }
        (0, 2) | (1, 2) => {
            if bracket.iter().any(|m| m.round == 2) {
                return;
            }
            info!("round {max_round} complete, creating finals");
            bracket.push(
                Match::elimination(winners[0], winners[1], 2).with_slot(FinalSlot::Final1v2),
            );
            bracket.push(Match::elimination(losers[0], losers[1], 2).with_slot(FinalSlot::Final3v4));
        }
        (2, _) => {}
        (round, count) => {
            // Structural gap: no generalized N-seed tree. The bracket
            // stalls here and the tournament can't progress further.
            warn!("unsupported bracket shape: {count} match(es) at round {round}");
        }
    }
}

/// Whether every match across all present rounds is confirmed.
pub fn is_complete(bracket: &[Match]) -> bool {
    !bracket.is_empty() && bracket.iter().all(|m| m.confirmed)
}

/// The overall tournament winner: the winner of the 1st-2nd final, or,
/// for brackets that never created finals, the winner of the last match
/// in bracket order.
pub fn tournament_winner(bracket: &[Match]) -> Option<TeamId> {
    bracket
        .iter()
        .find(|m| m.slot == Some(FinalSlot::Final1v2) && m.confirmed)
        .and_then(|m| m.winner)
        .or_else(|| bracket.last().and_then(|m| m.winner))
}

/// Derive the final podium from a complete bracket.
///
/// 1st and 2nd come from the 1st-2nd final, 3rd and 4th from the 3rd-4th
/// final. Brackets that never created finals fall back to the trailing
/// losers of the match list, and a missing 3rd-4th final falls back to a
/// confirmed semifinal loser.
pub fn derive_podium(bracket: &[Match]) -> Vec<PodiumEntry> {
    let mut podium = Vec::with_capacity(4);
    let final_1v2 = bracket
        .iter()
        .find(|m| m.slot == Some(FinalSlot::Final1v2) && m.confirmed);
    let final_3v4 = bracket
        .iter()
        .find(|m| m.slot == Some(FinalSlot::Final3v4) && m.confirmed);

    if let Some(m) = final_1v2 {
        if let (Some(winner), Some(loser)) = (m.winner, m.loser()) {
            podium.push(PodiumEntry { position: 1, team: winner });
            podium.push(PodiumEntry { position: 2, team: loser });
        }
    } else if let Some(winner) = tournament_winner(bracket) {
        let losers: Vec<TeamId> = bracket.iter().filter_map(Match::loser).collect();
        podium.push(PodiumEntry { position: 1, team: winner });
        if let Some(&runner_up) = losers.last() {
            podium.push(PodiumEntry { position: 2, team: runner_up });
        }
        if losers.len() > 1 {
            podium.push(PodiumEntry { position: 3, team: losers[losers.len() - 2] });
        }
    }

    if let Some(m) = final_3v4 {
        if let (Some(winner), Some(loser)) = (m.winner, m.loser()) {
            podium.push(PodiumEntry { position: 3, team: winner });
            podium.push(PodiumEntry { position: 4, team: loser });
        }
    } else if podium.len() == 2 {
        // No 3rd-4th final: third place goes to a semifinal loser.
        let semi_loser = bracket
            .iter()
            .filter(|m| m.round == 1 && m.confirmed)
            .filter_map(Match::loser)
            .next();
        if let Some(team) = semi_loser {
            podium.push(PodiumEntry { position: 3, team });
        }
    }
    podium
}
