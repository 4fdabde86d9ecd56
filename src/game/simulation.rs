//! Randomized match simulation.
//!
//! Points are awarded one at a time with uniform probability until a side
//! reaches the set threshold with a two-point lead. Every function takes
//! the random source as a parameter so tests can inject a seeded rng.

use rand::Rng;

use crate::game::entities::{Match, SetScore};
use crate::tournament::models::{SetFormat, TournamentConfig};

/// How far past the threshold a deuce can run before the leading side
/// wins outright.
const DEUCE_CAP_MARGIN: u32 = 6;

/// Simulate one set and return the final point totals, side 1 first.
///
/// A side wins on reaching the threshold (`max_points`, or the configured
/// tie-break threshold when `tie_break` is set) with a lead of at least
/// two. If the deuce runs long, the first side to reach threshold+6 wins
/// immediately, so the simulation always terminates.
pub fn simulate_set<R: Rng>(rng: &mut R, config: &TournamentConfig, tie_break: bool) -> (u32, u32) {
    let target = if tie_break {
        config.tie_break_points
    } else {
        config.max_points
    };
    let cap = target + DEUCE_CAP_MARGIN;
    let (mut p1, mut p2) = (0u32, 0u32);
    loop {
        if rng.random_bool(0.5) {
            p1 += 1;
        } else {
            p2 += 1;
        }
        if p1 >= target || p2 >= target {
            if p1.abs_diff(p2) >= 2 {
                return (p1, p2);
            }
            if p1 >= cap || p2 >= cap {
                return (p1, p2);
            }
        }
    }
}

/// Simulate a full match in place: records per-set scores and set totals,
/// sets the winner, and marks the match confirmed. Standings are NOT
/// touched here; that is a separate call.
pub fn simulate_match<R: Rng>(rng: &mut R, config: &TournamentConfig, m: &mut Match) {
    match config.set_format {
        SetFormat::SingleSet => {
            let (p1, p2) = simulate_set(rng, config, false);
            m.scores = vec![SetScore(p1, p2)];
            m.sets1 = u32::from(p1 > p2);
            m.sets2 = u32::from(p2 > p1);
        }
        SetFormat::BestOfThree => {
            let (mut sets1, mut sets2) = (0u32, 0u32);
            let mut scores = Vec::with_capacity(3);
            while sets1 < 2 && sets2 < 2 {
                // The decisive third set is played to the tie-break score.
                let tie = sets1 == 1 && sets2 == 1;
                let (p1, p2) = simulate_set(rng, config, tie);
                scores.push(SetScore(p1, p2));
                if p1 > p2 {
                    sets1 += 1;
                } else {
                    sets2 += 1;
                }
            }
            m.scores = scores;
            m.sets1 = sets1;
            m.sets2 = sets2;
        }
    }
    m.winner = Some(if m.sets1 > m.sets2 { m.team1 } else { m.team2 });
    m.confirmed = true;
}
