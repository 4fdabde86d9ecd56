//! Ranking transfer and the overall rating.
//!
//! When a tournament closes, each podium team's placement and aggregate
//! stats are folded into both of its athletes' career records. The
//! bounded overall rating (40-99) is derived from that record on read.

use log::{info, warn};

use crate::game::entities::{Athlete, Team, team_by_id};
use crate::ranking::models::PlacementRecord;
use crate::tournament::models::PodiumEntry;

/// Commit a finished tournament's placements to the athletes' careers.
///
/// For each podium entry, both athletes of the team get a tournament
/// credit, a history entry, and the team's aggregate set/point stats
/// added to their own. Only the champions' athletes are credited a win;
/// everyone else on the podium takes a loss. Unresolvable team or
/// athlete ids are skipped.
///
/// NOT idempotent: a second call double-counts everything. The caller
/// gates this behind the tournament's ranking-commit flag and invokes it
/// once per proclamation.
pub fn commit_placements(
    athletes: &mut [Athlete],
    teams: &[Team],
    tournament_name: &str,
    field_size: u32,
    podium: &[PodiumEntry],
) {
    for entry in podium {
        let Some(team) = team_by_id(teams, entry.team) else {
            warn!("ranking skip: podium team {} not in registry", entry.team);
            continue;
        };
        for athlete_id in team.athletes {
            let Some(athlete) = athletes.iter_mut().find(|a| a.id == athlete_id) else {
                warn!("ranking skip: athlete {athlete_id} not in registry");
                continue;
            };
            let stats = &mut athlete.stats;
            stats.tournaments += 1;
            stats.history.push(PlacementRecord {
                tournament: tournament_name.to_string(),
                position: entry.position,
                field_size: Some(field_size),
            });
            stats.sets_won += team.stats.sets_won;
            stats.sets_lost += team.stats.sets_lost;
            stats.points_scored += team.stats.points_scored;
            stats.points_conceded += team.stats.points_conceded;
            if entry.position == 1 {
                stats.wins += 1;
            } else {
                stats.losses += 1;
            }
        }
    }
    info!("committed {} podium placements of {tournament_name}", podium.len());
}

/// Compute the bounded overall rating for an athlete.
///
/// A brand-new athlete (no tournaments, wins, sets, or points) rates
/// exactly 40. Otherwise placements (1st=25, 2nd=18, 3rd=12, else=3),
/// wins, sets, points, and tournament count feed a capped sum whose
/// quarter is added to the 40 floor, clamped to 99.
pub fn compute_overall(athlete: &Athlete) -> u8 {
    let s = &athlete.stats;
    if s.tournaments == 0 && s.wins == 0 && s.sets_won == 0 && s.points_scored == 0 {
        return 40;
    }

    let placement_pts: u32 = s
        .history
        .iter()
        .map(|r| match r.position {
            1 => 25,
            2 => 18,
            3 => 12,
            _ => 3,
        })
        .sum();
    let win_pts = s.wins * 4;
    let set_pts = (s.sets_won * 2).min(30);
    let point_pts = (s.points_scored / 20).min(25);
    let tournament_pts = (s.tournaments * 3).min(20);

    let raw = 40 + (placement_pts + win_pts + set_pts + point_pts + tournament_pts) / 4;
    raw.clamp(40, 99) as u8
}

/// Athletes with their overall ratings, best first (ties by name).
pub fn overall_ranking(athletes: &[Athlete]) -> Vec<(&Athlete, u8)> {
    let mut rows: Vec<(&Athlete, u8)> =
        athletes.iter().map(|a| (a, compute_overall(a))).collect();
    rows.sort_by(|(a, ra), (b, rb)| rb.cmp(ra).then_with(|| a.name.cmp(&b.name)));
    rows
}
