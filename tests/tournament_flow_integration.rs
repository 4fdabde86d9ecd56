//! Integration tests for the full tournament lifecycle
//!
//! These tests drive the state through registration, groups,
//! elimination, and proclamation the way the presentation layer does.

use rand::SeedableRng;
use rand::rngs::StdRng;

use beach_volley::game::entities::{FinalSlot, MatchId};
use beach_volley::tournament::manager::{
    self, proclaim, record_result, register_athlete, register_team, simulate_all_group_matches,
    simulate_all_playoffs, start_elimination, start_tournament,
};
use beach_volley::tournament::models::{TournamentPhase, TournamentState};

/// A setup-phase state with `n` teams of two athletes each.
fn state_with_teams(n: usize) -> TournamentState {
    let mut state = TournamentState::new();
    state.config.name = "Summer Cup".to_string();
    for i in 0..n {
        let a1 = register_athlete(&mut state, &format!("Athlete {i}a")).unwrap();
        let a2 = register_athlete(&mut state, &format!("Athlete {i}b")).unwrap();
        register_team(&mut state, &format!("Team {i}"), a1, a2).unwrap();
    }
    state
}

fn pending_bracket_ids(state: &TournamentState) -> Vec<MatchId> {
    state
        .bracket
        .iter()
        .filter(|m| !m.confirmed)
        .map(|m| m.id)
        .collect()
}

#[test]
fn four_team_single_group_runs_to_podium() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut state = state_with_teams(4);
    state.config.single_group = true;
    // The whole group advances into a four-seed bracket.
    state.config.advance_per_group = 4;

    start_tournament(&mut state, &mut rng).unwrap();
    assert_eq!(state.phase, TournamentPhase::Groups);
    assert_eq!(state.groups.len(), 1);
    assert_eq!(state.groups[0].matches.len(), 6);

    // Enter every group result manually, 21-15 to side 1.
    let group_ids: Vec<MatchId> = state.groups[0].matches.iter().map(|m| m.id).collect();
    for id in group_ids {
        record_result(&mut state, id, &[(21, 15)]).unwrap();
    }

    start_elimination(&mut state, &mut rng).unwrap();
    assert_eq!(state.phase, TournamentPhase::Elimination);
    // Four seeds pair into exactly two round-0 matches.
    assert_eq!(state.bracket.len(), 2);
    assert!(state.bracket.iter().all(|m| m.round == 0));

    // Confirming both round-0 matches must create the two finals
    // directly, with no semifinal round in between.
    for id in pending_bracket_ids(&state) {
        record_result(&mut state, id, &[(21, 17)]).unwrap();
    }
    assert_eq!(state.bracket.len(), 4);
    assert!(state.bracket.iter().all(|m| m.round != 1));
    assert_eq!(state.bracket[2].slot, Some(FinalSlot::Final1v2));
    assert_eq!(state.bracket[3].slot, Some(FinalSlot::Final3v4));

    for id in pending_bracket_ids(&state) {
        record_result(&mut state, id, &[(15, 21)]).unwrap();
    }

    proclaim(&mut state).unwrap();
    assert_eq!(state.phase, TournamentPhase::Proclamation);
    assert_eq!(state.winner, state.bracket[2].winner);

    // Podium: all four teams, positions 1 through 4, no repeats.
    assert_eq!(state.podium.len(), 4);
    let positions: Vec<u8> = state.podium.iter().map(|e| e.position).collect();
    assert_eq!(positions, [1, 2, 3, 4]);
    let mut teams: Vec<_> = state.podium.iter().map(|e| e.team).collect();
    teams.sort();
    teams.dedup();
    assert_eq!(teams.len(), 4);

    // Every athlete gets exactly one tournament credit, with the
    // position their team finished at.
    assert_eq!(state.athletes.len(), 8);
    for athlete in &state.athletes {
        assert_eq!(athlete.stats.tournaments, 1);
        assert_eq!(athlete.stats.history.len(), 1);
        let record = &athlete.stats.history[0];
        assert_eq!(record.tournament, "Summer Cup");
        assert_eq!(record.field_size, Some(4));

        let team = state
            .teams
            .iter()
            .find(|t| t.athletes.contains(&athlete.id))
            .unwrap();
        let entry = state.podium.iter().find(|e| e.team == team.id).unwrap();
        assert_eq!(record.position, entry.position);
        if entry.position == 1 {
            assert_eq!(athlete.stats.wins, 1);
            assert_eq!(athlete.stats.losses, 0);
        } else {
            assert_eq!(athlete.stats.wins, 0);
            assert_eq!(athlete.stats.losses, 1);
        }
    }
}

#[test]
fn two_groups_of_two_also_make_a_four_seed_bracket() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut state = state_with_teams(4);
    state.config.num_groups = 2;
    state.config.advance_per_group = 2;

    start_tournament(&mut state, &mut rng).unwrap();
    assert_eq!(state.groups.len(), 2);
    simulate_all_group_matches(&mut state, &mut rng).unwrap();
    start_elimination(&mut state, &mut rng).unwrap();
    assert_eq!(state.bracket.len(), 2);

    simulate_all_playoffs(&mut state, &mut rng).unwrap();
    assert_eq!(state.bracket.len(), 4);
    proclaim(&mut state).unwrap();
    assert_eq!(state.podium.len(), 4);
}

#[test]
fn five_advancing_teams_get_one_walkover() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut state = state_with_teams(5);
    state.config.single_group = true;
    state.config.advance_per_group = 5;

    start_tournament(&mut state, &mut rng).unwrap();
    simulate_all_group_matches(&mut state, &mut rng).unwrap();
    start_elimination(&mut state, &mut rng).unwrap();

    // Six seeds (five teams plus the bye) pair into three matches.
    assert_eq!(state.bracket.len(), 3);
    let walkovers: Vec<_> = state.bracket.iter().filter(|m| m.involves_bye()).collect();
    assert_eq!(walkovers.len(), 1);

    let wo = walkovers[0];
    assert!(wo.confirmed);
    let winner = wo.winner.unwrap();
    assert_ne!(winner, beach_volley::BYE_TEAM_ID);
    assert!(state.teams.iter().any(|t| t.id == winner));
    let expected = if winner == wo.team1 { (21, 0) } else { (0, 21) };
    assert_eq!(wo.points_total(), expected);

    // The two real pairings are still waiting for results.
    assert_eq!(state.bracket.iter().filter(|m| !m.confirmed).count(), 2);
}

#[test]
fn eight_teams_play_semifinals() {
    let mut rng = StdRng::seed_from_u64(123);
    let mut state = state_with_teams(8);
    state.config.num_groups = 2;
    state.config.advance_per_group = 4;

    start_tournament(&mut state, &mut rng).unwrap();
    simulate_all_group_matches(&mut state, &mut rng).unwrap();
    start_elimination(&mut state, &mut rng).unwrap();
    assert_eq!(state.bracket.len(), 4);

    simulate_all_playoffs(&mut state, &mut rng).unwrap();
    // Quarterfinals, two semifinals, and two finals.
    assert_eq!(state.bracket.len(), 8);
    assert_eq!(state.bracket.iter().filter(|m| m.round == 1).count(), 2);

    proclaim(&mut state).unwrap();
    assert_eq!(state.podium.len(), 4);
    assert!(state.winner.is_some());
}

#[test]
fn ranking_commit_flag_gates_career_transfer() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut state = state_with_teams(4);
    state.config.single_group = true;
    state.config.advance_per_group = 4;
    state.commit_simulated_to_ranking = false;

    start_tournament(&mut state, &mut rng).unwrap();
    simulate_all_group_matches(&mut state, &mut rng).unwrap();
    start_elimination(&mut state, &mut rng).unwrap();
    simulate_all_playoffs(&mut state, &mut rng).unwrap();
    proclaim(&mut state).unwrap();

    // Podium derived, but no career was touched.
    assert_eq!(state.podium.len(), 4);
    for athlete in &state.athletes {
        assert_eq!(athlete.stats.tournaments, 0);
        assert!(athlete.stats.history.is_empty());
    }
    assert!(
        state
            .athletes
            .iter()
            .all(|a| beach_volley::compute_overall(a) == 40)
    );
}

#[test]
fn group_standings_are_consistent_with_results() {
    let mut rng = StdRng::seed_from_u64(31);
    let mut state = state_with_teams(4);
    state.config.single_group = true;

    start_tournament(&mut state, &mut rng).unwrap();
    simulate_all_group_matches(&mut state, &mut rng).unwrap();

    let ranked = manager::group_standings(&state, 0).unwrap();
    assert_eq!(ranked.len(), 4);
    // Everyone played three matches; classification points follow.
    for team in &ranked {
        assert_eq!(team.stats.wins + team.stats.losses, 3);
        assert_eq!(
            team.stats.classification_points,
            team.stats.wins * 3 + team.stats.losses
        );
    }
    // Best-first by the four-key order.
    for pair in ranked.windows(2) {
        let (a, b) = (&pair[0].stats, &pair[1].stats);
        assert!(
            (
                std::cmp::Reverse(a.classification_points),
                std::cmp::Reverse(a.wins),
                std::cmp::Reverse(a.set_diff()),
                std::cmp::Reverse(a.point_diff()),
            ) <= (
                std::cmp::Reverse(b.classification_points),
                std::cmp::Reverse(b.wins),
                std::cmp::Reverse(b.set_diff()),
                std::cmp::Reverse(b.point_diff()),
            )
        );
    }
}
