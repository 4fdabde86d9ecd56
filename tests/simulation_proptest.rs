//! Property-based tests for simulation and scheduling using proptest
//!
//! These verify the set-simulation termination bounds and round-robin
//! completeness across randomized inputs and seeds.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeSet;
use uuid::Uuid;

use beach_volley::game::entities::TeamId;
use beach_volley::game::simulation::simulate_set;
use beach_volley::tournament::models::TournamentConfig;
use beach_volley::tournament::scheduler::generate_groups;

fn config(max_points: u32, tie_break_points: u32) -> TournamentConfig {
    TournamentConfig {
        max_points,
        tie_break_points,
        ..TournamentConfig::default()
    }
}

proptest! {
    #[test]
    fn test_simulate_set_always_terminates_in_bounds(
        seed in any::<u64>(),
        max_points in 11u32..=30,
        tie_break_points in 11u32..=25,
        tie_break in any::<bool>(),
    ) {
        let cfg = config(max_points, tie_break_points);
        let mut rng = StdRng::seed_from_u64(seed);
        let (p1, p2) = simulate_set(&mut rng, &cfg, tie_break);

        let target = if tie_break { tie_break_points } else { max_points };
        let (hi, lo) = if p1 > p2 { (p1, p2) } else { (p2, p1) };
        prop_assert!(hi > lo, "a set can't end tied: {}-{}", p1, p2);
        prop_assert!(
            (hi >= target && hi - lo >= 2) || hi == target + 6,
            "invalid terminal score {}-{} for target {}",
            p1, p2, target
        );
        prop_assert!(hi <= target + 6, "deuce cap exceeded: {}-{}", p1, p2);
    }

    #[test]
    fn test_single_group_round_robin_is_complete(
        seed in any::<u64>(),
        n in 2usize..=12,
    ) {
        let teams: Vec<TeamId> = (0..n).map(|_| Uuid::new_v4()).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let groups = generate_groups(&mut rng, &teams, 1, true);

        prop_assert_eq!(groups.len(), 1);
        prop_assert_eq!(groups[0].matches.len(), n * (n - 1) / 2);

        // Each unordered pair of teams appears exactly once.
        let mut pairs = BTreeSet::new();
        for m in &groups[0].matches {
            prop_assert_ne!(m.team1, m.team2);
            let key = if m.team1 < m.team2 {
                (m.team1, m.team2)
            } else {
                (m.team2, m.team1)
            };
            prop_assert!(pairs.insert(key), "pair generated twice");
        }
        prop_assert_eq!(pairs.len(), n * (n - 1) / 2);
    }

    #[test]
    fn test_partitioned_groups_cover_all_teams(
        seed in any::<u64>(),
        n in 4usize..=16,
        num_groups in 2usize..=4,
    ) {
        let teams: Vec<TeamId> = (0..n).map(|_| Uuid::new_v4()).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let groups = generate_groups(&mut rng, &teams, num_groups, false);

        prop_assert_eq!(groups.len(), num_groups);
        let dealt: Vec<TeamId> = groups.iter().flat_map(|g| g.teams.iter().copied()).collect();
        let unique: BTreeSet<TeamId> = dealt.iter().copied().collect();
        prop_assert_eq!(dealt.len(), n, "every team dealt exactly once");
        prop_assert_eq!(unique.len(), n);

        // Each group holds its own full round robin.
        for group in &groups {
            let k = group.teams.len();
            prop_assert_eq!(group.matches.len(), k * k.saturating_sub(1) / 2);
        }
    }
}
