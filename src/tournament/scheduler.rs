//! Group generation: shuffle the field, deal teams into groups, and lay
//! out every round-robin fixture.

use log::info;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::game::entities::{Group, Match, TeamId};

/// Partition the registered teams into groups and generate each group's
/// full round robin.
///
/// The input order is shuffled first, so group composition is random.
/// With `single_group` (or fewer than two groups) all teams land in one
/// group; otherwise teams are dealt round-robin style (team `i` to group
/// `i % num_groups`). A group of N teams gets N(N-1)/2 fixtures, one per
/// unordered pair.
pub fn generate_groups<R: Rng>(
    rng: &mut R,
    team_ids: &[TeamId],
    num_groups: usize,
    single_group: bool,
) -> Vec<Group> {
    let mut ids = team_ids.to_vec();
    ids.shuffle(rng);

    let groups = if single_group || num_groups <= 1 {
        let matches = round_robin(&ids, 0);
        vec![Group {
            name: "Girone Unico".to_string(),
            teams: ids,
            matches,
        }]
    } else {
        (0..num_groups)
            .map(|i| {
                let members: Vec<TeamId> = ids.iter().skip(i).step_by(num_groups).copied().collect();
                let matches = round_robin(&members, i);
                Group {
                    name: format!("Girone {}", group_letter(i)),
                    teams: members,
                    matches,
                }
            })
            .collect()
    };

    info!(
        "generated {} group(s) for {} teams",
        groups.len(),
        team_ids.len()
    );
    groups
}

/// Every unordered pair of members, once.
fn round_robin(members: &[TeamId], group_index: usize) -> Vec<Match> {
    let n = members.len();
    let mut matches = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for j in 0..n {
        for k in (j + 1)..n {
            matches.push(Match::group(members[j], members[k], group_index));
        }
    }
    matches
}

fn group_letter(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}
