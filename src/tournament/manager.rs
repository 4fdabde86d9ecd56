//! Tournament operations.
//!
//! This is the surface the presentation layer drives: registration,
//! starting the tournament, score entry and simulation, phase
//! transitions, and the final proclamation. Every operation takes the
//! [`TournamentState`] aggregate as an explicit handle and mutates it in
//! place; the caller persists the document afterwards.

use log::info;
use rand::Rng;
use thiserror::Error;

use crate::game::entities::{
    Athlete, AthleteId, MatchId, MatchPhase, SetScore, Team, TeamId,
};
use crate::game::{simulation, standings};
use crate::ranking;
use crate::tournament::models::{TournamentPhase, TournamentState};
use crate::tournament::{bracket, scheduler};

/// Tournament errors
#[derive(Debug, Error, Eq, PartialEq)]
pub enum TournamentError {
    #[error("athlete name can't be empty")]
    EmptyAthleteName,

    #[error("athlete already registered: {0}")]
    DuplicateAthlete(String),

    #[error("athlete does not exist: {0}")]
    AthleteNotFound(AthleteId),

    #[error("athlete already plays for another team: {0}")]
    AthleteAlreadyTeamed(AthleteId),

    #[error("a team needs two distinct athletes")]
    IdenticalAthletes,

    #[error("team name can't be empty")]
    EmptyTeamName,

    #[error("team does not exist: {0}")]
    TeamNotFound(TeamId),

    #[error("match does not exist: {0}")]
    MatchNotFound(MatchId),

    #[error("match already confirmed: {0}")]
    MatchAlreadyConfirmed(MatchId),

    #[error("tournament name can't be empty")]
    MissingTournamentName,

    #[error("not enough teams: need {needed}, have {current}")]
    NotEnoughTeams { needed: usize, current: usize },

    #[error("invalid phase: expected {expected}, got {actual}")]
    InvalidPhase {
        expected: TournamentPhase,
        actual: TournamentPhase,
    },

    #[error("enter at least one played set")]
    EmptyScore,

    #[error("group matches still unconfirmed")]
    GroupsNotComplete,

    #[error("bracket matches still unconfirmed")]
    BracketNotComplete,

    #[error("group does not exist: {0}")]
    GroupNotFound(usize),
}

pub type TournamentResult<T> = Result<T, TournamentError>;

/// Minimum field for a meaningful tournament.
const MIN_TEAMS: usize = 4;

fn require_phase(state: &TournamentState, expected: TournamentPhase) -> TournamentResult<()> {
    if state.phase == expected {
        Ok(())
    } else {
        Err(TournamentError::InvalidPhase {
            expected,
            actual: state.phase,
        })
    }
}

/// Register a new athlete. Athletes are global: they persist across
/// tournaments and carry their career record with them.
pub fn register_athlete(state: &mut TournamentState, name: &str) -> TournamentResult<AthleteId> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TournamentError::EmptyAthleteName);
    }
    if state.athletes.iter().any(|a| a.name == name) {
        return Err(TournamentError::DuplicateAthlete(name.to_string()));
    }
    let athlete = Athlete::new(name);
    let id = athlete.id;
    state.athletes.push(athlete);
    Ok(id)
}

/// Register a team of two distinct athletes for the current tournament.
/// An athlete can be on at most one team.
pub fn register_team(
    state: &mut TournamentState,
    name: &str,
    athlete1: AthleteId,
    athlete2: AthleteId,
) -> TournamentResult<TeamId> {
    require_phase(state, TournamentPhase::Setup)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(TournamentError::EmptyTeamName);
    }
    if athlete1 == athlete2 {
        return Err(TournamentError::IdenticalAthletes);
    }
    for id in [athlete1, athlete2] {
        if !state.athletes.iter().any(|a| a.id == id) {
            return Err(TournamentError::AthleteNotFound(id));
        }
        if state.teams.iter().any(|t| t.athletes.contains(&id)) {
            return Err(TournamentError::AthleteAlreadyTeamed(id));
        }
    }
    let team = Team::new(name, athlete1, athlete2);
    let id = team.id;
    state.teams.push(team);
    Ok(id)
}

/// Unregister a team during setup.
pub fn remove_team(state: &mut TournamentState, team: TeamId) -> TournamentResult<()> {
    require_phase(state, TournamentPhase::Setup)?;
    let before = state.teams.len();
    state.teams.retain(|t| t.id != team);
    if state.teams.len() == before {
        return Err(TournamentError::TeamNotFound(team));
    }
    Ok(())
}

/// Start the tournament: generate the groups and move to the group
/// phase. Requires a tournament name and at least four teams.
pub fn start_tournament<R: Rng>(state: &mut TournamentState, rng: &mut R) -> TournamentResult<()> {
    require_phase(state, TournamentPhase::Setup)?;
    if state.config.name.trim().is_empty() {
        return Err(TournamentError::MissingTournamentName);
    }
    if state.teams.len() < MIN_TEAMS {
        return Err(TournamentError::NotEnoughTeams {
            needed: MIN_TEAMS,
            current: state.teams.len(),
        });
    }
    let ids: Vec<TeamId> = state.teams.iter().map(|t| t.id).collect();
    state.groups = scheduler::generate_groups(
        rng,
        &ids,
        state.config.num_groups,
        state.config.is_single_group(),
    );
    state.phase = TournamentPhase::Groups;
    info!("tournament {} started, phase -> groups", state.config.name);
    Ok(())
}

/// Confirm a manually entered result.
///
/// Sets with any points count; a submission where every set is 0-0 is
/// rejected. Set wins derive from the entered pairs, the match flips to
/// confirmed, and standings update exactly once. In the elimination
/// phase the bracket grows if the round is complete.
pub fn record_result(
    state: &mut TournamentState,
    match_id: MatchId,
    sets: &[(u32, u32)],
) -> TournamentResult<()> {
    let played: Vec<(u32, u32)> = sets
        .iter()
        .copied()
        .filter(|(p1, p2)| *p1 > 0 || *p2 > 0)
        .collect();
    if played.is_empty() {
        return Err(TournamentError::EmptyScore);
    }

    let m = state
        .match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if m.confirmed {
        return Err(TournamentError::MatchAlreadyConfirmed(match_id));
    }

    let (mut sets1, mut sets2) = (0u32, 0u32);
    for (p1, p2) in &played {
        if p1 > p2 {
            sets1 += 1;
        } else {
            sets2 += 1;
        }
    }
    m.scores = played.iter().map(|(p1, p2)| SetScore(*p1, *p2)).collect();
    m.sets1 = sets1;
    m.sets2 = sets2;
    m.winner = Some(if sets1 > sets2 { m.team1 } else { m.team2 });
    m.confirmed = true;

    let snapshot = m.clone();
    standings::apply_result(&mut state.teams, &snapshot);
    if snapshot.phase == MatchPhase::Elimination {
        bracket::advance_round(&mut state.bracket);
    }
    Ok(())
}

/// Simulate one pending match.
///
/// Group results always feed the standings (the group ranking depends on
/// them); simulated elimination results feed them only when the state's
/// ranking-commit flag is set.
pub fn simulate(
    state: &mut TournamentState,
    rng: &mut impl Rng,
    match_id: MatchId,
) -> TournamentResult<()> {
    let config = state.config.clone();
    let commit = state.commit_simulated_to_ranking;
    let m = state
        .match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if m.confirmed {
        return Err(TournamentError::MatchAlreadyConfirmed(match_id));
    }
    simulation::simulate_match(rng, &config, m);

    let snapshot = m.clone();
    match snapshot.phase {
        MatchPhase::Group => standings::apply_result(&mut state.teams, &snapshot),
        MatchPhase::Elimination => {
            if commit {
                standings::apply_result(&mut state.teams, &snapshot);
            }
            bracket::advance_round(&mut state.bracket);
        }
    }
    Ok(())
}

/// Simulate every pending group match.
pub fn simulate_all_group_matches(
    state: &mut TournamentState,
    rng: &mut impl Rng,
) -> TournamentResult<()> {
    require_phase(state, TournamentPhase::Groups)?;
    let pending: Vec<MatchId> = state
        .groups
        .iter()
        .flat_map(|g| g.matches.iter())
        .filter(|m| !m.confirmed)
        .map(|m| m.id)
        .collect();
    for id in pending {
        simulate(state, rng, id)?;
    }
    Ok(())
}

/// Simulate the whole remaining bracket, growing rounds as they
/// complete, until no pending match is left.
pub fn simulate_all_playoffs(
    state: &mut TournamentState,
    rng: &mut impl Rng,
) -> TournamentResult<()> {
    require_phase(state, TournamentPhase::Elimination)?;
    loop {
        let pending: Vec<MatchId> = state
            .bracket
            .iter()
            .filter(|m| !m.confirmed)
            .map(|m| m.id)
            .collect();
        if pending.is_empty() {
            return Ok(());
        }
        for id in pending {
            simulate(state, rng, id)?;
        }
    }
}

/// Close the group phase: seed the bracket from the final standings and
/// move to elimination. Every group match must be confirmed first.
pub fn start_elimination<R: Rng>(state: &mut TournamentState, rng: &mut R) -> TournamentResult<()> {
    require_phase(state, TournamentPhase::Groups)?;
    if !state.groups_complete() {
        return Err(TournamentError::GroupsNotComplete);
    }
    let seeded = bracket::build_bracket_from_groups(rng, state);
    state.bracket = seeded;
    // A walkover can complete round 0 on its own for tiny brackets.
    bracket::advance_round(&mut state.bracket);
    state.phase = TournamentPhase::Elimination;
    info!("phase -> elimination");
    Ok(())
}

/// Close the tournament: derive winner and podium from the complete
/// bracket, commit placements to the athletes' careers when the
/// ranking-commit flag is set, and move to proclamation.
pub fn proclaim(state: &mut TournamentState) -> TournamentResult<()> {
    require_phase(state, TournamentPhase::Elimination)?;
    if !bracket::is_complete(&state.bracket) {
        return Err(TournamentError::BracketNotComplete);
    }
    state.winner = bracket::tournament_winner(&state.bracket);
    state.podium = bracket::derive_podium(&state.bracket);
    if state.commit_simulated_to_ranking {
        ranking::commit_placements(
            &mut state.athletes,
            &state.teams,
            &state.config.name,
            state.teams.len() as u32,
            &state.podium,
        );
    }
    state.phase = TournamentPhase::Proclamation;
    info!("phase -> proclamation, winner: {:?}", state.winner);
    Ok(())
}

/// Current standings of one group, best team first.
pub fn group_standings<'a>(
    state: &'a TournamentState,
    group_index: usize,
) -> TournamentResult<Vec<&'a Team>> {
    let group = state
        .groups
        .get(group_index)
        .ok_or(TournamentError::GroupNotFound(group_index))?;
    Ok(standings::rank_group(&state.teams, &group.teams))
}
