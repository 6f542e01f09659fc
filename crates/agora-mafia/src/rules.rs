//! The Mafia rules engine: vote validation, phase resolution, win detection.

use std::collections::HashMap;

use agora_protocol::ParticipantId;
use agora_session::{GameRules, SessionError, Transition};
use serde::{Deserialize, Serialize};

use crate::event::MafiaEvent;
use crate::roles::{self, MAX_PLAYERS, MIN_PLAYERS};
use crate::state::{GameStatus, MafiaState, Phase, PlayerStatus, Role, Team, Vote};

/// The move participants submit: a vote naming a target.
///
/// During Day, a vote nominates the target for elimination. During Night
/// the same shape carries each special role's action: the Mafia's kill
/// mark, the Doctor's save, the Police's investigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteMove {
    pub voter: ParticipantId,
    pub target: ParticipantId,
}

/// The Mafia session type. Stateless: all game data lives in [`MafiaState`].
pub struct MafiaGame;

impl GameRules for MafiaGame {
    type State = MafiaState;
    type Move = VoteMove;
    type Event = MafiaEvent;

    fn initial_state() -> MafiaState {
        MafiaState::new()
    }

    fn on_join(
        state: &MafiaState,
        players: &[ParticipantId],
        _joining: &ParticipantId,
    ) -> Transition<MafiaState, MafiaEvent> {
        if state.status != GameStatus::WaitingToStart {
            return Err(SessionError::GameAlreadyStarted);
        }
        if players.len() >= MAX_PLAYERS {
            return Err(SessionError::GameFull);
        }
        Ok((state.clone(), Vec::new()))
    }

    fn on_leave(state: &MafiaState, leaving: &ParticipantId) -> (MafiaState, Vec<MafiaEvent>) {
        let mut next = state.clone();
        let mut events = Vec::new();
        if next.status != GameStatus::InProgress {
            return (next, events);
        }
        let seat = next
            .roster
            .iter_mut()
            .find(|a| &a.player == leaving && a.status == PlayerStatus::Alive);
        if let Some(seat) = seat {
            // Equivalent to an elimination for win counting.
            seat.status = PlayerStatus::Left;
            events.push(MafiaEvent::PlayerLeft { player: leaving.clone() });
            check_win(&mut next, &mut events);
        }
        (next, events)
    }

    fn start(
        state: &MafiaState,
        players: &[ParticipantId],
    ) -> Transition<MafiaState, MafiaEvent> {
        if state.status != GameStatus::WaitingToStart {
            return Err(SessionError::GameAlreadyStarted);
        }
        // Dealt atomically: a roster size outside the window leaves the
        // pre-start state untouched.
        let roster = roles::assign_roles(players, &mut rand::rng()).ok_or(
            if players.len() < MIN_PLAYERS {
                SessionError::NotEnoughPlayers
            } else {
                SessionError::GameFull
            },
        )?;

        let mut next = state.clone();
        next.roster = roster;
        next.status = GameStatus::InProgress;
        next.phase = Some(Phase::Day);
        next.round = 1;
        tracing::info!(players = players.len(), "roles dealt, game started");
        Ok((
            next,
            vec![
                MafiaEvent::StatusChanged { status: GameStatus::InProgress },
                MafiaEvent::PhaseChanged { phase: Phase::Day },
                MafiaEvent::RoundChanged { round: 1 },
            ],
        ))
    }

    fn apply_move(state: &MafiaState, mv: &VoteMove) -> Transition<MafiaState, MafiaEvent> {
        if state.status != GameStatus::InProgress {
            return Err(SessionError::GameNotInProgress);
        }
        let phase = state.phase.ok_or(SessionError::GameNotInProgress)?;
        let seat = state
            .assignment(&mv.voter)
            .ok_or(SessionError::PlayerNotInGame)?;
        if seat.status != PlayerStatus::Alive {
            return Err(SessionError::PlayerAlreadyDead);
        }
        if phase == Phase::Night && seat.role == Role::Villager {
            return Err(SessionError::NotYourTurn);
        }

        let mut next = state.clone();
        // Last vote wins: a repeated vote in the same phase replaces the
        // prior one rather than stacking or being rejected.
        next.pending_votes.retain(|v| v.voter != mv.voter);
        next.pending_votes.push(Vote {
            voter: mv.voter.clone(),
            target: mv.target.clone(),
            round: state.round,
            phase,
        });
        Ok((
            next,
            vec![MafiaEvent::VoteRecorded {
                voter: mv.voter.clone(),
                target: mv.target.clone(),
            }],
        ))
    }

    /// Tallies the current phase's votes and advances the phase.
    ///
    /// Resolving with no pending votes is a complete no-op, so a repeated
    /// trigger can never double-increment the round or double-eliminate.
    fn resolve(state: &MafiaState) -> Transition<MafiaState, MafiaEvent> {
        if state.pending_votes.is_empty() {
            return Ok((state.clone(), Vec::new()));
        }
        if state.status != GameStatus::InProgress {
            return Err(SessionError::GameNotInProgress);
        }
        let phase = state.phase.ok_or(SessionError::GameNotInProgress)?;

        let mut next = state.clone();
        let mut events = Vec::new();
        match phase {
            Phase::Day => resolve_day(&mut next, &mut events),
            Phase::Night => resolve_night(&mut next, &mut events),
        }
        next.pending_votes.clear();

        check_win(&mut next, &mut events);
        if next.status == GameStatus::InProgress {
            match phase {
                Phase::Day => {
                    next.phase = Some(Phase::Night);
                    events.push(MafiaEvent::PhaseChanged { phase: Phase::Night });
                }
                Phase::Night => {
                    next.phase = Some(Phase::Day);
                    next.round += 1;
                    events.push(MafiaEvent::PhaseChanged { phase: Phase::Day });
                    events.push(MafiaEvent::RoundChanged { round: next.round });
                }
            }
        }
        Ok((next, events))
    }

    fn is_over(state: &MafiaState) -> bool {
        state.status == GameStatus::Over
    }

    /// Winners score 1, everyone else 0, across the whole roster (members
    /// who left or were eliminated included).
    fn scores(state: &MafiaState, players: &[ParticipantId]) -> HashMap<ParticipantId, u32> {
        let winners = state.winners.as_deref().unwrap_or_default();
        let members: Vec<&ParticipantId> = if state.roster.is_empty() {
            players.iter().collect()
        } else {
            state.roster.iter().map(|a| &a.player).collect()
        };
        members
            .into_iter()
            .map(|p| (p.clone(), u32::from(winners.contains(p))))
            .collect()
    }
}

/// The day's plurality target is eliminated, unless shielded by the
/// Doctor's save from the preceding night. The shield expires either way.
fn resolve_day(state: &mut MafiaState, events: &mut Vec<MafiaEvent>) {
    if let Some(target) = plurality(&state.pending_votes, |_| true) {
        if state.saved.as_ref() != Some(&target) {
            eliminate(state, &target, events);
        }
    }
    state.saved = None;
}

/// Night actions: the Doctor names a save, the Police reveals a target,
/// the Mafia's plurality mark is eliminated unless it matches the save.
fn resolve_night(state: &mut MafiaState, events: &mut Vec<MafiaEvent>) {
    let role_of = |state: &MafiaState, voter: &ParticipantId| state.role_of(voter);

    if let Some(save) = state
        .pending_votes
        .iter()
        .find(|v| role_of(state, &v.voter) == Some(Role::Doctor))
        .map(|v| v.target.clone())
    {
        state.saved = Some(save);
    }

    if let Some(target) = state
        .pending_votes
        .iter()
        .find(|v| role_of(state, &v.voter) == Some(Role::Police))
        .map(|v| v.target.clone())
    {
        state.investigation.push(target.clone());
        events.push(MafiaEvent::InvestigationRevealed { target });
    }

    let votes = state.pending_votes.clone();
    let marked = plurality(&votes, |v| role_of(state, &v.voter) == Some(Role::Mafia));
    if let Some(marked) = marked {
        if state.saved.as_ref() != Some(&marked) {
            eliminate(state, &marked, events);
        }
    }
}

/// The target with the most votes among those passing `include`.
///
/// Deterministic tie-break: the tied target whose first vote was submitted
/// earliest wins the plurality.
fn plurality<F>(votes: &[Vote], mut include: F) -> Option<ParticipantId>
where
    F: FnMut(&Vote) -> bool,
{
    // Tallies keep first-vote order, and a later target only displaces an
    // earlier one on a strictly greater count.
    let mut tallies: Vec<(ParticipantId, usize)> = Vec::new();
    for vote in votes.iter().filter(|v| include(v)) {
        match tallies.iter_mut().find(|(t, _)| t == &vote.target) {
            Some((_, count)) => *count += 1,
            None => tallies.push((vote.target.clone(), 1)),
        }
    }
    let mut best: Option<(ParticipantId, usize)> = None;
    for (target, count) in tallies {
        if best.as_ref().is_none_or(|(_, b)| count > *b) {
            best = Some((target, count));
        }
    }
    best.map(|(target, _)| target)
}

fn eliminate(state: &mut MafiaState, target: &ParticipantId, events: &mut Vec<MafiaEvent>) {
    let seat = state
        .roster
        .iter_mut()
        .find(|a| &a.player == target && a.status == PlayerStatus::Alive);
    if let Some(seat) = seat {
        seat.status = PlayerStatus::Eliminated;
        events.push(MafiaEvent::PlayerEliminated { player: target.clone() });
    }
}

/// Civilians win when no Mafia remains alive; Mafia wins when alive Mafia
/// reach parity with alive civilian-aligned members. Winners are every
/// alive member of the winning side.
fn check_win(state: &mut MafiaState, events: &mut Vec<MafiaEvent>) {
    if state.status != GameStatus::InProgress {
        return;
    }
    let mafia = state.alive_count(Team::Mafia);
    let civilians = state.alive_count(Team::Civilians);
    let team = if mafia == 0 {
        Team::Civilians
    } else if mafia >= civilians {
        Team::Mafia
    } else {
        return;
    };

    let winners: Vec<ParticipantId> = state.alive_on(team).map(|a| a.player.clone()).collect();
    state.status = GameStatus::Over;
    state.winning_team = Some(team);
    state.winners = Some(winners.clone());
    tracing::info!(?team, winners = winners.len(), "game over");
    events.push(MafiaEvent::StatusChanged { status: GameStatus::Over });
    events.push(MafiaEvent::GameEnded { team, winners });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RoleAssignment;

    fn pid(id: &str) -> ParticipantId {
        ParticipantId::from(id)
    }

    fn vote(voter: &str, target: &str) -> VoteMove {
        VoteMove { voter: pid(voter), target: pid(target) }
    }

    /// An in-progress state with the given seats, Day phase, round 1.
    fn in_progress(seats: &[(&str, Role)]) -> MafiaState {
        let mut state = MafiaState::new();
        state.status = GameStatus::InProgress;
        state.phase = Some(Phase::Day);
        state.round = 1;
        state.roster = seats
            .iter()
            .map(|(id, role)| RoleAssignment {
                player: pid(id),
                role: *role,
                status: PlayerStatus::Alive,
            })
            .collect();
        state
    }

    /// Six seats: m1/m2 Mafia, v1/v2 Villagers, doc Doctor, cop Police.
    fn six_seats() -> MafiaState {
        in_progress(&[
            ("m1", Role::Mafia),
            ("m2", Role::Mafia),
            ("v1", Role::Villager),
            ("v2", Role::Villager),
            ("doc", Role::Doctor),
            ("cop", Role::Police),
        ])
    }

    fn apply(state: &MafiaState, mv: VoteMove) -> MafiaState {
        MafiaGame::apply_move(state, &mv).unwrap().0
    }

    fn status_of(state: &MafiaState, id: &str) -> PlayerStatus {
        state.assignment(&pid(id)).unwrap().status
    }

    // ------------------------------------------------------------------
    // Move validation
    // ------------------------------------------------------------------

    #[test]
    fn test_move_rejected_unless_in_progress() {
        let waiting = MafiaState::new();
        assert_eq!(
            MafiaGame::apply_move(&waiting, &vote("v1", "m1")).unwrap_err(),
            SessionError::GameNotInProgress
        );

        let mut over = six_seats();
        over.status = GameStatus::Over;
        assert_eq!(
            MafiaGame::apply_move(&over, &vote("v1", "m1")).unwrap_err(),
            SessionError::GameNotInProgress
        );
    }

    #[test]
    fn test_unknown_voter_rejected() {
        let state = six_seats();
        assert_eq!(
            MafiaGame::apply_move(&state, &vote("stranger", "m1")).unwrap_err(),
            SessionError::PlayerNotInGame
        );
    }

    #[test]
    fn test_dead_voter_rejected() {
        let mut state = six_seats();
        state.roster[2].status = PlayerStatus::Eliminated;
        assert_eq!(
            MafiaGame::apply_move(&state, &vote("v1", "m1")).unwrap_err(),
            SessionError::PlayerAlreadyDead
        );
    }

    #[test]
    fn test_villager_may_vote_by_day_but_not_by_night() {
        let mut state = six_seats();
        assert!(MafiaGame::apply_move(&state, &vote("v1", "m1")).is_ok());

        state.phase = Some(Phase::Night);
        assert_eq!(
            MafiaGame::apply_move(&state, &vote("v1", "m1")).unwrap_err(),
            SessionError::NotYourTurn
        );
        // Special roles still act at night.
        assert!(MafiaGame::apply_move(&state, &vote("m1", "v1")).is_ok());
        assert!(MafiaGame::apply_move(&state, &vote("doc", "v1")).is_ok());
        assert!(MafiaGame::apply_move(&state, &vote("cop", "m1")).is_ok());
    }

    #[test]
    fn test_repeated_vote_replaces_prior_one() {
        let state = six_seats();
        let state = apply(&state, vote("v1", "m1"));
        let state = apply(&state, vote("v1", "m2"));

        assert_eq!(state.pending_votes.len(), 1);
        assert_eq!(state.pending_votes[0].voter, pid("v1"));
        assert_eq!(state.pending_votes[0].target, pid("m2"));
    }

    #[test]
    fn test_rejected_move_leaves_state_unchanged() {
        let mut state = six_seats();
        state.phase = Some(Phase::Night);
        let before = state.clone();
        let _ = MafiaGame::apply_move(&state, &vote("v1", "m1"));
        assert_eq!(state, before);
        assert!(state.pending_votes.is_empty());
    }

    // ------------------------------------------------------------------
    // Day resolution
    // ------------------------------------------------------------------

    #[test]
    fn test_day_plurality_target_is_eliminated() {
        let mut state = six_seats();
        for voter in ["v1", "v2", "doc"] {
            state = apply(&state, vote(voter, "m1"));
        }
        state = apply(&state, vote("m1", "v1"));

        let (next, events) = MafiaGame::resolve(&state).unwrap();
        assert_eq!(status_of(&next, "m1"), PlayerStatus::Eliminated);
        assert!(events.contains(&MafiaEvent::PlayerEliminated { player: pid("m1") }));
        assert_eq!(next.phase, Some(Phase::Night));
        assert_eq!(next.round, 1);
        assert!(next.pending_votes.is_empty());
    }

    #[test]
    fn test_day_tie_breaks_to_earliest_first_vote() {
        let mut state = six_seats();
        // Two votes each; v1's first vote names m1 before anyone names v2.
        state = apply(&state, vote("v1", "m1"));
        state = apply(&state, vote("m1", "v2"));
        state = apply(&state, vote("v2", "m1"));
        state = apply(&state, vote("m2", "v2"));

        let (next, _) = MafiaGame::resolve(&state).unwrap();
        assert_eq!(status_of(&next, "m1"), PlayerStatus::Eliminated);
        assert_eq!(status_of(&next, "v2"), PlayerStatus::Alive);
    }

    #[test]
    fn test_day_elimination_shielded_by_standing_save() {
        let mut state = six_seats();
        state.saved = Some(pid("v1"));
        state = apply(&state, vote("m1", "v1"));
        state = apply(&state, vote("m2", "v1"));

        let (next, events) = MafiaGame::resolve(&state).unwrap();
        assert_eq!(status_of(&next, "v1"), PlayerStatus::Alive);
        assert!(!events.iter().any(|e| matches!(e, MafiaEvent::PlayerEliminated { .. })));
        // The shield expires once the day resolves.
        assert_eq!(next.saved, None);
    }

    // ------------------------------------------------------------------
    // Night resolution
    // ------------------------------------------------------------------

    fn at_night(mut state: MafiaState) -> MafiaState {
        state.phase = Some(Phase::Night);
        state
    }

    #[test]
    fn test_night_mark_eliminated_when_not_saved() {
        let mut state = at_night(six_seats());
        state = apply(&state, vote("m1", "v1"));
        state = apply(&state, vote("m2", "v1"));
        state = apply(&state, vote("doc", "v2"));

        let (next, _) = MafiaGame::resolve(&state).unwrap();
        assert_eq!(status_of(&next, "v1"), PlayerStatus::Eliminated);
        assert_eq!(next.phase, Some(Phase::Day));
        assert_eq!(next.round, 2);
    }

    #[test]
    fn test_night_save_matching_mark_prevents_elimination() {
        let mut state = at_night(six_seats());
        state = apply(&state, vote("m1", "v1"));
        state = apply(&state, vote("m2", "v1"));
        state = apply(&state, vote("doc", "v1"));

        let (next, events) = MafiaGame::resolve(&state).unwrap();
        assert_eq!(status_of(&next, "v1"), PlayerStatus::Alive);
        assert!(!events.iter().any(|e| matches!(e, MafiaEvent::PlayerEliminated { .. })));
        assert_eq!(next.saved, Some(pid("v1")));
    }

    #[test]
    fn test_night_investigation_is_cumulative() {
        let mut state = at_night(six_seats());
        state.investigation = vec![pid("v1")];
        state = apply(&state, vote("cop", "m1"));
        state = apply(&state, vote("m1", "v2"));

        let (next, events) = MafiaGame::resolve(&state).unwrap();
        assert_eq!(next.investigation, vec![pid("v1"), pid("m1")]);
        assert!(events.contains(&MafiaEvent::InvestigationRevealed { target: pid("m1") }));
    }

    #[test]
    fn test_only_mafia_votes_count_toward_the_mark() {
        let mut state = at_night(six_seats());
        // The special civilians "outvote" the Mafia, but their votes are
        // actions, not marks.
        state = apply(&state, vote("doc", "m2"));
        state = apply(&state, vote("cop", "m2"));
        state = apply(&state, vote("m1", "v1"));

        let (next, _) = MafiaGame::resolve(&state).unwrap();
        assert_eq!(status_of(&next, "m2"), PlayerStatus::Alive);
        assert_eq!(status_of(&next, "v1"), PlayerStatus::Eliminated);
    }

    // ------------------------------------------------------------------
    // Resolution safety and win detection
    // ------------------------------------------------------------------

    #[test]
    fn test_resolve_with_no_votes_is_a_no_op() {
        let state = six_seats();
        let (next, events) = MafiaGame::resolve(&state).unwrap();
        assert_eq!(next, state);
        assert!(events.is_empty());
    }

    #[test]
    fn test_double_resolve_changes_nothing_the_second_time() {
        let mut state = six_seats();
        state = apply(&state, vote("v1", "m1"));

        let (after_first, _) = MafiaGame::resolve(&state).unwrap();
        let (after_second, events) = MafiaGame::resolve(&after_first).unwrap();
        assert_eq!(after_second, after_first);
        assert!(events.is_empty());
    }

    #[test]
    fn test_civilians_win_when_last_mafia_falls() {
        let mut state = six_seats();
        state.roster[0].status = PlayerStatus::Eliminated; // m1 already out
        for voter in ["v1", "v2", "doc"] {
            state = apply(&state, vote(voter, "m2"));
        }

        let (next, events) = MafiaGame::resolve(&state).unwrap();
        assert_eq!(next.status, GameStatus::Over);
        assert_eq!(next.winning_team, Some(Team::Civilians));
        let winners = next.winners.clone().unwrap();
        assert_eq!(winners, vec![pid("v1"), pid("v2"), pid("doc"), pid("cop")]);
        assert!(events.contains(&MafiaEvent::StatusChanged { status: GameStatus::Over }));
        assert!(events.iter().any(|e| matches!(e, MafiaEvent::GameEnded { team: Team::Civilians, .. })));
        // The phase does not flip once the game is over.
        assert_eq!(next.phase, Some(Phase::Day));
    }

    #[test]
    fn test_mafia_win_at_parity() {
        // 2 mafia vs 3 civilians; eliminating one civilian reaches parity.
        let mut state = at_night(in_progress(&[
            ("m1", Role::Mafia),
            ("m2", Role::Mafia),
            ("v1", Role::Villager),
            ("v2", Role::Villager),
            ("doc", Role::Doctor),
        ]));
        state = apply(&state, vote("m1", "v1"));
        state = apply(&state, vote("m2", "v1"));

        let (next, _) = MafiaGame::resolve(&state).unwrap();
        assert_eq!(next.status, GameStatus::Over);
        assert_eq!(next.winning_team, Some(Team::Mafia));
        assert_eq!(next.winners, Some(vec![pid("m1"), pid("m2")]));
        // No round increment after the terminal resolution.
        assert_eq!(next.round, 1);
    }

    // ------------------------------------------------------------------
    // Join / leave hooks
    // ------------------------------------------------------------------

    #[test]
    fn test_join_after_start_is_rejected() {
        let state = six_seats();
        let players: Vec<ParticipantId> =
            state.roster.iter().map(|a| a.player.clone()).collect();
        assert_eq!(
            MafiaGame::on_join(&state, &players, &pid("late")).unwrap_err(),
            SessionError::GameAlreadyStarted
        );
    }

    #[test]
    fn test_leave_in_progress_marks_left_and_rechecks_win() {
        let mut state = six_seats();
        state.roster[0].status = PlayerStatus::Eliminated; // m1 out
        let (next, events) = MafiaGame::on_leave(&state, &pid("m2"));

        assert_eq!(status_of(&next, "m2"), PlayerStatus::Left);
        assert!(events.contains(&MafiaEvent::PlayerLeft { player: pid("m2") }));
        // The last Mafia walking out hands Civilians the win.
        assert_eq!(next.status, GameStatus::Over);
        assert_eq!(next.winning_team, Some(Team::Civilians));
    }

    #[test]
    fn test_leave_before_start_changes_nothing() {
        let state = MafiaState::new();
        let (next, events) = MafiaGame::on_leave(&state, &pid("p0"));
        assert_eq!(next, state);
        assert!(events.is_empty());
    }

    // ------------------------------------------------------------------
    // Start and scores
    // ------------------------------------------------------------------

    fn players(n: usize) -> Vec<ParticipantId> {
        (0..n).map(|i| ParticipantId::new(format!("p{i}"))).collect()
    }

    #[test]
    fn test_start_deals_roles_and_opens_day_one() {
        let (next, events) = MafiaGame::start(&MafiaState::new(), &players(7)).unwrap();
        assert_eq!(next.status, GameStatus::InProgress);
        assert_eq!(next.phase, Some(Phase::Day));
        assert_eq!(next.round, 1);
        assert_eq!(next.roster.len(), 7);
        assert_eq!(
            events,
            vec![
                MafiaEvent::StatusChanged { status: GameStatus::InProgress },
                MafiaEvent::PhaseChanged { phase: Phase::Day },
                MafiaEvent::RoundChanged { round: 1 },
            ]
        );
    }

    #[test]
    fn test_start_outside_window_fails_without_mutation() {
        let state = MafiaState::new();
        assert_eq!(
            MafiaGame::start(&state, &players(5)).unwrap_err(),
            SessionError::NotEnoughPlayers
        );
        assert_eq!(
            MafiaGame::start(&state, &players(11)).unwrap_err(),
            SessionError::GameFull
        );
        assert_eq!(state.status, GameStatus::WaitingToStart);
        assert!(state.roster.is_empty());
    }

    #[test]
    fn test_start_twice_is_rejected() {
        let state = six_seats();
        let players: Vec<ParticipantId> =
            state.roster.iter().map(|a| a.player.clone()).collect();
        assert_eq!(
            MafiaGame::start(&state, &players).unwrap_err(),
            SessionError::GameAlreadyStarted
        );
    }

    #[test]
    fn test_scores_mark_winners_across_the_whole_roster() {
        let mut state = six_seats();
        state.roster[0].status = PlayerStatus::Eliminated;
        state.roster[1].status = PlayerStatus::Left;
        state.status = GameStatus::Over;
        state.winning_team = Some(Team::Civilians);
        state.winners = Some(vec![pid("v1"), pid("v2"), pid("doc"), pid("cop")]);

        let scores = MafiaGame::scores(&state, &[]);
        assert_eq!(scores.len(), 6);
        assert_eq!(scores[&pid("v1")], 1);
        assert_eq!(scores[&pid("cop")], 1);
        assert_eq!(scores[&pid("m1")], 0);
        assert_eq!(scores[&pid("m2")], 0);
    }
}
