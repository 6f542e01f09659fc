//! The Mafia game's authoritative state model.
//!
//! One normalized roster holds every participant who ever joined, tagged
//! with an immutable role and a mutable status. All role-specific views
//! (who is Mafia, who is still alive, …) are derived by filtering the
//! roster rather than kept as parallel collections.

use agora_protocol::ParticipantId;
use serde::{Deserialize, Serialize};

/// A secret role dealt at game start. Immutable for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Villager,
    Mafia,
    Doctor,
    Police,
}

impl Role {
    /// The side this role wins with.
    pub fn team(self) -> Team {
        match self {
            Role::Mafia => Team::Mafia,
            Role::Villager | Role::Doctor | Role::Police => Team::Civilians,
        }
    }
}

/// Whether a roster member can still act and count toward a win.
///
/// `Left` is equivalent to `Eliminated` for win-counting purposes; the
/// distinction only matters to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStatus {
    Alive,
    Eliminated,
    Left,
}

/// The two alternating in-game phases. Absent before the game starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Day,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    WaitingToStart,
    InProgress,
    Over,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    Civilians,
    Mafia,
}

/// One participant's seat in the game: role dealt once, status mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    pub player: ParticipantId,
    pub role: Role,
    pub status: PlayerStatus,
}

/// A recorded vote, pending until the phase resolves.
///
/// At most one vote per `(voter, phase)` is kept; a repeated vote from the
/// same voter replaces the prior one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub voter: ParticipantId,
    pub target: ParticipantId,
    pub round: u32,
    pub phase: Phase,
}

/// The full authoritative game state, replaced wholesale on every
/// successful transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MafiaState {
    pub status: GameStatus,
    /// `None` until roles are dealt.
    pub phase: Option<Phase>,
    /// Night→Day cycle counter; 0 before start, 1 during the first cycle.
    pub round: u32,
    pub roster: Vec<RoleAssignment>,
    /// The current phase's unresolved votes, in submission order.
    pub pending_votes: Vec<Vote>,
    /// Every target the Police has investigated, cumulative across rounds.
    pub investigation: Vec<ParticipantId>,
    /// The Doctor's most recent save. Shields its holder from the night
    /// mark and from the following day's plurality vote, then clears.
    pub saved: Option<ParticipantId>,
    pub winning_team: Option<Team>,
    pub winners: Option<Vec<ParticipantId>>,
}

impl MafiaState {
    /// The empty pre-start state.
    pub fn new() -> Self {
        Self {
            status: GameStatus::WaitingToStart,
            phase: None,
            round: 0,
            roster: Vec::new(),
            pending_votes: Vec::new(),
            investigation: Vec::new(),
            saved: None,
            winning_team: None,
            winners: None,
        }
    }

    pub fn assignment(&self, player: &ParticipantId) -> Option<&RoleAssignment> {
        self.roster.iter().find(|a| &a.player == player)
    }

    pub fn role_of(&self, player: &ParticipantId) -> Option<Role> {
        self.assignment(player).map(|a| a.role)
    }

    pub fn is_alive(&self, player: &ParticipantId) -> bool {
        self.assignment(player)
            .is_some_and(|a| a.status == PlayerStatus::Alive)
    }

    /// Alive roster members on the given team.
    pub fn alive_on(&self, team: Team) -> impl Iterator<Item = &RoleAssignment> {
        self.roster
            .iter()
            .filter(move |a| a.status == PlayerStatus::Alive && a.role.team() == team)
    }

    pub fn alive_count(&self, team: Team) -> usize {
        self.alive_on(team).count()
    }

    /// The single alive holder of `role`, if any.
    pub fn alive_with_role(&self, role: Role) -> Option<&RoleAssignment> {
        self.roster
            .iter()
            .find(|a| a.role == role && a.status == PlayerStatus::Alive)
    }
}

impl Default for MafiaState {
    fn default() -> Self {
        Self::new()
    }
}
