//! The generic game session: membership bookkeeping around a rules engine.

use agora_protocol::{GameId, GameSnapshot, ParticipantId};

use crate::{GameRules, SessionError};

/// One playthrough of a game, generic over its rules engine.
///
/// This layer centralizes the "player already/not yet present" checks
/// every session type needs, then delegates to the [`GameRules`] hooks.
/// State is an immutable snapshot replaced wholesale on every successful
/// transition; a rejected operation leaves it untouched.
pub struct GameSession<G: GameRules> {
    id: GameId,
    players: Vec<ParticipantId>,
    state: G::State,
}

impl<G: GameRules> GameSession<G> {
    /// Creates an empty session in the rules engine's pre-start state.
    pub fn new(id: GameId) -> Self {
        Self {
            id,
            players: Vec::new(),
            state: G::initial_state(),
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    /// Current members, in join order.
    pub fn players(&self) -> &[ParticipantId] {
        &self.players
    }

    /// Read-only snapshot of the game state.
    pub fn state(&self) -> &G::State {
        &self.state
    }

    /// Returns `true` once the game has reached a terminal state.
    pub fn is_over(&self) -> bool {
        G::is_over(&self.state)
    }

    /// Adds a participant to the session.
    ///
    /// # Errors
    /// `PlayerAlreadyInGame` if the participant is already tracked; any
    /// error the rules engine's join hook raises (e.g. `GameFull`).
    pub fn join(&mut self, participant: &ParticipantId) -> Result<Vec<G::Event>, SessionError> {
        if self.players.contains(participant) {
            return Err(SessionError::PlayerAlreadyInGame);
        }
        let (next, events) = G::on_join(&self.state, &self.players, participant)?;
        self.players.push(participant.clone());
        self.state = next;
        tracing::info!(game_id = %self.id, %participant, players = self.players.len(), "player joined");
        Ok(events)
    }

    /// Removes a participant from the session.
    ///
    /// # Errors
    /// `PlayerNotInGame` if the participant is untracked.
    pub fn leave(&mut self, participant: &ParticipantId) -> Result<Vec<G::Event>, SessionError> {
        if !self.players.contains(participant) {
            return Err(SessionError::PlayerNotInGame);
        }
        let (next, events) = G::on_leave(&self.state, participant);
        self.players.retain(|p| p != participant);
        self.state = next;
        tracing::info!(game_id = %self.id, %participant, players = self.players.len(), "player left");
        Ok(events)
    }

    /// Freezes the roster and starts the game.
    pub fn start(&mut self) -> Result<Vec<G::Event>, SessionError> {
        let (next, events) = G::start(&self.state, &self.players)?;
        self.state = next;
        tracing::info!(game_id = %self.id, players = self.players.len(), "game started");
        Ok(events)
    }

    /// Applies a member-submitted move. Delegates entirely to the rules
    /// engine — no contract-level validation beyond what the engine does.
    pub fn apply_move(&mut self, mv: &G::Move) -> Result<Vec<G::Event>, SessionError> {
        let (next, events) = G::apply_move(&self.state, mv)?;
        self.state = next;
        Ok(events)
    }

    /// Fires the external phase trigger.
    pub fn resolve(&mut self) -> Result<Vec<G::Event>, SessionError> {
        let (next, events) = G::resolve(&self.state)?;
        self.state = next;
        Ok(events)
    }

    /// The serialized shape of this session for an area snapshot.
    pub fn snapshot(&self) -> GameSnapshot<G::State> {
        GameSnapshot {
            id: self.id,
            players: self.players.clone(),
            state: self.state.clone(),
        }
    }
}
