//! The session container: binds at most one live session to a zone.

use std::sync::atomic::{AtomicU64, Ordering};

use agora_protocol::{AreaSnapshot, GameId, ParticipantId, SessionResult};
use agora_zone::{Zone, ZoneEvent};

use crate::{GameRules, GameSession, SessionError};

/// Counter for generating unique game ids (process-wide).
static NEXT_GAME_ID: AtomicU64 = AtomicU64::new(1);

fn next_game_id() -> GameId {
    GameId(NEXT_GAME_ID.fetch_add(1, Ordering::Relaxed))
}

/// Owns the current game session (if any) for a zone, plus a history of
/// finished session results.
///
/// Invariant: at most one non-terminal session is bound at a time. A
/// finished session stays readable through [`serialize`](Self::serialize)
/// until the next [`join_game`](Self::join_game), which archives its
/// result into `history` and opens a fresh session.
pub struct SessionContainer<G: GameRules> {
    zone: Zone,
    current: Option<GameSession<G>>,
    history: Vec<SessionResult>,
}

impl<G: GameRules> SessionContainer<G> {
    pub fn new(zone: Zone) -> Self {
        Self {
            zone,
            current: None,
            history: Vec::new(),
        }
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    pub fn current_session(&self) -> Option<&GameSession<G>> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &[SessionResult] {
        &self.history
    }

    /// Adds a participant to the zone (movement layer reported an entry).
    pub fn add(&mut self, participant: ParticipantId) -> Option<ZoneEvent> {
        self.zone.add(participant)
    }

    /// Removes a participant from the zone (movement layer reported an
    /// exit or disconnect).
    ///
    /// The active session sees the departure *before* the zone discards
    /// the participant, so the rules engine can account for it while the
    /// member is still an occupant. Non-members fall through silently.
    pub fn remove(&mut self, participant: &ParticipantId) -> Vec<G::Event> {
        let mut events = Vec::new();
        if let Some(session) = &mut self.current {
            match session.leave(participant) {
                Ok(ev) => events = ev,
                Err(SessionError::PlayerNotInGame) => {}
                Err(e) => {
                    tracing::debug!(%participant, error = %e, "leave on removal failed");
                }
            }
        }
        self.zone.remove(participant);
        events
    }

    /// Admits a participant into the zone's session, creating one if none
    /// exists. A finished session is archived first.
    ///
    /// Returns the session id the participant joined.
    pub fn join_game(
        &mut self,
        participant: &ParticipantId,
    ) -> Result<(GameId, Vec<G::Event>), SessionError> {
        self.archive_finished();
        let session = self
            .current
            .get_or_insert_with(|| GameSession::new(next_game_id()));
        let events = session.join(participant)?;
        Ok((session.id(), events))
    }

    /// Removes a participant from the named session (an explicit leave,
    /// as opposed to walking out of the zone).
    pub fn leave_game(
        &mut self,
        game_id: GameId,
        participant: &ParticipantId,
    ) -> Result<Vec<G::Event>, SessionError> {
        self.session_mut(game_id)?.leave(participant)
    }

    /// Freezes the roster of the named session and starts the game.
    pub fn start_game(&mut self, game_id: GameId) -> Result<Vec<G::Event>, SessionError> {
        self.session_mut(game_id)?.start()
    }

    /// Applies a move to the named session.
    pub fn apply_move(
        &mut self,
        game_id: GameId,
        mv: &G::Move,
    ) -> Result<Vec<G::Event>, SessionError> {
        self.session_mut(game_id)?.apply_move(mv)
    }

    /// Fires the phase trigger on the named session.
    pub fn resolve_phase(&mut self, game_id: GameId) -> Result<Vec<G::Event>, SessionError> {
        self.session_mut(game_id)?.resolve()
    }

    /// Serialized shape of the whole area for the broadcast layer.
    pub fn serialize(&self) -> AreaSnapshot<G::State> {
        AreaSnapshot {
            id: self.zone.id().clone(),
            occupants: self.zone.occupants().to_vec(),
            game: self.current.as_ref().map(GameSession::snapshot),
            history: self.history.clone(),
        }
    }

    fn session_mut(&mut self, game_id: GameId) -> Result<&mut GameSession<G>, SessionError> {
        let session = self.current.as_mut().ok_or(SessionError::NoActiveGame)?;
        if session.id() != game_id {
            return Err(SessionError::GameIdMismatch);
        }
        Ok(session)
    }

    /// Moves a finished session's result into history and unbinds it.
    fn archive_finished(&mut self) {
        let finished = self.current.as_ref().is_some_and(GameSession::is_over);
        if !finished {
            return;
        }
        if let Some(session) = self.current.take() {
            let result = SessionResult {
                game_id: session.id(),
                scores: G::scores(session.state(), session.players()),
            };
            tracing::info!(game_id = %session.id(), "session archived");
            self.history.push(result);
        }
    }
}
