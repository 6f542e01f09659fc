//! Command dispatch: maps the network layer's commands onto a container.
//!
//! The dispatcher assumes a serializing caller (a single-threaded event
//! loop, or a per-container mutex upstream). Each call runs to completion
//! synchronously; the engine performs no internal locking and no I/O.

use agora_protocol::{Codec, Command, CommandEnvelope, CommandReply, ParticipantId};

use crate::{GameRules, SessionContainer, SessionError};

/// Validates and routes commands into a [`SessionContainer`].
///
/// Move payloads arrive as opaque bytes and are decoded with the codec
/// into the rules engine's move type. Every command produces a
/// [`CommandReply`] carrying the correlation id, plus the list of change
/// notifications for the broadcast layer (empty on rejection).
pub struct Dispatcher<G: GameRules, C: Codec> {
    container: SessionContainer<G>,
    codec: C,
}

impl<G: GameRules, C: Codec> Dispatcher<G, C> {
    pub fn new(container: SessionContainer<G>, codec: C) -> Self {
        Self { container, codec }
    }

    pub fn container(&self) -> &SessionContainer<G> {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut SessionContainer<G> {
        &mut self.container
    }

    /// Handles one command from `from`.
    pub fn handle(
        &mut self,
        from: &ParticipantId,
        envelope: CommandEnvelope,
    ) -> (CommandReply, Vec<G::Event>) {
        let command_id = envelope.command_id;
        let result = match envelope.command {
            Command::JoinGame => {
                return match self.container.join_game(from) {
                    Ok((game_id, events)) => {
                        (CommandReply::with_game(command_id, game_id), events)
                    }
                    Err(e) => self.reject(from, command_id, e),
                };
            }
            Command::LeaveGame { game_id } => self.container.leave_game(game_id, from),
            Command::StartGame { game_id } => self.container.start_game(game_id),
            Command::GameMove { game_id, data } => match self.codec.decode::<G::Move>(&data) {
                Ok(mv) => self.container.apply_move(game_id, &mv),
                Err(e) => {
                    tracing::debug!(%from, error = %e, "undecodable move payload");
                    return (CommandReply::error(command_id, e.to_string()), Vec::new());
                }
            },
            Command::ResolvePhase { game_id } => self.container.resolve_phase(game_id),
        };

        match result {
            Ok(events) => (CommandReply::ok(command_id), events),
            Err(e) => self.reject(from, command_id, e),
        }
    }

    fn reject(
        &self,
        from: &ParticipantId,
        command_id: u64,
        error: SessionError,
    ) -> (CommandReply, Vec<G::Event>) {
        tracing::debug!(%from, %error, "command rejected");
        (CommandReply::error(command_id, error.to_string()), Vec::new())
    }
}
