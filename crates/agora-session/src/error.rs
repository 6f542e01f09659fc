//! Error taxonomy for session operations.
//!
//! Every variant is a synchronous validation failure: a rejected operation
//! never partially mutates state. Messages are surfaced verbatim to the
//! end user by the network layer, so they are phrased for people, not logs.

/// Errors that can occur during session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The participant already has a seat in this session.
    #[error("Player is already in this game")]
    PlayerAlreadyInGame,

    /// The participant is not a member of this session.
    #[error("Player is not in this game")]
    PlayerNotInGame,

    /// The roster is at its maximum size.
    #[error("Game is full")]
    GameFull,

    /// The roster is below the minimum size required to start.
    #[error("Not enough players to start the game")]
    NotEnoughPlayers,

    /// The operation requires a running game.
    #[error("Game is not in progress")]
    GameNotInProgress,

    /// Roles have been assigned; the roster is frozen.
    #[error("Game has already started")]
    GameAlreadyStarted,

    /// The acting participant's role may not move in the current phase.
    #[error("Not your turn")]
    NotYourTurn,

    /// The voter has been eliminated or has left; dead players don't vote.
    #[error("Player is already dead")]
    PlayerAlreadyDead,

    /// Retained for callers that reject rather than replace a repeated
    /// vote. This engine replaces (last vote wins) and never raises it.
    #[error("Player has already voted this phase")]
    PlayerAlreadyVoted,

    /// The command named a session other than the one bound to the zone.
    #[error("Game ID mismatch")]
    GameIdMismatch,

    /// No session is currently hosted in this zone.
    #[error("No game in this area")]
    NoActiveGame,
}
