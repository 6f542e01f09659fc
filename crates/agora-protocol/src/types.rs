//! Core types shared between the session layer and the broadcast layer.
//!
//! Everything in this module is either part of the command surface (what
//! the network layer hands to a session container) or part of the
//! serialized snapshot shape (what the broadcast layer diffs and pushes
//! to clients). Nothing here knows any game rules.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A unique identifier for a participant in the space.
///
/// Identity is owned by the external player-tracking collaborator, which
/// issues opaque string ids. The session layer never inspects the contents;
/// it only compares and stores them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub String);

impl ParticipantId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A unique identifier for a zone (a bounded region of the space).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(pub String);

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ZoneId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A unique identifier for one game session hosted in a zone.
///
/// Minted by the session container from a process-wide counter, so every
/// session ever hosted in the process gets a distinct id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// A command accepted from the network layer.
///
/// Game moves travel as opaque bytes (`data`), serialized by the codec.
/// The protocol layer passes them through untouched; only the concrete
/// rules engine knows how to interpret them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Join the zone's current game session, creating one if needed.
    JoinGame,

    /// Leave the named game session.
    LeaveGame { game_id: GameId },

    /// Freeze the roster and assign roles.
    StartGame { game_id: GameId },

    /// Submit a move to the named session.
    GameMove { game_id: GameId, data: Vec<u8> },

    /// Tally the current phase's votes and advance the phase.
    ResolvePhase { game_id: GameId },
}

/// A command paired with its correlation id.
///
/// The network layer assigns `command_id`; the reply echoes it so the
/// caller can match responses to requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEnvelope {
    pub command_id: u64,
    pub command: Command,
}

/// The outcome of a command.
///
/// Errors are carried as a plain string message alongside the correlation
/// id — the caller surfaces the message to the end user and allows
/// resubmission. `game_id` is populated by `JoinGame`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandReply {
    pub command_id: u64,
    pub game_id: Option<GameId>,
    pub error: Option<String>,
}

impl CommandReply {
    /// A successful reply with no payload.
    pub fn ok(command_id: u64) -> Self {
        Self { command_id, game_id: None, error: None }
    }

    /// A successful reply carrying the session id (JoinGame).
    pub fn with_game(command_id: u64, game_id: GameId) -> Self {
        Self { command_id, game_id: Some(game_id), error: None }
    }

    /// A rejection carrying the validation failure message.
    pub fn error(command_id: u64, message: impl Into<String>) -> Self {
        Self { command_id, game_id: None, error: Some(message.into()) }
    }

    /// Returns `true` if the command was accepted.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

// ---------------------------------------------------------------------------
// Snapshot shapes
// ---------------------------------------------------------------------------

/// One finished session's result, kept in the container's history.
///
/// Appended exactly once when a session ends; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    pub game_id: GameId,
    /// Score per session member: winners 1, everyone else 0.
    pub scores: HashMap<ParticipantId, u32>,
}

/// The serialized shape of a game session inside an area snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot<S> {
    pub id: GameId,
    pub players: Vec<ParticipantId>,
    pub state: S,
}

/// The serialized shape of a whole area, consumed by the broadcast layer.
///
/// Generic over the game state `S` so the session layer can produce it
/// without knowing which rules engine is bound to the zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaSnapshot<S> {
    pub id: ZoneId,
    pub occupants: Vec<ParticipantId>,
    pub game: Option<GameSnapshot<S>>,
    pub history: Vec<SessionResult>,
}

/// Marker bounds every serialized game state must satisfy.
///
/// Blanket-implemented; exists so trait bounds elsewhere stay readable.
pub trait SnapshotState: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {}

impl<T> SnapshotState for T where T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {}
