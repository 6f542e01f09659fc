//! Shared protocol types for Agora.
//!
//! This crate defines what travels between the session layer and its
//! external collaborators:
//!
//! - **Types** ([`Command`], [`CommandEnvelope`], [`CommandReply`],
//!   [`AreaSnapshot`], identity newtypes) — the command surface and the
//!   serialized shapes the broadcast layer consumes.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how moves and snapshots
//!   convert to/from bytes.
//! - **Errors** ([`ProtocolError`]) — what can go wrong doing so.
//!
//! The protocol layer knows nothing about zones, sessions, or game rules;
//! it only defines shapes.

mod codec;
mod error;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::ProtocolError;
pub use types::{
    AreaSnapshot, Command, CommandEnvelope, CommandReply, GameId, GameSnapshot,
    ParticipantId, SessionResult, SnapshotState, ZoneId,
};
