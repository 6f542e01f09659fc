//! The `GameRules` trait — the extension point concrete rules engines
//! implement.
//!
//! The generic session layer owns membership bookkeeping ("is this
//! participant already/not yet part of the session"); a rules engine only
//! implements game-specific validation and transitions through these hooks.

use std::collections::HashMap;

use agora_protocol::{ParticipantId, SnapshotState};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::SessionError;

/// A state transition: the next snapshot plus the change notifications it
/// produced. The caller swaps the snapshot in wholesale, so readers never
/// observe a partially-updated state and a rejected operation leaves the
/// old snapshot byte-for-byte untouched.
pub type Transition<S, E> = Result<(S, Vec<E>), SessionError>;

/// The contract every session type hosted in a zone implements.
///
/// Associated types define the shape of the game's data:
/// - `State` — the full authoritative game state, serializable so the
///   container can snapshot it for the broadcast layer.
/// - `Move` — what participants submit (decoded from opaque command bytes).
/// - `Event` — named change notifications consumed by the presentation
///   layer (phase changed, player eliminated, …).
///
/// Hooks are pure functions over `&State`: validation runs to completion
/// before any mutation begins, and the new state is only adopted on `Ok`.
pub trait GameRules: Send + Sync + 'static {
    /// The authoritative game state.
    type State: SnapshotState;

    /// A participant-submitted move.
    type Move: Clone + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// A named change notification.
    type Event: Clone + Send + Sync + 'static;

    /// The empty pre-start state for a freshly created session.
    fn initial_state() -> Self::State;

    /// A participant is joining. `players` is the membership list *before*
    /// the join; the session layer has already rejected duplicates.
    fn on_join(
        state: &Self::State,
        players: &[ParticipantId],
        joining: &ParticipantId,
    ) -> Transition<Self::State, Self::Event>;

    /// A member is leaving. Infallible: the session layer has already
    /// verified membership, and a departure must always be honored.
    fn on_leave(
        state: &Self::State,
        leaving: &ParticipantId,
    ) -> (Self::State, Vec<Self::Event>);

    /// The external start trigger fired: freeze the roster and begin.
    fn start(
        state: &Self::State,
        players: &[ParticipantId],
    ) -> Transition<Self::State, Self::Event>;

    /// A member submitted a move. All game-specific validation lives here.
    fn apply_move(state: &Self::State, mv: &Self::Move) -> Transition<Self::State, Self::Event>;

    /// The external phase trigger fired (e.g. a countdown expired).
    /// Session types without phased play keep the default no-op.
    fn resolve(state: &Self::State) -> Transition<Self::State, Self::Event> {
        Ok((state.clone(), Vec::new()))
    }

    /// Returns `true` once the game has reached a terminal state.
    fn is_over(state: &Self::State) -> bool;

    /// Final score per member, recorded in the container's history when
    /// the session is archived. Default: no scores.
    fn scores(
        _state: &Self::State,
        _players: &[ParticipantId],
    ) -> HashMap<ParticipantId, u32> {
        HashMap::new()
    }
}
