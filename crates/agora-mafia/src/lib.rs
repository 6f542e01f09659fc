//! Mafia: a social-deduction rules engine for Agora sessions.
//!
//! Implements [`agora_session::GameRules`]: participants joined to a
//! zone's session are secretly dealt opposing-team roles and cycle
//! through alternating Day/Night phases until one team is eliminated.
//!
//! - [`MafiaGame`] — the session type; plug into a
//!   `SessionContainer<MafiaGame>`
//! - [`MafiaState`] — the authoritative state snapshot
//! - [`VoteMove`] — the single move shape (a vote naming a target)
//! - [`MafiaEvent`] — change notifications for the broadcast layer

mod event;
mod roles;
mod rules;
mod state;

pub use event::MafiaEvent;
pub use roles::{MAX_PLAYERS, MIN_PLAYERS, role_counts};
pub use rules::{MafiaGame, VoteMove};
pub use state::{GameStatus, MafiaState, Phase, PlayerStatus, Role, RoleAssignment, Team, Vote};
