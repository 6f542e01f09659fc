//! Session lifecycle layer for Agora.
//!
//! Binds game sessions to zones and centralizes the bookkeeping every
//! session type needs, so concrete rules engines only implement
//! game-specific logic.
//!
//! # Key types
//!
//! - [`GameRules`] — the trait rules engines implement
//! - [`GameSession`] — one playthrough: membership + state snapshot
//! - [`SessionContainer`] — at most one live session per zone, plus history
//! - [`Dispatcher`] — routes network commands into a container
//! - [`SessionError`] — the shared validation-failure taxonomy

mod container;
mod dispatch;
mod error;
mod logic;
mod session;

pub use container::SessionContainer;
pub use dispatch::Dispatcher;
pub use error::SessionError;
pub use logic::{GameRules, Transition};
pub use session::GameSession;
