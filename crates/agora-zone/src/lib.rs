//! Zone occupancy primitive for Agora.
//!
//! A [`Zone`] is a bounded region of the space that tracks which
//! participants are physically inside it. It has no game knowledge —
//! the session container above it observes the [`ZoneEvent`]s a zone
//! returns and forwards departures into the active session.

mod geometry;
mod zone;

pub use geometry::{BoundingBox, Point};
pub use zone::{Zone, ZoneEvent};
