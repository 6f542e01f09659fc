//! The zone itself: a bounded region plus its occupant list.

use agora_protocol::{ParticipantId, ZoneId};
use serde::{Deserialize, Serialize};

use crate::{BoundingBox, Point};

/// An occupancy change, returned by the mutating operations so the layer
/// above can react (the session container forwards removals into the
/// active game session).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneEvent {
    OccupantAdded(ParticipantId),
    OccupantRemoved(ParticipantId),
}

/// A bounded region that tracks which participants are inside it.
///
/// Occupants are kept in arrival order. The zone has no game knowledge;
/// it only answers geometric and membership questions.
#[derive(Debug, Clone)]
pub struct Zone {
    id: ZoneId,
    bounds: BoundingBox,
    occupants: Vec<ParticipantId>,
}

impl Zone {
    pub fn new(id: ZoneId, bounds: BoundingBox) -> Self {
        Self { id, bounds, occupants: Vec::new() }
    }

    pub fn id(&self) -> &ZoneId {
        &self.id
    }

    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    pub fn occupants(&self) -> &[ParticipantId] {
        &self.occupants
    }

    /// Returns `true` if the participant is currently inside the zone.
    pub fn is_occupant(&self, participant: &ParticipantId) -> bool {
        self.occupants.contains(participant)
    }

    /// Returns `true` if `point` lies inside the zone's bounds.
    pub fn contains(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }

    /// Returns `true` if this zone's bounds intersect another zone's.
    pub fn overlaps(&self, other: &Zone) -> bool {
        self.bounds.overlaps(&other.bounds)
    }

    /// Adds a participant to the zone.
    ///
    /// Returns the occupancy change, or `None` if the participant was
    /// already inside (adding twice is not an error, just a no-op).
    pub fn add(&mut self, participant: ParticipantId) -> Option<ZoneEvent> {
        if self.occupants.contains(&participant) {
            return None;
        }
        tracing::debug!(zone = %self.id, %participant, "participant entered zone");
        self.occupants.push(participant.clone());
        Some(ZoneEvent::OccupantAdded(participant))
    }

    /// Removes a participant from the zone.
    ///
    /// Returns the occupancy change, or `None` if the participant was
    /// not inside.
    pub fn remove(&mut self, participant: &ParticipantId) -> Option<ZoneEvent> {
        let before = self.occupants.len();
        self.occupants.retain(|p| p != participant);
        if self.occupants.len() == before {
            return None;
        }
        tracing::debug!(zone = %self.id, %participant, "participant left zone");
        Some(ZoneEvent::OccupantRemoved(participant.clone()))
    }
}
