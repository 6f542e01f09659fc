//! Change notifications emitted by the rules engine.

use agora_protocol::ParticipantId;
use serde::{Deserialize, Serialize};

use crate::state::{GameStatus, Phase, Team};

/// A named change notification returned by each mutating operation.
///
/// The presentation/broadcast layer consumes these; the engine never
/// pushes to a channel itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum MafiaEvent {
    StatusChanged { status: GameStatus },
    PhaseChanged { phase: Phase },
    RoundChanged { round: u32 },
    VoteRecorded {
        voter: ParticipantId,
        target: ParticipantId,
    },
    PlayerEliminated { player: ParticipantId },
    /// The Police learned a target's identity; revealed only to them by
    /// the presentation layer.
    InvestigationRevealed { target: ParticipantId },
    PlayerLeft { player: ParticipantId },
    GameEnded {
        team: Team,
        winners: Vec<ParticipantId>,
    },
}
