//! Player commands sent from a transport to the simulation.
//!
//! Commands are queued and applied at the next tick boundary, never mid-tick.

use serde::{Deserialize, Serialize};

use crate::body::Thrusters;
use crate::enums::ThrustDirection;
use crate::types::BodyId;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Body control ---
    /// Switch a single thruster on or off.
    SetThruster {
        body_id: BodyId,
        direction: ThrustDirection,
        enabled: bool,
    },
    /// Replace all four thruster switches at once.
    SetThrusters { body_id: BodyId, thrusters: Thrusters },
    /// Halve mass, stop, and enter cooldown.
    Burst { body_id: BodyId },

    // --- Simulation control ---
    /// Stop advancing time. Commands are still drained.
    Pause,
    /// Resume advancing time.
    Resume,
}

impl PlayerCommand {
    /// The body a command is addressed to, if any.
    pub fn body_id(&self) -> Option<BodyId> {
        match self {
            PlayerCommand::SetThruster { body_id, .. }
            | PlayerCommand::SetThrusters { body_id, .. }
            | PlayerCommand::Burst { body_id } => Some(*body_id),
            PlayerCommand::Pause | PlayerCommand::Resume => None,
        }
    }

    /// Readdress a body command. Simulation control commands are unchanged.
    pub fn retarget(mut self, id: BodyId) -> Self {
        match &mut self {
            PlayerCommand::SetThruster { body_id, .. }
            | PlayerCommand::SetThrusters { body_id, .. }
            | PlayerCommand::Burst { body_id } => *body_id = id,
            PlayerCommand::Pause | PlayerCommand::Resume => {}
        }
        self
    }
}
