//! Events emitted by the simulation during a tick.

use serde::{Deserialize, Serialize};

use crate::enums::NpcKind;
use crate::types::BodyId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// `survivor` absorbed `absorbed` and now has `mass`.
    BodyMerged {
        survivor: BodyId,
        absorbed: BodyId,
        mass: f64,
    },
    /// Decay drove a body's mass to zero.
    BodyDecayed { body_id: BodyId },
    /// The engine spawned a non-player body.
    BodySpawned { body_id: BodyId, kind: NpcKind },
    /// A dominant body received a generated name.
    BodyNamed { body_id: BodyId, name: String },
    /// A player burst was applied.
    Burst { body_id: BodyId },
    /// A command addressed a body that no longer exists.
    CommandRejected { body_id: BodyId },
}
