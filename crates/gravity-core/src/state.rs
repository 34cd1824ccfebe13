//! Universe snapshot: the read-only state handed to renderers and
//! broadcasters between ticks.

use serde::{Deserialize, Serialize};

use crate::body::Thrusters;
use crate::enums::EnginePhase;
use crate::events::SimEvent;
use crate::types::{BodyId, Bounds, SimTime, Vector2};

/// Complete visible state after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UniverseSnapshot {
    pub time: SimTime,
    pub phase: EnginePhase,
    pub bounds: Bounds,
    /// Sorted by id.
    pub bodies: Vec<BodyView>,
    /// Events raised since the previous snapshot.
    pub events: Vec<SimEvent>,
}

impl UniverseSnapshot {
    pub fn body(&self, id: BodyId) -> Option<&BodyView> {
        self.bodies
            .binary_search_by_key(&id, |b| b.id)
            .ok()
            .map(|index| &self.bodies[index])
    }

    /// Total mass of all live bodies.
    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }
}

/// A body as seen from outside the simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyView {
    pub id: BodyId,
    /// Display name (generated name if any, else creation label).
    pub label: String,
    pub color: String,
    pub position: Vector2,
    pub velocity: Vector2,
    pub mass: f64,
    pub radius: f64,
    /// Net applied force at snapshot time.
    pub net_force: Vector2,
    #[serde(rename = "static")]
    pub is_static: bool,
    pub npc: bool,
    pub thrusters: Thrusters,
    pub cooldown_active: bool,
}
