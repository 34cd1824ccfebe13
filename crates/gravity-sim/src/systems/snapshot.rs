//! Snapshot system: builds the read-only view of the universe.
//!
//! This system never modifies the universe.

use gravity_core::body::Body;
use gravity_core::enums::EnginePhase;
use gravity_core::events::SimEvent;
use gravity_core::state::{BodyView, UniverseSnapshot};
use gravity_core::types::BodyId;

use crate::universe::Universe;

/// Build a complete snapshot of the current universe state.
pub fn build_snapshot(
    universe: &Universe,
    phase: EnginePhase,
    events: Vec<SimEvent>,
) -> UniverseSnapshot {
    let now = universe.now();
    UniverseSnapshot {
        time: universe.time(),
        phase,
        bounds: universe.bounds(),
        bodies: universe
            .bodies()
            .map(|(id, body)| build_body_view(id, body, now))
            .collect(),
        events,
    }
}

fn build_body_view(id: BodyId, body: &Body, now: std::time::Duration) -> BodyView {
    BodyView {
        id,
        label: body.display_name().to_string(),
        color: body.color.clone(),
        position: body.position,
        velocity: body.velocity,
        mass: body.mass,
        radius: body.radius(),
        net_force: body.force(now),
        is_static: body.is_static,
        npc: body.npc,
        thrusters: body.thrusters,
        cooldown_active: body.is_cooldown_active(now),
    }
}
