//! Spawn system: keeps the arena stocked with food and threat bodies.

use rand_chacha::ChaCha8Rng;

use gravity_core::enums::NpcKind;
use gravity_core::events::SimEvent;

use crate::setup;
use crate::universe::Universe;

/// How often each kind of NPC body appears.
#[derive(Debug, Clone)]
pub struct SpawnSchedule {
    /// Ticks between food spawns. Zero disables food.
    pub food_interval_ticks: u64,
    /// Ticks between threat spawns. Zero disables threats.
    pub threat_interval_ticks: u64,
    /// No spawns while this many NPC bodies are alive.
    pub max_npc_bodies: usize,
}

impl SpawnSchedule {
    /// Schedule that never spawns anything.
    pub fn disabled() -> Self {
        Self {
            food_interval_ticks: 0,
            threat_interval_ticks: 0,
            max_npc_bodies: 0,
        }
    }

    /// NPC kinds due on this tick, food first.
    pub fn due(&self, tick: u64) -> Vec<NpcKind> {
        let mut due = Vec::new();
        if is_due(self.food_interval_ticks, tick) {
            due.push(NpcKind::Food);
        }
        if is_due(self.threat_interval_ticks, tick) {
            due.push(NpcKind::Threat);
        }
        due
    }
}

fn is_due(interval: u64, tick: u64) -> bool {
    interval > 0 && tick > 0 && tick % interval == 0
}

/// Spawn any NPC bodies due on `tick`.
pub fn run(
    universe: &mut Universe,
    rng: &mut ChaCha8Rng,
    schedule: &SpawnSchedule,
    tick: u64,
    events: &mut Vec<SimEvent>,
) {
    for kind in schedule.due(tick) {
        let npc_count = universe.bodies().filter(|(_, body)| body.npc).count();
        if npc_count >= schedule.max_npc_bodies {
            break;
        }
        let spawned = match kind {
            NpcKind::Food => Some(setup::spawn_food(universe, rng)),
            NpcKind::Threat => setup::spawn_threat(universe, rng),
        };
        let Some(body_id) = spawned else {
            log::debug!("skipping threat spawn, no mass in the arena");
            continue;
        };
        events.push(SimEvent::BodySpawned { body_id, kind });
    }
}
