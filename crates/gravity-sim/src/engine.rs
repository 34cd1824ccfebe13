//! Simulation engine, the owner of one universe.
//!
//! `SimulationEngine` owns the `Universe`, drains player commands at tick
//! boundaries, runs NPC spawning and naming around the physics step, and
//! produces `UniverseSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;
use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use gravity_core::body::Body;
use gravity_core::commands::PlayerCommand;
use gravity_core::constants::*;
use gravity_core::enums::EnginePhase;
use gravity_core::events::SimEvent;
use gravity_core::state::UniverseSnapshot;
use gravity_core::types::{BodyId, Bounds, SimTime};

use crate::setup;
use crate::systems;
use crate::systems::spawner::SpawnSchedule;
use crate::universe::Universe;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub bounds: Bounds,
    /// Scenery bodies placed at start.
    pub initial_bodies: usize,
    /// Ticks between food spawns (0 disables).
    pub food_spawn_interval_ticks: u64,
    /// Ticks between threat spawns (0 disables).
    pub threat_spawn_interval_ticks: u64,
    pub max_npc_bodies: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            bounds: DEFAULT_BOUNDS,
            initial_bodies: INITIAL_BODY_COUNT,
            food_spawn_interval_ticks: FOOD_SPAWN_INTERVAL_TICKS,
            threat_spawn_interval_ticks: THREAT_SPAWN_INTERVAL_TICKS,
            max_npc_bodies: MAX_NPC_BODIES,
        }
    }
}

impl SimConfig {
    /// An empty arena with no spawning, for scripted scenarios.
    pub fn empty(bounds: Bounds) -> Self {
        Self {
            bounds,
            initial_bodies: 0,
            food_spawn_interval_ticks: 0,
            threat_spawn_interval_ticks: 0,
            max_npc_bodies: 0,
            ..Default::default()
        }
    }

    fn spawn_schedule(&self) -> SpawnSchedule {
        SpawnSchedule {
            food_interval_ticks: self.food_spawn_interval_ticks,
            threat_interval_ticks: self.threat_spawn_interval_ticks,
            max_npc_bodies: self.max_npc_bodies,
        }
    }
}

/// The simulation engine. Owns the universe and all driver state.
pub struct SimulationEngine {
    universe: Universe,
    phase: EnginePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    spawn_schedule: SpawnSchedule,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create a new engine and populate its scenery.
    pub fn new(config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut universe = Universe::new(config.bounds);
        setup::spawn_initial_bodies(&mut universe, &mut rng, config.initial_bodies);
        log::info!(
            "simulation started: seed {}, {} scenery bodies",
            config.seed,
            universe.len()
        );

        Self {
            universe,
            phase: EnginePhase::default(),
            rng,
            command_queue: VecDeque::new(),
            spawn_schedule: config.spawn_schedule(),
            events: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one nominal tick and return the resulting snapshot.
    pub fn tick(&mut self) -> UniverseSnapshot {
        self.advance(TICK_DURATION);
        self.take_snapshot()
    }

    /// Drain queued commands, then (unless paused) spawn, step the
    /// universe by `duration`, and name dominant bodies.
    pub fn advance(&mut self, duration: Duration) {
        self.process_commands();

        if self.phase == EnginePhase::Paused {
            return;
        }

        let tick = self.universe.time().tick;
        systems::spawner::run(
            &mut self.universe,
            &mut self.rng,
            &self.spawn_schedule,
            tick,
            &mut self.events,
        );
        self.universe.step(duration);
        self.events.extend(self.universe.take_events());
        systems::naming::run(
            self.universe.bodies_mut(),
            &mut self.rng,
            &mut self.events,
        );
    }

    /// Snapshot including every event since the previous `take_snapshot`.
    pub fn take_snapshot(&mut self) -> UniverseSnapshot {
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.universe, self.phase, events)
    }

    /// Snapshot without consuming pending events.
    pub fn snapshot(&self) -> UniverseSnapshot {
        systems::snapshot::build_snapshot(&self.universe, self.phase, self.events.clone())
    }

    /// Add a player body at a random point inside the bounds.
    pub fn spawn_player(&mut self, label: &str, color: &str) -> BodyId {
        let id = setup::spawn_player(&mut self.universe, &mut self.rng, label, color);
        log::info!("spawned player body {id} for '{label}'");
        id
    }

    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.universe.time()
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Direct access for external spawners. Must not be used mid-tick.
    pub fn universe_mut(&mut self) -> &mut Universe {
        &mut self.universe
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        let now = self.universe.now();
        match command {
            PlayerCommand::Pause => {
                self.phase = EnginePhase::Paused;
            }
            PlayerCommand::Resume => {
                self.phase = EnginePhase::Running;
            }
            PlayerCommand::SetThruster {
                body_id,
                direction,
                enabled,
            } => {
                if let Some(body) = self.body_for_command(body_id) {
                    body.thrusters.set(direction, enabled);
                }
            }
            PlayerCommand::SetThrusters { body_id, thrusters } => {
                if let Some(body) = self.body_for_command(body_id) {
                    body.thrusters = thrusters;
                }
            }
            PlayerCommand::Burst { body_id } => {
                if let Some(body) = self.body_for_command(body_id) {
                    body.burst(now);
                    self.events.push(SimEvent::Burst { body_id });
                }
            }
        }
    }

    /// Resolve a command's target, recording a rejection if it is gone.
    fn body_for_command(&mut self, body_id: BodyId) -> Option<&mut Body> {
        if self.universe.get_body(body_id).is_none() {
            log::debug!("dropping command for missing body {body_id}");
            self.events.push(SimEvent::CommandRejected { body_id });
            return None;
        }
        self.universe.get_body_mut(body_id)
    }
}
