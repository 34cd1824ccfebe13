//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// One of the four thrusters on a player body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThrustDirection {
    Left,
    Right,
    Top,
    Bottom,
}

impl ThrustDirection {
    pub const ALL: [ThrustDirection; 4] = [
        ThrustDirection::Left,
        ThrustDirection::Right,
        ThrustDirection::Top,
        ThrustDirection::Bottom,
    ];
}

/// Kind of non-player body spawned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NpcKind {
    /// Small, fast bodies that players absorb to grow.
    Food,
    /// Slower bodies sized relative to the heaviest body alive.
    Threat,
}

/// Whether the engine advances time on tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnginePhase {
    #[default]
    Running,
    Paused,
}
