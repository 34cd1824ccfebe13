//! Simulation engine for the gravity arena.
//!
//! `Universe` owns the bodies and advances them one tick at a time.
//! `SimulationEngine` wraps it with a command queue, a seeded RNG, NPC
//! spawning, naming, and snapshot building.

pub mod engine;
pub mod setup;
pub mod systems;
pub mod universe;

pub use engine::{SimConfig, SimulationEngine};
pub use gravity_core as core;
pub use universe::Universe;
