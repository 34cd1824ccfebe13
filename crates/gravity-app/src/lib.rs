//! Headless gravity arena server.
//!
//! Wires the simulation engine into a fixed-rate loop thread and exposes a
//! thread-safe handle that a network transport can drive.

pub mod config;
pub mod game_loop;
pub mod handle;
pub mod players;
pub mod state;

pub use gravity_core as core;
