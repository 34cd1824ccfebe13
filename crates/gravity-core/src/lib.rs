//! Core types and physics for the gravity arena simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! vectors and bounds, the `Body` type with its physics operations,
//! commands, events, state snapshots, and tuning constants.
//! It has no dependency on any runtime or transport.

pub mod body;
pub mod commands;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
