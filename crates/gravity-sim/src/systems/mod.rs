//! Systems that operate on the body set each tick.
//!
//! Systems are free functions over borrowed state. They do not own state.

pub mod collision;
pub mod decay;
pub mod gravity;
pub mod movement;
pub mod naming;
pub mod snapshot;
pub mod spawner;
