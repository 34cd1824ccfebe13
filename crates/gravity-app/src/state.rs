//! State shared between the handle and the game loop thread.

use std::fmt;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use gravity_core::commands::PlayerCommand;
use gravity_core::state::UniverseSnapshot;

/// A connected player. Stable across respawns, unlike the body id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// Latest published snapshot, `None` until the first broadcast.
pub type SharedSnapshot = Arc<Mutex<Option<UniverseSnapshot>>>;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// Player input. Body commands are readdressed to the player's
    /// current body.
    Input {
        player: PlayerId,
        command: PlayerCommand,
    },
    /// Create a session and its first body; the new id is sent back.
    Join {
        label: String,
        color: String,
        reply: mpsc::Sender<PlayerId>,
    },
    /// End a session and remove its body.
    Leave { player: PlayerId },
    /// Stop the loop thread.
    Shutdown,
}
