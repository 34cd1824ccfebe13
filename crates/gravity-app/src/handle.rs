//! Owning handle for a running game loop.

use std::sync::mpsc;
use std::thread::JoinHandle;

use thiserror::Error;

use gravity_core::commands::PlayerCommand;
use gravity_core::state::UniverseSnapshot;

use crate::config::ServerConfig;
use crate::game_loop::spawn_game_loop;
use crate::state::{LoopCommand, PlayerId, SharedSnapshot};

#[derive(Debug, Error)]
pub enum HandleError {
    #[error("game loop is not running")]
    Disconnected,
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("snapshot lock poisoned")]
    Poisoned,
}

/// Starts the loop thread on creation and stops it on shutdown or drop.
pub struct GameHandle {
    commands: mpsc::Sender<LoopCommand>,
    latest_snapshot: SharedSnapshot,
    thread: Option<JoinHandle<()>>,
}

impl GameHandle {
    pub fn start(config: ServerConfig) -> Result<Self, HandleError> {
        let latest_snapshot = SharedSnapshot::default();
        let (commands, thread) = spawn_game_loop(config, latest_snapshot.clone())?;
        Ok(Self {
            commands,
            latest_snapshot,
            thread: Some(thread),
        })
    }

    /// Register a player and wait for the loop to assign an id.
    pub fn join(&self, label: &str, color: &str) -> Result<PlayerId, HandleError> {
        let (reply, response) = mpsc::channel();
        self.post(LoopCommand::Join {
            label: label.to_string(),
            color: color.to_string(),
            reply,
        })?;
        response.recv().map_err(|_| HandleError::Disconnected)
    }

    /// Queue input for the player's current body.
    pub fn send(&self, player: PlayerId, command: PlayerCommand) -> Result<(), HandleError> {
        self.post(LoopCommand::Input { player, command })
    }

    pub fn leave(&self, player: PlayerId) -> Result<(), HandleError> {
        self.post(LoopCommand::Leave { player })
    }

    /// Most recently published snapshot, if any.
    pub fn latest_snapshot(&self) -> Result<Option<UniverseSnapshot>, HandleError> {
        let lock = self
            .latest_snapshot
            .lock()
            .map_err(|_| HandleError::Poisoned)?;
        Ok(lock.clone())
    }

    /// Stop the loop and wait for its thread to finish.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn post(&self, command: LoopCommand) -> Result<(), HandleError> {
        self.commands
            .send(command)
            .map_err(|_| HandleError::Disconnected)
    }

    fn stop(&mut self) {
        let Some(thread) = self.thread.take() else {
            return;
        };
        // Already gone if the loop exited on its own.
        let _ = self.commands.send(LoopCommand::Shutdown);
        if thread.join().is_err() {
            log::error!("game loop thread panicked");
        }
    }
}

impl Drop for GameHandle {
    fn drop(&mut self) {
        self.stop();
    }
}
