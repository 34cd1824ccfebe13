//! Game loop thread. Steps the simulation at a fixed rate and publishes
//! snapshots at the broadcast rate.
//!
//! The engine is created inside the thread and never leaves it. Inputs
//! arrive over an `mpsc` channel and are drained before each tick, so no
//! input ever lands mid-tick.

use std::ops::ControlFlow;
use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Instant;

use gravity_core::state::UniverseSnapshot;
use gravity_sim::SimulationEngine;

use crate::config::ServerConfig;
use crate::players::PlayerRegistry;
use crate::state::{LoopCommand, SharedSnapshot};

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: ServerConfig,
    latest_snapshot: SharedSnapshot,
) -> std::io::Result<(mpsc::Sender<LoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let thread = std::thread::Builder::new()
        .name("gravity-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, thread))
}

/// Engine plus sessions: everything the loop thread owns.
pub struct GameLoop {
    engine: SimulationEngine,
    players: PlayerRegistry,
    config: ServerConfig,
    frame: u64,
}

impl GameLoop {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            engine: SimulationEngine::new(config.sim.clone()),
            players: PlayerRegistry::new(),
            config,
            frame: 0,
        }
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// Apply one loop command. `Break` means shut down.
    pub fn handle(&mut self, command: LoopCommand) -> ControlFlow<()> {
        match command {
            LoopCommand::Input { player, command } => {
                // A body lost last tick is replaced before input is addressed.
                self.players.respawn_missing(&mut self.engine);
                match self.players.route(player, command) {
                    Some(routed) => self.engine.queue_command(routed),
                    None => log::debug!("dropping input from unknown player {player}"),
                }
            }
            LoopCommand::Join {
                label,
                color,
                reply,
            } => {
                let player = self.players.join(&mut self.engine, &label, &color);
                // The caller may have given up waiting.
                let _ = reply.send(player);
            }
            LoopCommand::Leave { player } => {
                self.players.leave(&mut self.engine, player);
            }
            LoopCommand::Shutdown => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// Respawn lost players, advance one tick, and return a snapshot when
    /// one is due for broadcast.
    pub fn tick(&mut self) -> Option<UniverseSnapshot> {
        self.players.respawn_missing(&mut self.engine);
        self.engine.advance(self.config.tick_duration());
        self.frame += 1;

        if self.frame % self.config.broadcast_every() == 0 {
            Some(self.engine.take_snapshot())
        } else {
            None
        }
    }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: ServerConfig,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &SharedSnapshot,
) {
    let tick_duration = config.tick_duration();
    let mut game = GameLoop::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(command) => {
                    if game.handle(command).is_break() {
                        log::info!("game loop shutting down");
                        return;
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    log::info!("command channel closed, game loop exiting");
                    return;
                }
            }
        }

        // 2. Advance one tick
        if let Some(snapshot) = game.tick() {
            // 3. Publish for broadcasters
            if let Ok(mut lock) = latest_snapshot.lock() {
                *lock = Some(snapshot);
            }
        }

        // 4. Sleep until the next tick
        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind, resync instead of catching up
            log::warn!(
                "game loop fell {:?} behind, skipping ahead",
                now - next_tick_time
            );
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gravity_core::commands::PlayerCommand;
    use gravity_core::enums::ThrustDirection;
    use gravity_core::types::Bounds;
    use gravity_sim::SimConfig;

    fn quiet_config() -> ServerConfig {
        ServerConfig {
            sim: SimConfig::empty(Bounds::new(-1000.0, -1000.0, 2000.0, 2000.0)),
            ..Default::default()
        }
    }

    fn join(game: &mut GameLoop, label: &str) -> crate::state::PlayerId {
        let (tx, rx) = mpsc::channel();
        let flow = game.handle(LoopCommand::Join {
            label: label.into(),
            color: "#fff".into(),
            reply: tx,
        });
        assert!(flow.is_continue());
        rx.try_recv().unwrap()
    }

    #[test]
    fn test_broadcast_every_other_tick() {
        let mut game = GameLoop::new(quiet_config());
        let published: Vec<bool> = (0..6).map(|_| game.tick().is_some()).collect();
        assert_eq!(published, vec![false, true, false, true, false, true]);
        assert_eq!(game.engine().time().tick, 6);
    }

    #[test]
    fn test_input_routed_to_player_body() {
        let mut game = GameLoop::new(quiet_config());
        let player = join(&mut game, "alice");

        let flow = game.handle(LoopCommand::Input {
            player,
            command: PlayerCommand::SetThruster {
                body_id: Default::default(),
                direction: ThrustDirection::Left,
                enabled: true,
            },
        });
        assert!(flow.is_continue());
        game.tick();
        let snapshot = game.tick().unwrap();

        let body_id = game.players().body_of(player).unwrap();
        let view = snapshot.body(body_id).unwrap();
        assert!(view.thrusters.left);
        assert!(view.velocity.x > 0.0);
    }

    #[test]
    fn test_lost_player_respawns_before_next_tick() {
        let mut game = GameLoop::new(quiet_config());
        let player = join(&mut game, "alice");
        let first = game.players().body_of(player).unwrap();

        game.engine.universe_mut().remove_body(first);
        game.tick();

        let second = game.players().body_of(player).unwrap();
        assert_ne!(first, second);
        assert!(game.engine().universe().get_body(second).is_some());
    }

    #[test]
    fn test_input_after_body_lost_reaches_new_body() {
        let mut game = GameLoop::new(quiet_config());
        let player = join(&mut game, "alice");
        let first = game.players().body_of(player).unwrap();
        game.engine.universe_mut().remove_body(first);

        game.handle(LoopCommand::Input {
            player,
            command: PlayerCommand::SetThruster {
                body_id: Default::default(),
                direction: ThrustDirection::Left,
                enabled: true,
            },
        });
        game.tick();
        let snapshot = game.tick().unwrap();

        let second = game.players().body_of(player).unwrap();
        assert_ne!(first, second);
        assert!(snapshot.body(second).unwrap().thrusters.left);
        assert!(!snapshot
            .events
            .iter()
            .any(|e| matches!(e, gravity_core::events::SimEvent::CommandRejected { .. })));
    }

    #[test]
    fn test_shutdown_breaks() {
        let mut game = GameLoop::new(quiet_config());
        assert!(game.handle(LoopCommand::Shutdown).is_break());
    }

    #[test]
    fn test_thread_round_trip() {
        let shared = SharedSnapshot::default();
        let (tx, thread) = spawn_game_loop(quiet_config(), shared.clone()).unwrap();

        let (reply_tx, reply_rx) = mpsc::channel();
        tx.send(LoopCommand::Join {
            label: "alice".into(),
            color: "#fff".into(),
            reply: reply_tx,
        })
        .unwrap();
        let player = reply_rx
            .recv_timeout(std::time::Duration::from_secs(5))
            .unwrap();

        let deadline = Instant::now() + std::time::Duration::from_secs(5);
        let mut seen = false;
        while Instant::now() < deadline {
            if let Some(snapshot) = shared.lock().unwrap().as_ref() {
                if !snapshot.bodies.is_empty() {
                    seen = true;
                    break;
                }
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        assert!(seen, "loop should publish a snapshot containing {player}'s body");

        tx.send(LoopCommand::Shutdown).unwrap();
        thread.join().unwrap();
    }
}
