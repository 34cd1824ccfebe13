//! Player sessions: which body each connected player currently controls.
//!
//! A player's body can vanish at any tick (absorbed by a heavier body or
//! decayed away). Sessions notice the absent body and spawn a fresh one
//! with a new id, so transports only ever address players.

use std::collections::BTreeMap;

use gravity_core::commands::PlayerCommand;
use gravity_core::types::BodyId;
use gravity_sim::SimulationEngine;

use crate::state::PlayerId;

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSession {
    pub label: String,
    pub color: String,
    pub body_id: BodyId,
    pub respawns: u32,
}

#[derive(Debug, Default)]
pub struct PlayerRegistry {
    sessions: BTreeMap<PlayerId, PlayerSession>,
    next_player_id: u64,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session and spawn the player's first body.
    pub fn join(&mut self, engine: &mut SimulationEngine, label: &str, color: &str) -> PlayerId {
        let player = PlayerId(self.next_player_id);
        self.next_player_id += 1;

        let body_id = engine.spawn_player(label, color);
        self.sessions.insert(
            player,
            PlayerSession {
                label: label.to_string(),
                color: color.to_string(),
                body_id,
                respawns: 0,
            },
        );
        log::info!("player {player} ('{label}') joined with body {body_id}");
        player
    }

    /// Close a session, removing its body if it is still alive.
    pub fn leave(&mut self, engine: &mut SimulationEngine, player: PlayerId) -> Option<PlayerSession> {
        let session = self.sessions.remove(&player)?;
        engine.universe_mut().remove_body(session.body_id);
        log::info!("player {player} ('{}') left", session.label);
        Some(session)
    }

    pub fn get(&self, player: PlayerId) -> Option<&PlayerSession> {
        self.sessions.get(&player)
    }

    pub fn body_of(&self, player: PlayerId) -> Option<BodyId> {
        self.sessions.get(&player).map(|session| session.body_id)
    }

    /// Address a command to the player's current body. `None` for unknown
    /// players.
    pub fn route(&self, player: PlayerId, command: PlayerCommand) -> Option<PlayerCommand> {
        let body_id = self.body_of(player)?;
        Some(command.retarget(body_id))
    }

    /// Give a new body to every player whose body no longer exists.
    /// Returns how many players were respawned.
    pub fn respawn_missing(&mut self, engine: &mut SimulationEngine) -> usize {
        let mut respawned = 0;
        for (player, session) in &mut self.sessions {
            if engine.universe().get_body(session.body_id).is_some() {
                continue;
            }
            let old = session.body_id;
            session.body_id = engine.spawn_player(&session.label, &session.color);
            session.respawns += 1;
            respawned += 1;
            log::info!(
                "player {player} lost body {old}, respawned as {}",
                session.body_id
            );
        }
        respawned
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
