//! The universe: every body in one simulated world and the per-tick
//! state transition over them.

use std::collections::BTreeMap;
use std::time::Duration;

use gravity_core::body::Body;
use gravity_core::events::SimEvent;
use gravity_core::types::{BodyId, Bounds, SimTime};

use crate::systems;

/// Body storage. Iteration is in id order, which fixes collision
/// tie-breaking and makes every pass deterministic.
pub type Bodies = BTreeMap<BodyId, Body>;

/// Owns all bodies, the world bounds, and the id counter.
#[derive(Debug, Clone)]
pub struct Universe {
    bounds: Bounds,
    bodies: Bodies,
    next_id: u64,
    time: SimTime,
    events: Vec<SimEvent>,
}

impl Universe {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            bodies: Bodies::new(),
            next_id: 0,
            time: SimTime::default(),
            events: Vec::new(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Current simulation clock, used for cooldown timing.
    pub fn now(&self) -> Duration {
        self.time.elapsed
    }

    /// Store a body under the next sequential id.
    pub fn add_body(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.insert(id, body);
        id
    }

    /// `None` once the body has merged away or decayed.
    pub fn get_body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(&id)
    }

    pub fn get_body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(&id)
    }

    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        self.bodies.remove(&id)
    }

    /// All bodies in id order.
    pub fn bodies(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies.iter().map(|(id, body)| (*id, body))
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut Bodies {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Drain merge and decay events raised since the last call.
    pub fn take_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance the world by `duration`.
    ///
    /// Order: decay (and prune dead bodies), resolve collisions, accumulate
    /// gravity, integrate. Every later phase relies on the earlier ones.
    ///
    /// Merge and decay events accumulate until `take_events` drains them.
    /// Callers stepping a bare `Universe` must drain them regularly.
    pub fn step(&mut self, duration: Duration) {
        let now = self.now();
        self.decay_bodies();
        self.check_collisions();
        self.apply_forces();
        systems::movement::run(&mut self.bodies, duration, now);
        self.time.advance(duration);
    }

    /// Decay every body (faster outside the bounds) and drop the dead.
    pub fn decay_bodies(&mut self) {
        systems::decay::run(&mut self.bodies, &self.bounds, &mut self.events);
    }

    /// Merge overlapping bodies one pair at a time until none overlap.
    pub fn check_collisions(&mut self) {
        systems::collision::run(&mut self.bodies, &mut self.events);
    }

    /// Recompute each body's accumulated gravitational force.
    pub fn apply_forces(&mut self) {
        systems::gravity::run(&mut self.bodies);
    }
}
