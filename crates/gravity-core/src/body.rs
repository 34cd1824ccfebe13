//! A single simulated body and its physics.
//!
//! Bodies compute their own forces and integrate their own motion. The
//! `Universe` decides when each operation runs and which pairs interact.

use std::f64::consts::PI;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::ThrustDirection;
use crate::types::{Vector2, VectorExt};

/// Thruster switches held down by the controlling player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thrusters {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl Thrusters {
    pub fn get(&self, direction: ThrustDirection) -> bool {
        match direction {
            ThrustDirection::Left => self.left,
            ThrustDirection::Right => self.right,
            ThrustDirection::Top => self.top,
            ThrustDirection::Bottom => self.bottom,
        }
    }

    pub fn set(&mut self, direction: ThrustDirection, enabled: bool) {
        match direction {
            ThrustDirection::Left => self.left = enabled,
            ThrustDirection::Right => self.right = enabled,
            ThrustDirection::Top => self.top = enabled,
            ThrustDirection::Bottom => self.bottom = enabled,
        }
    }

    /// Unit direction each thruster pushes along.
    /// Left pushes +x and top pushes +y.
    fn axis(direction: ThrustDirection) -> Vector2 {
        match direction {
            ThrustDirection::Left => Vector2::X,
            ThrustDirection::Right => Vector2::NEG_X,
            ThrustDirection::Top => Vector2::Y,
            ThrustDirection::Bottom => Vector2::NEG_Y,
        }
    }
}

/// A physical entity in the universe.
///
/// Mass is never negative. A body whose mass reaches zero is dead and is
/// removed by its universe before the next force pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub label: String,
    /// Display only.
    pub color: String,
    pub position: Vector2,
    pub velocity: Vector2,
    pub mass: f64,
    /// Sum of gravitational pulls from every other body, refreshed each tick.
    pub gravitational_force: Vector2,
    pub thrusters: Thrusters,
    /// Immovable scenery: neither attracts nor is attracted, never accelerates.
    #[serde(rename = "static")]
    pub is_static: bool,
    /// Not controlled by a player.
    pub npc: bool,
    /// Simulation time of the last burst.
    pub cooldown_activated_at: Option<Duration>,
    #[serde(default)]
    pub major_name: Option<String>,
    #[serde(default)]
    pub minor_name: Option<String>,
}

impl Body {
    pub fn new(
        label: impl Into<String>,
        color: impl Into<String>,
        mass: f64,
        position: Vector2,
        velocity: Vector2,
    ) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
            position,
            velocity,
            mass,
            gravitational_force: Vector2::ZERO,
            thrusters: Thrusters::default(),
            is_static: false,
            npc: false,
            cooldown_activated_at: None,
            major_name: None,
            minor_name: None,
        }
    }

    /// Mark as immovable scenery.
    pub fn into_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Mark as a non-player body.
    pub fn into_npc(mut self) -> Self {
        self.npc = true;
        self
    }

    /// Radius of a unit-density sphere with this body's mass.
    pub fn radius(&self) -> f64 {
        (self.mass * 3.0 / (4.0 * PI)).cbrt()
    }

    pub fn is_alive(&self) -> bool {
        self.mass > 0.0
    }

    /// Name shown to players: major name, then minor name, then label.
    pub fn display_name(&self) -> &str {
        self.major_name
            .as_deref()
            .or(self.minor_name.as_deref())
            .unwrap_or(self.label.as_str())
    }

    /// Whether a burst happened within the last `COOLDOWN_DURATION`.
    pub fn is_cooldown_active(&self, now: Duration) -> bool {
        match self.cooldown_activated_at {
            Some(activated_at) => activated_at + COOLDOWN_DURATION > now,
            None => false,
        }
    }

    /// Force produced by each active thruster.
    pub fn thrust_magnitude(&self, now: Duration) -> f64 {
        let base = THRUST_BASE_MAGNITUDE * self.mass / PLAYER_START_MASS;
        if self.is_cooldown_active(now) {
            base * COOLDOWN_THRUST_MULTIPLIER
        } else {
            base
        }
    }

    /// Net applied force: accumulated gravity plus thrust.
    ///
    /// Cooldown damps gravity and boosts thrust. Static bodies feel nothing.
    pub fn force(&self, now: Duration) -> Vector2 {
        if self.is_static {
            return Vector2::ZERO;
        }

        let cooldown = self.is_cooldown_active(now);
        let gravity_factor = if cooldown {
            COOLDOWN_GRAVITY_FACTOR
        } else {
            1.0
        };
        let mut force = self.gravitational_force * gravity_factor;

        let thrust = self.thrust_magnitude(now);
        for direction in ThrustDirection::ALL {
            if self.thrusters.get(direction) {
                force += Thrusters::axis(direction) * thrust;
            }
        }
        force
    }

    /// Forward Euler: velocity from the current force, then position from
    /// the new velocity.
    ///
    /// # Panics
    /// If a non-static body has zero or non-finite mass. Dead bodies must be
    /// removed before integration.
    pub fn step(&mut self, duration: Duration, now: Duration) {
        let dt = duration.as_secs_f64();
        if !self.is_static {
            assert!(
                self.mass > 0.0 && self.mass.is_finite(),
                "integrating body '{}' with invalid mass {}",
                self.label,
                self.mass
            );
            self.velocity += self.force(now) / self.mass * dt;
        }
        self.position += self.velocity * dt;
    }

    /// Lose a fraction of mass, floored at zero.
    ///
    /// Heavy bodies lose `mass * percent`. When `forced` (outside the world
    /// bounds) a body at or below `MINIMUM_DECAY_MASS` loses at least
    /// `MINIMUM_DECAY_FORCE_QUANTITY`, so stragglers die in bounded time.
    /// Light bodies inside the bounds do not decay.
    pub fn decay(&mut self, percent: f64, forced: bool) {
        let proportional = self.mass * percent;
        let quantity = if forced && self.mass <= MINIMUM_DECAY_MASS {
            proportional.max(MINIMUM_DECAY_FORCE_QUANTITY)
        } else if self.mass >= MINIMUM_DECAY_MASS {
            proportional
        } else {
            0.0
        };
        self.mass = (self.mass - quantity).max(0.0);
    }

    /// Newtonian attraction exerted on this body by `other`.
    ///
    /// Zero if either body is static or the two are closer than
    /// `MIN_FORCE_DISTANCE`.
    pub fn gravitational_force_to(&self, other: &Body) -> Vector2 {
        if self.is_static || other.is_static {
            return Vector2::ZERO;
        }
        let distance_sq = self.position.distance_squared(other.position);
        if distance_sq < MIN_FORCE_DISTANCE * MIN_FORCE_DISTANCE {
            return Vector2::ZERO;
        }
        let magnitude = GRAVITATIONAL_CONSTANT * self.mass * other.mass / distance_sq;
        (other.position - self.position).with_magnitude(magnitude)
    }

    /// Spheres overlap when their centers are closer than the sum of radii.
    pub fn collides_with(&self, other: &Body) -> bool {
        self.position.distance(other.position) < self.radius() + other.radius()
    }

    /// Absorb `other` in a perfectly inelastic merge.
    ///
    /// Velocity is mass-averaged unless either body is static; position is
    /// always mass-averaged. `other` is left with zero mass.
    pub fn merge_with(&mut self, other: &mut Body) {
        let total = self.mass + other.mass;
        if total > 0.0 {
            if !self.is_static && !other.is_static {
                self.velocity = (self.velocity * self.mass + other.velocity * other.mass) / total;
            }
            self.position = (self.position * self.mass + other.position * other.mass) / total;
        }
        self.mass = total;
        other.mass = 0.0;
    }

    /// Player burst: halve mass, stop dead, and start the cooldown window.
    pub fn burst(&mut self, now: Duration) {
        self.mass /= 2.0;
        self.velocity = Vector2::ZERO;
        self.cooldown_activated_at = Some(now);
    }
}
