//! Fundamental geometric and simulation types.

use std::fmt;
use std::time::Duration;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D vector in simulation space.
/// x grows to the right, y grows downward (screen convention).
pub type Vector2 = DVec2;

/// Vector helpers not provided by glam.
pub trait VectorExt {
    /// Colinear vector with the given length.
    ///
    /// A zero-length (or non-finite) input has no direction, so the result
    /// is the zero vector rather than NaN.
    fn with_magnitude(self, magnitude: f64) -> Self;
}

impl VectorExt for DVec2 {
    fn with_magnitude(self, magnitude: f64) -> Self {
        let current = self.length();
        if current == 0.0 || !current.is_finite() {
            return DVec2::ZERO;
        }
        self * (magnitude / current)
    }
}

/// Axis-aligned world rectangle. Edges are inside.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        crate::constants::DEFAULT_BOUNDS
    }
}

impl Bounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether a point lies within the rectangle (inclusive).
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Identifier assigned to a body when it enters a universe.
/// Allocated sequentially and never reused by that universe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BodyId(pub u64);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of completed steps.
    pub tick: u64,
    /// Total simulated time.
    pub elapsed: Duration,
}

impl SimTime {
    /// Elapsed simulation time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Advance by one step of the given length.
    pub fn advance(&mut self, duration: Duration) {
        self.tick += 1;
        self.elapsed += duration;
    }
}
