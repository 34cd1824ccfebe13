//! Kinematic integration system.

use std::time::Duration;

use crate::universe::Bodies;

/// Integrate every body by `duration`. `now` is the clock at tick start.
pub fn run(bodies: &mut Bodies, duration: Duration, now: Duration) {
    for body in bodies.values_mut() {
        body.step(duration, now);
    }
}
