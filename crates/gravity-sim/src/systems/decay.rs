//! Decay system: mass loss every tick, accelerated outside the bounds.

use gravity_core::constants::{DECAY_PER_STEP, OUT_OF_BOUNDS_DECAY_PER_STEP};
use gravity_core::events::SimEvent;
use gravity_core::types::Bounds;

use crate::universe::Bodies;

/// Decay all bodies, then remove every body left with zero mass.
pub fn run(bodies: &mut Bodies, bounds: &Bounds, events: &mut Vec<SimEvent>) {
    for body in bodies.values_mut() {
        if bounds.contains(body.position) {
            body.decay(DECAY_PER_STEP, false);
        } else {
            body.decay(OUT_OF_BOUNDS_DECAY_PER_STEP, true);
        }
    }

    bodies.retain(|&body_id, body| {
        if body.is_alive() {
            return true;
        }
        log::debug!("body {body_id} ('{}') decayed away", body.label);
        events.push(SimEvent::BodyDecayed { body_id });
        false
    });
}
