//! Gravity system: pairwise force accumulation.

use gravity_core::types::Vector2;

use crate::universe::Bodies;

/// Store on every body the sum of pulls from every other body. O(n²).
pub fn run(bodies: &mut Bodies) {
    let forces: Vec<Vector2> = bodies
        .iter()
        .map(|(id, body)| {
            bodies
                .iter()
                .filter(|(other_id, _)| *other_id != id)
                .fold(Vector2::ZERO, |net, (_, other)| {
                    net + body.gravitational_force_to(other)
                })
        })
        .collect();

    for (body, force) in bodies.values_mut().zip(forces) {
        body.gravitational_force = force;
    }
}
