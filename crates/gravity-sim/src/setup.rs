//! Body spawn factories for populating a universe.
//!
//! Creates scenery, food, threat, and player bodies with randomized
//! placement drawn from the engine's seeded RNG.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gravity_core::body::Body;
use gravity_core::constants::*;
use gravity_core::types::{BodyId, Bounds, Vector2};

use crate::universe::Universe;

const SCENERY_COLOR: &str = "#8a8f98";
const FOOD_COLOR: &str = "#6fd36a";
const THREAT_COLOR: &str = "#e0533d";

/// Uniformly random point inside `bounds`.
pub fn random_point_in_bounds(bounds: &Bounds, rng: &mut ChaCha8Rng) -> Vector2 {
    Vector2::new(
        rng.gen::<f64>() * bounds.width + bounds.x,
        rng.gen::<f64>() * bounds.height + bounds.y,
    )
}

/// Velocity with integer components in `[-limit, limit)`.
fn random_velocity(rng: &mut ChaCha8Rng, limit: i32) -> Vector2 {
    Vector2::new(
        rng.gen_range(-limit..limit) as f64,
        rng.gen_range(-limit..limit) as f64,
    )
}

/// Place `count` drifting scenery bodies of widely varying mass.
pub fn spawn_initial_bodies(universe: &mut Universe, rng: &mut ChaCha8Rng, count: usize) {
    let bounds = universe.bounds();
    for _ in 0..count {
        let body = Body::new(
            "body",
            SCENERY_COLOR,
            rng.gen::<f64>() * INITIAL_BODY_MAX_MASS,
            random_point_in_bounds(&bounds, rng),
            Vector2::new(
                rng.gen::<f64>() * 1000.0 - 500.0,
                rng.gen::<f64>() * 1000.0 - 500.0,
            ),
        );
        universe.add_body(body);
    }
}

/// A small, fast food body.
pub fn spawn_food(universe: &mut Universe, rng: &mut ChaCha8Rng) -> BodyId {
    let bounds = universe.bounds();
    let body = Body::new(
        "food",
        FOOD_COLOR,
        rng.gen::<f64>() * PLAYER_START_MASS * 0.4 + PLAYER_START_MASS * 0.1,
        random_point_in_bounds(&bounds, rng),
        random_velocity(rng, 500),
    )
    .into_npc();
    universe.add_body(body)
}

/// A threat sized up to twice the heaviest body alive, capped at
/// `THREAT_MAX_MASS_FACTOR` player masses. `None` when nothing has mass to
/// size it against.
pub fn spawn_threat(universe: &mut Universe, rng: &mut ChaCha8Rng) -> Option<BodyId> {
    let heaviest = universe
        .bodies()
        .map(|(_, body)| body.mass)
        .fold(0.0_f64, f64::max);
    let max_mass = (heaviest * 2.0).min(PLAYER_START_MASS * THREAT_MAX_MASS_FACTOR);
    if max_mass <= 0.0 {
        return None;
    }

    let bounds = universe.bounds();
    let body = Body::new(
        "threat",
        THREAT_COLOR,
        rng.gen::<f64>() * max_mass,
        random_point_in_bounds(&bounds, rng),
        random_velocity(rng, 100),
    )
    .into_npc();
    Some(universe.add_body(body))
}

/// A fresh player body at rest somewhere inside the bounds.
pub fn spawn_player(
    universe: &mut Universe,
    rng: &mut ChaCha8Rng,
    label: &str,
    color: &str,
) -> BodyId {
    let bounds = universe.bounds();
    let body = Body::new(
        label,
        color,
        PLAYER_START_MASS,
        random_point_in_bounds(&bounds, rng),
        Vector2::ZERO,
    );
    universe.add_body(body)
}
