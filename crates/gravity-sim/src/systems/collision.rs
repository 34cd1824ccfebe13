//! Collision system: inelastic merging of overlapping bodies.
//!
//! Merges are resolved serially. After each merge the whole pairwise scan
//! restarts, because the merged body has a new position and radius and may
//! now overlap bodies already checked. Worst case is O(n³) when everything
//! overlaps at once, which is fine for tens of bodies.

use gravity_core::events::SimEvent;
use gravity_core::types::BodyId;

use crate::universe::Bodies;

/// Merge colliding pairs until a full scan finds none.
pub fn run(bodies: &mut Bodies, events: &mut Vec<SimEvent>) {
    while let Some((first, second)) = find_colliding_pair(bodies) {
        resolve(bodies, first, second, events);
    }
}

/// First overlapping pair in id order, lower id first.
pub fn find_colliding_pair(bodies: &Bodies) -> Option<(BodyId, BodyId)> {
    for (index, (&first_id, first)) in bodies.iter().enumerate() {
        for (&second_id, second) in bodies.iter().skip(index + 1) {
            if first.collides_with(second) {
                return Some((first_id, second_id));
            }
        }
    }
    None
}

/// Merge the lighter body into the heavier. On equal mass the first
/// (lower id) body survives.
fn resolve(bodies: &mut Bodies, first: BodyId, second: BodyId, events: &mut Vec<SimEvent>) {
    let (Some(a), Some(b)) = (bodies.get(&first), bodies.get(&second)) else {
        return;
    };
    let (survivor, absorbed) = if b.mass > a.mass {
        (second, first)
    } else {
        (first, second)
    };

    let Some(mut absorbed_body) = bodies.remove(&absorbed) else {
        return;
    };
    let Some(survivor_body) = bodies.get_mut(&survivor) else {
        return;
    };
    survivor_body.merge_with(&mut absorbed_body);

    log::debug!(
        "body {survivor} absorbed body {absorbed}, mass now {:.1}",
        survivor_body.mass
    );
    events.push(SimEvent::BodyMerged {
        survivor,
        absorbed,
        mass: survivor_body.mass,
    });
}
