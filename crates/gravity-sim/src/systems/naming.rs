//! Naming system: gives the heaviest bodies memorable names.
//!
//! Roughly one body in a hundred gets a minor name (phonetic word plus a
//! random tag). In crowded universes, bodies far heavier than the naming
//! cutoff are also given a major name from a small fixed pantheon.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gravity_core::constants::{MAJOR_NAME_MASS_FACTOR, MINOR_NAME_SUFFIX_LEN, NAMING_RANK_DIVISOR};
use gravity_core::events::SimEvent;
use gravity_core::types::BodyId;

use crate::universe::Bodies;

const PHONETIC_ALPHABET: [&str; 26] = [
    "Alfa", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel", "India", "Juliett",
    "Kilo", "Lima", "Mike", "November", "Oscar", "Papa", "Quebec", "Romeo", "Sierra", "Tango",
    "Uniform", "Victor", "Whiskey", "X-Ray", "Yankee", "Zulu",
];

const TAG_CHARACTERS: &[u8] = b"QWERTYUIOPASDFGHJKLZXCVBNM1234567890";

const MAJOR_NAMES: [&str; 20] = [
    "Zeus", "Hera", "Poseidon", "Demeter", "Ares", "Athena", "Apollo", "Artemis", "Hephaestus",
    "Aphrodite", "Hermes", "Dionysus", "Hades", "Hypnos", "Nike", "Janus", "Nemesis", "Iris",
    "Hecate", "Tyche",
];

/// Assign names to the top-ranked bodies that do not have one yet.
pub fn run(bodies: &mut Bodies, rng: &mut ChaCha8Rng, events: &mut Vec<SimEvent>) {
    let rankings = rank_by_mass(bodies);
    let named_count = rankings.len() / NAMING_RANK_DIVISOR;
    if named_count == 0 {
        return;
    }

    // The first body outside the named set sets the bar for a major name.
    let cutoff_mass = rankings[named_count].1;
    let major_threshold = cutoff_mass * MAJOR_NAME_MASS_FACTOR;

    for &(body_id, mass) in &rankings[..named_count] {
        let needs_major = mass >= major_threshold
            && bodies
                .get(&body_id)
                .is_some_and(|body| body.major_name.is_none());
        if needs_major {
            if let Some(name) = new_major_name(bodies, rng) {
                assign(bodies, body_id, name, true, events);
            }
        }

        let needs_minor = bodies
            .get(&body_id)
            .is_some_and(|body| body.minor_name.is_none());
        if needs_minor {
            let name = new_minor_name(bodies, rng);
            assign(bodies, body_id, name, false, events);
        }
    }
}

/// (id, mass) sorted heaviest first, ties broken by id.
fn rank_by_mass(bodies: &Bodies) -> Vec<(BodyId, f64)> {
    let mut rankings: Vec<(BodyId, f64)> =
        bodies.iter().map(|(id, body)| (*id, body.mass)).collect();
    rankings.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    rankings
}

fn assign(
    bodies: &mut Bodies,
    body_id: BodyId,
    name: String,
    major: bool,
    events: &mut Vec<SimEvent>,
) {
    let Some(body) = bodies.get_mut(&body_id) else {
        return;
    };
    log::debug!("body {body_id} named '{name}'");
    if major {
        body.major_name = Some(name.clone());
    } else {
        body.minor_name = Some(name.clone());
    }
    events.push(SimEvent::BodyNamed { body_id, name });
}

/// Random "<phonetic word> <tag>" not used by any live body.
pub fn new_minor_name(bodies: &Bodies, rng: &mut ChaCha8Rng) -> String {
    loop {
        let word = PHONETIC_ALPHABET[rng.gen_range(0..PHONETIC_ALPHABET.len())];
        let tag: String = (0..MINOR_NAME_SUFFIX_LEN)
            .map(|_| TAG_CHARACTERS[rng.gen_range(0..TAG_CHARACTERS.len())] as char)
            .collect();
        let name = format!("{word} {tag}");
        if !bodies
            .values()
            .any(|body| body.minor_name.as_deref() == Some(name.as_str()))
        {
            return name;
        }
    }
}

/// An unused major name in random order, or `None` when all are taken.
pub fn new_major_name(bodies: &Bodies, rng: &mut ChaCha8Rng) -> Option<String> {
    let mut candidates = MAJOR_NAMES;
    candidates.shuffle(rng);
    candidates
        .into_iter()
        .find(|name| {
            !bodies
                .values()
                .any(|body| body.major_name.as_deref() == Some(*name))
        })
        .map(str::to_string)
}
