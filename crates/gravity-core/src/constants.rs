//! Simulation constants and tuning parameters.

use std::time::Duration;

use crate::types::Bounds;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Snapshot broadcast rate (Hz).
pub const BROADCAST_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

// --- World ---

/// Default world rectangle, centered on the origin.
pub const DEFAULT_BOUNDS: Bounds = Bounds::new(-10_000.0, -10_000.0, 20_000.0, 20_000.0);

/// Gravitational constant in game units.
pub const GRAVITATIONAL_CONSTANT: f64 = 100.0;

/// Below this separation two bodies exert no force on each other.
pub const MIN_FORCE_DISTANCE: f64 = 1e-6;

// --- Mass ---

/// Mass of a freshly spawned player body.
pub const PLAYER_START_MASS: f64 = 10_000.0;

/// Fraction of mass lost per tick inside the bounds.
pub const DECAY_PER_STEP: f64 = 0.0001;

/// Fraction of mass lost per tick outside the bounds.
pub const OUT_OF_BOUNDS_DECAY_PER_STEP: f64 = 0.001;

/// Bodies lighter than this do not decay while inside the bounds.
pub const MINIMUM_DECAY_MASS: f64 = PLAYER_START_MASS;

/// Smallest mass removed per tick from a small body outside the bounds.
pub const MINIMUM_DECAY_FORCE_QUANTITY: f64 = 500.0;

// --- Thrust and burst ---

/// Thruster force for a body of `PLAYER_START_MASS`. Scales linearly with mass.
pub const THRUST_BASE_MAGNITUDE: f64 = 5_000_000.0;

/// How long a burst keeps a body in its cooldown state.
pub const COOLDOWN_DURATION: Duration = Duration::from_millis(5_000);

/// Fraction of gravity felt while cooldown is active.
pub const COOLDOWN_GRAVITY_FACTOR: f64 = 0.1;

/// Thruster multiplier while cooldown is active.
pub const COOLDOWN_THRUST_MULTIPLIER: f64 = 2.0;

// --- NPC spawning ---

/// Ticks between food spawns (2 seconds).
pub const FOOD_SPAWN_INTERVAL_TICKS: u64 = 120;

/// Ticks between threat spawns (10 seconds).
pub const THREAT_SPAWN_INTERVAL_TICKS: u64 = 600;

/// Spawning pauses once this many NPC bodies are alive.
pub const MAX_NPC_BODIES: usize = 200;

/// Scenery bodies placed when an engine starts.
pub const INITIAL_BODY_COUNT: usize = 10;

/// Upper bound on scenery body mass.
pub const INITIAL_BODY_MAX_MASS: f64 = 1_000_000.0;

/// Upper bound on a threat's mass, as a multiple of `PLAYER_START_MASS`.
pub const THREAT_MAX_MASS_FACTOR: f64 = 10.0;

// --- Naming ---

/// One body in this many receives a generated name.
pub const NAMING_RANK_DIVISOR: usize = 100;

/// A major name needs this multiple of the naming cutoff mass.
pub const MAJOR_NAME_MASS_FACTOR: f64 = 3.0;

/// Random characters appended to a minor name.
pub const MINOR_NAME_SUFFIX_LEN: usize = 5;
