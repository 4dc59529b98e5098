//! Simulation constants and tuning parameters.
//!
//! Ballistics constants are expressed per tick, not per second, so the
//! simulation is independent of the host loop's wall-clock pacing.

/// Nominal tick rate for host loops (Hz). Affects pacing only.
pub const TICK_RATE: u32 = 60;

// --- Playfield ---

/// Playfield width in pixels.
pub const FIELD_WIDTH: f64 = 800.0;

/// Playfield height in pixels. The ground line sits at this y value.
pub const FIELD_HEIGHT: f64 = 400.0;

// --- Tanks ---

/// Tank hull width.
pub const TANK_WIDTH: f64 = 40.0;

/// Tank hull height.
pub const TANK_HEIGHT: f64 = 20.0;

/// Turret barrel length, for the shell's tank rendering.
pub const TURRET_LENGTH: f64 = 30.0;

/// Distance from the playfield edge to each tank's near side.
pub const TANK_EDGE_OFFSET: f64 = 50.0;

/// Starting health for both tanks.
pub const STARTING_HEALTH: i32 = 100;

/// Health removed per projectile hit. Flat, no distance falloff.
pub const HIT_DAMAGE: i32 = 25;

/// Starting aim angle for the left tank (degrees, toward the right).
pub const LEFT_TANK_ANGLE: f64 = 45.0;

/// Starting aim angle for the right tank (degrees, toward the left).
pub const RIGHT_TANK_ANGLE: f64 = 135.0;

/// Starting shot power for both tanks.
pub const DEFAULT_POWER: f64 = 50.0;

// --- Aim limits ---

/// Minimum aim angle (degrees).
pub const ANGLE_MIN: f64 = 0.0;

/// Maximum aim angle (degrees).
pub const ANGLE_MAX: f64 = 180.0;

/// Minimum shot power.
pub const POWER_MIN: f64 = 10.0;

/// Maximum shot power.
pub const POWER_MAX: f64 = 250.0;

// --- Ballistics (per tick) ---

/// Downward acceleration added to vertical velocity each tick.
pub const GRAVITY: f64 = 0.098;

/// Horizontal displacement per tick per unit of wind intensity.
pub const WIND_COEFFICIENT: f64 = 0.02;

/// Converts power units into muzzle velocity (pixels per tick).
pub const MUZZLE_VELOCITY_SCALE: f64 = 0.1;

// --- Wind ---

/// Exclusive upper bound for rerolled wind intensity.
pub const WIND_MAX_INTENSITY: f64 = 2.0;

// --- Obstacles ---

/// Number of obstacles generated at match start.
pub const OBSTACLE_COUNT: usize = 5;

/// Margin kept between obstacles and both playfield edges.
pub const OBSTACLE_EDGE_MARGIN: f64 = 50.0;

/// Minimum obstacle width.
pub const OBSTACLE_MIN_WIDTH: f64 = 20.0;

/// Maximum obstacle width (exclusive).
pub const OBSTACLE_MAX_WIDTH: f64 = 80.0;

/// Minimum obstacle height.
pub const OBSTACLE_MIN_HEIGHT: f64 = 20.0;

/// Maximum obstacle height (exclusive).
pub const OBSTACLE_MAX_HEIGHT: f64 = 70.0;

/// Vertical band above the ground in which obstacle tops are placed.
pub const OBSTACLE_BAND_DEPTH: f64 = 150.0;

/// Minimum gap between an obstacle's top and the ground line.
pub const OBSTACLE_GROUND_CLEARANCE: f64 = 30.0;
