//! Entity spawn factories for setting up a match world.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bombard_core::components::{Obstacle, Tank};
use bombard_core::constants::*;
use bombard_core::enums::{PlayerId, TankColor};
use bombard_core::types::{Position, Rect};

/// Set up a fresh match: both tanks plus the random obstacle field.
pub fn setup_match(world: &mut World, rng: &mut ChaCha8Rng) {
    spawn_tanks(world);
    spawn_obstacles(world, rng);
}

/// Spawn both tanks at ground level, offset in from their playfield edge
/// and aimed at each other.
pub fn spawn_tanks(world: &mut World) {
    let ground = FIELD_HEIGHT - TANK_HEIGHT;

    world.spawn((
        Tank {
            player: PlayerId::One,
            color: TankColor::Green,
            angle: LEFT_TANK_ANGLE,
            power: DEFAULT_POWER,
            health: STARTING_HEALTH,
        },
        Position::new(TANK_EDGE_OFFSET, ground),
    ));

    world.spawn((
        Tank {
            player: PlayerId::Two,
            color: TankColor::Blue,
            angle: RIGHT_TANK_ANGLE,
            power: DEFAULT_POWER,
            health: STARTING_HEALTH,
        },
        Position::new(FIELD_WIDTH - TANK_EDGE_OFFSET - TANK_WIDTH, ground),
    ));
}

/// Spawn the random obstacle field. Placement keeps a margin off both
/// playfield edges and a band above the ground; overlapping rectangles
/// are permitted.
pub fn spawn_obstacles(world: &mut World, rng: &mut ChaCha8Rng) {
    for _ in 0..OBSTACLE_COUNT {
        let x = rng.gen_range(OBSTACLE_EDGE_MARGIN..FIELD_WIDTH - OBSTACLE_EDGE_MARGIN);
        let y = FIELD_HEIGHT - rng.gen_range(0.0..OBSTACLE_BAND_DEPTH) - OBSTACLE_GROUND_CLEARANCE;
        let width = rng.gen_range(OBSTACLE_MIN_WIDTH..OBSTACLE_MAX_WIDTH);
        let height = rng.gen_range(OBSTACLE_MIN_HEIGHT..OBSTACLE_MAX_HEIGHT);

        world.spawn((Obstacle {
            bounds: Rect::new(x, y, width, height),
        },));
    }
}
