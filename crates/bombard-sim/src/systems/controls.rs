//! Aim clamp system.
//!
//! Input deltas apply to the active tank unclamped; this system restores
//! angle and power to their legal ranges once per tick, before ballistics
//! or the snapshot observe them.

use hecs::World;

use bombard_core::components::Tank;
use bombard_core::constants::{ANGLE_MAX, ANGLE_MIN, POWER_MAX, POWER_MIN};
use bombard_core::enums::PlayerId;

/// Clamp the active tank's angle to [ANGLE_MIN, ANGLE_MAX] and power to
/// [POWER_MIN, POWER_MAX].
pub fn run(world: &mut World, active: PlayerId) {
    for (_entity, tank) in world.query_mut::<&mut Tank>() {
        if tank.player != active {
            continue;
        }
        tank.angle = tank.angle.clamp(ANGLE_MIN, ANGLE_MAX);
        tank.power = tank.power.clamp(POWER_MIN, POWER_MAX);
    }
}
