//! Ballistics system: advances the in-flight projectile and resolves its
//! collisions.
//!
//! Check order within a tick is fixed: ground, then the target tank, then
//! obstacles. Each check short-circuits the rest once the projectile is
//! destroyed, so a tick resolves at most once.

use hecs::{Entity, World};

use bombard_core::components::{Obstacle, Projectile, Tank};
use bombard_core::constants::{
    FIELD_HEIGHT, GRAVITY, HIT_DAMAGE, TANK_HEIGHT, TANK_WIDTH, WIND_COEFFICIENT,
};
use bombard_core::enums::PlayerId;
use bombard_core::events::MatchEvent;
use bombard_core::types::{Position, Rect, Velocity, Wind};

/// How the projectile tick ended.
pub enum ShotOutcome {
    /// No projectile exists, or it is still airborne.
    InFlight,
    /// The projectile resolved without ending the match; the turn passes.
    Resolved,
    /// The projectile killed the target tank.
    Lethal { winner: PlayerId },
}

/// Advance the projectile one tick under gravity and wind, then run the
/// ordered collision checks.
pub fn run(
    world: &mut World,
    wind: &Wind,
    active: PlayerId,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<MatchEvent>,
) -> ShotOutcome {
    let mut airborne: Option<(Entity, Position)> = None;
    for (entity, (pos, vel, _projectile)) in
        world.query_mut::<(&mut Position, &mut Velocity, &Projectile)>()
    {
        pos.x += vel.x + wind.intensity * wind.direction.sign() * WIND_COEFFICIENT;
        pos.y += vel.y;
        vel.y += GRAVITY;
        airborne = Some((entity, *pos));
    }
    let (projectile, impact) = match airborne {
        Some(p) => p,
        None => return ShotOutcome::InFlight,
    };

    // Ground check first; it wins over any overlapping collider this tick.
    if impact.y > FIELD_HEIGHT {
        let _ = world.despawn(projectile);
        return ShotOutcome::Resolved;
    }

    // Tank check, only ever against the tank that is not shooting.
    let target = active.opponent();
    let mut remaining_health = None;
    for (_entity, (tank, tank_pos)) in world.query_mut::<(&mut Tank, &Position)>() {
        if tank.player != target {
            continue;
        }
        let hull = Rect::new(tank_pos.x, tank_pos.y, TANK_WIDTH, TANK_HEIGHT);
        if hull.contains(impact.x, impact.y) {
            tank.health -= HIT_DAMAGE;
            remaining_health = Some(tank.health);
        }
    }
    if let Some(remaining) = remaining_health {
        events.push(MatchEvent::TankHit {
            player: target,
            remaining_health: remaining,
        });
        let _ = world.despawn(projectile);
        if remaining <= 0 {
            return ShotOutcome::Lethal { winner: active };
        }
        return ShotOutcome::Resolved;
    }

    // Obstacle check: read pass records the first geometric match, then
    // despawns apply after iteration completes. At most one obstacle
    // falls per shot.
    despawn_buffer.clear();
    {
        let mut query = world.query::<&Obstacle>();
        for (entity, obstacle) in query.iter() {
            if obstacle.bounds.contains(impact.x, impact.y) {
                events.push(MatchEvent::ObstacleDestroyed {
                    x: obstacle.bounds.x,
                    y: obstacle.bounds.y,
                });
                despawn_buffer.push(entity);
                break;
            }
        }
    }
    if !despawn_buffer.is_empty() {
        despawn_buffer.push(projectile);
        for entity in despawn_buffer.drain(..) {
            let _ = world.despawn(entity);
        }
        return ShotOutcome::Resolved;
    }

    ShotOutcome::InFlight
}
