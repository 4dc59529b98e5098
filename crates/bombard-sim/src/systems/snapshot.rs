//! Snapshot system: queries the ECS world and builds a complete MatchSnapshot.
//!
//! This system is read-only — it never modifies the world. View lists are
//! sorted so identical worlds always serialize identically.

use hecs::World;

use bombard_core::components::{Obstacle, Projectile, Tank};
use bombard_core::enums::{MatchPhase, PlayerId};
use bombard_core::events::MatchEvent;
use bombard_core::state::{MatchSnapshot, ObstacleView, ProjectileView, TankView, WindView};
use bombard_core::types::{Position, SimTime, Velocity, Wind};

/// Build a complete MatchSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: MatchPhase,
    active_player: PlayerId,
    winner: Option<PlayerId>,
    wind: &Wind,
    events: Vec<MatchEvent>,
) -> MatchSnapshot {
    MatchSnapshot {
        time: *time,
        phase,
        active_player,
        winner,
        wind: WindView {
            direction: wind.direction,
            intensity: wind.intensity,
        },
        tanks: build_tanks(world),
        projectile: build_projectile(world),
        obstacles: build_obstacles(world),
        events,
    }
}

/// Build TankView list from both tank entities.
fn build_tanks(world: &World) -> Vec<TankView> {
    let mut tanks: Vec<TankView> = world
        .query::<(&Tank, &Position)>()
        .iter()
        .map(|(_, (tank, pos))| TankView {
            player: tank.player,
            color: tank.color,
            x: pos.x,
            y: pos.y,
            angle: tank.angle,
            power: tank.power,
            health: tank.health,
        })
        .collect();

    tanks.sort_by_key(|t| t.player);
    tanks
}

/// Build the projectile view, if one is in flight.
fn build_projectile(world: &World) -> Option<ProjectileView> {
    world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .next()
        .map(|(_, (_, pos, vel))| ProjectileView {
            x: pos.x,
            y: pos.y,
            vx: vel.x,
            vy: vel.y,
        })
}

/// Build ObstacleView list from the remaining obstacles.
fn build_obstacles(world: &World) -> Vec<ObstacleView> {
    let mut obstacles: Vec<ObstacleView> = world
        .query::<&Obstacle>()
        .iter()
        .map(|(_, obstacle)| ObstacleView {
            x: obstacle.bounds.x,
            y: obstacle.bounds.y,
            width: obstacle.bounds.width,
            height: obstacle.bounds.height,
        })
        .collect();

    obstacles.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    obstacles
}
