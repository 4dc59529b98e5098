//! Events emitted by the simulation for the shell's HUD and sound.

use serde::{Deserialize, Serialize};

use crate::enums::{PlayerId, WindDirection};

/// Notable moments raised during a tick, delivered on that tick's snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchEvent {
    /// The active tank fired its projectile.
    ShotFired { player: PlayerId },
    /// The projectile struck a tank.
    TankHit {
        player: PlayerId,
        remaining_health: i32,
    },
    /// The projectile struck an obstacle, identified by its top-left corner.
    ObstacleDestroyed { x: f64, y: f64 },
    /// A turn resolved: the named player is up next and the wind rerolled.
    TurnChanged {
        player: PlayerId,
        wind_direction: WindDirection,
        wind_intensity: f64,
    },
    /// A tank's health reached zero. The shell should present the winner
    /// and offer a `NewMatch`.
    MatchOver { winner: PlayerId },
}
