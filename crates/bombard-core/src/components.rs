//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::{PlayerId, TankColor};
use crate::types::Rect;

/// A player's tank. Position is a separate component and stays at ground
/// level for the whole match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tank {
    pub player: PlayerId,
    pub color: TankColor,
    /// Aim angle in degrees, 0 pointing right, 180 pointing left.
    /// May hold transient out-of-range values between ticks; the clamp
    /// system restores it to [ANGLE_MIN, ANGLE_MAX] before physics runs.
    pub angle: f64,
    /// Shot power; scales muzzle velocity linearly. Clamped like `angle`.
    pub power: f64,
    /// Hit points. May go negative on the killing blow; the match ends
    /// as soon as it is observed at or below zero.
    pub health: i32,
}

/// Marks the single in-flight projectile. At most one entity carries this
/// at any time; it is spawned on fire and despawned on any resolving
/// collision. Carries Position + Velocity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile;

/// A destructible terrain obstacle. Despawned on first projectile contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub bounds: Rect,
}

// Position and Velocity are defined in types.rs and used as ECS
// components directly.
