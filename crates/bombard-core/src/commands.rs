//! Player commands sent from the shell to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. The shell
//! maps its key events onto these; the engine never sees raw input.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a fresh match: tanks, obstacles, wind, and turn order are
    /// fully regenerated. Accepted only before the first match and after
    /// a finished one.
    NewMatch,
    /// Nudge the active tank's aim angle (degrees). Applied unclamped;
    /// the per-tick clamp runs before any physics observes the value.
    AdjustAim { delta: f64 },
    /// Nudge the active tank's shot power. Same clamping pattern as aim.
    AdjustPower { delta: f64 },
    /// Fire a projectile from the active tank. Silently ignored while a
    /// projectile is already in flight.
    Fire,
}
