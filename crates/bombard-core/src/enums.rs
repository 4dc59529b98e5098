//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Player identity. Exactly two players exist for the lifetime of a match.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PlayerId {
    /// The left tank; opens the match.
    #[default]
    One,
    /// The right tank.
    Two,
}

impl PlayerId {
    /// The other player — the subject of tank-hit checks while this one shoots.
    pub fn opponent(&self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

/// HUD color identity for a tank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TankColor {
    #[default]
    Green,
    Blue,
}

/// Match lifecycle phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// No match has been started yet.
    #[default]
    Idle,
    /// Players are trading shots.
    Active,
    /// A tank's health reached zero. Only `NewMatch` leaves this state.
    Finished,
}

/// Horizontal wind direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindDirection {
    Left,
    #[default]
    Right,
}

impl WindDirection {
    /// Sign applied to the wind term: +1 rightward, -1 leftward.
    pub fn sign(&self) -> f64 {
        match self {
            WindDirection::Left => -1.0,
            WindDirection::Right => 1.0,
        }
    }
}
