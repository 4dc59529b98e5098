//! Match snapshot — the complete visible state handed to the shell each tick.

use serde::{Deserialize, Serialize};

use crate::enums::{MatchPhase, PlayerId, TankColor, WindDirection};
use crate::events::MatchEvent;
use crate::types::SimTime;

/// Everything a shell needs to draw one frame and its HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub time: SimTime,
    pub phase: MatchPhase,
    /// The tank currently receiving aim/power/fire input.
    pub active_player: PlayerId,
    /// Set the moment a tank's health crosses zero.
    pub winner: Option<PlayerId>,
    pub wind: WindView,
    pub tanks: Vec<TankView>,
    /// The in-flight projectile, if any.
    pub projectile: Option<ProjectileView>,
    pub obstacles: Vec<ObstacleView>,
    /// Events raised during this tick, in order.
    pub events: Vec<MatchEvent>,
}

/// A tank as drawn on the field and summarized in the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TankView {
    pub player: PlayerId,
    pub color: TankColor,
    /// Top-left corner of the hull.
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub power: f64,
    pub health: i32,
}

/// The in-flight projectile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

/// An obstacle rectangle still standing on the field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleView {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Wind readout for the HUD indicator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WindView {
    pub direction: WindDirection,
    pub intensity: f64,
}
