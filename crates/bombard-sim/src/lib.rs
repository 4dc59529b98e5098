//! Simulation engine for BOMBARD.
//!
//! Owns the hecs ECS world, runs the clamp/ballistics/turn pipeline one
//! tick at a time, and produces `MatchSnapshot`s for the shell. Completely
//! headless, enabling deterministic testing.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use bombard_core as core;
pub use engine::MatchEngine;
