//! Systems that operate on the match world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for the
//! read-only snapshot builder). They do not own state — entities live in
//! the world, turn/wind/phase state lives in the engine.

pub mod ballistics;
pub mod controls;
pub mod snapshot;
