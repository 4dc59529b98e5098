//! Host-loop harness for BOMBARD.
//!
//! Wires the simulation engine to whatever shell hosts it: a fixed
//! timestep game-loop thread, an mpsc command channel, and snapshot
//! delivery via a callback plus a shared polling slot. Carries no
//! rendering or input code of its own.

pub mod game_loop;
pub mod state;

pub use bombard_core as core;
