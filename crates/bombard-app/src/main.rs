//! Headless demo driver: plays a scripted duel on a single thread and
//! prints every match event as a JSON line.

use bombard_core::commands::PlayerCommand;
use bombard_core::enums::MatchPhase;
use bombard_sim::engine::{MatchConfig, MatchEngine};

/// Power that lands a 45-degree shot on the opposing tank from the
/// starting positions (range grows with the square of power).
const BRACKET_POWER: f64 = 80.0;

/// Safety cap so a pathological script can't spin forever.
const MAX_TICKS: u64 = 120_000;

fn main() {
    let mut engine = MatchEngine::new(MatchConfig::default());
    engine.queue_command(PlayerCommand::NewMatch);

    loop {
        let snapshot = engine.tick();

        for event in &snapshot.events {
            println!(
                "{}",
                serde_json::to_string(event).expect("serialize match event")
            );
        }

        if snapshot.phase == MatchPhase::Finished || snapshot.time.tick >= MAX_TICKS {
            break;
        }

        // Script: when the field is quiet, walk the active tank's power
        // to the bracketing value and fire.
        if snapshot.phase == MatchPhase::Active && snapshot.projectile.is_none() {
            let power = snapshot
                .tanks
                .iter()
                .find(|t| t.player == snapshot.active_player)
                .map(|t| t.power)
                .unwrap_or(BRACKET_POWER);
            engine.queue_command(PlayerCommand::AdjustPower {
                delta: BRACKET_POWER - power,
            });
            engine.queue_command(PlayerCommand::Fire);
        }
    }
}
