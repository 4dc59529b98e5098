//! Game loop thread — runs the match engine at the fixed tick rate and
//! publishes snapshots.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. Snapshots go to a
//! caller-supplied callback (the shell's frame/event sink) and into a
//! shared slot for synchronous polling.

use std::sync::mpsc;
use std::time::{Duration, Instant};

use bombard_core::constants::TICK_RATE;
use bombard_core::state::MatchSnapshot;
use bombard_sim::engine::{MatchConfig, MatchEngine};

use crate::state::{CommandSender, GameLoopCommand, SharedSnapshot};

/// Nominal duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the shell to use. The callback runs on
/// the loop thread once per tick, before the shared slot is updated.
pub fn spawn_game_loop<F>(
    config: MatchConfig,
    latest_snapshot: SharedSnapshot,
    on_snapshot: F,
) -> CommandSender
where
    F: FnMut(&MatchSnapshot) + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("bombard-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot, on_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop<F>(
    config: MatchConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
    mut on_snapshot: F,
) where
    F: FnMut(&MatchSnapshot),
{
    let mut engine = MatchEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles phase gating internally)
        let snapshot = engine.tick();

        // 3. Hand the snapshot to the shell's sink
        on_snapshot(&snapshot);

        // 4. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next tick, adjusting for time_scale
        let time_scale = engine.time_scale();
        let effective_tick_duration = if time_scale > 0.001 {
            TICK_DURATION.div_f64(time_scale)
        } else {
            TICK_DURATION
        };

        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
