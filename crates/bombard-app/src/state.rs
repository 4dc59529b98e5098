//! State shared between the shell and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use bombard_core::commands::PlayerCommand;
use bombard_core::state::MatchSnapshot;

/// Commands sent from the shell to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the match engine.
    Player(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Sender half of the game loop's command channel.
pub type CommandSender = mpsc::Sender<GameLoopCommand>;

/// Latest-snapshot slot shared with the game loop thread, for shells that
/// poll instead of subscribing to the snapshot callback.
pub type SharedSnapshot = Arc<Mutex<Option<MatchSnapshot>>>;

/// Create an empty shared snapshot slot.
pub fn shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}
