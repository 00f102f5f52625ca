//! Timed events delivered to the UI loop.

use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Messages sent to the UI loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The computer's reply is due for the game with this generation.
    ComputerTurn {
        /// Game the reply was scheduled for.
        generation: u64,
    },
}

/// Sends [`GameEvent::ComputerTurn`] after `delay`.
///
/// The reply is never cancelled; the app drops it if the game it belongs
/// to has been replaced in the meantime.
pub fn schedule_computer_turn(
    event_tx: mpsc::UnboundedSender<GameEvent>,
    delay: Duration,
    generation: u64,
) {
    debug!(?delay, generation, "Scheduling computer turn");
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if event_tx.send(GameEvent::ComputerTurn { generation }).is_err() {
            warn!(generation, "UI loop gone before computer turn");
        }
    });
}
