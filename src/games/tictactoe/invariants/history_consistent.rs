//! History consistency invariant: history length matches occupied squares.

use super::super::{GameState, Mark, Square};
use super::Invariant;

/// Invariant: History length equals number of occupied squares, and while
/// the game is running the mark to move follows from the history parity.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let history_len = state.history().len();

        let occupied_count = state
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        if history_len != occupied_count {
            return false;
        }

        if state.is_over() {
            return true;
        }

        let expected_next = if history_len % 2 == 0 {
            Mark::Circle
        } else {
            Mark::Cross
        };
        state.current_player() == expected_next
    }

    fn description() -> &'static str {
        "History length matches occupied squares and turn parity"
    }
}
