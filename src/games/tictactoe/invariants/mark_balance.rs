//! Mark balance invariant: Circle is never behind, never more than one ahead.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: `circles - crosses` is 0 or 1.
///
/// Circle always moves first and the marks alternate, so Circle can lead by
/// at most one mark and never trails.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let circles = state.board().count(Mark::Circle);
        let crosses = state.board().count(Mark::Cross);
        circles == crosses || circles == crosses + 1
    }

    fn description() -> &'static str {
        "Circle marks equal Cross marks or lead by one"
    }
}
