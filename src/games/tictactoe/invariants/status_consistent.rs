//! The recorded status agrees with what the board shows.

use super::super::rules::{check_winner, is_draw, is_full};
use super::super::{GameState, GameStatus};
use super::Invariant;

/// Invariant: `Won(combo)` exactly when `combo` is the board's winning line,
/// `Draw` exactly when the board is full without one.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match state.status() {
            GameStatus::Won(combo) => check_winner(board) == Some(combo),
            GameStatus::Draw => is_draw(board),
            GameStatus::InProgress => check_winner(board).is_none() && !is_full(board),
        }
    }

    fn description() -> &'static str {
        "Game status matches the board"
    }
}
