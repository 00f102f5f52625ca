//! Tic-tac-toe game engine.
//!
//! Pure data and rules: the presentation layers only read [`GameState`] and
//! feed cell indices back through [`GameEngine`].

mod action;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod selector;
mod types;

pub use action::MoveError;
pub use engine::GameEngine;
pub use position::Position;
pub use rules::{Combo, check_winner};
pub use selector::{FirstEmptySelector, MoveSelector, RandomSelector};
pub use types::{Board, GameMode, GameState, GameStatus, Mark, Outcome, Square};
