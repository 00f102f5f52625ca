//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). They never touch turn or
//! mode state, so the engine and the renderer can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Combo, check_winner};
