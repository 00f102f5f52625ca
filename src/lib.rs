//! Noughts - noughts and crosses with a terminal frontend
//!
//! # Architecture
//!
//! - **Games**: the tic-tac-toe engine. Pure state transitions over
//!   [`GameState`], plus a pluggable [`MoveSelector`] for the computer.
//! - **Render**: animated SVG drawings of marks, the winning line and boards.
//! - **Settings**: cosmetic configuration loaded from TOML.
//! - **TUI**: the interactive ratatui frontend.
//!
//! # Example
//!
//! ```
//! use noughts::{GameEngine, GameMode, GameState, Outcome};
//!
//! let engine = GameEngine::new();
//! let mut state = GameState::new(GameMode::Solo);
//! for m in [0, 3, 1, 4] {
//!     state = engine.apply_move(state, m).0;
//! }
//! let (state, outcome) = engine.apply_move(state, 2);
//! assert!(matches!(outcome, Some(Outcome::Won(_))));
//! assert!(state.is_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod games;
pub mod render;
pub mod settings;
pub mod tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Combo, FirstEmptySelector, GameEngine, GameMode, GameState, GameStatus, Mark,
    MoveError, MoveSelector, Outcome, Position, RandomSelector, Square, check_winner,
};

// Crate-level exports - Rendering
pub use render::{board_svg, circle_svg, cross_svg, mark_svg, winning_line_svg};

// Crate-level exports - Settings
pub use settings::{ConfigError, LineStyle, MarkStyle, Settings};

// Crate-level exports - Terminal UI
pub use tui::run_tui;
