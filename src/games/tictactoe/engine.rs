//! Game logic for tic-tac-toe.

use super::Position;
use super::action::MoveError;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::rules::{self, Combo};
use super::selector::{MoveSelector, RandomSelector};
use super::types::{Board, GameMode, GameState, GameStatus, Outcome};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game engine.
///
/// Holds no game state of its own; every operation takes a [`GameState`]
/// and hands back the next one. The only thing it owns is the selector the
/// computer opponent uses.
#[derive(Debug, Clone, Default)]
pub struct GameEngine<S = RandomSelector> {
    selector: S,
}

impl GameEngine<RandomSelector> {
    /// Creates an engine whose computer opponent plays at random.
    pub fn new() -> Self {
        Self::with_selector(RandomSelector::new())
    }
}

impl<S: MoveSelector> GameEngine<S> {
    /// Creates an engine with a custom move selector.
    pub fn with_selector(selector: S) -> Self {
        Self { selector }
    }

    /// Starts a game in the given mode.
    #[instrument(skip(self))]
    pub fn new_game(&self, mode: GameMode) -> GameState {
        info!(?mode, "Starting new game");
        GameState::new(mode)
    }

    /// Resets to an empty board with Circle to move, keeping the mode.
    #[instrument(skip(self, state), fields(mode = ?state.mode(), status = ?state.status()))]
    pub fn restart(&self, state: &GameState) -> GameState {
        info!("Restarting game");
        GameState::new(state.mode())
    }

    /// Returns the first winning combo on the board, if any.
    pub fn check_winner(&self, board: &Board) -> Option<Combo> {
        rules::check_winner(board)
    }

    /// Applies a move for the current mark, reporting why it was refused.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] when the game is over, the index is not a cell,
    /// or the cell is occupied. `state` is left untouched in that case.
    #[instrument(skip(self, state), fields(player = ?state.current_player()))]
    pub fn try_apply_move(
        &self,
        state: &GameState,
        index: usize,
    ) -> Result<(GameState, Outcome), MoveError> {
        if state.is_over() {
            return Err(MoveError::GameOver);
        }
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        if !state.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mut next = state.clone();
        next.place(pos);

        let outcome = if let Some(combo) = rules::check_winner(next.board()) {
            next.set_status(GameStatus::Won(combo));
            info!(%combo, winner = ?next.current_player(), "Game won");
            Outcome::Won(combo)
        } else if rules::is_full(next.board()) {
            next.set_status(GameStatus::Draw);
            info!("Game drawn");
            Outcome::Draw
        } else {
            next.pass_turn();
            Outcome::Continued
        };

        debug_assert!(
            TicTacToeInvariants::check_all(&next).is_ok(),
            "invariants violated after playing {}",
            pos
        );

        Ok((next, outcome))
    }

    /// Applies a move for the current mark.
    ///
    /// Illegal moves are no-ops: the state comes back unchanged and no
    /// outcome is reported.
    pub fn apply_move(&self, state: GameState, index: usize) -> (GameState, Option<Outcome>) {
        match self.try_apply_move(&state, index) {
            Ok((next, outcome)) => (next, Some(outcome)),
            Err(e) => {
                debug!(index, error = %e, "Ignoring move");
                (state, None)
            }
        }
    }

    /// Picks a cell for the computer, uniformly among the empty ones.
    ///
    /// Returns `None` when the game is over or the board is full.
    #[instrument(skip(self, state))]
    pub fn choose_computer_move(&mut self, state: &GameState) -> Option<Position> {
        if state.is_over() {
            return None;
        }
        let candidates = Position::valid_moves(state.board());
        let choice = self.selector.select(&candidates);
        debug!(?choice, candidates = candidates.len(), "Computer chose move");
        choice
    }

    /// Plays the computer's reply when it is the computer's turn.
    ///
    /// A no-op unless [`GameState::awaiting_computer`] holds.
    pub fn play_computer_turn(&mut self, state: GameState) -> (GameState, Option<Outcome>) {
        if !state.awaiting_computer() {
            return (state, None);
        }
        match self.choose_computer_move(&state) {
            Some(pos) => self.apply_move(state, pos.to_index()),
            None => (state, None),
        }
    }
}
