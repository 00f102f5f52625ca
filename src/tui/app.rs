//! Application state and logic.

use super::input;
use super::orchestrator::GameEvent;
use crate::games::tictactoe::{
    GameEngine, GameMode, GameState, GameStatus, Mark, MoveSelector, Outcome, Position,
    RandomSelector,
};
use crate::settings::Settings;
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Choosing between solo and computer play.
    ModeSelect,
    /// The board.
    InGame,
}

/// What the event loop has to do after the app handled input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Nothing.
    None,
    /// Leave the program.
    Quit,
    /// Send [`GameEvent::ComputerTurn`] for `generation` after `delay`.
    ScheduleComputer {
        /// How long the human's mark gets to animate first.
        delay: Duration,
        /// Game the reply belongs to.
        generation: u64,
    },
}

/// Main application state.
pub struct App<S = RandomSelector> {
    engine: GameEngine<S>,
    settings: Settings,
    screen: Screen,
    menu_index: usize,
    state: GameState,
    cursor: Position,
    generation: u64,
    computer_pending: bool,
    last_mark: Option<(Position, Instant)>,
    status_message: String,
}

impl<S: MoveSelector> App<S> {
    /// Creates the app on the mode selection screen.
    pub fn new(engine: GameEngine<S>, settings: Settings) -> Self {
        Self {
            engine,
            settings,
            screen: Screen::ModeSelect,
            menu_index: 0,
            state: GameState::default(),
            cursor: Position::Center,
            generation: 0,
            computer_pending: false,
            last_mark: None,
            status_message: "Choose a mode and press Enter.".to_string(),
        }
    }

    /// Gets the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Highlighted entry on the mode selection screen.
    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    /// Gets the current game.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Gets the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Whether the computer's reply is still on its way.
    pub fn computer_pending(&self) -> bool {
        self.computer_pending
    }

    /// Restart is on offer once the game has ended.
    pub fn restart_offered(&self) -> bool {
        self.screen == Screen::InGame && self.state.is_over()
    }

    /// Whether the mark at `pos` is still inside its draw-in animation.
    pub fn is_animating(&self, pos: Position, now: Instant) -> bool {
        let Some((last, placed_at)) = self.last_mark else {
            return false;
        };
        if last != pos {
            return false;
        }
        let style = match self.state.board().get(pos).mark() {
            Some(Mark::Circle) => self.settings.circle(),
            Some(Mark::Cross) => self.settings.cross(),
            None => return false,
        };
        now.saturating_duration_since(placed_at) < style.duration()
    }

    /// Starts a game in `mode` and shows the board.
    #[instrument(skip(self))]
    pub fn start(&mut self, mode: GameMode) -> AppAction {
        self.generation += 1;
        self.state = self.engine.new_game(mode);
        self.screen = Screen::InGame;
        self.cursor = Position::Center;
        self.computer_pending = false;
        self.last_mark = None;
        self.refresh_status();
        AppAction::None
    }

    /// Drops the current game and returns to mode selection.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(generation = self.generation, "Restarting");
        self.generation += 1;
        self.state = self.engine.restart(&self.state);
        self.screen = Screen::ModeSelect;
        self.computer_pending = false;
        self.last_mark = None;
        self.status_message = "Choose a mode and press Enter.".to_string();
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
            return AppAction::Quit;
        }
        match self.screen {
            Screen::ModeSelect => self.handle_menu_key(key),
            Screen::InGame => self.handle_game_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyCode) -> AppAction {
        let modes = modes();
        match key {
            KeyCode::Up => {
                self.menu_index = self.menu_index.saturating_sub(1);
                AppAction::None
            }
            KeyCode::Down => {
                self.menu_index = (self.menu_index + 1).min(modes.len() - 1);
                AppAction::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.start(modes[self.menu_index]),
            KeyCode::Char('1') => self.start(GameMode::Solo),
            KeyCode::Char('2') => self.start(GameMode::VsComputer),
            _ => AppAction::None,
        }
    }

    fn handle_game_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('r') => {
                self.restart();
                AppAction::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) => match input::digit_position(c) {
                Some(pos) => {
                    self.cursor = pos;
                    self.play(pos)
                }
                None => AppAction::None,
            },
            code => {
                self.cursor = input::move_cursor(self.cursor, code);
                AppAction::None
            }
        }
    }

    /// Plays the human's mark at `pos`.
    ///
    /// Ignored while the computer's reply is pending.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn play(&mut self, pos: Position) -> AppAction {
        if self.screen != Screen::InGame || self.state.awaiting_computer() {
            debug!("Board is not accepting input");
            return AppAction::None;
        }

        let state = std::mem::take(&mut self.state);
        let (state, outcome) = self.engine.apply_move(state, pos.to_index());
        self.state = state;
        let Some(outcome) = outcome else {
            return AppAction::None;
        };
        self.record(pos, outcome);

        if self.state.awaiting_computer() {
            self.computer_pending = true;
            self.refresh_status();
            return AppAction::ScheduleComputer {
                delay: self.settings.computer_delay(),
                generation: self.generation,
            };
        }
        AppAction::None
    }

    /// Handles a game event from the orchestrator.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::ComputerTurn { generation } => {
                if generation != self.generation {
                    debug!(generation, current = self.generation, "Dropping stale computer turn");
                    return;
                }
                self.computer_pending = false;
                let state = std::mem::take(&mut self.state);
                let before = state.history().len();
                let (state, outcome) = self.engine.play_computer_turn(state);
                self.state = state;
                let placed = self.state.history().get(before).copied();
                if let (Some(outcome), Some(pos)) = (outcome, placed) {
                    self.record(pos, outcome);
                } else {
                    self.refresh_status();
                }
            }
        }
    }

    fn record(&mut self, pos: Position, outcome: Outcome) {
        self.last_mark = Some((pos, Instant::now()));
        match outcome {
            Outcome::Won(combo) => info!(%combo, "Game won"),
            Outcome::Draw => info!("Game drawn"),
            Outcome::Continued => {}
        }
        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        self.status_message = match self.state.status() {
            GameStatus::InProgress if self.state.awaiting_computer() => {
                "The computer is thinking...".to_string()
            }
            GameStatus::InProgress => format!("{}'s turn", self.state.current_player()),
            GameStatus::Won(_) => match self.state.winner() {
                Some(mark) if self.state.mode().is_computer(mark) => {
                    "The computer wins! Press 'r' to play again or 'q' to quit.".to_string()
                }
                Some(mark) => format!("{} wins! Press 'r' to play again or 'q' to quit.", mark),
                None => "Game over. Press 'r' to play again or 'q' to quit.".to_string(),
            },
            GameStatus::Draw => "Draw! Press 'r' to play again or 'q' to quit.".to_string(),
        };
    }
}

/// Modes in menu order.
pub fn modes() -> Vec<GameMode> {
    <GameMode as strum::IntoEnumIterator>::iter().collect()
}
