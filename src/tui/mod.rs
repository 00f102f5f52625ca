//! Terminal UI for noughts and crosses.

mod app;
mod input;
mod orchestrator;
mod ui;

pub use app::{App, AppAction, Screen};
pub use orchestrator::{GameEvent, schedule_computer_turn};

use crate::games::tictactoe::{GameEngine, GameMode, RandomSelector};
use crate::settings::Settings;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

/// Runs the game in the terminal until the player quits.
///
/// With `mode` set the mode selection screen is skipped for the first game.
/// `seed` makes the computer's choices reproducible.
pub async fn run_tui(settings: Settings, mode: Option<GameMode>, seed: Option<u64>) -> Result<()> {
    info!(?mode, ?seed, "Starting terminal UI");

    let selector = match seed {
        Some(seed) => RandomSelector::seeded(seed),
        None => RandomSelector::new(),
    };
    let mut app = App::new(GameEngine::with_selector(selector), settings);
    if let Some(mode) = mode {
        app.start(mode);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<RandomSelector>,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    loop {
        terminal.draw(|f| ui::draw(f, app, Instant::now()))?;

        while let Ok(game_event) = event_rx.try_recv() {
            app.handle_event(game_event);
        }

        if !event::poll(Duration::from_millis(50))? {
            tokio::task::yield_now().await;
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.handle_key(key.code) {
            AppAction::None => {}
            AppAction::Quit => {
                info!("User quit");
                return Ok(());
            }
            AppAction::ScheduleComputer { delay, generation } => {
                schedule_computer_turn(event_tx.clone(), delay, generation);
            }
        }
    }
}
