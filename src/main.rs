//! Noughts - unified CLI
//!
//! Plays the game in the terminal or renders a replayed board as SVG.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::{GameEngine, GameMode, GameState, Position, Settings, board_svg};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { mode, config, seed } => play(mode.map(GameMode::from), config, seed).await,
        Command::Render {
            moves,
            mode,
            config,
            out,
        } => render(&moves, mode.into(), &config, out.as_deref()),
    }
}

/// Run the terminal UI
async fn play(mode: Option<GameMode>, config: PathBuf, seed: Option<u64>) -> Result<()> {
    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create("noughts.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    let settings = Settings::load_or_default(&config)?;
    noughts::run_tui(settings, mode, seed).await
}

/// Replay `moves` and write the board
#[instrument(skip(moves, config, out), fields(moves = moves.len()))]
fn render(moves: &[Position], mode: GameMode, config: &Path, out: Option<&Path>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::load_or_default(config)?;
    let engine = GameEngine::new();
    let state = moves
        .iter()
        .fold(GameState::new(mode), |state, m| engine.apply_move(state, m.to_index()).0);
    info!(status = ?state.status(), "Replayed moves");

    let svg = board_svg(&state, &settings);
    match out {
        Some(path) => std::fs::write(path, svg)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => std::io::stdout().write_all(svg.as_bytes())?,
    }
    Ok(())
}
