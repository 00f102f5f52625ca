//! Command-line interface for noughts.

use clap::{Parser, Subcommand, ValueEnum};
use noughts::{GameMode, Position};
use std::path::PathBuf;

/// Noughts and crosses in the terminal, with animated SVG boards.
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Noughts and crosses for one or two players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Skip mode selection for the first game
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// Settings file (defaults are used when it does not exist)
        #[arg(short, long, default_value = "noughts.toml")]
        config: PathBuf,

        /// Seed for the computer's choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Replay moves and write the board as SVG
    Render {
        /// Cells as indices 0-8 or labels like "top-left", comma separated;
        /// moves onto occupied cells are skipped
        #[arg(long, value_delimiter = ',', required = true, value_parser = parse_cell)]
        moves: Vec<Position>,

        /// Mode recorded in the game
        #[arg(short, long, value_enum, default_value = "solo")]
        mode: ModeArg,

        /// Settings file (defaults are used when it does not exist)
        #[arg(short, long, default_value = "noughts.toml")]
        config: PathBuf,

        /// Output file; stdout when absent
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

/// Game mode as spelled on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Two players at one keyboard
    Solo,
    /// Circle against the computer
    Computer,
}

fn parse_cell(s: &str) -> Result<Position, String> {
    Position::from_label_or_number(s)
        .ok_or_else(|| format!("'{}' is not a cell (0-8 or a label)", s))
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Solo => GameMode::Solo,
            ModeArg::Computer => GameMode::VsComputer,
        }
    }
}
