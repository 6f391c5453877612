//! Command-line interface for hotseat_tictactoe.

use clap::{Parser, Subcommand};
use hotseat_tictactoe::Position;
use std::path::PathBuf;

/// Hot-seat tic-tac-toe for two players on one terminal
#[derive(Parser, Debug)]
#[command(name = "hotseat_tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = hotseat_tictactoe::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Name of the first player (X). Skips the name screen when set.
        #[arg(long)]
        player1: Option<String>,

        /// Name of the second player (O). Skips the name screen when set.
        #[arg(long)]
        player2: Option<String>,
    },

    /// Apply a list of moves and print the resulting game
    Replay {
        /// Cells in play order, comma separated: indices (0-8) or labels like "center"
        #[arg(short, long, value_delimiter = ',', value_parser = parse_move)]
        moves: Vec<usize>,

        /// Name of the first player (X)
        #[arg(long)]
        player1: Option<String>,

        /// Name of the second player (O)
        #[arg(long)]
        player2: Option<String>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parses one `--moves` entry into a cell index.
///
/// Labels and indices 0-8 resolve through [`Position::parse`]. Other numbers
/// are passed through so the engine reports them as out of range.
fn parse_move(s: &str) -> Result<usize, String> {
    if let Some(position) = Position::parse(s) {
        return Ok(position.to_index());
    }
    s.trim()
        .parse::<usize>()
        .map_err(|_| format!("'{}' is not a cell index or position label", s))
}
