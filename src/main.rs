//! Hot-seat tic-tac-toe - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use hotseat_tictactoe::{App, AppConfig, replay, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Command::Play { player1, player2 } => run_play(&config, player1, player2),
        Command::Replay {
            moves,
            player1,
            player2,
            json,
        } => run_replay(&config, moves, player1, player2, json),
    }
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging().filter()))
}

/// Run the terminal UI, logging to a file so the screen stays clean.
fn run_play(config: &AppConfig, player1: Option<String>, player2: Option<String>) -> Result<()> {
    let log_path = config.logging().file();
    let log_file = std::fs::File::create(log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    let app = if player1.is_some() || player2.is_some() {
        info!("Names given on the command line, skipping name entry");
        App::with_players(player1.as_deref(), player2.as_deref())
    } else {
        App::new(
            config.players().player1().clone(),
            config.players().player2().clone(),
        )
    };

    run_tui(app)
}

/// Apply moves without a UI and print the outcome.
#[instrument(skip(config, moves, player1, player2))]
fn run_replay(
    config: &AppConfig,
    moves: Vec<usize>,
    player1: Option<String>,
    player2: Option<String>,
    json: bool,
) -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();

    let report = replay(player1.as_deref(), player2.as_deref(), &moves);

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", out);
    } else {
        for rejected in &report.rejected {
            eprintln!(
                "move {} (cell {}) ignored: {}",
                rejected.turn + 1,
                rejected.cell_index,
                rejected.reason
            );
        }
        println!("{}\n\n{}", report.state.board().display(), report.message);
    }

    Ok(())
}
