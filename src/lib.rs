//! Hot-seat tic-tac-toe library.
//!
//! Two players share one terminal. The engine is a set of pure operations
//! over an explicit [`GameState`]; the terminal UI is a thin adapter on top.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] starts games, applies moves, builds messages
//! - **Session**: [`Game`] holds the players and current state for a UI
//! - **TUI**: ratatui/crossterm presentation layer ([`run_tui`])
//! - **Replay**: apply a move list without a UI ([`replay()`])
//!
//! # Example
//!
//! ```
//! use hotseat_tictactoe::{GameEngine, GameStatus, Mark};
//!
//! let (players, mut state) = GameEngine::start(Some("Alice"), Some("  "));
//! for index in [0, 3, 1, 4, 2] {
//!     state = GameEngine::apply_move(&state, index);
//! }
//! assert_eq!(state.status(), GameStatus::Won(Mark::X));
//! assert_eq!(
//!     GameEngine::result_message(&state, &players).as_deref(),
//!     Some("Alice congratulations you won!")
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod games;
mod replay;
mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE, LoggingConfig, PlayersConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, DEFAULT_PLAYER1_NAME, DEFAULT_PLAYER2_NAME, Game, GameEngine, GameState, GameStatus,
    Mark, MoveError, Player, Players, Position, Square,
};

// Crate-level exports - Replay
pub use replay::{RejectedMove, ReplayReport, replay};

// Crate-level exports - Terminal UI
pub use tui::{App, NameField, Screen, run_tui};
