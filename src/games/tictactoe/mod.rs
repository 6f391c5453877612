//! Hot-seat tic-tac-toe: engine, rules and domain types.

mod action;
mod engine;
mod game;
pub mod invariants;
mod players;
mod position;
pub mod rules;
mod types;

pub use action::MoveError;
pub use engine::GameEngine;
pub use game::Game;
pub use players::{DEFAULT_PLAYER1_NAME, DEFAULT_PLAYER2_NAME, Player, Players, normalize_name};
pub use position::Position;
pub use types::{Board, GameState, GameStatus, Mark, Square};
