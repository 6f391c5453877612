//! Move rejection reasons.
//!
//! [`GameEngine::apply_move`](super::GameEngine::apply_move) swallows these
//! and returns the state unchanged; `try_apply_move` hands them back.

use super::Position;

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The index is not a board cell (0-8).
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),
}

impl std::error::Error for MoveError {}
