//! Core domain types for tic-tac-toe.

use super::invariants::{GameInvariants, InvariantSet};
use super::position::Position;
use serde::{Deserialize, Serialize};

/// Mark placed on the board by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// Mark X (always moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Number of non-empty squares.
    pub fn filled(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based cell id.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended; the mark that completed a line wins.
    Won(Mark),
    /// Board filled with no completed line.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Complete game state.
///
/// Created fresh by [`GameEngine::start`](super::GameEngine::start) and only
/// advanced by [`GameEngine::apply_move`](super::GameEngine::apply_move).
/// Deserialized states must satisfy [`GameInvariants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedGameState")]
pub struct GameState {
    /// The board.
    pub(super) board: Board,
    /// Mark to move next (or the winning mark once won).
    pub(super) current_mark: Mark,
    /// Game status.
    pub(super) status: GameStatus,
}

impl GameState {
    /// Creates a fresh state: empty board, X to move.
    pub(super) fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose turn it is.
    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Wire form of [`GameState`] before the invariants are checked.
#[derive(Deserialize)]
struct UncheckedGameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
}

impl TryFrom<UncheckedGameState> for GameState {
    type Error = String;

    fn try_from(raw: UncheckedGameState) -> Result<Self, Self::Error> {
        let state = Self {
            board: raw.board,
            current_mark: raw.current_mark,
            status: raw.status,
        };
        GameInvariants::check_all(&state).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            format!("Inconsistent game state: {}", descriptions)
        })?;
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.filled(), 0);
        assert!(Position::ALL.iter().all(|p| board.is_empty(*p)));
    }

    #[test]
    fn test_counts() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Mark::X));
        board.set(Position::TopLeft, Square::Occupied(Mark::O));
        board.set(Position::BottomRight, Square::Occupied(Mark::X));
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.count(Mark::O), 1);
        assert_eq!(board.filled(), 3);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Mark::X));
        board.set(Position::Center, Square::Occupied(Mark::O));
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_state_json_roundtrip() {
        let mut state = GameState::new();
        state = super::super::GameEngine::apply_move(&state, 4);
        state = super::super::GameEngine::apply_move(&state, 0);

        let json = serde_json::to_value(&state).expect("serializable");
        let back: GameState = serde_json::from_value(json).expect("consistent state");
        assert_eq!(back, state);
    }

    #[test]
    fn test_inconsistent_state_is_not_deserialized() {
        let mut json = serde_json::to_value(GameState::new()).expect("serializable");
        // Two O marks with X to move.
        json["board"]["squares"][0] = serde_json::json!({ "Occupied": "O" });
        json["board"]["squares"][1] = serde_json::json!({ "Occupied": "O" });

        let err = serde_json::from_value::<GameState>(json).unwrap_err();
        assert!(err.to_string().starts_with("Inconsistent game state"));
    }

    #[test]
    fn test_false_status_is_not_deserialized() {
        let mut json = serde_json::to_value(GameState::new()).expect("serializable");
        json["status"] = serde_json::json!({ "Won": "X" });
        assert!(serde_json::from_value::<GameState>(json).is_err());
    }
}
