//! Named board positions and their index conversions.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Index 0-8 in row-major order; the UI labels cells 1-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index, `None` outside 0-8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from a 1-based cell id as shown in the UI.
    pub fn from_cell_id(id: usize) -> Option<Self> {
        id.checked_sub(1).and_then(Self::from_index)
    }

    /// 1-based cell id as shown in the UI.
    pub fn cell_id(self) -> usize {
        self.to_index() + 1
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Parse from an index (0-8) or a label.
    ///
    /// Labels match case-insensitively; `"center"` and `"top-left"` both work.
    #[instrument]
    pub fn parse(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return Self::from_index(num);
        }

        let s_lower = s.to_lowercase();
        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().to_lowercase() == s_lower)
    }

    /// Neighbouring position in a direction, clamped at the edges.
    pub fn step(self, d_row: isize, d_col: isize) -> Position {
        let row = (self.row() as isize + d_row).clamp(0, 2) as usize;
        let col = (self.col() as isize + d_col).clamp(0, 2) as usize;
        Self::ALL[row * 3 + col]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
