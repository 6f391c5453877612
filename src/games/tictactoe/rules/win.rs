//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position, Square};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks whether `mark` fills any winning line.
#[instrument(skip(board))]
pub fn completes_line(board: &Board, mark: Mark) -> bool {
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == Square::Occupied(mark)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first line found filled by one mark,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in WIN_LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.mark();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(mark: Mark, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.set(*pos, Square::Occupied(mark));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert!(!completes_line(&board, Mark::X));
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(
            Mark::X,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        assert_eq!(check_winner(&board), Some(Mark::X));
        assert!(completes_line(&board, Mark::X));
        assert!(!completes_line(&board, Mark::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(
            Mark::O,
            &[Position::TopLeft, Position::Center, Position::BottomRight],
        );
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_every_line_wins() {
        for line in WIN_LINES {
            let board = board_with(Mark::O, &line);
            assert_eq!(check_winner(&board), Some(Mark::O), "line {:?}", line);
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Mark::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Mark::X, &[Position::TopLeft, Position::TopCenter]);
        board.set(Position::TopRight, Square::Occupied(Mark::O));
        assert_eq!(check_winner(&board), None);
    }
}
