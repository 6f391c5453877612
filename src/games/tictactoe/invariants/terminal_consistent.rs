//! Terminal consistency invariant: status agrees with the board.

use super::super::rules::{check_winner, completes_line, is_full};
use super::super::{GameState, GameStatus};
use super::Invariant;

/// Invariant: the recorded status matches what the board shows.
///
/// - `Won(m)` only when `m` fills a line.
/// - `Draw` only on a full board with no line.
/// - `InProgress` only while no line is filled and cells remain.
pub struct TerminalConsistentInvariant;

impl Invariant<GameState> for TerminalConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match state.status() {
            GameStatus::Won(mark) => completes_line(board, mark),
            GameStatus::Draw => is_full(board) && check_winner(board).is_none(),
            GameStatus::InProgress => !is_full(board) && check_winner(board).is_none(),
        }
    }

    fn description() -> &'static str {
        "Game status agrees with the board (win lines and fullness)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameEngine, Mark};

    #[test]
    fn test_holds_through_a_won_game() {
        let (_, mut state) = GameEngine::start(None, None);
        for index in [0, 3, 1, 4, 2] {
            state = GameEngine::apply_move(&state, index);
            assert!(TerminalConsistentInvariant::holds(&state));
        }
        assert_eq!(state.status(), GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_false_win_violates() {
        let (_, mut state) = GameEngine::start(None, None);
        state.status = GameStatus::Won(Mark::O);
        assert!(!TerminalConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_premature_draw_violates() {
        let (_, mut state) = GameEngine::start(None, None);
        state = GameEngine::apply_move(&state, 4);
        state.status = GameStatus::Draw;
        assert!(!TerminalConsistentInvariant::holds(&state));
    }
}
