//! Mark balance invariant: X and O alternate, X first.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: marks on the board are balanced.
///
/// X moves first and players alternate, so X has either as many marks as O
/// or exactly one more. While the game is running the mark to move follows
/// from the counts.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x_count = state.board().count(Mark::X);
        let o_count = state.board().count(Mark::O);

        if x_count != o_count && x_count != o_count + 1 {
            return false;
        }

        if state.is_over() {
            return true;
        }

        let expected = if x_count == o_count { Mark::X } else { Mark::O };
        state.current_mark() == expected
    }

    fn description() -> &'static str {
        "Marks alternate (X first, X count equals O count or exceeds it by one)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameEngine, Position, Square};

    #[test]
    fn test_fresh_game_holds() {
        let (_, state) = GameEngine::start(None, None);
        assert!(MarkBalanceInvariant::holds(&state));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let (_, mut state) = GameEngine::start(None, None);
        for index in [4, 0, 8, 2, 6] {
            state = GameEngine::apply_move(&state, index);
            assert!(MarkBalanceInvariant::holds(&state));
        }
    }

    #[test]
    fn test_extra_o_mark_violates() {
        let (_, mut state) = GameEngine::start(None, None);
        state.board.set(Position::Center, Square::Occupied(Mark::O));
        assert!(!MarkBalanceInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_mark_to_move_violates() {
        let (_, mut state) = GameEngine::start(None, None);
        state = GameEngine::apply_move(&state, 4);
        state.current_mark = Mark::X;
        assert!(!MarkBalanceInvariant::holds(&state));
    }
}
