//! Non-interactive play: apply a list of cell indices and report the result.

use crate::games::tictactoe::{GameEngine, GameState, Players};
use serde::Serialize;
use tracing::{instrument, warn};

/// A move that the engine left as a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedMove {
    /// Position in the input list (0-based).
    pub turn: usize,
    /// Cell index that was requested.
    pub cell_index: usize,
    /// Why it was ignored.
    pub reason: String,
}

/// Outcome of a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Players as normalized by `start`.
    pub players: Players,
    /// Final state.
    pub state: GameState,
    /// Moves that did not change the state.
    pub rejected: Vec<RejectedMove>,
    /// Status line a UI would show.
    pub message: String,
}

/// Starts a game and feeds it `moves` in order.
///
/// Invalid moves are skipped exactly as `apply_move` skips them; they are
/// collected in [`ReplayReport::rejected`].
#[instrument(skip(moves), fields(move_count = moves.len()))]
pub fn replay(raw_name1: Option<&str>, raw_name2: Option<&str>, moves: &[usize]) -> ReplayReport {
    let (players, mut state) = GameEngine::start(raw_name1, raw_name2);
    let mut rejected = Vec::new();

    for (turn, &cell_index) in moves.iter().enumerate() {
        match GameEngine::try_apply_move(&state, cell_index) {
            Ok(next) => state = next,
            Err(error) => {
                warn!(turn, cell_index, %error, "Move ignored");
                rejected.push(RejectedMove {
                    turn,
                    cell_index,
                    reason: error.to_string(),
                });
            }
        }
    }

    let message = GameEngine::status_message(&state, &players);
    ReplayReport {
        players,
        state,
        rejected,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameStatus, Mark};

    #[test]
    fn test_replay_collects_rejections() {
        let report = replay(Some("Alice"), None, &[4, 4, 12, 0]);
        assert_eq!(report.state.board().filled(), 2);
        assert_eq!(report.rejected.len(), 2);
        assert_eq!(report.rejected[0].turn, 1);
        assert_eq!(report.rejected[1].cell_index, 12);
        assert_eq!(report.message, "Alice, you're up");
    }

    #[test]
    fn test_replay_stops_changing_after_win() {
        let report = replay(None, None, &[0, 3, 1, 4, 2, 5]);
        assert_eq!(report.state.status(), GameStatus::Won(Mark::X));
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].reason, "Game is already over");
        assert_eq!(report.message, "Player 1 congratulations you won!");
    }

    #[test]
    fn test_report_serializes() {
        let report = replay(None, None, &[4]);
        let json = serde_json::to_value(&report).expect("serializable");
        assert_eq!(json["state"]["current_mark"], "O");
        assert_eq!(json["state"]["status"], "InProgress");
        assert_eq!(json["players"]["player1"]["name"], "Player 1");
    }
}
