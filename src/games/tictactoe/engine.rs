//! Game engine for hot-seat tic-tac-toe.
//!
//! The engine is a set of pure operations over an explicit [`GameState`]
//! value. Nothing here touches the terminal; the presentation layer calls
//! in with raw input and renders what comes back.

use super::action::MoveError;
use super::invariants::{GameInvariants, InvariantSet};
use super::players::Players;
use super::rules::{completes_line, is_full};
use super::{GameState, GameStatus, Position, Square};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// State machine: `InProgress` is initial; `Won(X)`, `Won(O)` and `Draw` are
/// terminal. Only [`apply_move`](Self::apply_move) advances a state and only
/// [`start`](Self::start) produces a fresh one.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameEngine;

impl GameEngine {
    /// Starts a game.
    ///
    /// Blank or missing names become "Player 1" / "Player 2". The board is
    /// empty and X moves first.
    #[instrument]
    pub fn start(raw_name1: Option<&str>, raw_name2: Option<&str>) -> (Players, GameState) {
        let players = Players::from_raw(raw_name1, raw_name2);
        info!(
            player1 = players.player1().name(),
            player2 = players.player2().name(),
            "Game started"
        );
        (players, GameState::new())
    }

    /// Applies a move for the mark whose turn it is.
    ///
    /// Moves after the game ended, onto an occupied cell, or outside 0-8
    /// leave the state unchanged.
    #[instrument(skip(state), fields(current_mark = %state.current_mark()))]
    pub fn apply_move(state: &GameState, cell_index: usize) -> GameState {
        match Self::try_apply_move(state, cell_index) {
            Ok(next) => next,
            Err(error) => {
                debug!(%error, "Move ignored");
                state.clone()
            }
        }
    }

    /// Applies a move, reporting why it was rejected.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game is won or drawn.
    /// - [`MoveError::OutOfRange`] if `cell_index` is not 0-8.
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(state), fields(current_mark = %state.current_mark()))]
    pub fn try_apply_move(state: &GameState, cell_index: usize) -> Result<GameState, MoveError> {
        if state.is_over() {
            return Err(MoveError::GameOver);
        }

        let position = Position::from_index(cell_index).ok_or(MoveError::OutOfRange(cell_index))?;

        if !state.board().is_empty(position) {
            return Err(MoveError::CellOccupied(position));
        }

        let mark = state.current_mark();
        let mut next = state.clone();
        next.board.set(position, Square::Occupied(mark));
        debug!(%position, %mark, "Mark placed");

        // Only the mover can have completed a line.
        if completes_line(&next.board, mark) {
            next.status = GameStatus::Won(mark);
            info!(%mark, "Game won");
        } else if is_full(&next.board) {
            next.status = GameStatus::Draw;
            info!("Game drawn");
        } else {
            next.current_mark = mark.opponent();
        }

        verify_invariants(&next);
        Ok(next)
    }

    /// "<name>, you're up" for the player whose mark is to move.
    pub fn current_turn_message(state: &GameState, players: &Players) -> String {
        format!("{}, you're up", players.by_mark(state.current_mark()).name())
    }

    /// Result announcement once the game is over, `None` while it runs.
    pub fn result_message(state: &GameState, players: &Players) -> Option<String> {
        match state.status() {
            GameStatus::Won(mark) => Some(format!(
                "{} congratulations you won!",
                players.by_mark(mark).name()
            )),
            GameStatus::Draw => Some("It's a draw!".to_string()),
            GameStatus::InProgress => None,
        }
    }

    /// The message a presentation layer shows: result if over, else whose turn.
    pub fn status_message(state: &GameState, players: &Players) -> String {
        Self::result_message(state, players)
            .unwrap_or_else(|| Self::current_turn_message(state, players))
    }
}

fn verify_invariants(state: &GameState) {
    if let Err(violations) = GameInvariants::check_all(state) {
        for violation in &violations {
            warn!(%violation, "Invariant violated after move");
        }
        debug_assert!(violations.is_empty(), "Invariants violated: {:?}", violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;

    fn play(indices: &[usize]) -> (Players, GameState) {
        let (players, mut state) = GameEngine::start(Some("Alice"), Some("Bob"));
        for &index in indices {
            state = GameEngine::apply_move(&state, index);
        }
        (players, state)
    }

    #[test]
    fn test_start_is_fresh() {
        let (_, state) = GameEngine::start(None, None);
        assert_eq!(state.board().filled(), 0);
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_move_flips_turn() {
        let (_, state) = play(&[4]);
        assert_eq!(state.board().get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(state.current_mark(), Mark::O);
    }

    #[test]
    fn test_try_apply_move_errors() {
        let (_, state) = play(&[4]);
        assert_eq!(
            GameEngine::try_apply_move(&state, 4),
            Err(MoveError::CellOccupied(Position::Center))
        );
        assert_eq!(
            GameEngine::try_apply_move(&state, 9),
            Err(MoveError::OutOfRange(9))
        );

        let (_, won) = play(&[0, 3, 1, 4, 2]);
        assert_eq!(GameEngine::try_apply_move(&won, 8), Err(MoveError::GameOver));
    }

    #[test]
    fn test_winner_keeps_current_mark() {
        let (_, state) = play(&[0, 3, 1, 4, 2]);
        assert_eq!(state.status(), GameStatus::Won(Mark::X));
        assert_eq!(state.current_mark(), Mark::X);
    }

    #[test]
    fn test_o_can_win() {
        let (players, state) = play(&[0, 2, 1, 4, 8, 6]);
        assert_eq!(state.status(), GameStatus::Won(Mark::O));
        assert_eq!(
            GameEngine::result_message(&state, &players).as_deref(),
            Some("Bob congratulations you won!")
        );
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        // X fills 0-4-8 with the ninth mark.
        let (_, state) = play(&[0, 1, 2, 3, 5, 6, 4, 7, 8]);
        assert_eq!(state.board().filled(), 9);
        assert_eq!(state.status(), GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_messages() {
        let (players, state) = play(&[]);
        assert_eq!(
            GameEngine::current_turn_message(&state, &players),
            "Alice, you're up"
        );
        assert_eq!(GameEngine::result_message(&state, &players), None);

        let (players, state) = play(&[4]);
        assert_eq!(GameEngine::status_message(&state, &players), "Bob, you're up");

        let (players, state) = play(&[0, 2, 1, 3, 5, 4, 6, 7, 8]);
        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(GameEngine::status_message(&state, &players), "It's a draw!");
    }
}
