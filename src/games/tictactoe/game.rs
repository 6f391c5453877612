//! A running hot-seat game: both players plus the current state.

use super::action::MoveError;
use super::{GameEngine, GameState, Players};
use tracing::{debug, instrument};

/// The single mutable record a presentation layer holds.
///
/// Each operation replaces the owned [`GameState`] with what the engine
/// returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    players: Players,
    state: GameState,
}

impl Game {
    /// Starts a game from raw name input.
    #[instrument]
    pub fn new(raw_name1: Option<&str>, raw_name2: Option<&str>) -> Self {
        let (players, state) = GameEngine::start(raw_name1, raw_name2);
        Self { players, state }
    }

    /// Starts over with the same players.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        let (players, state) = GameEngine::start(
            Some(self.players.player1().name()),
            Some(self.players.player2().name()),
        );
        self.players = players;
        self.state = state;
    }

    /// Plays the current mark at `cell_index` (0-8).
    ///
    /// On error the state is left as it was.
    #[instrument(skip(self))]
    pub fn play(&mut self, cell_index: usize) -> Result<&GameState, MoveError> {
        let next = GameEngine::try_apply_move(&self.state, cell_index)?;
        debug!(status = ?next.status(), "Move accepted");
        self.state = next;
        Ok(&self.state)
    }

    /// Current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The two players.
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// True once won or drawn.
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Result announcement if over, otherwise whose turn it is.
    pub fn status_message(&self) -> String {
        GameEngine::status_message(&self.state, &self.players)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameStatus, Mark};

    #[test]
    fn test_play_and_restart() {
        let mut game = Game::new(Some("Alice"), Some("Bob"));
        for index in [0, 3, 1, 4, 2] {
            game.play(index).expect("legal move");
        }
        assert!(game.is_over());
        assert_eq!(game.status_message(), "Alice congratulations you won!");

        game.restart();
        assert!(!game.is_over());
        assert_eq!(game.state().board().filled(), 0);
        assert_eq!(game.state().current_mark(), Mark::X);
        assert_eq!(game.players().player2().name(), "Bob");
    }

    #[test]
    fn test_rejected_move_keeps_state() {
        let mut game = Game::default();
        game.play(4).expect("legal move");
        let before = game.state().clone();

        assert_eq!(
            game.play(4),
            Err(MoveError::CellOccupied(super::super::Position::Center))
        );
        assert_eq!(game.play(11), Err(MoveError::OutOfRange(11)));
        assert_eq!(game.state(), &before);
        assert_eq!(game.state().status(), GameStatus::InProgress);
    }
}
