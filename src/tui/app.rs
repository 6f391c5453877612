//! Application state and key handling for the terminal UI.

use crate::games::tictactoe::{Game, Position};
use crossterm::event::KeyCode;
use tracing::{debug, info, instrument};

use super::input::{cell_for_key, edit_name, move_cursor};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Collecting player names.
    NameEntry,
    /// Playing on the board.
    Board,
}

/// Focused name field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    /// First player (X).
    Player1,
    /// Second player (O).
    Player2,
}

impl NameField {
    fn toggle(self) -> Self {
        match self {
            NameField::Player1 => NameField::Player2,
            NameField::Player2 => NameField::Player1,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    player1_input: String,
    player2_input: String,
    focus: NameField,
    game: Game,
    cursor: Position,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates an application on the name-entry screen with prefilled names.
    pub fn new(player1_input: String, player2_input: String) -> Self {
        Self {
            screen: Screen::NameEntry,
            player1_input,
            player2_input,
            focus: NameField::Player1,
            game: Game::default(),
            cursor: Position::Center,
            notice: None,
            should_quit: false,
        }
    }

    /// Creates an application that skips name entry.
    pub fn with_players(player1: Option<&str>, player2: Option<&str>) -> Self {
        let mut app = Self::new(
            player1.unwrap_or_default().to_string(),
            player2.unwrap_or_default().to_string(),
        );
        app.start_game();
        app
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Text in the first name field.
    pub fn player1_input(&self) -> &str {
        &self.player1_input
    }

    /// Text in the second name field.
    pub fn player2_input(&self) -> &str {
        &self.player2_input
    }

    /// Focused name field.
    pub fn focus(&self) -> NameField {
        self.focus
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Feedback for the last rejected key, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(screen = ?self.screen))]
    pub fn handle_key(&mut self, key: KeyCode) {
        self.notice = None;
        match self.screen {
            Screen::NameEntry => self.handle_name_key(key),
            Screen::Board => self.handle_board_key(key),
        }
    }

    fn handle_name_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.toggle();
            }
            KeyCode::Enter => self.start_game(),
            other => {
                let buffer = match self.focus {
                    NameField::Player1 => &mut self.player1_input,
                    NameField::Player2 => &mut self.player2_input,
                };
                edit_name(buffer, other);
            }
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                self.game.restart();
                self.cursor = Position::Center;
            }
            KeyCode::Char('n') => {
                debug!("Back to name entry");
                self.screen = Screen::NameEntry;
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            other => {
                if let Some(pos) = cell_for_key(other) {
                    self.cursor = pos;
                    self.activate(pos);
                }
            }
        }
    }

    fn start_game(&mut self) {
        self.game = Game::new(Some(self.player1_input.as_str()), Some(self.player2_input.as_str()));
        self.cursor = Position::Center;
        self.screen = Screen::Board;
    }

    /// Forwards a cell activation to the engine unless the game is over.
    fn activate(&mut self, pos: Position) {
        if self.game.is_over() {
            debug!(%pos, "Game over, activation ignored");
            return;
        }
        if let Err(e) = self.game.play(pos.to_index()) {
            self.notice = Some(e.to_string());
        }
    }
}
