//! Key handling helpers for the board and name fields.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// Longest name the entry field accepts.
pub const MAX_NAME_LEN: usize = 24;

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    match key {
        KeyCode::Up => cursor.step(-1, 0),
        KeyCode::Down => cursor.step(1, 0),
        KeyCode::Left => cursor.step(0, -1),
        KeyCode::Right => cursor.step(0, 1),
        _ => cursor,
    }
}

/// Maps a digit key 1-9 to its cell.
pub fn cell_for_key(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| Position::from_cell_id(d as usize)),
        _ => None,
    }
}

/// Applies an editing key to a name buffer. Returns true if the key was used.
pub fn edit_name(buffer: &mut String, key: KeyCode) -> bool {
    match key {
        KeyCode::Char(c) if !c.is_control() && buffer.chars().count() < MAX_NAME_LEN => {
            buffer.push(c);
            true
        }
        KeyCode::Backspace => {
            buffer.pop();
            true
        }
        _ => false,
    }
}
