//! The two named players of a hot-seat game.

use super::types::Mark;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Name used for the first player when none is given.
pub const DEFAULT_PLAYER1_NAME: &str = "Player 1";

/// Name used for the second player when none is given.
pub const DEFAULT_PLAYER2_NAME: &str = "Player 2";

/// A named player and the mark they place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Player {
    name: String,
    mark: Mark,
}

impl Player {
    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mark this player places.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

/// Both players of a game. The first player always holds X.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    player1: Player,
    player2: Player,
}

impl Players {
    /// Builds the pair from raw input, substituting default names for blank input.
    #[instrument]
    pub fn from_raw(raw_name1: Option<&str>, raw_name2: Option<&str>) -> Self {
        Self {
            player1: Player::new(normalize_name(raw_name1, DEFAULT_PLAYER1_NAME), Mark::X),
            player2: Player::new(normalize_name(raw_name2, DEFAULT_PLAYER2_NAME), Mark::O),
        }
    }

    /// First player (X).
    pub fn player1(&self) -> &Player {
        &self.player1
    }

    /// Second player (O).
    pub fn player2(&self) -> &Player {
        &self.player2
    }

    /// The player holding `mark`.
    pub fn by_mark(&self, mark: Mark) -> &Player {
        match mark {
            Mark::X => &self.player1,
            Mark::O => &self.player2,
        }
    }
}

impl Default for Players {
    fn default() -> Self {
        Self::from_raw(None, None)
    }
}

/// Trims a raw name, falling back to `default` when nothing is left.
pub fn normalize_name(raw: Option<&str>, default: &str) -> String {
    match raw.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => default.to_string(),
    }
}
