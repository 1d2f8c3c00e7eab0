//! Game configuration

use commit_game_core::{GameError, MoveSet};

/// How resolved rounds are printed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// Prose lines for a person at the terminal
    Text,
    /// One JSON reveal record per resolved round
    Json,
}

/// Validated settings for an interactive session
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub moves: MoveSet,
    /// Stop after this many resolved rounds
    pub rounds: Option<u64>,
    pub output: OutputMode,
}

impl GameConfig {
    /// Build from raw command-line values; the move list is validated here
    /// and nowhere else.
    pub fn from_args(moves: Vec<String>, rounds: Option<u64>, json: bool) -> Result<Self, GameError> {
        Ok(Self {
            moves: MoveSet::new(moves)?,
            rounds,
            output: if json {
                OutputMode::Json
            } else {
                OutputMode::Text
            },
        })
    }
}
