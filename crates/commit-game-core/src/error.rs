//! Error type shared by every layer of the game.

use thiserror::Error;

/// Errors from move-set construction, round transitions, and key material
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("At least 3 moves are required, got {0}")]
    TooFewMoves(usize),

    #[error("The number of moves must be odd, got {0}")]
    EvenMoveCount(usize),

    #[error("Duplicate move: {0}")]
    DuplicateMove(String),

    #[error("Move names must not be empty (position {0})")]
    EmptyMove(usize),

    #[error("Invalid move: {0}")]
    InvalidMove(String),

    #[error("No round is awaiting a move")]
    NoActiveRound,

    #[error("Secure random source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    #[error("Expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

impl GameError {
    /// Is this a problem with the move list itself, detected before any round?
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GameError::TooFewMoves(_)
                | GameError::EvenMoveCount(_)
                | GameError::DuplicateMove(_)
                | GameError::EmptyMove(_)
        )
    }

    /// Fatal errors must stop the game; everything else can be re-prompted.
    pub fn is_fatal(&self) -> bool {
        self.is_configuration() || matches!(self, GameError::EntropyUnavailable(_))
    }
}

impl From<hex::FromHexError> for GameError {
    fn from(err: hex::FromHexError) -> Self {
        GameError::InvalidHex(err.to_string())
    }
}
