//! Protocol types.

use crate::games::Outcome;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique round identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(Uuid);

impl RoundId {
    /// Create a new random round ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RoundId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for RoundId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Debug for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundId({})", self.0)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Round result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    PlayerWins,
    ComputerWins,
    Draw,
}

impl GameResult {
    /// Result of a round given the player's outcome against the computer
    pub fn from_player_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Win => GameResult::PlayerWins,
            Outcome::Lose => GameResult::ComputerWins,
            Outcome::Draw => GameResult::Draw,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameResult::PlayerWins => "Player wins",
            GameResult::ComputerWins => "Computer wins",
            GameResult::Draw => "Draw",
        }
    }
}

impl From<Outcome> for GameResult {
    fn from(outcome: Outcome) -> Self {
        Self::from_player_outcome(outcome)
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a controller is in the round lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    AwaitingStart,
    Committed,
    Resolved,
}
