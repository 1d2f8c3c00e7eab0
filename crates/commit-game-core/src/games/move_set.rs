//! Validated, ordered set of move names.

use crate::GameError;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Smallest playable move set
pub const MIN_MOVES: usize = 3;

/// Ordered, distinct move names of odd length ≥ 3.
///
/// The order defines the circular dominance positions and never changes
/// after construction. Clones share the same names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSet(Arc<[String]>);

impl MoveSet {
    /// Validate and build a move set
    pub fn new<I, S>(moves: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves: Vec<String> = moves.into_iter().map(Into::into).collect();

        if moves.len() < MIN_MOVES {
            return Err(GameError::TooFewMoves(moves.len()));
        }
        if moves.len() % 2 == 0 {
            return Err(GameError::EvenMoveCount(moves.len()));
        }

        let mut seen = HashSet::with_capacity(moves.len());
        for (position, name) in moves.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(GameError::EmptyMove(position));
            }
            if !seen.insert(name.as_str()) {
                return Err(GameError::DuplicateMove(name.clone()));
            }
        }

        Ok(Self(moves.into()))
    }

    /// The classic three-move game
    pub fn classic() -> Self {
        Self(Arc::from(vec!["rock".to_string(), "paper".to_string(), "scissors".to_string()]))
    }

    /// Number of moves (always odd)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a validated set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of moves each move beats (and loses to)
    pub fn half(&self) -> usize {
        (self.0.len() - 1) / 2
    }

    /// Position of a move, if it belongs to this set
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|m| m == name)
    }

    /// Position of a move, or `InvalidMove`
    pub fn require(&self, name: &str) -> Result<usize, GameError> {
        self.index_of(name)
            .ok_or_else(|| GameError::InvalidMove(name.to_string()))
    }

    /// Is `name` one of the moves?
    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Move name at a position
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Iterate over move names in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for MoveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}
