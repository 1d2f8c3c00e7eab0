//! Circular half-dominance between moves.
//!
//! Each move beats the `half = (n - 1) / 2` moves that precede it in cyclic
//! order and loses to the `half` moves that follow it. With `n` odd the split
//! is exact: in `[rock, paper, scissors]` paper beats rock, scissors beats
//! paper, and rock wraps around to beat scissors.

use super::MoveSet;
use crate::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one move against another, from the first move's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// The same pairing seen from the other side
    pub fn reverse(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compare two positions in a set of `n` moves
pub fn compare_indices(n: usize, i: usize, j: usize) -> Outcome {
    debug_assert!(n % 2 == 1 && i < n && j < n);
    if i == j {
        return Outcome::Draw;
    }
    let half = (n - 1) / 2;
    // distance from j forward to i, minus one, in [0, n - 2]
    let gap = (i + n - j - 1) % n;
    if gap < half {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}

/// Decide `a` against `b`.
///
/// Fails with `InvalidMove` when either name is not in the set.
pub fn compare(moves: &MoveSet, a: &str, b: &str) -> Result<Outcome, GameError> {
    let i = moves.require(a)?;
    let j = moves.require(b)?;
    Ok(compare_indices(moves.len(), i, j))
}

impl MoveSet {
    /// Decide `a` against `b`; see [`compare`]
    pub fn compare(&self, a: &str, b: &str) -> Result<Outcome, GameError> {
        compare(self, a, b)
    }

    /// Moves that `name` beats, nearest first
    pub fn beats(&self, name: &str) -> Result<Vec<&str>, GameError> {
        let i = self.require(name)?;
        let n = self.len();
        Ok((1..=self.half())
            .filter_map(|step| self.get((i + n - step) % n))
            .collect())
    }

    /// Moves that beat `name`, nearest first
    pub fn beaten_by(&self, name: &str) -> Result<Vec<&str>, GameError> {
        let i = self.require(name)?;
        let n = self.len();
        Ok((1..=self.half())
            .filter_map(|step| self.get((i + step) % n))
            .collect())
    }
}
