//! A single commit-reveal round.

use crate::crypto::{Commitment, SecretKey};
use crate::games::{compare_indices, MoveSet};
use crate::protocol::{GameResult, RoundId, RoundPhase};
use crate::GameError;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// One round: the computer's hidden move, its key, and the commitment shown
/// to the player, plus the player's move once accepted.
///
/// The round keeps the move set it was started over and resolves against
/// that set only. The computer's move and key are only readable after
/// [`Round::resolve`] succeeds, and `Debug` hides them until then.
#[derive(Clone)]
pub struct Round {
    id: RoundId,
    moves: MoveSet,
    computer_index: usize,
    computer_move: String,
    key: SecretKey,
    commitment: Commitment,
    resolution: Option<Resolution>,
}

/// The player's accepted move and the result
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub player_move: String,
    pub result: GameResult,
}

/// Uniform index in `0..n` from fallible RNG output.
///
/// Rejection sampling over `u64`: values at or above the largest multiple of
/// `n` are redrawn, so every index is equally likely.
fn draw_index<R: RngCore + ?Sized>(rng: &mut R, n: usize) -> Result<usize, GameError> {
    let n = n as u64;
    let zone = u64::MAX - u64::MAX % n;
    loop {
        let mut buf = [0u8; 8];
        rng.try_fill_bytes(&mut buf)
            .map_err(|e| GameError::EntropyUnavailable(e.to_string()))?;
        let value = u64::from_le_bytes(buf);
        if value < zone {
            return Ok((value % n) as usize);
        }
    }
}

impl Round {
    /// Start a round: draw a fresh key and the computer's move, then commit.
    ///
    /// Both draws go through `try_fill_bytes`, so an entropy failure at
    /// either step returns `EntropyUnavailable` and no round exists.
    pub fn begin<R: RngCore + CryptoRng>(moves: &MoveSet, rng: &mut R) -> Result<Self, GameError> {
        let key = SecretKey::generate(rng)?;
        let computer_index = draw_index(rng, moves.len())?;
        let computer_move = moves.as_slice()[computer_index].clone();
        let commitment = Commitment::new(&key, &computer_move);
        let id = RoundId::new();

        info!(round = %id, %commitment, "Round committed");

        Ok(Self {
            id,
            moves: moves.clone(),
            computer_index,
            computer_move,
            key,
            commitment,
            resolution: None,
        })
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    /// Move set this round was started over
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Commitment shown to the player before they choose
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    pub fn phase(&self) -> RoundPhase {
        if self.resolution.is_some() {
            RoundPhase::Resolved
        } else {
            RoundPhase::Committed
        }
    }

    /// Accept the player's move and decide the round.
    ///
    /// An unknown move returns `InvalidMove` and leaves the round committed
    /// with the same commitment. A round resolves at most once.
    pub fn resolve(&mut self, player_move: &str) -> Result<&Resolution, GameError> {
        if self.resolution.is_some() {
            return Err(GameError::NoActiveRound);
        }
        let player_index = match self.moves.require(player_move) {
            Ok(index) => index,
            Err(err) => {
                debug!(round = %self.id, player_move, "Rejected move");
                return Err(err);
            }
        };

        let outcome = compare_indices(self.moves.len(), player_index, self.computer_index);
        let result = GameResult::from_player_outcome(outcome);

        info!(
            round = %self.id,
            player_move,
            computer_move = %self.computer_move,
            %result,
            "Round resolved"
        );

        Ok(&*self.resolution.insert(Resolution {
            player_move: player_move.to_string(),
            result,
        }))
    }

    pub fn resolution(&self) -> Option<&Resolution> {
        self.resolution.as_ref()
    }

    /// Computer's move, once the round is resolved
    pub fn computer_move(&self) -> Option<&str> {
        self.resolution.as_ref().map(|_| self.computer_move.as_str())
    }

    /// Secret key, once the round is resolved
    pub fn key(&self) -> Option<&SecretKey> {
        self.resolution.as_ref().map(|_| &self.key)
    }

    /// Everything needed to check the commitment, once the round is resolved
    pub fn reveal(&self) -> Option<RoundReveal> {
        let resolution = self.resolution.as_ref()?;
        Some(RoundReveal {
            round_id: self.id,
            commitment: self.commitment,
            player_move: resolution.player_move.clone(),
            computer_move: self.computer_move.clone(),
            result: resolution.result,
            key: self.key.clone(),
        })
    }
}

impl fmt::Debug for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Round");
        s.field("id", &self.id)
            .field("moves", &self.moves.len())
            .field("commitment", &self.commitment);
        match &self.resolution {
            Some(resolution) => s
                .field("computer_move", &self.computer_move)
                .field("resolution", resolution),
            None => s.field("computer_move", &format_args!("<hidden>")),
        };
        s.finish()
    }
}

/// Disclosure record of a resolved round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReveal {
    pub round_id: RoundId,
    pub commitment: Commitment,
    pub player_move: String,
    pub computer_move: String,
    pub result: GameResult,
    pub key: SecretKey,
}

impl RoundReveal {
    /// Does the disclosed key and move reproduce the commitment?
    pub fn verify(&self) -> bool {
        self.commitment.verify(&self.key, &self.computer_move)
    }
}
