//! Round controller: drives rounds over one move set.

use super::round::{Resolution, Round};
use super::{RoundPhase, RoundReveal};
use crate::crypto::Commitment;
use crate::games::{MoveSet, OutcomeTable};
use crate::GameError;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::warn;

/// Runs rounds one after another over a fixed move set.
///
/// Each round gets a fresh key and a freshly drawn computer move; nothing
/// but the move set carries over between rounds.
pub struct RoundController<R = OsRng> {
    moves: MoveSet,
    rng: R,
    round: Option<Round>,
    resolved_rounds: u64,
}

impl RoundController<OsRng> {
    /// Controller backed by the operating system's entropy source
    pub fn new(moves: MoveSet) -> Self {
        Self::with_rng(moves, OsRng)
    }
}

impl<R: RngCore + CryptoRng> RoundController<R> {
    /// Controller backed by the given cryptographic RNG
    pub fn with_rng(moves: MoveSet, rng: R) -> Self {
        Self {
            moves,
            rng,
            round: None,
            resolved_rounds: 0,
        }
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    pub fn phase(&self) -> RoundPhase {
        self.round
            .as_ref()
            .map_or(RoundPhase::AwaitingStart, Round::phase)
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Number of rounds resolved by this controller
    pub fn resolved_rounds(&self) -> u64 {
        self.resolved_rounds
    }

    /// Start a new round and return the commitment to show the player.
    ///
    /// Replaces any previous round. If key generation fails the previous
    /// round is left as it was.
    pub fn begin_round(&mut self) -> Result<&Commitment, GameError> {
        let round = Round::begin(&self.moves, &mut self.rng)?;
        if let Some(previous) = &self.round {
            if previous.phase() == RoundPhase::Committed {
                warn!(round = %previous.id(), "Abandoning unresolved round");
            }
        }
        Ok(self.round.insert(round).commitment())
    }

    /// Commitment of the current round, if one is awaiting a move
    pub fn commitment(&self) -> Option<&Commitment> {
        self.round
            .as_ref()
            .filter(|r| r.phase() == RoundPhase::Committed)
            .map(Round::commitment)
    }

    /// Submit the player's move for the current round.
    ///
    /// `InvalidMove` leaves the round committed; `NoActiveRound` means there is
    /// nothing to submit to.
    pub fn submit(&mut self, player_move: &str) -> Result<&Resolution, GameError> {
        let round = match self.round.as_mut() {
            Some(round) if round.phase() == RoundPhase::Committed => round,
            _ => return Err(GameError::NoActiveRound),
        };
        let resolution = round.resolve(player_move)?;
        self.resolved_rounds += 1;
        Ok(resolution)
    }

    /// Disclosure record of the current round, once resolved
    pub fn reveal(&self) -> Option<RoundReveal> {
        self.round.as_ref().and_then(Round::reveal)
    }

    /// Reference table of every pairing for this move set
    pub fn table(&self) -> OutcomeTable<'_> {
        OutcomeTable::new(&self.moves)
    }
}
