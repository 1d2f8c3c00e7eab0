//! Commit Game Core Library
//!
//! A generalized rock-paper-scissors over any odd number of moves, played
//! fairly against the computer: the computer's move is committed with
//! HMAC-SHA256 under a fresh key before the player chooses, and the key is
//! disclosed afterwards so the commitment can be checked.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{commit, verify, Commitment, SecretKey};
pub use error::GameError;
pub use games::{compare, MoveSet, Outcome, OutcomeTable};
pub use protocol::{GameResult, Round, RoundController, RoundId, RoundPhase, RoundReveal};
