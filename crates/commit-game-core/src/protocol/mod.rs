//! Round lifecycle and the records it produces.

mod controller;
mod round;
mod types;

pub use controller::RoundController;
pub use round::{Resolution, Round, RoundReveal};
pub use types::{GameResult, RoundId, RoundPhase};
