//! Move sets and the rules that decide between moves.

mod dominance;
mod move_set;
mod table;

pub use dominance::{compare, compare_indices, Outcome};
pub use move_set::{MoveSet, MIN_MOVES};
pub use table::OutcomeTable;
