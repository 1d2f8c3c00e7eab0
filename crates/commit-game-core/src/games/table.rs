//! Win/lose/draw reference table over every ordered pair of moves.

use super::{compare_indices, MoveSet, Outcome};
use std::fmt;

const CORNER: &str = "v PC \\ User >";

/// Outcome for every (player move, computer move) pair, read from the
/// player's side.
#[derive(Clone, Debug)]
pub struct OutcomeTable<'a> {
    moves: &'a MoveSet,
    cells: Vec<Vec<Outcome>>,
}

impl<'a> OutcomeTable<'a> {
    pub fn new(moves: &'a MoveSet) -> Self {
        let n = moves.len();
        // cells[computer][player]
        let cells = (0..n)
            .map(|computer| {
                (0..n)
                    .map(|player| compare_indices(n, player, computer))
                    .collect()
            })
            .collect();
        Self { moves, cells }
    }

    /// Player's outcome when playing `player` against `computer`
    pub fn outcome(&self, player: &str, computer: &str) -> Option<Outcome> {
        let p = self.moves.index_of(player)?;
        let c = self.moves.index_of(computer)?;
        Some(self.cells[c][p])
    }

    pub fn moves(&self) -> &MoveSet {
        self.moves
    }
}

impl fmt::Display for OutcomeTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self
            .moves
            .iter()
            .map(str::len)
            .chain(std::iter::once(CORNER.len()))
            .max()
            .unwrap_or(0);
        let widths: Vec<usize> = self
            .moves
            .iter()
            .map(|m| m.len().max(Outcome::Lose.as_str().len()))
            .collect();

        let rule = {
            let mut line = format!("+{}+", "-".repeat(label_width + 2));
            for w in &widths {
                line.push_str(&"-".repeat(w + 2));
                line.push('+');
            }
            line
        };

        writeln!(f, "{}", rule)?;
        write!(f, "| {:<label_width$} |", CORNER)?;
        for (name, w) in self.moves.iter().zip(&widths) {
            write!(f, " {:<w$} |", name, w = *w)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", rule)?;

        for (row, computer) in self.cells.iter().zip(self.moves.iter()) {
            write!(f, "| {:<label_width$} |", computer)?;
            for (cell, w) in row.iter().zip(&widths) {
                write!(f, " {:<w$} |", cell.as_str(), w = *w)?;
            }
            writeln!(f)?;
            writeln!(f, "{}", rule)?;
        }
        Ok(())
    }
}
