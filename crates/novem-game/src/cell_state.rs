//! Per-cell state of a game in progress.

use derive_more::IsVariant;
use novem_core::{Digit, DigitSet};

/// State of a single cell from the player's point of view.
///
/// Given cells come from the puzzle and never change. The other variants
/// track player input: a committed digit, pencil-mark notes, or nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum CellState {
    /// Clue cell fixed when the game started.
    Given(Digit),
    /// Digit entered by the player.
    Filled(Digit),
    /// Pencil-mark candidates entered by the player.
    Notes(DigitSet),
    /// No digit and no notes.
    Empty,
}

impl CellState {
    /// Returns the decided digit of a given or filled cell.
    ///
    /// Notes and empty cells have no decided digit.
    #[must_use]
    pub const fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Notes(_) | Self::Empty => None,
        }
    }
}
