//! Game operation errors.

use derive_more::{Display, Error};
use novem_core::ParseBoardError;

/// Errors returned by game operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Attempted to change a clue cell.
    #[display("cannot modify a given cell")]
    CannotModifyGivenCell,
    /// Attempted to toggle a note on a cell holding a digit.
    #[display("cannot add a note to a filled cell")]
    CannotAddNoteToFilledCell,
    /// A snapshot holds note bits outside the 9-digit mask.
    #[display("invalid note bits: {_0:#x}")]
    InvalidNotes(#[error(not(source))] u16),
    /// A snapshot board failed to parse.
    #[display("invalid board in snapshot: {_0}")]
    InvalidBoard(ParseBoardError),
    /// A snapshot's parts disagree with each other.
    #[display("corrupt snapshot: {_0}")]
    CorruptSnapshot(#[error(not(source))] &'static str),
}
