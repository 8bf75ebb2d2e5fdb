//! The 9×9 grid.

use std::{fmt, ops::Index, str::FromStr};

use derive_more::{Display, Error};
use tinyvec::ArrayVec;

use crate::{digit::Digit, digit_set::DigitSet, position::Position};

/// Positions in conflict with a cell; a cell has at most its 20 house peers.
pub type ConflictList = ArrayVec<[Position; 20]>;

/// A 9×9 sudoku grid of optionally filled cells.
///
/// `Board` is `Copy`, so assignment yields an independent grid: snapshot a
/// board with `let copy = board;` before handing it to an in-place routine,
/// and mutations of either side never show through on the other.
///
/// Boards parse from and display as 81-character strings in row-major order,
/// with `1`-`9` for digits and `.` for empty cells.
///
/// # Examples
///
/// ```
/// use novem_core::{Board, Digit, Position};
///
/// let mut board = Board::new();
/// let pos = Position::new(4, 4);
/// board.set(pos, Some(Digit::D5));
/// assert_eq!(board[pos], Some(Digit::D5));
/// assert_eq!(board.filled_count(), 1);
///
/// let copy = board;
/// board.set(pos, None);
/// assert_eq!(copy[pos], Some(Digit::D5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Digit>; 81],
}

impl Board {
    /// Creates a board with every cell empty.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the digit at `pos`, or `None` if the cell is empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets or clears the cell at `pos`.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Returns true if every cell is filled.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the first empty position in row-major order.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self.get(pos).is_none())
    }

    /// Returns true if placing `digit` at `pos` would not duplicate a digit
    /// already present in the same row, column, or box.
    ///
    /// The cell's own current value is ignored, so a digit never conflicts
    /// with itself. Whether the target cell is empty is not checked;
    /// overwriting is the caller's decision.
    #[must_use]
    pub fn is_placement_valid(&self, pos: Position, digit: Digit) -> bool {
        pos.house_peers()
            .into_iter()
            .all(|peer| self.get(peer) != Some(digit))
    }

    /// Returns every other position in the same row, column, or box holding
    /// the same digit as the cell at `pos`.
    ///
    /// An empty cell has no conflicts by definition.
    #[must_use]
    pub fn conflicts(&self, pos: Position) -> ConflictList {
        let mut conflicts = ConflictList::new();
        let Some(digit) = self.get(pos) else {
            return conflicts;
        };
        for peer in pos.house_peers() {
            if self.get(peer) == Some(digit) {
                conflicts.push(peer);
            }
        }
        conflicts
    }

    /// Returns true if the board is completely filled and every row, column,
    /// and box contains each digit exactly once.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        (0..9).all(|i| {
            self.house_is_complete(|j| Position::new(j, i))
                && self.house_is_complete(|j| Position::new(i, j))
                && self.house_is_complete(|j| Position::from_box(i, j))
        })
    }

    fn house_is_complete(&self, cell: impl Fn(u8) -> Position) -> bool {
        let mut seen = DigitSet::EMPTY;
        for j in 0..9 {
            match self.get(cell(j)) {
                Some(digit) => seen.insert(digit),
                None => return false,
            }
        }
        seen == DigitSet::FULL
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for Board {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

/// Error produced when parsing a [`Board`] from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// The input does not contain exactly 81 cell characters.
    #[display("board string must contain 81 cells, found {_0}")]
    BadLength(#[error(not(source))] usize),
    /// The input contains a character other than `1`-`9` or `.`.
    #[display("invalid cell character: {_0:?}")]
    BadCell(#[error(not(source))] char),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 81];
        let mut len = 0;
        for c in s.chars() {
            let cell = match c {
                '.' => None,
                '1'..='9' => {
                    let index = (u32::from(c) - u32::from('1')) as usize;
                    Some(Digit::ALL[index])
                }
                _ => return Err(ParseBoardError::BadCell(c)),
            };
            if len == 81 {
                return Err(ParseBoardError::BadLength(s.chars().count()));
            }
            cells[len] = cell;
            len += 1;
        }
        if len != 81 {
            return Err(ParseBoardError::BadLength(len));
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}
