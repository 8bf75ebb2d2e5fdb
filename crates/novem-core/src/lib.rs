//! Core data structures for the Novem sudoku engine.
//!
//! This crate provides the fundamental types for representing and
//! manipulating 9x9 sudoku boards. These structures are shared by the
//! solving, generation, and game management crates.
//!
//! # Overview
//!
//! The crate is organized around three main concepts:
//!
//! 1. **Cell values and coordinates**
//!    - [`digit`]: Type-safe representation of sudoku digits 1-9
//!    - [`position`]: Board position (x, y) coordinate type with house
//!      (row, column, box) arithmetic
//!
//! 2. **Board state**
//!    - [`board`]: The 81-cell [`Board`] with placement validation,
//!      conflict queries, and a text format for fixtures and persistence
//!    - [`digit_set`]: Compact set of digits backed by a 9-bit mask,
//!      used for completeness checks and pencil-mark notes
//!
//! 3. **Puzzle parameters**
//!    - [`difficulty`]: Difficulty levels with their clue ranges and
//!      scoring constants
//!
//! # Examples
//!
//! ```
//! use novem_core::{Board, Digit, Position};
//!
//! let mut board = Board::new();
//!
//! // Place a digit
//! board.set(Position::new(4, 4), Some(Digit::D5));
//!
//! // The same digit is no longer a valid placement in that column
//! assert!(!board.is_placement_valid(Position::new(4, 5), Digit::D5));
//! ```

pub mod board;
pub mod difficulty;
pub mod digit;
pub mod digit_set;
pub mod position;

// Re-export commonly used types
pub use self::{
    board::{Board, ConflictList, ParseBoardError},
    difficulty::{Difficulty, ParseDifficultyError},
    digit::Digit,
    digit_set::DigitSet,
    position::Position,
};
