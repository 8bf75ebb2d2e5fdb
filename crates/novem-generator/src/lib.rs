//! Sudoku puzzle generation.
//!
//! A [`PuzzleGenerator`] produces boards with exactly one solution for a
//! requested difficulty. Every puzzle is reproducible from its
//! [`PuzzleSeed`], which can be drawn at random, parsed from hex, or derived
//! from a phrase.

pub use self::{generator::*, seed::*};

mod generator;
mod seed;
