//! Backtracking search over sudoku boards.
//!
//! The [`backtrack`] module fills boards, produces solved copies, and counts
//! solutions up to a caller-supplied limit. Search order is randomized
//! through an injected RNG, so callers control reproducibility.

pub mod backtrack;
