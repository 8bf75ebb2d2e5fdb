//! Sudoku game sessions.
//!
//! A [`Game`] wraps a generated puzzle with the state a playing session
//! needs: player input (digits and pencil-mark notes), conflict reporting,
//! hints, error counting, scoring, and snapshots for saving and resuming.

pub mod cell_state;
pub mod error;
pub mod game;
pub mod score;
pub mod snapshot;

pub use self::{
    cell_state::CellState,
    error::GameError,
    game::{Game, Placement},
    score::calculate_score,
    snapshot::GameSnapshot,
};
