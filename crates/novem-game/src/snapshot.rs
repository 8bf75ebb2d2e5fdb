//! Serializable save state for games in progress.

use std::time::Duration;

use novem_core::Difficulty;
use serde::{Deserialize, Serialize};

/// Save state of a game, suitable for persistence.
///
/// Boards are stored in the 81-character text form of
/// [`Board`](novem_core::Board), and notes as one 9-bit mask per cell in
/// row-major order. A snapshot is plain data; it is validated only when a
/// game is resumed from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Difficulty of the puzzle.
    pub difficulty: Difficulty,
    /// Complete solution board.
    pub solution: String,
    /// Given (clue) cells.
    pub givens: String,
    /// Player-filled digits.
    pub filled: String,
    /// Pencil-mark bits per cell, indexed as `notes[y][x]`.
    pub notes: [[u16; 9]; 9],
    /// Play time in whole seconds.
    pub elapsed_secs: u64,
    /// Hints revealed so far.
    pub hints_used: u32,
    /// Conflicting placements made so far.
    pub errors: u32,
}

impl GameSnapshot {
    /// Returns the recorded play time.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        Duration::from_secs(self.elapsed_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLUTION: &str =
        "123456789456789123789123456231564897564897231897231564312645978645978312978312645";

    fn sample_snapshot() -> GameSnapshot {
        let mut notes = [[0; 9]; 9];
        notes[4][7] = 0b1_0000_0100;
        GameSnapshot {
            difficulty: Difficulty::Medium,
            solution: SOLUTION.to_owned(),
            givens: format!("12345678{}", ".".repeat(73)),
            filled: format!("{}9{}", ".".repeat(8), ".".repeat(72)),
            notes,
            elapsed_secs: 642,
            hints_used: 1,
            errors: 3,
        }
    }

    #[test]
    fn test_snapshots_round_trip_through_json() {
        let snapshot = sample_snapshot();
        let json = serde_json::to_string(&snapshot).expect("snapshot serializes");
        let restored: GameSnapshot = serde_json::from_str(&json).expect("snapshot deserializes");
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_difficulty_serializes_as_lowercase_name() {
        let json = serde_json::to_string(&sample_snapshot()).expect("snapshot serializes");
        assert!(json.contains(r#""difficulty":"medium""#));
    }

    #[test]
    fn test_elapsed_converts_whole_seconds() {
        assert_eq!(sample_snapshot().elapsed(), Duration::from_secs(642));
    }
}
