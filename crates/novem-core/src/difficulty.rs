//! Difficulty levels and their tuning constants.

use std::{fmt, ops::RangeInclusive, str::FromStr};

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Puzzle difficulty.
///
/// Difficulty decides how many clues the generator leaves on the board and
/// parameterizes scoring: each level carries a clue-count range, a base
/// score, and a time limit for the completion bonus.
///
/// # Examples
///
/// ```
/// use novem_core::Difficulty;
///
/// let difficulty: Difficulty = "medium".parse()?;
/// assert_eq!(difficulty, Difficulty::Medium);
/// assert_eq!(difficulty.clue_range(), 30..=35);
/// assert_eq!(difficulty.base_score(), 250);
/// # Ok::<(), novem_core::ParseDifficultyError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// 40-45 clues.
    Easy,
    /// 30-35 clues.
    Medium,
    /// 22-28 clues.
    Hard,
}

impl Difficulty {
    /// All difficulty levels in ascending order.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the inclusive range of clues a generated puzzle of this
    /// difficulty aims to keep on the board.
    #[must_use]
    pub const fn clue_range(self) -> RangeInclusive<u8> {
        match self {
            Self::Easy => 40..=45,
            Self::Medium => 30..=35,
            Self::Hard => 22..=28,
        }
    }

    /// Returns the base score for completing a puzzle of this difficulty.
    #[must_use]
    pub const fn base_score(self) -> u32 {
        match self {
            Self::Easy => 100,
            Self::Medium => 250,
            Self::Hard => 500,
        }
    }

    /// Returns the time limit in seconds against which the completion time
    /// bonus decays.
    #[must_use]
    pub const fn time_limit_secs(self) -> u32 {
        match self {
            Self::Easy => 600,
            Self::Medium => 1200,
            Self::Hard => 2400,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error produced when parsing a [`Difficulty`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unknown difficulty {_0:?}, expected easy, medium, or hard")]
pub struct ParseDifficultyError(#[error(not(source))] String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clue_ranges_match_levels() {
        assert_eq!(Difficulty::Easy.clue_range(), 40..=45);
        assert_eq!(Difficulty::Medium.clue_range(), 30..=35);
        assert_eq!(Difficulty::Hard.clue_range(), 22..=28);
    }

    #[test]
    fn scoring_constants_match_levels() {
        assert_eq!(Difficulty::Easy.base_score(), 100);
        assert_eq!(Difficulty::Medium.base_score(), 250);
        assert_eq!(Difficulty::Hard.base_score(), 500);
        assert_eq!(Difficulty::Easy.time_limit_secs(), 600);
        assert_eq!(Difficulty::Medium.time_limit_secs(), 1200);
        assert_eq!(Difficulty::Hard.time_limit_secs(), 2400);
    }

    #[test]
    fn display_and_parse_round_trip() {
        for difficulty in Difficulty::ALL {
            let parsed: Difficulty = difficulty.to_string().parse().expect("valid name");
            assert_eq!(parsed, difficulty);
        }
        assert!("extreme".parse::<Difficulty>().is_err());
        assert!("Easy".parse::<Difficulty>().is_err());
    }
}
