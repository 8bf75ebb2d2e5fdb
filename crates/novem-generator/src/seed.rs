//! Seeds for reproducible puzzle generation.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::{RngCore, SeedableRng as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// Seed that fully determines a generated puzzle.
///
/// A seed wraps 32 bytes of RNG state. It renders as 64 lowercase hex
/// characters and parses back from the same format, so puzzles can be
/// logged, shared, and replayed exactly.
///
/// # Examples
///
/// ```
/// use novem_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1".parse()?;
/// assert_eq!(
///     seed.to_string(),
///     "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
/// );
/// # Ok::<(), novem_generator::ParseSeedError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Number of bytes in a seed.
    pub const LEN: usize = 32;

    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from `rng`.
    #[must_use]
    pub fn random<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0; Self::LEN];
        rng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Derives a seed from an arbitrary phrase.
    ///
    /// The phrase is hashed with SHA-256, so any string maps to a valid
    /// seed and the same phrase always reproduces the same puzzle.
    ///
    /// # Examples
    ///
    /// ```
    /// use novem_generator::PuzzleSeed;
    ///
    /// let seed = PuzzleSeed::from_phrase("daily 2024-03-01");
    /// assert_eq!(seed, PuzzleSeed::from_phrase("daily 2024-03-01"));
    /// ```
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase).into())
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    pub(crate) fn rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error produced when parsing a [`PuzzleSeed`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The string is not exactly 64 characters long.
    #[display("seed must be 64 hex characters, got {_0}")]
    BadLength(#[error(not(source))] usize),
    /// The string contains a character that is not a hex digit.
    #[display("invalid hex digit {_0:?} in seed")]
    BadHexDigit(#[error(not(source))] char),
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != Self::LEN * 2 {
            return Err(ParseSeedError::BadLength(len));
        }

        let mut bytes = [0; Self::LEN];
        for (i, c) in s.chars().enumerate() {
            let value = c.to_digit(16).ok_or(ParseSeedError::BadHexDigit(c))?;
            #[expect(clippy::cast_possible_truncation)]
            let value = value as u8;
            bytes[i / 2] = (bytes[i / 2] << 4) | value;
        }
        Ok(Self(bytes))
    }
}
