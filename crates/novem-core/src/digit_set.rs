//! Sets of digits backed by a bitmask.

use std::iter::FusedIterator;

use crate::digit::Digit;

/// A set of [`Digit`]s stored as a 9-bit mask.
///
/// Bit `n` of the mask holds digit `n + 1`; the remaining bits of the backing
/// `u16` are always zero. Used for pencil marks and for house bookkeeping,
/// where membership tests and counts dominate.
///
/// # Examples
///
/// ```
/// use novem_core::{Digit, DigitSet};
///
/// let mut set = DigitSet::EMPTY;
/// set.insert(Digit::D2);
/// set.insert(Digit::D8);
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Digit::D2));
/// assert!(!set.contains(Digit::D5));
///
/// let digits: Vec<_> = set.into_iter().collect();
/// assert_eq!(digits, vec![Digit::D2, Digit::D8]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The set containing no digits.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing every digit 1-9.
    pub const FULL: Self = Self { bits: 0x1ff };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn mask(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Adds a digit to the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.bits |= Self::mask(digit);
    }

    /// Removes a digit from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.bits &= !Self::mask(digit);
    }

    /// Inserts the digit if absent, removes it if present.
    ///
    /// Returns true if the digit is in the set afterwards.
    pub const fn toggle(&mut self, digit: Digit) -> bool {
        self.bits ^= Self::mask(digit);
        self.contains(digit)
    }

    /// Returns true if the set contains the digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::mask(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the raw 9-bit mask.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.bits
    }

    /// Reconstructs a set from a raw mask.
    ///
    /// Returns `None` if any bit outside the low nine is set, so masks from
    /// untrusted sources (saved games, the wire) round-trip safely.
    #[must_use]
    pub const fn try_from_bits(bits: u16) -> Option<Self> {
        if bits & !Self::FULL.bits == 0 {
            Some(Self { bits })
        } else {
            None
        }
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.bits.trailing_zeros() as u8 + 1;
        self.bits &= self.bits - 1;
        Some(Digit::from_value(value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}
