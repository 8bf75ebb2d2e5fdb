//! Type-safe cell digits.

use std::fmt::{self, Display};

/// A digit that can occupy a sudoku cell, in the range 1-9.
///
/// Grids represent empty cells as `Option<Digit>::None`, so a `Digit` value
/// is always playable; there is no zero sentinel.
///
/// # Examples
///
/// ```
/// use novem_core::Digit;
///
/// let digit = Digit::from_value(7);
/// assert_eq!(digit, Digit::D7);
/// assert_eq!(digit.value(), 7);
/// assert_eq!(digit.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// All nine digits in ascending order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from its numeric value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use novem_core::Digit;
    ///
    /// assert_eq!(Digit::from_value(1), Digit::D1);
    /// assert_eq!(Digit::from_value(9), Digit::D9);
    /// ```
    ///
    /// ```should_panic
    /// use novem_core::Digit;
    ///
    /// let _ = Digit::from_value(0);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match value {
            1 => Self::D1,
            2 => Self::D2,
            3 => Self::D3,
            4 => Self::D4,
            5 => Self::D5,
            6 => Self::D6,
            7 => Self::D7,
            8 => Self::D8,
            9 => Self::D9,
            _ => panic!("digit value out of range: {value}"),
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_round_trips_through_from_value() {
        for digit in Digit::ALL {
            assert_eq!(Digit::from_value(digit.value()), digit);
        }
    }

    #[test]
    fn all_is_ascending_and_complete() {
        assert_eq!(Digit::ALL.len(), 9);
        for (i, digit) in Digit::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(digit.value()), i + 1);
        }
    }

    #[test]
    fn display_prints_the_value() {
        assert_eq!(Digit::D1.to_string(), "1");
        assert_eq!(Digit::D9.to_string(), "9");
        let as_u8: u8 = Digit::D4.into();
        assert_eq!(as_u8, 4);
    }

    #[test]
    #[should_panic(expected = "digit value out of range: 0")]
    fn from_value_rejects_zero() {
        let _ = Digit::from_value(0);
    }

    #[test]
    #[should_panic(expected = "digit value out of range: 10")]
    fn from_value_rejects_ten() {
        let _ = Digit::from_value(10);
    }
}
