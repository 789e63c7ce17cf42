//! The digit alphabet `0..=9`.

use std::fmt;

use serde::{Serialize, Serializer};

use super::error::DomainError;

/// A single decimal digit.
///
/// Construction is checked, so every `Digit` in the system is guaranteed
/// to be in `0..=9`. Ordering follows the numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// All ten digits in ascending order.
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    /// Numeric value of the digit.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Index usable for `[_; 10]` lookup tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// ASCII character for the digit.
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// Absolute difference between two digits, itself a digit.
    #[must_use]
    pub const fn abs_diff(self, other: Digit) -> Digit {
        Digit(self.0.abs_diff(other.0))
    }
}

impl TryFrom<u8> for Digit {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidDigit { value: value.to_string() })
        }
    }
}

impl TryFrom<char> for Digit {
    type Error = DomainError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        value
            .to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or_else(|| DomainError::InvalidDigit { value: value.to_string() })
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Digit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

/// Render a digit sequence as a contiguous string, e.g. `"04718"`.
pub fn join_digits<'a>(digits: impl IntoIterator<Item = &'a Digit>) -> String {
    digits.into_iter().map(|d| d.as_char()).collect()
}
