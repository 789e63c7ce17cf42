//! Digit substitution tables.
//!
//! Each table is a fixed bijection over the digit alphabet. The four
//! traditional tables (`index`, `mistik_lama`, `mistik_baru`, `taysen`) pair
//! digits off and are therefore involutions. `ascend` and `descend` rotate
//! the alphabet by one step in opposite directions; each undoes the other.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::digit::Digit;
use super::error::DomainError;

const INDEX: [u8; 10] = [5, 6, 7, 8, 9, 0, 1, 2, 3, 4];
const MISTIK_LAMA: [u8; 10] = [1, 0, 5, 8, 7, 2, 9, 4, 3, 6];
const MISTIK_BARU: [u8; 10] = [8, 7, 6, 9, 5, 4, 2, 1, 0, 3];
const TAYSEN: [u8; 10] = [7, 4, 9, 6, 1, 8, 3, 0, 5, 2];
const ASCEND: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 0];
const DESCEND: [u8; 10] = [9, 0, 1, 2, 3, 4, 5, 6, 7, 8];

/// A named substitution table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstitutionTable {
    /// `d -> d + 5 (mod 10)`.
    Index,
    /// Old mystic pairs: 0-1, 2-5, 3-8, 4-7, 6-9.
    MistikLama,
    /// New mystic pairs: 0-8, 1-7, 2-6, 3-9, 4-5.
    MistikBaru,
    /// Taysen pairs: 0-7, 1-4, 2-9, 3-6, 5-8.
    Taysen,
    /// `d -> d + 1 (mod 10)`.
    Ascend,
    /// `d -> d - 1 (mod 10)`.
    Descend,
}

impl SubstitutionTable {
    /// Every table, in declaration order.
    pub const ALL: [SubstitutionTable; 6] = [
        Self::Index,
        Self::MistikLama,
        Self::MistikBaru,
        Self::Taysen,
        Self::Ascend,
        Self::Descend,
    ];

    const fn entries(self) -> &'static [u8; 10] {
        match self {
            Self::Index => &INDEX,
            Self::MistikLama => &MISTIK_LAMA,
            Self::MistikBaru => &MISTIK_BARU,
            Self::Taysen => &TAYSEN,
            Self::Ascend => &ASCEND,
            Self::Descend => &DESCEND,
        }
    }

    /// Map one digit through the table.
    #[must_use]
    pub fn apply(self, digit: Digit) -> Digit {
        Digit::ALL[self.entries()[digit.index()] as usize]
    }

    /// The table that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Ascend => Self::Descend,
            Self::Descend => Self::Ascend,
            other => other,
        }
    }

    /// Whether applying the table twice is the identity.
    #[must_use]
    pub const fn is_involution(self) -> bool {
        !matches!(self, Self::Ascend | Self::Descend)
    }

    /// Config / display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::MistikLama => "mistik_lama",
            Self::MistikBaru => "mistik_baru",
            Self::Taysen => "taysen",
            Self::Ascend => "ascend",
            Self::Descend => "descend",
        }
    }
}

/// Map `digit` through `table`.
#[must_use]
pub fn transform(table: SubstitutionTable, digit: Digit) -> Digit {
    table.apply(digit)
}

impl fmt::Display for SubstitutionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SubstitutionTable {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| DomainError::UnknownTable { name: s.to_string() })
    }
}
