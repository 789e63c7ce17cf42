//! Candidate digit sets.
//!
//! A [`CandidateSet`] is an ordered, duplicate-free run of digits whose
//! length stays inside a [`SizeBounds`] interval. Order is significant:
//! earlier digits carry the stronger signal.

use serde::Serialize;

use super::digit::{join_digits, Digit};
use super::error::DomainError;
use super::transform::SubstitutionTable;

/// Closed interval `[min, max]` for candidate set sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeBounds {
    min: usize,
    max: usize,
}

impl SizeBounds {
    /// Create bounds, validating `1 <= min <= max <= 10`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidSizeBounds`] when the interval is empty
    /// or cannot be satisfied by the ten-digit alphabet.
    pub fn try_new(min: usize, max: usize) -> Result<Self, DomainError> {
        if min == 0 || min > max || max > Digit::ALL.len() {
            return Err(DomainError::InvalidSizeBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> usize {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> usize {
        self.max
    }
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self { min: 5, max: 6 }
    }
}

/// Whether a selection had any history behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionBasis {
    /// Seeds were derived from fetched history.
    Statistical,
    /// No history was available; the set is padding only.
    NoData,
}

/// Ordered, duplicate-free candidate digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateSet {
    digits: Vec<Digit>,
}

impl CandidateSet {
    /// Build a set from already-ranked digits.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DuplicateCandidate`] if a digit repeats.
    pub fn try_new(digits: Vec<Digit>) -> Result<Self, DomainError> {
        let mut seen = [false; 10];
        for d in &digits {
            if std::mem::replace(&mut seen[d.index()], true) {
                return Err(DomainError::DuplicateCandidate { digit: d.value() });
            }
        }
        Ok(Self { digits })
    }

    /// Merge seed groups in precedence order, pad and truncate to `bounds`.
    ///
    /// Seeds are deduplicated keeping the first occurrence. When fewer than
    /// `bounds.min()` digits survive, the ascending digits `0..=9` not yet
    /// present are appended until the floor is reached.
    pub fn from_seeds<'a, I>(groups: I, bounds: SizeBounds) -> Self
    where
        I: IntoIterator<Item = &'a [Digit]>,
    {
        let mut builder = Builder::default();
        for group in groups {
            builder.extend(group.iter().copied());
        }
        builder.pad_ascending(bounds.min());
        builder.digits.truncate(bounds.max());
        Self { digits: builder.digits }
    }

    /// Derive an alternative set by mapping every digit through `primary`.
    ///
    /// If deduplication leaves fewer than `size` digits, `fallback` images
    /// of the original digits are appended, then ascending padding. The
    /// result is truncated to `size`.
    #[must_use]
    pub fn shadow(
        &self,
        primary: SubstitutionTable,
        fallback: SubstitutionTable,
        size: usize,
    ) -> Self {
        let mut builder = Builder::default();
        builder.extend(self.digits.iter().map(|d| primary.apply(*d)));
        if builder.digits.len() < size {
            for d in &self.digits {
                if builder.digits.len() >= size {
                    break;
                }
                builder.extend(std::iter::once(fallback.apply(*d)));
            }
        }
        builder.pad_ascending(size);
        builder.digits.truncate(size);
        Self { digits: builder.digits }
    }

    /// Digits in rank order.
    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// The strongest digit, used as the head hint.
    #[must_use]
    pub fn head(&self) -> Option<Digit> {
        self.digits.first().copied()
    }

    /// The second strongest digit, used as the tail hint.
    #[must_use]
    pub fn tail(&self) -> Option<Digit> {
        self.digits.get(1).copied()
    }

    /// Whether `digit` is in the set.
    #[must_use]
    pub fn contains(&self, digit: Digit) -> bool {
        self.digits.contains(&digit)
    }

    /// Number of digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Check if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

impl std::fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&join_digits(&self.digits))
    }
}

#[derive(Default)]
struct Builder {
    digits: Vec<Digit>,
    seen: [bool; 10],
}

impl Builder {
    fn extend(&mut self, digits: impl IntoIterator<Item = Digit>) {
        for d in digits {
            if !std::mem::replace(&mut self.seen[d.index()], true) {
                self.digits.push(d);
            }
        }
    }

    fn pad_ascending(&mut self, floor: usize) {
        for d in Digit::ALL {
            if self.digits.len() >= floor {
                break;
            }
            self.extend(std::iter::once(d));
        }
    }
}
