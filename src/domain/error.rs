//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` / `TryFrom` constructors when a
//! value would violate a domain invariant.
//!
//! # Examples
//!
//! ```
//! use drawsight::domain::{DomainError, DrawResult};
//!
//! let result = DrawResult::try_new("123");
//! assert!(matches!(result, Err(DomainError::InvalidDrawResult { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value outside `0..=9` was offered as a digit.
    #[error("invalid digit: {value:?}")]
    InvalidDigit {
        /// The rejected input.
        value: String,
    },

    /// A draw result must be exactly four ASCII digits.
    #[error("invalid draw result {value:?}: expected exactly 4 digits")]
    InvalidDrawResult {
        /// The rejected input.
        value: String,
    },

    /// Candidate sets never contain the same digit twice.
    #[error("duplicate digit {digit} in candidate set")]
    DuplicateCandidate {
        /// The repeated digit.
        digit: u8,
    },

    /// Candidate set size bounds must satisfy `1 <= min <= max <= 10`.
    #[error("invalid candidate size bounds [{min}, {max}]")]
    InvalidSizeBounds {
        /// Lower bound.
        min: usize,
        /// Upper bound.
        max: usize,
    },

    /// Unknown substitution table name.
    #[error("unknown substitution table: {name}")]
    UnknownTable {
        /// The rejected name.
        name: String,
    },

    /// Unknown result position name.
    #[error("unknown result position: {name}")]
    UnknownPosition {
        /// The rejected name.
        name: String,
    },
}
