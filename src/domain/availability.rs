//! Explicit "not enough input" outcomes.

use serde::Serialize;

/// Why a derived value could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Unavailable {
    /// The candidate set is smaller than the combination arity requires.
    TooFewCandidates { have: usize, need: usize },
    /// The history is shorter than the derivation requires.
    InsufficientHistory { have: usize, need: usize },
}

impl std::fmt::Display for Unavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewCandidates { have, need } => {
                write!(f, "needs {need} candidates, have {have}")
            }
            Self::InsufficientHistory { have, need } => {
                write!(f, "needs {need} draws, have {have}")
            }
        }
    }
}

/// A value that is either present or explicitly unavailable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability<T> {
    Available(T),
    Unavailable(Unavailable),
}

impl<T> Availability<T> {
    /// The value, if available.
    pub fn available(&self) -> Option<&T> {
        match self {
            Self::Available(v) => Some(v),
            Self::Unavailable(_) => None,
        }
    }

    /// Check if the value is unavailable.
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }

    /// Map the available value.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Availability<U> {
        match self {
            Self::Available(v) => Availability::Available(f(v)),
            Self::Unavailable(reason) => Availability::Unavailable(reason),
        }
    }
}
