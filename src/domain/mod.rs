//! Source-agnostic domain logic.
//!
//! Everything in here is a pure function of its inputs: no I/O, no clocks,
//! no global state. Randomness enters only through the `Rng` handed to
//! [`combination::sample`].

mod availability;
mod candidate;
mod digit;
mod draw;
mod error;
mod market;
mod transform;

pub mod combination;
pub mod hint;
pub mod selector;

pub use availability::{Availability, Unavailable};
pub use candidate::{CandidateSet, SelectionBasis, SizeBounds};
pub use digit::{join_digits, Digit};
pub use draw::{normalize_cell, DrawRecord, DrawResult, Position, ResultHistory, RESULT_LEN};
pub use error::DomainError;
pub use market::{
    default_markets, Market, MarketRegistry, SourceDescriptor, SourceLayout, PAGE_PLACEHOLDER,
};
pub use selector::{CandidateSelector, Selection, SelectorConfig, Signals, TransformSeed};
pub use transform::{transform, SubstitutionTable};
