//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                 ┌─────────────────────────┐
//!                 │        Analyzer         │
//!                 │   (selector, combos)    │
//!                 └────────────┬────────────┘
//!                              │ ResultSource
//!                 ┌────────────┴────────────┐
//!                 │  Paged / Single sources │
//!                 └────────────┬────────────┘
//!                              │ PageFetcher
//!                        ┌─────┴─────┐
//!                        │   HTTP    │
//!                        └───────────┘
//! ```

mod source;

pub use source::{FetchOutcome, PageFetcher, ResultSource};
