//! Drawsight - candidate digits and combinations from published draw results.
//!
//! Fetches four-digit draw results from public result pages, normalizes
//! them into a newest-first history and derives heuristic candidate digit
//! sets and digit combinations from it. The heuristics are deterministic
//! transformations of whatever history was fetched; they carry no
//! predictive claim.
//!
//! # Architecture
//!
//! - [`domain`] - Digits, draw results, substitution tables, the candidate
//!   selector and combination generator. Pure, no I/O.
//! - [`port`] - Trait seams: [`port::ResultSource`] and [`port::PageFetcher`].
//! - [`adapter`] - HTTP fetching, HTML table scanning and the paged /
//!   single-page result sources.
//! - [`app`] - Configuration, the [`app::Analyzer`] pipeline and the
//!   [`app::AnalysisReport`] payload.
//! - [`cli`] - Command definitions and handlers.
//! - [`error`] - Error types for the crate.
//!
//! # Features
//!
//! - `testkit` - Canned fetchers and page builders for integration tests.
//!
//! # Example
//!
//! ```
//! use drawsight::domain::{CandidateSelector, ResultHistory, SelectorConfig};
//!
//! let history = ResultHistory::from_raw(["4719", "12a34", "123", "5678"]);
//! let selector = CandidateSelector::new(SelectorConfig::default()).unwrap();
//! let selection = selector.select(&history);
//!
//! assert_eq!(history.len(), 3);
//! assert!((5..=6).contains(&selection.candidates.len()));
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
