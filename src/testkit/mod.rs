//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`fetcher`] - [`StaticFetcher`], a [`PageFetcher`](crate::port::PageFetcher)
//!   serving canned documents.
//! - [`html`] - Builders for result table pages.
//! - [`domain`] - Builders for histories and candidate sets.

pub mod domain;
pub mod fetcher;
pub mod html;

pub use fetcher::StaticFetcher;
