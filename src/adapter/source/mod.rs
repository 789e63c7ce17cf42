//! Result source implementations, one per site layout.
//!
//! - [`PagedTableSource`] - history split across numbered pages
//! - [`SingleTableSource`] - whole history on one page
//!
//! [`SourceFactory`] picks the implementation from a market's
//! [`SourceLayout`].

mod paged;
mod single;

use std::sync::Arc;

pub use paged::PagedTableSource;
pub use single::SingleTableSource;

use crate::domain::{normalize_cell, DrawRecord, Market, ResultHistory, SourceDescriptor, SourceLayout};
use crate::port::{PageFetcher, ResultSource};

/// Builds the [`ResultSource`] for a market.
pub struct SourceFactory;

impl SourceFactory {
    /// Create the source matching the market's layout.
    pub fn create(market: &Market, fetcher: Arc<dyn PageFetcher>) -> Box<dyn ResultSource> {
        match &market.source.layout {
            SourceLayout::Paged { url, max_pages } => Box::new(PagedTableSource::new(
                url.clone(),
                *max_pages,
                market.source.clone(),
                fetcher,
            )),
            SourceLayout::Single { url } => Box::new(SingleTableSource::new(
                url.clone(),
                market.source.clone(),
                fetcher,
            )),
        }
    }
}

/// Append normalized results from table rows until `descriptor.max_rows`.
///
/// Returns how many records were appended. Rows with too few cells and
/// cells that do not normalize to four digits are skipped.
fn collect_rows(
    rows: &[Vec<String>],
    descriptor: &SourceDescriptor,
    history: &mut ResultHistory,
) -> usize {
    let required = descriptor.required_cells();
    let before = history.len();

    for cells in rows.iter().filter(|cells| cells.len() >= required) {
        if history.len() >= descriptor.max_rows {
            break;
        }
        let Some(result) = normalize_cell(&cells[descriptor.column]) else {
            continue;
        };
        let label = descriptor
            .label_column
            .and_then(|i| cells.get(i))
            .filter(|label| !label.is_empty())
            .cloned();
        history.push(DrawRecord::new(result, label));
    }

    history.len() - before
}
