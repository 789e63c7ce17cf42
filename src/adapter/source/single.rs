//! Single-page result table source.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::collect_rows;
use crate::adapter::table::body_rows;
use crate::domain::{ResultHistory, SourceDescriptor};
use crate::error::SourceError;
use crate::port::{FetchOutcome, PageFetcher, ResultSource};

/// Reads the whole history from one page.
///
/// Some sites publish several markets side by side; the descriptor's
/// `column` selects which one this source reads.
pub struct SingleTableSource {
    url: String,
    descriptor: SourceDescriptor,
    fetcher: Arc<dyn PageFetcher>,
}

impl SingleTableSource {
    /// Create a single-page source.
    pub fn new(url: String, descriptor: SourceDescriptor, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            url,
            descriptor,
            fetcher,
        }
    }
}

#[async_trait]
impl ResultSource for SingleTableSource {
    async fn fetch(&self) -> FetchOutcome {
        let mut history = ResultHistory::new();

        let html = match self.fetcher.get(&self.url).await {
            Ok(html) => html,
            Err(error) => {
                warn!(error = %error, "Page fetch failed");
                return FetchOutcome::Failed { history, error };
            }
        };

        let Some(rows) = body_rows(&html) else {
            return FetchOutcome::Failed {
                history,
                error: SourceError::MissingTable { url: self.url.clone() },
            };
        };

        let added = collect_rows(&rows, &self.descriptor, &mut history);
        debug!(rows = rows.len(), added, column = self.descriptor.column, "Parsed page");

        FetchOutcome::Fetched(history)
    }

    fn layout_name(&self) -> &'static str {
        "single"
    }
}
