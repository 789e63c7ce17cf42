//! Paged result history source.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::collect_rows;
use crate::adapter::table::body_rows;
use crate::domain::{ResultHistory, SourceDescriptor, PAGE_PLACEHOLDER};
use crate::error::SourceError;
use crate::port::{FetchOutcome, PageFetcher, ResultSource};

/// Reads a history table spread over pages `1..=max_pages`.
///
/// Paging stops early once `max_rows` results are gathered, when a page
/// has no table or yields no new results, or when a request fails. A failed
/// request keeps the rows already gathered. Only a missing table on the
/// first page counts as a failure.
pub struct PagedTableSource {
    url_template: String,
    max_pages: usize,
    descriptor: SourceDescriptor,
    fetcher: Arc<dyn PageFetcher>,
}

impl PagedTableSource {
    /// Create a paged source.
    pub fn new(
        url_template: String,
        max_pages: usize,
        descriptor: SourceDescriptor,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Self {
        Self {
            url_template,
            max_pages,
            descriptor,
            fetcher,
        }
    }

    fn page_url(&self, page: usize) -> String {
        self.url_template.replace(PAGE_PLACEHOLDER, &page.to_string())
    }
}

#[async_trait]
impl ResultSource for PagedTableSource {
    async fn fetch(&self) -> FetchOutcome {
        let mut history = ResultHistory::new();

        for page in 1..=self.max_pages {
            let url = self.page_url(page);
            let html = match self.fetcher.get(&url).await {
                Ok(html) => html,
                Err(error) => {
                    warn!(page, error = %error, gathered = history.len(), "Page fetch failed");
                    return FetchOutcome::Failed { history, error };
                }
            };

            let Some(rows) = body_rows(&html) else {
                if page == 1 {
                    return FetchOutcome::Failed {
                        history,
                        error: SourceError::MissingTable { url },
                    };
                }
                debug!(page, "No table, end of history");
                break;
            };

            let added = collect_rows(&rows, &self.descriptor, &mut history);
            debug!(page, rows = rows.len(), added, "Parsed page");

            if added == 0 || history.len() >= self.descriptor.max_rows {
                break;
            }
        }

        FetchOutcome::Fetched(history)
    }

    fn layout_name(&self) -> &'static str {
        "paged"
    }
}
