//! In-memory page fetcher.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::SourceError;
use crate::port::PageFetcher;

/// Serves canned responses by exact URL and records every request.
///
/// URLs without a canned response fail with [`SourceError::Network`].
#[derive(Default)]
pub struct StaticFetcher {
    responses: HashMap<String, Result<String, SourceError>>,
    requests: Mutex<Vec<String>>,
}

impl StaticFetcher {
    /// Create a fetcher with no canned responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`.
    #[must_use]
    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses.insert(url.into(), Ok(body.into()));
        self
    }

    /// Fail requests for `url` with `error`.
    #[must_use]
    pub fn with_error(mut self, url: impl Into<String>, error: SourceError) -> Self {
        self.responses.insert(url.into(), Err(error));
        self
    }

    /// URLs requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn get(&self, url: &str) -> Result<String, SourceError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(url.to_string());
        }
        self.responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| {
                Err(SourceError::Network {
                    url: url.to_string(),
                    reason: "no canned response".to_string(),
                })
            })
    }
}
