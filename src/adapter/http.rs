//! HTTP page fetcher backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{redirect, Client};
use tracing::{debug, warn};

use crate::app::HttpConfig;
use crate::error::{Result, SourceError};
use crate::port::PageFetcher;

/// Fetches result pages with a shared, preconfigured client.
///
/// Every request carries the configured browser-like `User-Agent`, follows
/// redirects and is bounded by the configured timeout.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher from HTTP settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the user agent is not a valid header value or the
    /// TLS backend cannot be initialised.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let agent = HeaderValue::from_str(&config.user_agent).map_err(|e| {
            crate::error::ConfigError::InvalidValue {
                field: "user_agent",
                reason: e.to_string(),
            }
        })?;
        headers.insert(USER_AGENT, agent);

        if config.accept_invalid_certs {
            warn!("TLS certificate verification disabled for result sources");
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(redirect::Policy::limited(10))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn get(&self, url: &str) -> std::result::Result<String, SourceError> {
        let map_err = |e: reqwest::Error| {
            if e.is_timeout() {
                SourceError::Timeout { url: url.to_string() }
            } else {
                SourceError::Network {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            }
        };

        let response = self.client.get(url).send().await.map_err(map_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(map_err)?;
        debug!(url = %url, bytes = body.len(), "Fetched page");
        Ok(body)
    }
}
