//! Result source port.
//!
//! A [`ResultSource`] turns one market's remote result table into a
//! [`ResultHistory`]. Sources never fail outright: every network or parse
//! problem is reported inside the returned [`FetchOutcome`] together with
//! whatever rows were gathered before it happened.

use async_trait::async_trait;

use crate::domain::ResultHistory;
use crate::error::SourceError;

/// Outcome of one fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Every requested page was read.
    Fetched(ResultHistory),
    /// A page failed; `history` holds the rows read before the failure.
    Failed {
        history: ResultHistory,
        error: SourceError,
    },
}

impl FetchOutcome {
    /// The gathered history, discarding any failure.
    #[must_use]
    pub fn into_history(self) -> ResultHistory {
        match self {
            Self::Fetched(history) | Self::Failed { history, .. } => history,
        }
    }

    /// The gathered history.
    #[must_use]
    pub const fn history(&self) -> &ResultHistory {
        match self {
            Self::Fetched(history) | Self::Failed { history, .. } => history,
        }
    }

    /// The failure, if the fetch did not complete.
    #[must_use]
    pub const fn error(&self) -> Option<&SourceError> {
        match self {
            Self::Fetched(_) => None,
            Self::Failed { error, .. } => Some(error),
        }
    }

    /// Check if the fetch completed without failure.
    #[must_use]
    pub const fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }
}

/// Reads the result history of one market.
#[async_trait]
pub trait ResultSource: Send + Sync {
    /// Fetch and normalize the market's results, most recent first.
    async fn fetch(&self) -> FetchOutcome;

    /// Layout name for logging/debugging.
    fn layout_name(&self) -> &'static str;
}

/// Retrieves raw documents over the network.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// GET `url` and return the response body.
    async fn get(&self, url: &str) -> Result<String, SourceError>;
}
