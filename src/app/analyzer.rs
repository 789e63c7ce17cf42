//! Request pipeline: fetch, normalize, select, combine, assemble.

use std::sync::Arc;

use chrono::{Datelike, Local};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use super::config::Config;
use super::report::{AnalysisReport, ReportParts};
use crate::adapter::http::HttpFetcher;
use crate::adapter::source::SourceFactory;
use crate::domain::combination::{pairs, top_sets};
use crate::domain::hint::{running_digits, weekday_digits};
use crate::domain::{CandidateSelector, MarketRegistry};
use crate::error::{Error, Result};
use crate::port::PageFetcher;

/// Runs one analysis per call against a fixed configuration.
///
/// Holds no state between calls other than the shared page fetcher, so a
/// single analyzer can serve any number of sequential requests.
pub struct Analyzer {
    config: Config,
    registry: MarketRegistry,
    selector: CandidateSelector,
    fetcher: Arc<dyn PageFetcher>,
}

impl Analyzer {
    /// Build an analyzer that fetches over HTTP.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector settings are invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = Arc::new(HttpFetcher::new(&config.http)?);
        Self::with_fetcher(config, fetcher)
    }

    /// Build an analyzer around an existing page fetcher.
    ///
    /// # Errors
    ///
    /// Returns an error if the selector settings are invalid.
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn PageFetcher>) -> Result<Self> {
        let selector = CandidateSelector::new(config.selector.clone())?;
        let registry = config.registry();
        Ok(Self {
            config,
            registry,
            selector,
            fetcher,
        })
    }

    /// Markets this analyzer serves.
    pub fn registry(&self) -> &MarketRegistry {
        &self.registry
    }

    /// Analyze `market_name` with the configured seed, or a fresh one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMarket`] for a name not in the registry.
    /// Fetch failures are not errors; they surface in the report.
    pub async fn analyze(&self, market_name: &str) -> Result<AnalysisReport> {
        let mut rng = match self.config.combination.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let weekday = Local::now().weekday().num_days_from_monday();
        self.analyze_with(market_name, weekday, &mut rng).await
    }

    /// Analyze `market_name` for a given weekday (0 = Monday) using `rng`
    /// for combination sampling.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMarket`] for a name not in the registry.
    pub async fn analyze_with<R: Rng + Send + ?Sized>(
        &self,
        market_name: &str,
        weekday: u32,
        rng: &mut R,
    ) -> Result<AnalysisReport> {
        let market = self
            .registry
            .get(market_name)
            .ok_or_else(|| Error::InvalidMarket {
                name: market_name.trim().to_string(),
            })?;

        info!(market = %market.name, layout = market.source.layout.name(), "Analysis started");

        let source = SourceFactory::create(market, Arc::clone(&self.fetcher));
        let outcome = source.fetch().await;
        let fetch_error = outcome.error().map(ToString::to_string);
        if let Some(error) = &fetch_error {
            warn!(market = %market.name, error = %error, "Using partial history");
        }
        let history = outcome.into_history();

        let seeds = market.seeds_or(&self.config.selector.seeds);
        let selection = self.selector.select_with_seeds(&history, seeds);
        let candidates = &selection.candidates;

        let shadow_config = self.config.shadow;
        let shadow = candidates.shadow(
            shadow_config.primary,
            shadow_config.fallback,
            shadow_config.size,
        );

        let running = history
            .latest()
            .map(|latest| running_digits(latest, candidates));

        let hints = &self.config.hints;
        let weekday = hints.weekday_name(weekday).map(|day| {
            let digits =
                weekday_digits(&history, day, hints.weekday_min_draws, hints.weekday_top);
            (day.to_string(), digits)
        });

        let combination = &self.config.combination;
        let top_main = top_sets(candidates, combination.sample_count, rng);
        let top_shadow = top_sets(&shadow, combination.sample_count, rng);

        let report = AnalysisReport::from(ReportParts {
            market: &market.name,
            last: history.latest().map(ToString::to_string),
            basis: selection.basis,
            history_len: history.len(),
            fetch_error,
            candidates,
            shadow: &shadow,
            running,
            two_digit_main: pairs(candidates, combination.max_pairs),
            two_digit_shadow: pairs(&shadow, combination.max_pairs),
            top_main,
            top_shadow,
            weekday,
        });

        info!(
            market = %report.market,
            history = report.history_len,
            candidates = %report.candidates,
            basis = ?report.basis,
            "Analysis finished"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Availability, SelectionBasis, Unavailable};
    use crate::error::SourceError;
    use crate::testkit::html::{result_page, Row};
    use crate::testkit::StaticFetcher;

    fn single_market_config() -> Config {
        Config::parse(
            r#"
            [combination]
            seed = 7

            [[markets]]
            name = "TEST"

            [markets.source]
            layout = "single"
            url = "https://results.test/table"
            column = 1
            label_column = 0
            "#,
        )
        .unwrap()
    }

    fn analyzer(config: Config, fetcher: StaticFetcher) -> Analyzer {
        Analyzer::with_fetcher(config, Arc::new(fetcher)).unwrap()
    }

    #[tokio::test]
    async fn unknown_market_is_rejected() {
        let analyzer = analyzer(single_market_config(), StaticFetcher::new());
        let err = analyzer.analyze("NOWHERE").await.unwrap_err();
        assert!(matches!(err, Error::InvalidMarket { name } if name == "NOWHERE"));
    }

    #[tokio::test]
    async fn fetch_failure_yields_padded_report() {
        let analyzer = analyzer(single_market_config(), StaticFetcher::new());
        let mut rng = StdRng::seed_from_u64(1);

        let report = analyzer.analyze_with("test", 0, &mut rng).await.unwrap();

        assert_eq!(report.market, "TEST");
        assert_eq!(report.basis, SelectionBasis::NoData);
        assert_eq!(report.candidates, "01234");
        assert_eq!(report.last, None);
        assert_eq!(report.running, None);
        assert!(report.fetch_error.is_some());
        assert_eq!(report.two_digit_main.len(), 20);
    }

    #[tokio::test]
    async fn fetched_history_drives_the_report() {
        let rows = [
            Row::new("Senin, 01-01", "4719"),
            Row::new("Minggu, 31-12", "1234"),
            Row::new("Sabtu, 30-12", "5678"),
            Row::new("Jumat, 29-12", "9012"),
        ];
        let fetcher = StaticFetcher::new().with_page("https://results.test/table", result_page(&rows));
        let analyzer = analyzer(single_market_config(), fetcher);
        let mut rng = StdRng::seed_from_u64(1);

        let report = analyzer.analyze_with("TEST", 0, &mut rng).await.unwrap();

        assert_eq!(report.basis, SelectionBasis::Statistical);
        assert_eq!(report.last.as_deref(), Some("4719"));
        assert_eq!(report.history_len, 4);
        assert!(report.fetch_error.is_none());
        assert!(report.running.is_some());
        assert!(report.has_data());

        let size = report.candidates.len();
        assert!((5..=6).contains(&size));
        assert_eq!(report.shadow.len(), 5);
        assert_eq!(report.two_digit_main.len(), size * (size - 1));

        let weekday = report.weekday.unwrap();
        assert_eq!(weekday.day, "Senin");
        assert_eq!(
            weekday.digits,
            Availability::Unavailable(Unavailable::InsufficientHistory { have: 1, need: 3 })
        );
    }

    #[tokio::test]
    async fn same_seed_gives_same_samples() {
        let rows = [Row::new("Senin", "4719"), Row::new("Selasa", "8023")];
        let page = result_page(&rows);
        let config = single_market_config();

        let first = analyzer(
            config.clone(),
            StaticFetcher::new().with_page("https://results.test/table", page.clone()),
        )
        .analyze("TEST")
        .await
        .unwrap();
        let second = analyzer(
            config,
            StaticFetcher::new().with_page("https://results.test/table", page),
        )
        .analyze("TEST")
        .await
        .unwrap();

        assert_eq!(first.top3_main, second.top3_main);
        assert_eq!(first.top4_shadow, second.top4_shadow);
    }

    #[tokio::test]
    async fn source_error_text_reaches_report() {
        let fetcher = StaticFetcher::new().with_error(
            "https://results.test/table",
            SourceError::Status {
                url: "https://results.test/table".into(),
                status: 503,
            },
        );
        let analyzer = analyzer(single_market_config(), fetcher);

        let report = analyzer.analyze("TEST").await.unwrap();
        assert!(report.fetch_error.unwrap().contains("503"));
    }
}
