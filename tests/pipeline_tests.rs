//! End-to-end analysis over canned result pages.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use drawsight::app::{Analyzer, Config};
use drawsight::domain::{Availability, SelectionBasis, Unavailable};
use drawsight::error::Error;
use drawsight::testkit::html::{result_page, result_page_at, Row};
use drawsight::testkit::StaticFetcher;

const POOL_HISTORY: &str = "https://tgr7grldrc.salamrupiah.com/history/result-mobile/";

fn pool_page_url(code: &str, page: usize) -> String {
    format!("{POOL_HISTORY}{code}-pool-1?page={page}")
}

/// Fetcher serving one pool market: `rows` on page 1, an empty table on page 2.
fn pool_fetcher(code: &str, rows: &[Row<'_>]) -> StaticFetcher {
    StaticFetcher::new()
        .with_page(pool_page_url(code, 1), result_page_at(rows, 3))
        .with_page(pool_page_url(code, 2), result_page_at(&[], 3))
}

fn analyzer(fetcher: StaticFetcher) -> Analyzer {
    let config = Config::parse("").unwrap();
    Analyzer::with_fetcher(config, Arc::new(fetcher)).unwrap()
}

#[tokio::test]
async fn market_seed_override_changes_candidates() {
    let rows = [Row::new("Senin", "4719")];
    let mut rng = StdRng::seed_from_u64(3);

    let cambodia = analyzer(pool_fetcher("p3501", &rows))
        .analyze_with("cambodia", 1, &mut rng)
        .await
        .unwrap();
    let sydney = analyzer(pool_fetcher("p2262", &rows))
        .analyze_with("Sydney Lotto", 1, &mut rng)
        .await
        .unwrap();

    // Frequency seeds 1 4 7 9, then the transformed tail digit.
    assert_eq!(cambodia.candidates, "14793");
    assert_eq!(sydney.candidates, "14792");
    assert_eq!(cambodia.basis, SelectionBasis::Statistical);
    assert!(cambodia.fetch_error.is_none());
}

#[tokio::test]
async fn derived_hints_follow_latest_result() {
    let rows = [Row::new("Senin", "4719"), Row::new("Minggu", "4719")];
    let report = analyzer(pool_fetcher("p3501", &rows))
        .analyze("CAMBODIA")
        .await
        .unwrap();

    assert_eq!(report.last.as_deref(), Some("4719"));
    assert_eq!(report.candidates, "14793");
    assert_eq!(report.shadow, "69248");
    assert_eq!(report.running.as_deref(), Some("83514"));
    assert_eq!(report.pairs, "14, 79, 3");
    let position = report.position.unwrap();
    assert_eq!((position.head.value(), position.tail.value()), (1, 4));

    assert_eq!(report.two_digit_main.len(), 20);
    assert_eq!(report.two_digit_main[0], "13");
    assert_eq!(report.two_digit_main[19], "97");
}

#[tokio::test]
async fn samples_come_from_the_candidate_set() {
    let rows = [Row::new("Senin", "4719")];
    let mut rng = StdRng::seed_from_u64(11);

    let report = analyzer(pool_fetcher("p3501", &rows))
        .analyze_with("CAMBODIA", 0, &mut rng)
        .await
        .unwrap();

    for line in [&report.top3_main, &report.top4_main] {
        let samples: Vec<&str> = line.split(", ").collect();
        assert_eq!(samples.len(), 2);
        assert!(samples
            .iter()
            .all(|s| s.chars().all(|c| report.candidates.contains(c))));
    }
    assert!(report.top3_main.split(", ").all(|s| s.len() == 3));
    assert!(report.top4_shadow.split(", ").all(|s| s.len() == 4));
}

#[tokio::test]
async fn weekday_hint_counts_same_day_draws() {
    let rows = [
        Row::new("Senin, 15-01-2024", "1122"),
        Row::new("Minggu, 14-01-2024", "9999"),
        Row::new("Senin, 08-01-2024", "1133"),
        Row::new("Senin, 01-01-2024", "1240"),
    ];
    let mut rng = StdRng::seed_from_u64(5);

    let report = analyzer(pool_fetcher("p2263", &rows))
        .analyze_with("HONGKONG LOTTO", 0, &mut rng)
        .await
        .unwrap();

    let weekday = report.weekday.unwrap();
    assert_eq!(weekday.day, "Senin");
    // 1 x5, 2 x3, 3 x2, then 0 and 4 tie at one.
    assert_eq!(weekday.digits, Availability::Available("1230".to_string()));

    let mut rng = StdRng::seed_from_u64(5);
    let report = analyzer(pool_fetcher("p2263", &rows))
        .analyze_with("HONGKONG LOTTO", 2, &mut rng)
        .await
        .unwrap();
    let weekday = report.weekday.unwrap();
    assert_eq!(weekday.day, "Rabu");
    assert_eq!(
        weekday.digits,
        Availability::Unavailable(Unavailable::InsufficientHistory { have: 0, need: 3 })
    );
}

#[tokio::test]
async fn unreachable_source_degrades_to_padding() {
    let report = analyzer(StaticFetcher::new())
        .analyze("JAPAN POOLS")
        .await
        .unwrap();

    assert_eq!(report.basis, SelectionBasis::NoData);
    assert_eq!(report.history_len, 0);
    assert_eq!(report.candidates, "01234");
    assert_eq!(report.shadow, "56789");
    assert!(report.fetch_error.is_some());
    assert!(report.running.is_none());
    assert!(report.last.is_none());
}

#[tokio::test]
async fn small_candidate_sets_report_unavailable_samples() {
    let config = Config::parse(
        r#"
        [selector]
        min_size = 3
        max_size = 3

        [[markets]]
        name = "TINY"

        [markets.source]
        layout = "single"
        url = "https://results.test/tiny"
        column = 1
        "#,
    )
    .unwrap();
    let fetcher = StaticFetcher::new().with_page(
        "https://results.test/tiny",
        result_page(&[Row::new("Senin", "4719")]),
    );
    let analyzer = Analyzer::with_fetcher(config, Arc::new(fetcher)).unwrap();

    let report = analyzer.analyze("TINY").await.unwrap();

    assert_eq!(report.candidates, "147");
    assert_eq!(report.top3_main, "-");
    assert_eq!(report.top4_main, "-");
    assert_ne!(report.top3_shadow, "-");
    assert_eq!(report.two_digit_main.len(), 6);
}

#[tokio::test]
async fn unknown_market_is_an_error() {
    let err = analyzer(StaticFetcher::new())
        .analyze("ATLANTIS")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidMarket { .. }));
    assert_eq!(err.to_string(), "unknown market: ATLANTIS");
}
