use std::io::Write;

use tempfile::NamedTempFile;

use drawsight::app::Config;
use drawsight::domain::{Position, SourceLayout, SubstitutionTable, TransformSeed};
use drawsight::error::{ConfigError, Error};

fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn full_config_round_trips_every_section() {
    let file = write_temp_config(
        r#"
[logging]
level = "debug"
format = "json"

[http]
timeout_secs = 8
accept_invalid_certs = true

[selector]
recent_window = 8
older_window = 20
gap_min = 2
gap_max = 4
min_size = 6
max_size = 7
seeds = [
    { table = "taysen", position = "tail" },
    { table = "ascend", position = "first" },
]

[combination]
sample_count = 3
max_pairs = 12

[shadow]
primary = "mistik_lama"
fallback = "index"
size = 6

[hints]
weekday_min_draws = 2
weekday_top = 3

[[markets]]
name = "LOCAL"
seeds = [{ table = "descend", position = "head" }]

[markets.source]
layout = "paged"
url = "https://results.test/local?page={page}"
max_pages = 5
column = 2
label_column = 0
"#,
    );

    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.logging.format, "json");
    assert_eq!(config.http.timeout_secs, 8);
    assert!(config.http.accept_invalid_certs);
    assert_eq!(config.selector.scan_depth(), 28);
    assert_eq!(
        config.selector.seeds[1],
        TransformSeed::new(SubstitutionTable::Ascend, Position::First)
    );
    assert_eq!(config.combination.sample_count, 3);
    assert_eq!(config.combination.max_pairs, Some(12));
    assert_eq!(config.shadow.primary, SubstitutionTable::MistikLama);
    assert_eq!(config.hints.weekday_top, 3);

    let registry = config.registry();
    let market = registry.get(" local ").unwrap();
    assert_eq!(
        market.source.layout,
        SourceLayout::Paged {
            url: "https://results.test/local?page={page}".into(),
            max_pages: 5
        }
    );
    assert_eq!(market.source.max_rows, 50);
    assert!(registry.get("CAMBODIA").is_none());
}

#[test]
fn empty_file_is_valid() {
    let file = write_temp_config("");
    let config = Config::load(file.path()).unwrap();
    assert!(config.registry().get("CAMBODIA").is_some());
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::ReadFile(_))));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let file = write_temp_config("[selector\nmin_size = 5");
    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
}

#[test]
fn unknown_table_name_is_rejected() {
    let file = write_temp_config("[shadow]\nprimary = \"mirror\"\n");
    assert!(Config::load(file.path()).is_err());
}

#[test]
fn invalid_values_name_their_field() {
    let cases = [
        ("[selector]\nmin_size = 0\n", "selector.min_size"),
        ("[selector]\nmax_size = 11\n", "selector.min_size"),
        ("[selector]\nrecent_weight = 0\n", "selector.recent_weight"),
        ("[selector]\nrecent_weight = 200000000\n", "selector.recent_weight"),
        ("[selector]\nolder_weight = 5000\n", "selector.older_weight"),
        ("[selector]\ngap_min = 9\ngap_max = 2\n", "selector.gap_min"),
        ("[http]\ntimeout_secs = 0\n", "http.timeout_secs"),
        ("[shadow]\nsize = 11\n", "shadow.size"),
        ("[hints]\nweekday_names = [\"Mon\"]\n", "hints.weekday_names"),
    ];

    for (toml, expected) in cases {
        let file = write_temp_config(toml);
        match Config::load(file.path()) {
            Err(Error::Config(ConfigError::InvalidValue { field, .. })) => {
                assert_eq!(field, expected, "config: {toml}");
            }
            other => panic!("expected InvalidValue for {expected}, got {other:?}"),
        }
    }
}

#[test]
fn market_urls_are_validated() {
    let file = write_temp_config(
        r#"
[[markets]]
name = "BROKEN"

[markets.source]
layout = "single"
url = "not a url"
column = 1
"#,
    );

    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::InvalidValue {
            field: "markets.source.url",
            ..
        })
    ));
}
