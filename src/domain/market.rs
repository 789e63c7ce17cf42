//! Markets and their result sources.
//!
//! - [`Market`] - a named result source plus optional seed overrides
//! - [`SourceDescriptor`] - where and how a market's result table is read
//! - [`MarketRegistry`] - the immutable set of known markets

use serde::Deserialize;

use super::draw::Position;
use super::selector::TransformSeed;
use super::transform::SubstitutionTable;

/// Placeholder substituted with the page number in paged URL templates.
pub const PAGE_PLACEHOLDER: &str = "{page}";

/// Page layout of a result site.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "layout", rename_all = "snake_case")]
pub enum SourceLayout {
    /// History spread over numbered pages; `url` contains `{page}`.
    Paged {
        url: String,
        #[serde(default = "default_max_pages")]
        max_pages: usize,
    },
    /// One page holding the whole table.
    Single { url: String },
}

impl SourceLayout {
    /// The configured URL or URL template.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Paged { url, .. } | Self::Single { url } => url,
        }
    }

    /// Layout name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Paged { .. } => "paged",
            Self::Single { .. } => "single",
        }
    }
}

const fn default_max_pages() -> usize {
    3
}

const fn default_max_rows() -> usize {
    50
}

/// How to read one market's results out of a table body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceDescriptor {
    #[serde(flatten)]
    pub layout: SourceLayout,

    /// Zero-based index of the result cell within each row.
    pub column: usize,

    /// Rows with fewer cells are skipped; defaults to `column + 1`.
    #[serde(default)]
    pub min_cells: Option<usize>,

    /// Zero-based index of the date / label cell, if the table has one.
    #[serde(default)]
    pub label_column: Option<usize>,

    /// Maximum number of results kept.
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
}

impl SourceDescriptor {
    /// Minimum cell count for a row to be considered.
    #[must_use]
    pub fn required_cells(&self) -> usize {
        self.min_cells.unwrap_or(self.column + 1).max(self.column + 1)
    }
}

/// A named draw market.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Market {
    /// Display name, also the lookup key.
    pub name: String,

    /// Transform seed rules overriding the selector default.
    #[serde(default)]
    pub seeds: Option<Vec<TransformSeed>>,

    pub source: SourceDescriptor,
}

impl Market {
    /// Seeds for this market, falling back to `default`.
    #[must_use]
    pub fn seeds_or<'a>(&'a self, default: &'a [TransformSeed]) -> &'a [TransformSeed] {
        self.seeds.as_deref().unwrap_or(default)
    }
}

/// Immutable lookup of markets by name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MarketRegistry {
    markets: Vec<Market>,
}

impl MarketRegistry {
    /// Create a registry from a list of markets.
    #[must_use]
    pub fn new(markets: Vec<Market>) -> Self {
        Self { markets }
    }

    /// Look up a market by name, ignoring ASCII case and surrounding whitespace.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Market> {
        let name = name.trim();
        self.markets.iter().find(|m| m.name.eq_ignore_ascii_case(name))
    }

    /// All markets in registration order.
    #[must_use]
    pub fn markets(&self) -> &[Market] {
        &self.markets
    }

    /// Number of markets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markets.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }
}

const POOL_HISTORY_URL: &str = "https://tgr7grldrc.salamrupiah.com/history/result-mobile/";
const JAPAN_URL: &str = "https://tabelupdate.online/data-keluaran-japan/";
const COMBINED_POOLS_URL: &str = "https://nomorkiajit.com/hksgpsdy";

fn pool_market(name: &str, code: &str, seeds: Option<Vec<TransformSeed>>) -> Market {
    Market {
        name: name.to_string(),
        seeds,
        source: SourceDescriptor {
            layout: SourceLayout::Paged {
                url: format!("{POOL_HISTORY_URL}{code}-pool-1?page={PAGE_PLACEHOLDER}"),
                max_pages: default_max_pages(),
            },
            column: 3,
            min_cells: Some(4),
            label_column: Some(0),
            max_rows: default_max_rows(),
        },
    }
}

fn single_market(name: &str, url: &str, column: usize, min_cells: usize) -> Market {
    Market {
        name: name.to_string(),
        seeds: None,
        source: SourceDescriptor {
            layout: SourceLayout::Single { url: url.to_string() },
            column,
            min_cells: Some(min_cells),
            label_column: None,
            max_rows: default_max_rows(),
        },
    }
}

/// The markets served when the configuration does not list any.
#[must_use]
pub fn default_markets() -> Vec<Market> {
    vec![
        pool_market(
            "CAMBODIA",
            "p3501",
            Some(vec![TransformSeed::new(SubstitutionTable::MistikBaru, Position::Tail)]),
        ),
        pool_market("SYDNEY LOTTO", "p2262", None),
        pool_market("HONGKONG LOTTO", "p2263", None),
        pool_market("CHINA POOLS", "p2670", None),
        pool_market("BUSAN POOLS", "p16063", None),
        pool_market("WUHAN", "p28615", None),
        pool_market("SINGAPORE", "p2664", None),
        single_market("JAPAN POOLS", JAPAN_URL, 3, 4),
        single_market("HONGKONG POOLS", COMBINED_POOLS_URL, 2, 5),
        single_market("SINGAPORE POOLS", COMBINED_POOLS_URL, 3, 5),
        single_market("SYDNEY POOLS", COMBINED_POOLS_URL, 4, 5),
    ]
}
