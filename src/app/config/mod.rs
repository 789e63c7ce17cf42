//! Configuration loading and validation.
//!
//! Every section falls back to its defaults, so an empty file is a valid
//! configuration. An empty `markets` list selects the built-in registry.

mod logging;

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::domain::combination::CombinationConfig;
use crate::domain::{
    default_markets, Market, MarketRegistry, SelectorConfig, SourceLayout, SubstitutionTable,
    PAGE_PLACEHOLDER,
};
use crate::error::{ConfigError, Result};

pub use logging::LoggingConfig;

/// Environment variable that pins the combination sampler seed.
pub const SEED_ENV: &str = "DRAWSIGHT_SEED";

/// Default path looked up when no config file is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Largest per-occurrence weight accepted for either selector window.
pub const MAX_WINDOW_WEIGHT: u32 = 1_000;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Outbound HTTP settings shared by every result source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpConfig {
    /// `User-Agent` sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Skip TLS certificate verification. Off unless a host needs it.
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            accept_invalid_certs: false,
        }
    }
}

/// How the shadow set is derived from the primary candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ShadowConfig {
    #[serde(default = "default_shadow_primary")]
    pub primary: SubstitutionTable,

    #[serde(default = "default_shadow_fallback")]
    pub fallback: SubstitutionTable,

    #[serde(default = "default_shadow_size")]
    pub size: usize,
}

const fn default_shadow_primary() -> SubstitutionTable {
    SubstitutionTable::Index
}

const fn default_shadow_fallback() -> SubstitutionTable {
    SubstitutionTable::MistikBaru
}

const fn default_shadow_size() -> usize {
    5
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            primary: default_shadow_primary(),
            fallback: default_shadow_fallback(),
            size: default_shadow_size(),
        }
    }
}

/// Secondary hint settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HintConfig {
    /// Weekday names as they appear in source date cells, Monday first.
    #[serde(default = "default_weekday_names")]
    pub weekday_names: Vec<String>,

    /// Matching draws required before the weekday hint is shown.
    #[serde(default = "default_weekday_min_draws")]
    pub weekday_min_draws: usize,

    /// Number of digits in the weekday hint.
    #[serde(default = "default_weekday_top")]
    pub weekday_top: usize,
}

fn default_weekday_names() -> Vec<String> {
    ["Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu"]
        .into_iter()
        .map(String::from)
        .collect()
}

const fn default_weekday_min_draws() -> usize {
    3
}

const fn default_weekday_top() -> usize {
    4
}

impl Default for HintConfig {
    fn default() -> Self {
        Self {
            weekday_names: default_weekday_names(),
            weekday_min_draws: default_weekday_min_draws(),
            weekday_top: default_weekday_top(),
        }
    }
}

impl HintConfig {
    /// Configured name for a weekday counted from Monday (0).
    #[must_use]
    pub fn weekday_name(&self, days_from_monday: u32) -> Option<&str> {
        self.weekday_names
            .get(days_from_monday as usize)
            .map(String::as_str)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub selector: SelectorConfig,

    #[serde(default)]
    pub combination: CombinationConfig,

    #[serde(default)]
    pub shadow: ShadowConfig,

    #[serde(default)]
    pub hints: HintConfig,

    /// Market registry; empty selects the built-in markets.
    #[serde(default)]
    pub markets: Vec<Market>,
}

impl Config {
    /// Load configuration from a TOML file, apply environment overrides and
    /// validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, the seed
    /// override is malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    /// Load `path` if given, otherwise [`DEFAULT_CONFIG_PATH`] when it
    /// exists, otherwise built-in defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => Self::parse(""),
        }
    }

    /// Parse configuration from TOML text, apply environment overrides and
    /// validate.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed TOML, a malformed seed override, or
    /// failed validation.
    pub fn parse(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        if let Ok(seed) = std::env::var(SEED_ENV) {
            config.combination.seed = Some(seed.trim().parse().map_err(|_| {
                ConfigError::InvalidValue {
                    field: "DRAWSIGHT_SEED",
                    reason: format!("'{seed}' is not an unsigned integer"),
                }
            })?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check every section for values the pipeline cannot work with.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        let selector = &self.selector;
        selector.bounds().map_err(|e| ConfigError::InvalidValue {
            field: "selector.min_size",
            reason: e.to_string(),
        })?;
        if selector.recent_weight == 0 || selector.older_weight == 0 {
            return Err(ConfigError::InvalidValue {
                field: "selector.recent_weight",
                reason: "weights must be greater than 0".to_string(),
            }
            .into());
        }
        for (field, weight) in [
            ("selector.recent_weight", selector.recent_weight),
            ("selector.older_weight", selector.older_weight),
        ] {
            if weight > MAX_WINDOW_WEIGHT {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("{weight} exceeds the maximum of {MAX_WINDOW_WEIGHT}"),
                }
                .into());
            }
        }
        if selector.gap_min > selector.gap_max {
            return Err(ConfigError::InvalidValue {
                field: "selector.gap_min",
                reason: format!(
                    "gap_min ({}) must not exceed gap_max ({})",
                    selector.gap_min, selector.gap_max
                ),
            }
            .into());
        }
        if selector.recent_window == 0 {
            return Err(ConfigError::InvalidValue {
                field: "selector.recent_window",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.http.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "http.timeout_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "http.user_agent",
            }
            .into());
        }

        if self.shadow.size == 0 || self.shadow.size > 10 {
            return Err(ConfigError::InvalidValue {
                field: "shadow.size",
                reason: "must be between 1 and 10".to_string(),
            }
            .into());
        }

        if self.hints.weekday_names.len() != 7 {
            return Err(ConfigError::InvalidValue {
                field: "hints.weekday_names",
                reason: format!("expected 7 names, got {}", self.hints.weekday_names.len()),
            }
            .into());
        }

        self.validate_markets()
    }

    #[allow(clippy::result_large_err)]
    fn validate_markets(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for market in &self.markets {
            let name = market.name.trim();
            if name.is_empty() {
                return Err(ConfigError::MissingField {
                    field: "markets.name",
                }
                .into());
            }
            if !seen.insert(name.to_ascii_uppercase()) {
                return Err(ConfigError::InvalidValue {
                    field: "markets.name",
                    reason: format!("duplicate market '{name}'"),
                }
                .into());
            }

            let source = &market.source;
            if let SourceLayout::Paged { url, max_pages } = &source.layout {
                if !url.contains(PAGE_PLACEHOLDER) {
                    return Err(ConfigError::InvalidValue {
                        field: "markets.source.url",
                        reason: format!("{name}: paged url must contain {PAGE_PLACEHOLDER}"),
                    }
                    .into());
                }
                if *max_pages == 0 {
                    return Err(ConfigError::InvalidValue {
                        field: "markets.source.max_pages",
                        reason: format!("{name}: must be at least 1"),
                    }
                    .into());
                }
            }

            let first_page = source.layout.url().replace(PAGE_PLACEHOLDER, "1");
            Url::parse(&first_page).map_err(|e| ConfigError::InvalidValue {
                field: "markets.source.url",
                reason: format!("{name}: {e}"),
            })?;

            if source.max_rows == 0 {
                return Err(ConfigError::InvalidValue {
                    field: "markets.source.max_rows",
                    reason: format!("{name}: must be at least 1"),
                }
                .into());
            }
        }
        Ok(())
    }

    /// The market registry this configuration describes.
    #[must_use]
    pub fn registry(&self) -> MarketRegistry {
        if self.markets.is_empty() {
            MarketRegistry::new(default_markets())
        } else {
            MarketRegistry::new(self.markets.clone())
        }
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
