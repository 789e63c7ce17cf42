//! Application layer - configuration, request pipeline and response payload.

mod analyzer;
mod config;
pub mod report;

pub use analyzer::Analyzer;
pub use config::{
    Config, HintConfig, HttpConfig, LoggingConfig, ShadowConfig, DEFAULT_CONFIG_PATH, SEED_ENV,
};
pub use report::AnalysisReport;
