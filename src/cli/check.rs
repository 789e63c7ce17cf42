//! Configuration validation command.

use std::path::Path;

use crate::app::{Config, DEFAULT_CONFIG_PATH};
use crate::cli::output::{self, Status};
use crate::error::Result;

/// Validate configuration without fetching anything.
pub fn execute_config(config_path: Option<&Path>) -> Result<()> {
    let shown = config_path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));
    output::print_status(Status::Info, &format!("Checking configuration: {}", shown.display()));
    if config_path.is_none() && !shown.exists() {
        output::print_status(Status::Warn, "No configuration file found, checking built-in defaults");
    }

    let config = match Config::load_or_default(config_path) {
        Ok(config) => config,
        Err(e) => {
            output::print_status(Status::Error, &format!("Configuration is invalid: {e}"));
            return Err(e);
        }
    };

    output::print_status(Status::Ok, "Configuration is valid");

    output::print_heading("Summary");
    let selector = &config.selector;
    output::print_field(
        "Windows",
        format!(
            "recent {} x{}, older {} x{}",
            selector.recent_window, selector.recent_weight, selector.older_window, selector.older_weight
        ),
    );
    output::print_field("Gap range", format!("{}..={}", selector.gap_min, selector.gap_max));
    output::print_field("Set size", format!("{}..={}", selector.min_size, selector.max_size));
    output::print_list("Seeds", &selector.seeds);
    output::print_field(
        "Shadow",
        format!(
            "{} then {}, size {}",
            config.shadow.primary, config.shadow.fallback, config.shadow.size
        ),
    );
    output::print_field("Timeout", format!("{}s", config.http.timeout_secs));
    output::print_field(
        "Sampler seed",
        config
            .combination
            .seed
            .map_or_else(|| "random".to_string(), |seed| seed.to_string()),
    );
    output::print_field("Markets", config.registry().len());

    if config.http.accept_invalid_certs {
        output::print_status(Status::Warn, "TLS certificate verification is disabled");
    }
    if config.markets.is_empty() {
        output::print_status(Status::Info, "Using the built-in market registry");
    }

    Ok(())
}
