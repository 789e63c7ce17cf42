//! Market registry listing.

use std::path::Path;

use tabled::{Table, Tabled};

use crate::app::Config;
use crate::cli::output::{self, Status};
use crate::domain::{Market, SourceLayout};
use crate::error::Result;

#[derive(Tabled)]
struct MarketRow {
    #[tabled(rename = "Market")]
    name: String,
    #[tabled(rename = "Layout")]
    layout: &'static str,
    #[tabled(rename = "Column")]
    column: usize,
    #[tabled(rename = "Seeds")]
    seeds: String,
    #[tabled(rename = "Source")]
    url: String,
}

impl MarketRow {
    fn new(market: &Market, config: &Config) -> Self {
        let seeds = market
            .seeds_or(&config.selector.seeds)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        let layout = &market.source.layout;
        let url = match layout {
            SourceLayout::Paged { url, max_pages } => format!("{url} (x{max_pages})"),
            SourceLayout::Single { url } => url.clone(),
        };

        Self {
            name: market.name.clone(),
            layout: layout.name(),
            column: market.source.column,
            seeds,
            url,
        }
    }
}

/// List the markets the configuration serves.
pub fn execute(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load_or_default(config_path)?;
    let registry = config.registry();

    output::print_heading(&format!("Markets ({})", registry.len()));
    println!();

    let rows: Vec<MarketRow> = registry
        .markets()
        .iter()
        .map(|market| MarketRow::new(market, &config))
        .collect();
    let table = Table::new(rows).to_string();
    for line in table.lines() {
        println!("  {line}");
    }

    println!();
    output::print_status(Status::Info, "  Run `drawsight analyze <MARKET>` to analyze one of them");
    Ok(())
}
