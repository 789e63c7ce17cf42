//! Handler for the `analyze` command.

use tracing::debug;

use crate::app::report::UNAVAILABLE;
use crate::app::{AnalysisReport, Analyzer, Config};
use crate::cli::output::{self, Status};
use crate::cli::AnalyzeArgs;
use crate::domain::{Availability, SelectionBasis};
use crate::error::Result;

/// Execute the analyze command.
pub async fn execute(args: &AnalyzeArgs) -> Result<()> {
    let mut config = Config::load_or_default(args.config.as_deref())?;

    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }
    if let Some(seed) = args.seed {
        config.combination.seed = Some(seed);
    }

    config.init_logging();
    debug!(market = %args.market, "Configuration loaded");

    let analyzer = Analyzer::new(config)?;
    let report = analyzer.analyze(&args.market).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &AnalysisReport) {
    output::print_heading(&report.market);
    output::print_optional("Last result", report.last.as_deref());
    output::print_field("History", format!("{} draws", report.history_len));
    if let Some(ref error) = report.fetch_error {
        output::print_status(Status::Warn, &format!("Fetch incomplete: {error}"));
    }
    if report.basis == SelectionBasis::NoData {
        output::print_status(Status::Warn, "No results fetched, candidates are padding only");
    }

    output::print_heading("Candidates");
    output::print_field("Main", &report.candidates);
    output::print_field("Shadow", &report.shadow);
    output::print_optional("Running", report.running.as_deref());
    output::print_field("Pairs", &report.pairs);
    output::print_optional("Position", report.position);
    if let Some(ref weekday) = report.weekday {
        let digits = match &weekday.digits {
            Availability::Available(digits) => digits.clone(),
            Availability::Unavailable(reason) => format!("{UNAVAILABLE} ({reason})"),
        };
        output::print_field(&weekday.day, digits);
    }

    output::print_heading("Combinations");
    output::print_field("Top 3D", &report.top3_main);
    output::print_field("Top 4D", &report.top4_main);
    output::print_field("Top 3D shadow", &report.top3_shadow);
    output::print_field("Top 4D shadow", &report.top4_shadow);
    output::print_list("2D main", &report.two_digit_main);
    output::print_list("2D shadow", &report.two_digit_shadow);
}
