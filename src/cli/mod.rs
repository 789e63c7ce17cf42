//! Command-line interface definitions.

pub mod analyze;
pub mod check;
pub mod markets;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::error::Result;

/// Drawsight - candidate digits and combinations from published draw results.
#[derive(Parser, Debug)]
#[command(name = "drawsight")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a market's history and print its analysis
    Analyze(AnalyzeArgs),

    /// List configured markets
    Markets(ConfigPathArg),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `drawsight check`
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate configuration file
    Config(ConfigPathArg),
}

/// Shared argument for commands that only need a config path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to configuration file (defaults to ./config.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `analyze` subcommand.
#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// Market name, case-insensitive (see `drawsight markets`)
    pub market: String,

    /// Path to configuration file (defaults to ./config.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Fix the combination sampler seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override log level (debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long)]
    pub json_logs: bool,
}

impl Cli {
    /// Dispatch the parsed command.
    ///
    /// # Errors
    ///
    /// Propagates the command's error.
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Analyze(args) => analyze::execute(&args).await,
            Commands::Markets(args) => markets::execute(args.config.as_deref()),
            Commands::Check(CheckCommand::Config(args)) => check::execute_config(args.config.as_deref()),
        }
    }
}
