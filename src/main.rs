use clap::Parser;

use drawsight::cli::output::{self, Status};
use drawsight::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        output::print_status(Status::Error, &e.to_string());
        std::process::exit(1);
    }
}
