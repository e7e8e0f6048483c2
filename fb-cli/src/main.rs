//! formulaBlu CLI Entry Point
//!
//! Configuration is loaded from environment variables (via .env file).
//! Command-line arguments override environment variables.
//!
//! Usage:
//!   fb serve drivers      - Run the drivers catalog service
//!   fb serve races --seed - Run the races catalog service with fixtures
//!   fb serve-all          - Run every catalog in one process
//!   fb driver-profile 1   - Look up a driver and its team remotely

use clap::Parser;
use fb_cli::{handler, telemetry, Cli};

#[tokio::main]
async fn main() {
    // Load .env file (ignore if not found)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = telemetry::init_logging(cli.log_format) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }

    if let Err(e) = handler::run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
