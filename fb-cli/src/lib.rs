//! formulaBlu CLI
//!
//! Runs the catalog services and queries remote catalogs.
//!
//! # Usage
//!
//! ```text
//! fb [OPTIONS] <COMMAND>
//!
//! Commands:
//!   serve           Run one catalog service
//!   serve-all       Run all four catalogs in one process
//!   driver          Look up a driver
//!   driver-profile  Look up a driver with its team
//!   driver-career   Look up a driver's profile and career statistics
//!   team            Look up a team
//!   team-lineup     Look up a team with its drivers
//!   weekend         Look up a race weekend with its sessions
//!   session         Look up one session
//!
//! Options:
//!       --log-format <FORMAT>   pretty, json or compact [env: FB_LOG_FORMAT]
//!       --drivers-url <URL>     [env: FB_DRIVERS_API_URL]
//!       --teams-url <URL>       [env: FB_TEAMS_API_URL]
//!       --events-url <URL>      [env: FB_EVENTS_API_URL]
//!       --timeout-secs <SECS>   [env: FB_CLIENT_TIMEOUT_SECS]
//!   -f, --format <FORMAT>       json or compact
//! ```

pub mod commands;
pub mod error;
pub mod handler;
pub mod output;
pub mod telemetry;

pub use commands::{CatalogArg, Cli, Commands, OutputFormat};
pub use error::{CliError, CliResult};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
