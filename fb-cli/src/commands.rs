//! CLI Commands
//!
//! Command definitions for the `fb` binary.

use clap::{Parser, Subcommand};
use fb_api::ServiceKind;

use crate::telemetry::LogFormat;

/// formulaBlu catalog services
#[derive(Parser, Debug)]
#[command(name = "fb")]
#[command(version)]
#[command(about = "formulaBlu catalog services and remote lookups")]
pub struct Cli {
    /// Log output format
    #[arg(long, env = "FB_LOG_FORMAT", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormat,

    /// Drivers service base URL
    #[arg(
        long,
        env = "FB_DRIVERS_API_URL",
        default_value = "http://drivers-api-service",
        global = true
    )]
    pub drivers_url: String,

    /// Teams service base URL
    #[arg(
        long,
        env = "FB_TEAMS_API_URL",
        default_value = "http://teams-api-service",
        global = true
    )]
    pub teams_url: String,

    /// Events service base URL
    #[arg(
        long,
        env = "FB_EVENTS_API_URL",
        default_value = "http://events-api-service",
        global = true
    )]
    pub events_url: String,

    /// Per-call timeout for remote lookups, in seconds
    #[arg(long, env = "FB_CLIENT_TIMEOUT_SECS", default_value = "30", global = true)]
    pub timeout_secs: u64,

    /// Output format for lookups
    #[arg(short, long, value_enum, default_value = "json", global = true)]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// Single-line JSON
    Compact,
}

/// A single catalog service
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CatalogArg {
    Drivers,
    Teams,
    Tracks,
    Races,
}

impl From<CatalogArg> for ServiceKind {
    fn from(arg: CatalogArg) -> Self {
        match arg {
            CatalogArg::Drivers => ServiceKind::Drivers,
            CatalogArg::Teams => ServiceKind::Teams,
            CatalogArg::Tracks => ServiceKind::Tracks,
            CatalogArg::Races => ServiceKind::Races,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one catalog service
    Serve {
        /// Catalog to serve
        #[arg(value_enum)]
        service: CatalogArg,
        /// Host to bind to
        #[arg(short = 'H', long, env = "FB_API_HOST", default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on (defaults to the service's own port)
        #[arg(short, long, env = "FB_API_PORT")]
        port: Option<u16>,
        /// Load the race season fixtures on start
        #[arg(long)]
        seed: bool,
    },

    /// Run all four catalogs in one process
    ServeAll {
        /// Host to bind to
        #[arg(short = 'H', long, env = "FB_API_HOST", default_value = "0.0.0.0")]
        host: String,
        /// Port to listen on
        #[arg(short, long, env = "FB_API_PORT")]
        port: Option<u16>,
        /// Load the race season fixtures on start
        #[arg(long)]
        seed: bool,
    },

    /// Look up a driver
    Driver { id: i64 },

    /// Look up a driver with its team
    DriverProfile { id: i64 },

    /// Look up a driver's profile and career statistics
    DriverCareer { id: i64 },

    /// Look up a team
    Team { id: i64 },

    /// Look up a team with its drivers
    TeamLineup { id: i64 },

    /// Look up a race weekend with its sessions
    Weekend { id: i64 },

    /// Look up one session
    Session { id: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_help() {
        let result = Cli::try_parse_from(["fb", "--help"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["fb", "serve", "races", "--seed", "--port", "9000"]).unwrap();
        match cli.command {
            Commands::Serve {
                service,
                port,
                seed,
                ..
            } => {
                assert_eq!(service, CatalogArg::Races);
                assert_eq!(port, Some(9000));
                assert!(seed);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_unknown_catalog() {
        assert!(Cli::try_parse_from(["fb", "serve", "weather"]).is_err());
    }

    #[test]
    fn test_parse_lookup_with_global_options() {
        let cli = Cli::try_parse_from([
            "fb",
            "driver-profile",
            "44",
            "--drivers-url",
            "http://localhost:8081",
            "-f",
            "compact",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::DriverProfile { id: 44 }));
        assert_eq!(cli.drivers_url, "http://localhost:8081");
        assert_eq!(cli.format, OutputFormat::Compact);
    }

    #[test]
    fn test_catalog_arg_to_service_kind() {
        assert_eq!(ServiceKind::from(CatalogArg::Tracks), ServiceKind::Tracks);
    }
}
