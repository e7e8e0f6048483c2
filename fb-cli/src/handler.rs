//! Command Handlers

use std::time::Duration;

use fb_api::{run_server, ApiConfig, ServiceKind};
use fb_client::{ClientConfig, ResultsAggregator};
use fb_store::fixtures::seed_races;
use fb_store::CatalogServices;

use crate::commands::{Cli, Commands, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output::print_output;

/// Run the CLI with parsed arguments
pub async fn run(cli: Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Serve {
            service,
            host,
            port,
            seed,
        } => handle_serve((*service).into(), host, *port, *seed).await,
        Commands::ServeAll { host, port, seed } => {
            handle_serve(ServiceKind::All, host, *port, *seed).await
        }
        _ => {
            let aggregator = ResultsAggregator::from_config(&client_config(&cli))?;
            handle_lookup(&aggregator, &cli.command, cli.format).await
        }
    }
}

/// Remote client configuration from the global options
pub fn client_config(cli: &Cli) -> ClientConfig {
    ClientConfig {
        drivers_url: cli.drivers_url.clone(),
        teams_url: cli.teams_url.clone(),
        events_url: cli.events_url.clone(),
        timeout: Duration::from_secs(cli.timeout_secs),
    }
}

/// Listener configuration; the port falls back to the service's own default
pub fn api_config(kind: ServiceKind, host: &str, port: Option<u16>) -> ApiConfig {
    ApiConfig {
        host: host.to_string(),
        port: port.unwrap_or_else(|| kind.default_port()),
        service: kind,
    }
}

/// Fresh in-memory services, optionally seeded with the race fixtures
pub async fn prepare_services(kind: ServiceKind, seed: bool) -> CliResult<CatalogServices> {
    let services = CatalogServices::in_memory();

    if seed {
        if !kind.serves_races() {
            return Err(CliError::invalid_arg(format!(
                "--seed loads race fixtures; {} does not serve races",
                kind.service_name()
            )));
        }
        let count = seed_races(&services.races).await?;
        tracing::info!(count, "Seeded race fixtures");
    }

    Ok(services)
}

async fn handle_serve(
    kind: ServiceKind,
    host: &str,
    port: Option<u16>,
    seed: bool,
) -> CliResult<()> {
    let services = prepare_services(kind, seed).await?;
    let config = api_config(kind, host, port);

    tracing::info!(
        service = kind.service_name(),
        host = %config.host,
        port = config.port,
        "Starting catalog service"
    );

    run_server(config, services)
        .await
        .map_err(|e| CliError::server(e.to_string()))
}

async fn handle_lookup(
    aggregator: &ResultsAggregator,
    command: &Commands,
    format: OutputFormat,
) -> CliResult<()> {
    let remote = aggregator.remote();

    match *command {
        Commands::Driver { id } => print_output(&remote.drivers.get_driver(id).await?, format),
        Commands::DriverProfile { id } => {
            print_output(&aggregator.driver_profile(id).await?, format)
        }
        Commands::DriverCareer { id } => {
            print_output(&aggregator.driver_career(id).await?, format)
        }
        Commands::Team { id } => print_output(&remote.teams.get_team(id).await?, format),
        Commands::TeamLineup { id } => print_output(&aggregator.team_lineup(id).await?, format),
        Commands::Weekend { id } => {
            print_output(&aggregator.weekend_overview(id).await?, format)
        }
        Commands::Session { id } => print_output(&remote.events.get_session(id).await?, format),
        Commands::Serve { .. } | Commands::ServeAll { .. } => Err(CliError::invalid_arg(
            "serve commands are not lookups",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use fb_api::start_background_server;

    #[test]
    fn test_api_config_uses_service_port() {
        assert_eq!(api_config(ServiceKind::Tracks, "0.0.0.0", None).port, 8083);
        assert_eq!(api_config(ServiceKind::All, "0.0.0.0", None).port, 8080);
        assert_eq!(api_config(ServiceKind::Races, "127.0.0.1", Some(9100)).port, 9100);
    }

    #[test]
    fn test_client_config_from_cli() {
        let cli = Cli::try_parse_from([
            "fb",
            "--teams-url",
            "http://localhost:8082",
            "--timeout-secs",
            "5",
            "team",
            "1",
        ])
        .unwrap();
        let config = client_config(&cli);
        assert_eq!(config.teams_url, "http://localhost:8082");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_prepare_services_seeds_races() {
        let services = prepare_services(ServiceKind::Races, true).await.unwrap();
        assert_eq!(services.races.get_all_races().await.unwrap().len(), 29);

        let services = prepare_services(ServiceKind::All, false).await.unwrap();
        assert!(services.races.get_all_races().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seed_rejected_for_non_race_service() {
        let err = prepare_services(ServiceKind::Drivers, true).await.err().unwrap();
        assert_eq!(err.exit_code(), 2);
    }

    #[tokio::test]
    async fn test_lookup_against_running_service() {
        let services = CatalogServices::in_memory();
        services
            .teams
            .create_team(fb_store::Team::new("McLaren", "British"))
            .await
            .unwrap();
        let addr = start_background_server(api_config(ServiceKind::Teams, "127.0.0.1", Some(0)), services)
            .await
            .unwrap();

        let url = format!("http://{}", addr);
        let cli = Cli::try_parse_from(["fb", "--teams-url", url.as_str(), "team", "1"]).unwrap();
        run(cli).await.unwrap();

        let cli = Cli::try_parse_from(["fb", "--teams-url", url.as_str(), "team", "2"]).unwrap();
        let err = run(cli).await.unwrap_err();
        assert_eq!(err.exit_code(), 21);
    }
}
