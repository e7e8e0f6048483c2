//! API Clients
//!
//! One client per remote catalog service. Each lookup performs exactly one
//! GET and decodes the JSON body into the local DTO.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::{ClientConfig, DEFAULT_TIMEOUT};
use crate::dto::{DriverDto, DriverStats, RaceWeekend, Session, TeamDto};
use crate::error::{ClientError, ClientResult};

/// HTTP plumbing shared by the service clients
#[derive(Debug, Clone)]
pub struct ServiceClient {
    /// HTTP client
    client: Client,
    /// Base URL
    base_url: String,
    /// Logical service name used in errors
    service: &'static str,
}

impl ServiceClient {
    pub fn new(
        service: &'static str,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            service,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(service = self.service, %url, "remote lookup");

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!(service = self.service, %url, error = %e, "remote call failed");
            ClientError::unavailable(self.service, e.to_string())
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::not_found(self.service, path));
        }
        if !status.is_success() {
            return Err(ClientError::status(
                self.service,
                status.as_u16(),
                response.text().await.unwrap_or_default(),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::decode(self.service, e.to_string()))
    }
}

/// Client for drivers-api
#[derive(Debug, Clone)]
pub struct DriversApiClient {
    inner: ServiceClient,
}

impl DriversApiClient {
    pub const SERVICE: &'static str = "drivers-api";

    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> ClientResult<Self> {
        Ok(Self {
            inner: ServiceClient::new(Self::SERVICE, base_url, timeout)?,
        })
    }

    /// Get a driver
    pub async fn get_driver(&self, id: i64) -> ClientResult<DriverDto> {
        self.inner.get_json(&format!("/api/drivers/{}", id)).await
    }

    /// Get a driver's career statistics
    pub async fn get_driver_stats(&self, id: i64) -> ClientResult<DriverStats> {
        self.inner
            .get_json(&format!("/api/drivers/{}/career-stats", id))
            .await
    }
}

/// Client for teams-api
#[derive(Debug, Clone)]
pub struct TeamsApiClient {
    inner: ServiceClient,
}

impl TeamsApiClient {
    pub const SERVICE: &'static str = "teams-api";

    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> ClientResult<Self> {
        Ok(Self {
            inner: ServiceClient::new(Self::SERVICE, base_url, timeout)?,
        })
    }

    /// Get a team
    pub async fn get_team(&self, id: i64) -> ClientResult<TeamDto> {
        self.inner.get_json(&format!("/api/teams/{}", id)).await
    }

    /// Get the drivers of a team
    pub async fn get_team_drivers(&self, id: i64) -> ClientResult<Vec<DriverDto>> {
        self.inner
            .get_json(&format!("/api/teams/{}/drivers", id))
            .await
    }
}

/// Client for events-api
#[derive(Debug, Clone)]
pub struct EventsApiClient {
    inner: ServiceClient,
}

impl EventsApiClient {
    pub const SERVICE: &'static str = "events-api";

    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> ClientResult<Self> {
        Ok(Self {
            inner: ServiceClient::new(Self::SERVICE, base_url, timeout)?,
        })
    }

    /// Get a race weekend
    pub async fn get_race_weekend(&self, weekend_id: i64) -> ClientResult<RaceWeekend> {
        self.inner
            .get_json(&format!("/api/events/race-weekend/{}", weekend_id))
            .await
    }

    /// Get every session of a race
    pub async fn get_race_sessions(&self, race_id: i64) -> ClientResult<Vec<Session>> {
        self.inner
            .get_json(&format!("/api/events/race/{}/sessions", race_id))
            .await
    }

    /// Get one session
    pub async fn get_session(&self, session_id: i64) -> ClientResult<Session> {
        self.inner
            .get_json(&format!("/api/events/session/{}", session_id))
            .await
    }
}

/// The three remote catalog clients built from one configuration
#[derive(Debug, Clone)]
pub struct RemoteCatalog {
    pub drivers: DriversApiClient,
    pub teams: TeamsApiClient,
    pub events: EventsApiClient,
}

impl RemoteCatalog {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            drivers: DriversApiClient::with_timeout(&config.drivers_url, config.timeout)?,
            teams: TeamsApiClient::with_timeout(&config.teams_url, config.timeout)?,
            events: EventsApiClient::with_timeout(&config.events_url, config.timeout)?,
        })
    }
}
