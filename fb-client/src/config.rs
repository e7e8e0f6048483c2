//! Remote service addresses

use std::time::Duration;

/// Default per-call timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the remote catalog services live
///
/// Defaults are the logical service addresses; name resolution is left to
/// the deployment environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub drivers_url: String,
    pub teams_url: String,
    pub events_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            drivers_url: "http://drivers-api-service".to_string(),
            teams_url: "http://teams-api-service".to_string(),
            events_url: "http://events-api-service".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Point every client at one base URL (all catalogs in one process)
    pub fn single_host(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            drivers_url: base_url.clone(),
            teams_url: base_url.clone(),
            events_url: base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
