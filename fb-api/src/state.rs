//! Application state for the API server

use fb_store::CatalogServices;

/// Which catalog a process serves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Drivers,
    Teams,
    Tracks,
    Races,
    /// All four catalogs in one process
    All,
}

impl ServiceKind {
    /// Logical service name used for discovery
    pub fn service_name(&self) -> &'static str {
        match self {
            ServiceKind::Drivers => "drivers-api",
            ServiceKind::Teams => "teams-api",
            ServiceKind::Tracks => "tracks-api",
            ServiceKind::Races => "races-api",
            ServiceKind::All => "catalog-api",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            ServiceKind::Drivers => 8081,
            ServiceKind::Teams => 8082,
            ServiceKind::Tracks => 8083,
            ServiceKind::Races => 8084,
            ServiceKind::All => 8080,
        }
    }

    pub fn serves_races(&self) -> bool {
        matches!(self, ServiceKind::Races | ServiceKind::All)
    }
}

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Catalog services
    pub services: CatalogServices,
    /// Logical service name reported by /health
    pub service_name: String,
    /// API version
    pub version: String,
}

impl AppState {
    pub fn new(services: CatalogServices, kind: ServiceKind) -> Self {
        Self {
            services,
            service_name: kind.service_name().to_string(),
            version: crate::VERSION.to_string(),
        }
    }

    /// State over fresh in-memory tables
    pub fn in_memory(kind: ServiceKind) -> Self {
        Self::new(CatalogServices::in_memory(), kind)
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub service: ServiceKind,
}

impl ApiConfig {
    pub fn for_service(service: ServiceKind) -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: service.default_port(),
            service,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::for_service(ServiceKind::All)
    }
}
