//! Catalog services
//!
//! One service per entity type. Each takes its repository as an injected
//! collaborator and adds the write-time rules on top of it.

mod driver_service;
mod race_service;
mod team_service;
mod track_service;

pub use driver_service::*;
pub use race_service::*;
pub use team_service::*;
pub use track_service::*;

use crate::repos::CatalogDatabase;

/// All catalog services wired to one database
#[derive(Clone)]
pub struct CatalogServices {
    pub drivers: DriverService,
    pub teams: TeamService,
    pub tracks: TrackService,
    pub races: RaceService,
}

impl CatalogServices {
    pub fn new(database: CatalogDatabase) -> Self {
        Self {
            drivers: DriverService::new(database.drivers),
            teams: TeamService::new(database.teams),
            tracks: TrackService::new(database.tracks),
            races: RaceService::new(database.races),
        }
    }

    /// Services over fresh in-memory tables
    pub fn in_memory() -> Self {
        Self::new(CatalogDatabase::in_memory())
    }
}
