//! Catalog repositories
//!
//! One repository trait per entity type, each extending the shared
//! [`CatalogRepository`] CRUD contract with that entity's lookups.
//! [`InMemoryRepository`] backs all of them.

mod driver_repo;
mod memory;
mod race_repo;
mod team_repo;
mod track_repo;

pub use driver_repo::*;
pub use memory::*;
pub use race_repo::*;
pub use team_repo::*;
pub use track_repo::*;

use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::CatalogEntity;
use crate::error::CatalogResult;

/// Keyed storage for one entity type
#[async_trait]
pub trait CatalogRepository<E: CatalogEntity>: Send + Sync {
    /// Every stored record in id order
    async fn find_all(&self) -> CatalogResult<Vec<E>>;

    /// Exact match on identity
    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<E>>;

    /// Insert when the entity carries no stored identity, otherwise replace
    /// the full record at that identity
    async fn save(&self, entity: E) -> CatalogResult<E>;

    /// Remove the record if present; deleting an absent id is not an error
    async fn delete_by_id(&self, id: i64) -> CatalogResult<()>;

    /// Overwrite the record at `id`; `None` when no such record exists
    async fn replace(&self, id: i64, entity: E) -> CatalogResult<Option<E>>;

    /// Delete the record at `id`, reporting whether it existed
    async fn remove(&self, id: i64) -> CatalogResult<bool>;
}

/// Catalog database facade bundling one repository per entity type
#[derive(Clone)]
pub struct CatalogDatabase {
    pub drivers: Arc<dyn DriverRepository>,
    pub teams: Arc<dyn TeamRepository>,
    pub tracks: Arc<dyn TrackRepository>,
    pub races: Arc<dyn RaceRepository>,
}

impl CatalogDatabase {
    /// Create a database backed by fresh in-memory tables
    pub fn in_memory() -> Self {
        Self {
            drivers: Arc::new(InMemoryDriverRepository::new()),
            teams: Arc::new(InMemoryTeamRepository::new()),
            tracks: Arc::new(InMemoryTrackRepository::new()),
            races: Arc::new(InMemoryRaceRepository::new()),
        }
    }
}

impl Default for CatalogDatabase {
    fn default() -> Self {
        Self::in_memory()
    }
}
