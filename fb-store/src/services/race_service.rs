//! Race catalog service
//!
//! Races carry the catalog's one business invariant: no two races may share
//! a `(year, round)` pair.

use std::sync::Arc;

use crate::entities::{CatalogEntity, Race};
use crate::error::{CatalogError, CatalogResult};
use crate::repos::RaceRepository;
use crate::validation::validate_race;

/// Race catalog service
#[derive(Clone)]
pub struct RaceService {
    repo: Arc<dyn RaceRepository>,
}

impl RaceService {
    pub fn new(repo: Arc<dyn RaceRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_races(&self) -> CatalogResult<Vec<Race>> {
        self.repo.find_all().await
    }

    pub async fn get_race_by_id(&self, id: i64) -> CatalogResult<Option<Race>> {
        self.repo.find_by_id(id).await
    }

    pub async fn get_races_by_circuit(&self, circuit: &str) -> CatalogResult<Vec<Race>> {
        self.repo.find_by_circuit(circuit).await
    }

    /// All races of one season
    pub async fn get_season(&self, year: i32) -> CatalogResult<Vec<Race>> {
        self.repo.find_by_year(year).await
    }

    /// Create a race, refusing a second race for the same `(year, round)`
    ///
    /// The check and the insert are not atomic; two concurrent creates for
    /// the same pair can both pass the check.
    pub async fn create_race(&self, mut race: Race) -> CatalogResult<Race> {
        let (year, round) = validate_race(&race)?;

        if let Some(existing) = self.repo.find_by_year_and_round(year, round).await? {
            tracing::warn!(year, round, existing = %existing, "race already exists");
            return Err(CatalogError::duplicate(
                Race::KIND,
                format!("year={} round={}", year, round),
            ));
        }

        race.id = None;
        let saved = self.repo.save(race).await?;
        tracing::info!(id = ?saved.id(), name = %saved.label(), "race created");
        Ok(saved)
    }

    /// Unchecked insert used when loading fixtures
    pub async fn add_race(&self, race: Race) -> CatalogResult<Race> {
        self.repo.save(race).await
    }
}
