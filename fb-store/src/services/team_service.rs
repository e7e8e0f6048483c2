//! Team catalog service

use std::sync::Arc;

use crate::entities::{CatalogEntity, Team};
use crate::error::CatalogResult;
use crate::repos::TeamRepository;
use crate::validation::validate_team;

/// Team catalog service
#[derive(Clone)]
pub struct TeamService {
    repo: Arc<dyn TeamRepository>,
}

impl TeamService {
    pub fn new(repo: Arc<dyn TeamRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_teams(&self) -> CatalogResult<Vec<Team>> {
        self.repo.find_all().await
    }

    pub async fn get_team_by_id(&self, id: i64) -> CatalogResult<Option<Team>> {
        self.repo.find_by_id(id).await
    }

    pub async fn get_teams_by_nationality(&self, nationality: &str) -> CatalogResult<Vec<Team>> {
        self.repo.find_by_nationality(nationality).await
    }

    pub async fn get_teams_by_founded_year(&self, year: i32) -> CatalogResult<Vec<Team>> {
        self.repo.find_by_founded_year(year).await
    }

    pub async fn search_teams_by_name(&self, name: &str) -> CatalogResult<Vec<Team>> {
        self.repo.search_by_name(name).await
    }

    pub async fn save_team(&self, team: Team) -> CatalogResult<Team> {
        validate_team(&team)?;
        let saved = self.repo.save(team).await?;
        tracing::info!(id = ?saved.id(), team = %saved, "team saved");
        Ok(saved)
    }

    /// Store a new team; any id in the payload is ignored
    pub async fn create_team(&self, mut team: Team) -> CatalogResult<Team> {
        team.id = None;
        self.save_team(team).await
    }

    pub async fn replace_team(&self, id: i64, team: Team) -> CatalogResult<Option<Team>> {
        validate_team(&team)?;
        let replaced = self.repo.replace(id, team).await?;
        if let Some(stored) = &replaced {
            tracing::info!(id, name = %stored.label(), "team replaced");
        }
        Ok(replaced)
    }

    pub async fn delete_team(&self, id: i64) -> CatalogResult<()> {
        self.repo.delete_by_id(id).await
    }

    pub async fn remove_team(&self, id: i64) -> CatalogResult<bool> {
        let removed = self.repo.remove(id).await?;
        if removed {
            tracing::info!(id, "team deleted");
        }
        Ok(removed)
    }
}
