//! Driver repository

use async_trait::async_trait;

use super::{CatalogRepository, InMemoryRepository};
use crate::entities::Driver;
use crate::error::CatalogResult;

/// Driver repository trait
#[async_trait]
pub trait DriverRepository: CatalogRepository<Driver> {
    /// Drivers with exactly this nationality
    async fn find_by_nationality(&self, nationality: &str) -> CatalogResult<Vec<Driver>>;

    /// Drivers referencing this team id
    async fn find_by_team_id(&self, team_id: i64) -> CatalogResult<Vec<Driver>>;

    /// Drivers whose first or last name contains `name`, ignoring case
    async fn search_by_name(&self, name: &str) -> CatalogResult<Vec<Driver>>;
}

/// In-memory driver repository
pub type InMemoryDriverRepository = InMemoryRepository<Driver>;

#[async_trait]
impl DriverRepository for InMemoryRepository<Driver> {
    async fn find_by_nationality(&self, nationality: &str) -> CatalogResult<Vec<Driver>> {
        Ok(self.filter(|d| d.nationality == nationality).await)
    }

    async fn find_by_team_id(&self, team_id: i64) -> CatalogResult<Vec<Driver>> {
        Ok(self.filter(|d| d.team_id == Some(team_id)).await)
    }

    async fn search_by_name(&self, name: &str) -> CatalogResult<Vec<Driver>> {
        Ok(self.filter(|d| d.name_matches(name)).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded() -> InMemoryDriverRepository {
        let repo = InMemoryDriverRepository::new();
        let mut max = Driver::new("Max", "Verstappen", "Dutch");
        max.team_id = Some(1);
        let mut checo = Driver::new("Sergio", "Perez", "Mexican");
        checo.team_id = Some(1);
        let mut lando = Driver::new("Lando", "Norris", "British");
        lando.team_id = Some(2);
        for driver in [max, checo, lando] {
            repo.save(driver).await.unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn test_find_by_nationality_is_exact() {
        let repo = seeded().await;
        assert_eq!(repo.find_by_nationality("Dutch").await.unwrap().len(), 1);
        assert!(repo.find_by_nationality("dutch").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_team_id() {
        let repo = seeded().await;
        let red_bull = repo.find_by_team_id(1).await.unwrap();
        assert_eq!(red_bull.len(), 2);
        assert!(repo.find_by_team_id(9).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_by_name_matches_first_or_last() {
        let repo = seeded().await;

        let hits = repo.search_by_name("LAN").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].last_name, "Norris");

        let hits = repo.search_by_name("e").await.unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[tokio::test]
    async fn test_lookups_on_empty_store_are_empty() {
        let repo = InMemoryDriverRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());
        assert!(repo.find_by_nationality("Dutch").await.unwrap().is_empty());
        assert!(repo.search_by_name("max").await.unwrap().is_empty());
    }
}
