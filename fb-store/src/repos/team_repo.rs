//! Team repository

use async_trait::async_trait;

use super::{CatalogRepository, InMemoryRepository};
use crate::entities::Team;
use crate::error::CatalogResult;

/// Team repository trait
#[async_trait]
pub trait TeamRepository: CatalogRepository<Team> {
    async fn find_by_nationality(&self, nationality: &str) -> CatalogResult<Vec<Team>>;

    async fn find_by_founded_year(&self, year: i32) -> CatalogResult<Vec<Team>>;

    /// Teams whose name contains `name`, ignoring case
    async fn search_by_name(&self, name: &str) -> CatalogResult<Vec<Team>>;
}

/// In-memory team repository
pub type InMemoryTeamRepository = InMemoryRepository<Team>;

#[async_trait]
impl TeamRepository for InMemoryRepository<Team> {
    async fn find_by_nationality(&self, nationality: &str) -> CatalogResult<Vec<Team>> {
        Ok(self.filter(|t| t.nationality == nationality).await)
    }

    async fn find_by_founded_year(&self, year: i32) -> CatalogResult<Vec<Team>> {
        Ok(self.filter(|t| t.founded_year == Some(year)).await)
    }

    async fn search_by_name(&self, name: &str) -> CatalogResult<Vec<Team>> {
        Ok(self.filter(|t| t.name_matches(name)).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_team_lookups() {
        let repo = InMemoryTeamRepository::new();
        let mut ferrari = Team::new("Scuderia Ferrari", "Italian");
        ferrari.founded_year = Some(1929);
        let mut mclaren = Team::new("McLaren", "British");
        mclaren.founded_year = Some(1963);
        repo.save(ferrari).await.unwrap();
        repo.save(mclaren).await.unwrap();

        assert_eq!(repo.find_by_founded_year(1963).await.unwrap()[0].name, "McLaren");
        assert_eq!(repo.find_by_nationality("Italian").await.unwrap().len(), 1);
        assert_eq!(repo.search_by_name("FERR").await.unwrap().len(), 1);
        assert!(repo.find_by_founded_year(2000).await.unwrap().is_empty());
    }
}
