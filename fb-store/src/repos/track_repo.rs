//! Track repository

use async_trait::async_trait;

use super::{CatalogRepository, InMemoryRepository};
use crate::entities::Track;
use crate::error::CatalogResult;

/// Track repository trait
#[async_trait]
pub trait TrackRepository: CatalogRepository<Track> {
    async fn find_by_country(&self, country: &str) -> CatalogResult<Vec<Track>>;

    /// Tracks whose name contains `name`, ignoring case
    async fn search_by_name(&self, name: &str) -> CatalogResult<Vec<Track>>;
}

/// In-memory track repository
pub type InMemoryTrackRepository = InMemoryRepository<Track>;

#[async_trait]
impl TrackRepository for InMemoryRepository<Track> {
    async fn find_by_country(&self, country: &str) -> CatalogResult<Vec<Track>> {
        Ok(self.filter(|t| t.country == country).await)
    }

    async fn search_by_name(&self, name: &str) -> CatalogResult<Vec<Track>> {
        Ok(self.filter(|t| t.name_matches(name)).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_track_lookups() {
        let repo = InMemoryTrackRepository::new();
        repo.save(Track::new("Autodromo Nazionale Monza", "Italy", "Monza"))
            .await
            .unwrap();
        repo.save(Track::new("Imola", "Italy", "Imola")).await.unwrap();
        repo.save(Track::new("Silverstone Circuit", "United Kingdom", "Silverstone"))
            .await
            .unwrap();

        assert_eq!(repo.find_by_country("Italy").await.unwrap().len(), 2);
        assert_eq!(repo.search_by_name("silver").await.unwrap().len(), 1);
        assert!(repo.find_by_country("Spain").await.unwrap().is_empty());
    }
}
