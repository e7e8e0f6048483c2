//! Race repository

use async_trait::async_trait;

use super::{CatalogRepository, InMemoryRepository};
use crate::entities::Race;
use crate::error::CatalogResult;

/// Race repository trait
#[async_trait]
pub trait RaceRepository: CatalogRepository<Race> {
    async fn find_by_circuit(&self, circuit: &str) -> CatalogResult<Vec<Race>>;

    /// All races of one season
    async fn find_by_year(&self, year: i32) -> CatalogResult<Vec<Race>>;

    /// Exact match on both calendar fields
    async fn find_by_year_and_round(&self, year: i32, round: i32) -> CatalogResult<Option<Race>>;
}

/// In-memory race repository
pub type InMemoryRaceRepository = InMemoryRepository<Race>;

#[async_trait]
impl RaceRepository for InMemoryRepository<Race> {
    async fn find_by_circuit(&self, circuit: &str) -> CatalogResult<Vec<Race>> {
        Ok(self
            .filter(|r| r.circuit.as_deref() == Some(circuit))
            .await)
    }

    async fn find_by_year(&self, year: i32) -> CatalogResult<Vec<Race>> {
        Ok(self.filter(|r| r.year == Some(year)).await)
    }

    async fn find_by_year_and_round(&self, year: i32, round: i32) -> CatalogResult<Option<Race>> {
        Ok(self
            .find_first(|r| r.calendar_key() == Some((year, round)))
            .await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_race_lookups() {
        let repo = InMemoryRaceRepository::new();
        repo.save(Race::new("Bahrain Grand Prix", 2024, 1, date(2024, 3, 2)).with_circuit("Sakhir"))
            .await
            .unwrap();
        repo.save(Race::new("Bahrain Grand Prix", 2023, 1, date(2023, 3, 5)).with_circuit("Sakhir"))
            .await
            .unwrap();
        repo.save(Race::new("Saudi Arabian Grand Prix", 2024, 2, date(2024, 3, 9)))
            .await
            .unwrap();

        assert_eq!(repo.find_by_year(2024).await.unwrap().len(), 2);
        assert_eq!(repo.find_by_circuit("Sakhir").await.unwrap().len(), 2);

        let found = repo.find_by_year_and_round(2023, 1).await.unwrap().unwrap();
        assert_eq!(found.date, Some(date(2023, 3, 5)));
        assert!(repo.find_by_year_and_round(2023, 2).await.unwrap().is_none());
    }
}
