//! Driver catalog service

use std::sync::Arc;

use crate::entities::{CatalogEntity, Driver};
use crate::error::CatalogResult;
use crate::repos::DriverRepository;
use crate::validation::validate_driver;

/// Driver catalog service
#[derive(Clone)]
pub struct DriverService {
    repo: Arc<dyn DriverRepository>,
}

impl DriverService {
    pub fn new(repo: Arc<dyn DriverRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_drivers(&self) -> CatalogResult<Vec<Driver>> {
        self.repo.find_all().await
    }

    pub async fn get_driver_by_id(&self, id: i64) -> CatalogResult<Option<Driver>> {
        self.repo.find_by_id(id).await
    }

    pub async fn get_drivers_by_nationality(&self, nationality: &str) -> CatalogResult<Vec<Driver>> {
        self.repo.find_by_nationality(nationality).await
    }

    /// Drivers referencing a team id; the id is not checked against the teams catalog
    pub async fn get_drivers_by_team(&self, team_id: i64) -> CatalogResult<Vec<Driver>> {
        self.repo.find_by_team_id(team_id).await
    }

    pub async fn search_drivers_by_name(&self, name: &str) -> CatalogResult<Vec<Driver>> {
        self.repo.search_by_name(name).await
    }

    /// Validate and store a driver (insert or full replace depending on its id)
    pub async fn save_driver(&self, driver: Driver) -> CatalogResult<Driver> {
        validate_driver(&driver)?;
        let saved = self.repo.save(driver).await?;
        tracing::info!(id = ?saved.id(), driver = %saved, "driver saved");
        Ok(saved)
    }

    /// Store a new driver; any id in the payload is ignored
    pub async fn create_driver(&self, mut driver: Driver) -> CatalogResult<Driver> {
        driver.id = None;
        self.save_driver(driver).await
    }

    /// Overwrite an existing driver; `None` when the id is unknown
    pub async fn replace_driver(&self, id: i64, driver: Driver) -> CatalogResult<Option<Driver>> {
        validate_driver(&driver)?;
        let replaced = self.repo.replace(id, driver).await?;
        if let Some(stored) = &replaced {
            tracing::info!(id, name = %stored.label(), "driver replaced");
        }
        Ok(replaced)
    }

    /// Idempotent delete
    pub async fn delete_driver(&self, id: i64) -> CatalogResult<()> {
        self.repo.delete_by_id(id).await
    }

    /// Delete, reporting whether the driver existed
    pub async fn remove_driver(&self, id: i64) -> CatalogResult<bool> {
        let removed = self.repo.remove(id).await?;
        if removed {
            tracing::info!(id, "driver deleted");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use crate::repos::InMemoryDriverRepository;

    fn service() -> DriverService {
        DriverService::new(Arc::new(InMemoryDriverRepository::new()))
    }

    #[tokio::test]
    async fn test_create_then_lookup() {
        let service = service();
        let created = service
            .create_driver(Driver::new("Max", "Verstappen", "Dutch"))
            .await
            .unwrap();
        assert_eq!(created.id, Some(1));

        let found = service.get_driver_by_id(1).await.unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(service.get_drivers_by_nationality("Dutch").await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_create_ignores_payload_id() {
        let service = service();
        service.create_driver(Driver::new("Max", "Verstappen", "Dutch")).await.unwrap();

        let created = service
            .create_driver(Driver::new("Lando", "Norris", "British").with_id(1))
            .await
            .unwrap();
        assert_eq!(created.id, Some(2));
        assert_eq!(service.get_driver_by_id(1).await.unwrap().unwrap().last_name, "Verstappen");
    }

    #[tokio::test]
    async fn test_create_rejects_blank_required_fields() {
        let service = service();
        let err = service
            .create_driver(Driver::new("Max", "", "Dutch"))
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert!(service.get_all_drivers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_replace_unknown_id_writes_nothing() {
        let service = service();
        let replaced = service
            .replace_driver(5, Driver::new("Max", "Verstappen", "Dutch"))
            .await
            .unwrap();
        assert!(replaced.is_none());
        assert!(service.get_all_drivers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_team_reference_is_advisory() {
        let service = service();
        let mut driver = Driver::new("Max", "Verstappen", "Dutch");
        driver.team_id = Some(404);
        service.create_driver(driver).await.unwrap();

        assert_eq!(service.get_drivers_by_team(404).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_reports_existence() {
        let service = service();
        service.create_driver(Driver::new("Max", "Verstappen", "Dutch")).await.unwrap();

        assert!(service.remove_driver(1).await.unwrap());
        assert!(!service.remove_driver(1).await.unwrap());
        service.delete_driver(1).await.unwrap();
        assert!(service.get_driver_by_id(1).await.unwrap().is_none());
    }
}
