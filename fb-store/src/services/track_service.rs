//! Track catalog service

use std::sync::Arc;

use crate::entities::{CatalogEntity, Track};
use crate::error::CatalogResult;
use crate::repos::TrackRepository;
use crate::validation::validate_track;

/// Track catalog service
#[derive(Clone)]
pub struct TrackService {
    repo: Arc<dyn TrackRepository>,
}

impl TrackService {
    pub fn new(repo: Arc<dyn TrackRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all_tracks(&self) -> CatalogResult<Vec<Track>> {
        self.repo.find_all().await
    }

    pub async fn get_track_by_id(&self, id: i64) -> CatalogResult<Option<Track>> {
        self.repo.find_by_id(id).await
    }

    pub async fn get_tracks_by_country(&self, country: &str) -> CatalogResult<Vec<Track>> {
        self.repo.find_by_country(country).await
    }

    pub async fn search_tracks_by_name(&self, name: &str) -> CatalogResult<Vec<Track>> {
        self.repo.search_by_name(name).await
    }

    pub async fn save_track(&self, track: Track) -> CatalogResult<Track> {
        validate_track(&track)?;
        let saved = self.repo.save(track).await?;
        tracing::info!(id = ?saved.id(), track = %saved, "track saved");
        Ok(saved)
    }

    pub async fn create_track(&self, mut track: Track) -> CatalogResult<Track> {
        track.id = None;
        self.save_track(track).await
    }

    pub async fn replace_track(&self, id: i64, track: Track) -> CatalogResult<Option<Track>> {
        validate_track(&track)?;
        let replaced = self.repo.replace(id, track).await?;
        if let Some(stored) = &replaced {
            tracing::info!(id, name = %stored.label(), "track replaced");
        }
        Ok(replaced)
    }

    pub async fn delete_track(&self, id: i64) -> CatalogResult<()> {
        self.repo.delete_by_id(id).await
    }

    pub async fn remove_track(&self, id: i64) -> CatalogResult<bool> {
        let removed = self.repo.remove(id).await?;
        if removed {
            tracing::info!(id, "track deleted");
        }
        Ok(removed)
    }
}
