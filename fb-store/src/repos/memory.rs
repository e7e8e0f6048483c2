//! In-memory table implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use super::CatalogRepository;
use crate::entities::CatalogEntity;
use crate::error::CatalogResult;

/// In-memory repository for one entity type
///
/// Rows are kept in a `BTreeMap` keyed by identity, so iteration order is
/// insertion order. Identities come from a monotonically increasing
/// sequence and are never reused after a delete. Concurrent writes to the
/// same identity are not ordered: the last applied write wins.
pub struct InMemoryRepository<E> {
    rows: RwLock<BTreeMap<i64, E>>,
    sequence: AtomicI64,
}

impl<E: CatalogEntity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            sequence: AtomicI64::new(0),
        }
    }

    /// Allocate the next identity
    fn next_id(&self) -> i64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Records matching `predicate`, in id order
    pub async fn filter<F>(&self, predicate: F) -> Vec<E>
    where
        F: Fn(&E) -> bool + Send,
    {
        let rows = self.rows.read().await;
        rows.values().filter(|row| predicate(*row)).cloned().collect()
    }

    /// First record matching `predicate`
    pub async fn find_first<F>(&self, predicate: F) -> Option<E>
    where
        F: Fn(&E) -> bool + Send,
    {
        let rows = self.rows.read().await;
        rows.values().find(|row| predicate(*row)).cloned()
    }
}

impl<E: CatalogEntity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: CatalogEntity> CatalogRepository<E> for InMemoryRepository<E> {
    async fn find_all(&self) -> CatalogResult<Vec<E>> {
        let rows = self.rows.read().await;
        Ok(rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<E>> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).cloned())
    }

    async fn save(&self, entity: E) -> CatalogResult<E> {
        let mut rows = self.rows.write().await;

        // An identity that is not stored is treated like no identity at all
        let id = match entity.id() {
            Some(id) if rows.contains_key(&id) => id,
            _ => self.next_id(),
        };

        let stored = entity.with_id(id);
        rows.insert(id, stored.clone());
        tracing::trace!(table = E::TABLE, id, "row written");
        Ok(stored)
    }

    async fn delete_by_id(&self, id: i64) -> CatalogResult<()> {
        let mut rows = self.rows.write().await;
        if rows.remove(&id).is_some() {
            tracing::trace!(table = E::TABLE, id, "row deleted");
        }
        Ok(())
    }

    // Check and write under one lock so a concurrent delete cannot turn a
    // replace into an insert under a fresh id
    async fn replace(&self, id: i64, entity: E) -> CatalogResult<Option<E>> {
        let mut rows = self.rows.write().await;
        let Some(row) = rows.get_mut(&id) else {
            return Ok(None);
        };

        *row = entity.with_id(id);
        tracing::trace!(table = E::TABLE, id, "row replaced");
        Ok(Some(row.clone()))
    }

    async fn remove(&self, id: i64) -> CatalogResult<bool> {
        let removed = self.rows.write().await.remove(&id).is_some();
        if removed {
            tracing::trace!(table = E::TABLE, id, "row deleted");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Driver;
    use std::sync::Arc;

    fn max() -> Driver {
        Driver::new("Max", "Verstappen", "Dutch")
    }

    #[tokio::test]
    async fn test_save_assigns_fresh_ids() {
        let repo = InMemoryRepository::<Driver>::new();

        let first = repo.save(max()).await.unwrap();
        let second = repo.save(max()).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));

        let stored = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored, max().with_id(1));
    }

    #[tokio::test]
    async fn test_save_with_existing_id_replaces_record() {
        let repo = InMemoryRepository::<Driver>::new();
        let mut saved = repo.save(max()).await.unwrap();
        saved.driver_number = Some(1);
        saved.bio = Some("champion".to_string());
        repo.save(saved).await.unwrap();

        // Full replace: fields missing from the new record are cleared
        let replacement = Driver::new("Max", "Verstappen", "Belgian").with_id(1);
        repo.save(replacement.clone()).await.unwrap();

        let stored = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(stored, replacement);
        assert_eq!(stored.bio, None);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_with_unknown_id_inserts() {
        let repo = InMemoryRepository::<Driver>::new();
        let saved = repo.save(max().with_id(42)).await.unwrap();
        assert_eq!(saved.id, Some(1));
        assert!(repo.find_by_id(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryRepository::<Driver>::new();
        repo.save(max()).await.unwrap();
        repo.save(max()).await.unwrap();
        repo.delete_by_id(2).await.unwrap();

        let saved = repo.save(max()).await.unwrap();
        assert_eq!(saved.id, Some(3));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let repo = InMemoryRepository::<Driver>::new();
        repo.save(max()).await.unwrap();

        repo.delete_by_id(1).await.unwrap();
        repo.delete_by_id(1).await.unwrap();
        repo.delete_by_id(99).await.unwrap();

        assert!(repo.find_by_id(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryRepository::<Driver>::new();
        repo.save(Driver::new("Lando", "Norris", "British")).await.unwrap();
        repo.save(max()).await.unwrap();

        let all = repo.find_all().await.unwrap();
        let names: Vec<_> = all.iter().map(|d| d.last_name.as_str()).collect();
        assert_eq!(names, vec!["Norris", "Verstappen"]);
    }

    #[tokio::test]
    async fn test_replace_and_remove_report_absence() {
        let repo = InMemoryRepository::<Driver>::new();
        assert_eq!(repo.replace(1, max()).await.unwrap(), None);
        assert!(!repo.remove(1).await.unwrap());
        assert!(repo.find_all().await.unwrap().is_empty());

        repo.save(max()).await.unwrap();
        let replaced = repo.replace(1, Driver::new("Max", "Verstappen", "Belgian")).await.unwrap();
        assert_eq!(replaced.unwrap().id, Some(1));
        assert!(repo.remove(1).await.unwrap());
        assert!(!repo.remove(1).await.unwrap());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_replace_racing_remove_never_inserts() {
        let repo = Arc::new(InMemoryRepository::<Driver>::new());
        repo.save(max()).await.unwrap();

        let mut tasks = Vec::new();
        for _ in 0..500 {
            let replacer = repo.clone();
            tasks.push(tokio::spawn(async move {
                replacer.replace(1, max()).await.unwrap();
            }));
            let remover = repo.clone();
            tasks.push(tokio::spawn(async move {
                remover.remove(1).await.unwrap();
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        // Only id 1 ever existed; a replace after the delete writes nothing
        let ids: Vec<_> = repo.find_all().await.unwrap().iter().map(|d| d.id).collect();
        assert!(ids.is_empty() || ids == vec![Some(1)]);
        assert_eq!(repo.save(max()).await.unwrap().id, Some(2));
    }
}
