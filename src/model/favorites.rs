//! Favorites set, persisted on every mutation

use std::sync::Arc;

use tokio::sync::RwLock;

use super::content::MovieSummary;
use super::storage::{KeyValueStore, StorageError};

pub const FAVORITES_KEY: &str = "favorites";

/// Favorited movies in insertion order, unique by identifier
#[derive(Clone)]
pub struct FavoritesStore {
    favorites: Arc<RwLock<Vec<MovieSummary>>>,
    storage: Arc<dyn KeyValueStore>,
}

impl FavoritesStore {
    /// Hydrate from storage. Missing or unreadable entries start an empty set.
    pub fn load(storage: Arc<dyn KeyValueStore>) -> Self {
        let favorites = match storage.get(FAVORITES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<MovieSummary>>(&raw) {
                Ok(list) => super::content::dedup_by_id(list),
                Err(e) => {
                    tracing::warn!(error = %e, "Stored favorites are corrupt, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read favorites");
                Vec::new()
            }
        };

        tracing::debug!(count = favorites.len(), "Favorites loaded");

        Self {
            favorites: Arc::new(RwLock::new(favorites)),
            storage,
        }
    }

    /// Returns `Ok(false)` when the identifier is already present.
    pub async fn add(&self, movie: MovieSummary) -> Result<bool, StorageError> {
        let mut favorites = self.favorites.write().await;
        if favorites.iter().any(|m| m.id == movie.id) {
            return Ok(false);
        }

        tracing::info!(id = %movie.id, title = %movie.title, "Adding favorite");
        favorites.push(movie);
        self.persist(&favorites)?;
        Ok(true)
    }

    /// Returns `Ok(false)` when the identifier was not present.
    pub async fn remove(&self, id: &str) -> Result<bool, StorageError> {
        let mut favorites = self.favorites.write().await;
        let before = favorites.len();
        favorites.retain(|m| m.id != id);
        if favorites.len() == before {
            return Ok(false);
        }

        tracing::info!(id, "Removed favorite");
        self.persist(&favorites)?;
        Ok(true)
    }

    /// Add if absent, remove if present. Returns whether it is now a favorite.
    pub async fn toggle(&self, movie: &MovieSummary) -> Result<bool, StorageError> {
        if self.is_favorite(&movie.id).await {
            self.remove(&movie.id).await?;
            Ok(false)
        } else {
            self.add(movie.clone()).await?;
            Ok(true)
        }
    }

    pub async fn is_favorite(&self, id: &str) -> bool {
        self.favorites.read().await.iter().any(|m| m.id == id)
    }

    pub async fn list(&self) -> Vec<MovieSummary> {
        self.favorites.read().await.clone()
    }

    fn persist(&self, favorites: &[MovieSummary]) -> Result<(), StorageError> {
        let content = serde_json::to_string(favorites)?;
        self.storage.set(FAVORITES_KEY, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::storage::MemoryStore;
    use crate::model::testing::{movie, FailingStore};

    fn empty_store() -> (FavoritesStore, Arc<MemoryStore>) {
        let backend = Arc::new(MemoryStore::new());
        (FavoritesStore::load(backend.clone()), backend)
    }

    #[tokio::test]
    async fn test_add_then_remove() {
        let (store, _) = empty_store();
        let batman = movie("tt0096895", "Batman");

        assert!(store.add(batman.clone()).await.unwrap());
        assert!(store.is_favorite("tt0096895").await);

        assert!(store.remove("tt0096895").await.unwrap());
        assert!(!store.is_favorite("tt0096895").await);
    }

    #[tokio::test]
    async fn test_repeated_add_does_not_duplicate() {
        let (store, _) = empty_store();
        let batman = movie("tt0096895", "Batman");

        assert!(store.add(batman.clone()).await.unwrap());
        assert!(!store.add(batman.clone()).await.unwrap());

        assert_eq!(store.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_remove_absent_is_noop() {
        let (store, _) = empty_store();
        assert!(!store.remove("tt404").await.unwrap());
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let (store, _) = empty_store();
        store.add(movie("tt3", "Heat")).await.unwrap();
        store.add(movie("tt1", "Alien")).await.unwrap();
        store.add(movie("tt2", "Up")).await.unwrap();

        let ids: Vec<String> = store.list().await.into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["tt3", "tt1", "tt2"]);
    }

    #[tokio::test]
    async fn test_mutations_persist_and_rehydrate() {
        let (store, backend) = empty_store();
        store.add(movie("tt1", "Alien")).await.unwrap();
        store.add(movie("tt2", "Aliens")).await.unwrap();
        store.remove("tt1").await.unwrap();

        let rehydrated = FavoritesStore::load(backend);
        let list = rehydrated.list().await;
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, "tt2");
    }

    #[tokio::test]
    async fn test_toggle_flips_membership() {
        let (store, _) = empty_store();
        let up = movie("tt1049413", "Up");

        assert!(store.toggle(&up).await.unwrap());
        assert!(!store.toggle(&up).await.unwrap());
        assert!(!store.is_favorite(&up.id).await);
    }

    #[tokio::test]
    async fn test_corrupt_storage_starts_empty() {
        let backend = Arc::new(MemoryStore::new().with_entry(FAVORITES_KEY, "[{oops"));
        let store = FavoritesStore::load(backend);
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_persist_failure_is_reported_but_state_changes() {
        let store = FavoritesStore::load(Arc::new(FailingStore));
        let result = store.add(movie("tt1", "Alien")).await;

        assert!(result.is_err());
        assert!(store.is_favorite("tt1").await);
    }
}
