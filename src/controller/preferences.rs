//! Favorite and theme toggles

use crate::model::MovieSummary;
use super::AppController;

impl AppController {
    /// Flip the favorite flag for `movie`. A failed write keeps the new
    /// in-memory state and shows an error notification.
    pub async fn toggle_favorite(&self, movie: &MovieSummary) {
        match self.model.favorites.toggle(movie).await {
            Ok(now_favorite) => {
                tracing::debug!(id = %movie.id, now_favorite, "Favorite toggled");
            }
            Err(e) => {
                tracing::error!(id = %movie.id, error = %e, "Failed to persist favorites");
                let message = Self::format_error(&anyhow::Error::from(e));
                self.model.set_error(message).await;
            }
        }

        let count = self.model.favorites.list().await.len();
        self.model.clamp_favorites_selection(count).await;
    }

    pub async fn toggle_theme(&self) {
        if let Err(e) = self.model.theme.toggle().await {
            tracing::error!(error = %e, "Failed to persist theme");
            let message = Self::format_error(&anyhow::Error::from(e));
            self.model.set_error(message).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crate::controller::AppController;
    use crate::model::testing::{movie, FailingStore, MockCatalog, MockTrailers};
    use crate::model::{AppModel, KeyValueStore, MemoryStore, ThemeMode};

    fn controller_with(storage: Arc<dyn KeyValueStore>) -> AppController {
        let catalog = Arc::new(MockCatalog::new());
        let model = AppModel::new(
            catalog.clone(),
            Arc::new(MockTrailers::new()),
            storage,
            Duration::from_millis(500),
            2,
        );
        AppController::new(model, catalog, Vec::new())
    }

    #[tokio::test]
    async fn test_toggle_favorite_persists() {
        let storage = Arc::new(MemoryStore::new());
        let controller = controller_with(storage.clone());
        let alien = movie("tt0078748", "Alien");

        controller.toggle_favorite(&alien).await;
        assert!(controller.model.favorites.is_favorite("tt0078748").await);
        let stored = storage.get("favorites").unwrap().unwrap();
        assert!(stored.contains("tt0078748"));

        controller.toggle_favorite(&alien).await;
        assert!(!controller.model.favorites.is_favorite("tt0078748").await);
        assert!(!controller.model.has_error().await);
    }

    #[tokio::test]
    async fn test_failed_write_surfaces_error_but_keeps_state() {
        let controller = controller_with(Arc::new(FailingStore));

        controller.toggle_favorite(&movie("tt1", "Alien")).await;
        assert!(controller.model.favorites.is_favorite("tt1").await);
        assert!(controller.model.has_error().await);

        controller.model.clear_error().await;
        controller.toggle_theme().await;
        assert_eq!(controller.model.theme.current().await, ThemeMode::Dark);
        assert!(controller.model.has_error().await);
    }

    #[tokio::test]
    async fn test_theme_round_trips_through_storage() {
        let storage = Arc::new(MemoryStore::new());
        let controller = controller_with(storage.clone());

        controller.toggle_theme().await;
        assert_eq!(storage.get("theme-mode").unwrap().as_deref(), Some("dark"));

        let reopened = controller_with(storage);
        assert_eq!(reopened.model.theme.current().await, ThemeMode::Dark);
    }
}
