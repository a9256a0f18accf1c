//! Search, paging, detail and startup preload tasks
//!
//! Network-bound work runs on spawned tasks so the event loop keeps drawing;
//! the flow engines decide which responses are still current.

use tokio::task::JoinHandle;

use crate::model::{load_popular, Suggestion};
use super::AppController;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageDirection {
    Prev,
    Next,
}

impl AppController {
    /// Commit the picked suggestion (or raw input) as the active query.
    pub async fn commit_search(&self, suggestion: Suggestion) -> Option<JoinHandle<()>> {
        let query = suggestion.query();
        if query.is_empty() {
            return None;
        }

        self.model.suggestions.commit(&query).await;
        self.model.show_results().await;
        tracing::info!(query = %query, "Search committed");

        let controller = self.clone();
        Some(tokio::spawn(async move {
            if controller.model.search.submit(&query).await {
                controller.model.reset_result_selection().await;
            }
        }))
    }

    pub fn change_page(&self, direction: PageDirection) -> JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move {
            let applied = match direction {
                PageDirection::Prev => controller.model.search.prev_page().await,
                PageDirection::Next => controller.model.search.next_page().await,
            };
            if applied {
                controller.model.reset_result_selection().await;
            }
        })
    }

    pub fn open_detail(&self, id: String) -> JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move {
            controller.model.detail.open(&id).await;
        })
    }

    pub async fn close_detail(&self) {
        self.model.detail.close().await;
    }

    /// Start the popular-titles preload. It runs to completion even if the
    /// user searches in the meantime.
    pub async fn load_popular(&self) -> JoinHandle<()> {
        self.model.set_popular_loading().await;

        let controller = self.clone();
        tokio::spawn(async move {
            let movies = load_popular(controller.catalog.as_ref(), &controller.popular_titles).await;
            controller.model.set_popular(movies).await;
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::model::testing::{detail, movie, movies, MockCatalog, MockTrailers};
    use crate::model::{ActiveSection, AppModel, DetailView, MemoryStore, SearchState};

    fn controller_with(catalog: Arc<MockCatalog>, popular: Vec<String>) -> AppController {
        let model = AppModel::new(
            catalog.clone(),
            Arc::new(MockTrailers::new()),
            Arc::new(MemoryStore::new()),
            Duration::from_millis(500),
            2,
        );
        AppController::new(model, catalog, popular)
    }

    #[tokio::test]
    async fn test_commit_search_fetches_and_focuses_results() {
        let catalog = Arc::new(MockCatalog::new());
        catalog.set_results("Batman", movies("bat", 12), 12);
        let controller = controller_with(catalog, Vec::new());

        let handle = controller
            .commit_search(Suggestion::Text(" Batman ".into()))
            .await
            .unwrap();
        handle.await.unwrap();

        let view = controller.model.snapshot().await;
        assert_eq!(view.ui.active_section, ActiveSection::Results);
        assert_eq!(view.suggestions.input, "Batman");
        assert_eq!(view.visible_movies().len(), 10);
        let pagination = view.pagination.unwrap();
        assert!(pagination.has_next());
        assert!(!pagination.has_prev());
    }

    #[tokio::test]
    async fn test_blank_commit_does_nothing() {
        let catalog = Arc::new(MockCatalog::new());
        let controller = controller_with(catalog.clone(), Vec::new());

        assert!(controller.commit_search(Suggestion::Text("  ".into())).await.is_none());
        assert_eq!(controller.model.search.state().await, SearchState::Idle);
        assert!(catalog.search_calls().is_empty());
    }

    #[tokio::test]
    async fn test_selected_record_commits_its_title() {
        let catalog = Arc::new(MockCatalog::new());
        catalog.set_results("Inception", vec![movie("tt1375666", "Inception")], 1);
        let controller = controller_with(catalog.clone(), Vec::new());

        let pick = Suggestion::Movie(movie("tt1375666", "Inception"));
        controller.commit_search(pick).await.unwrap().await.unwrap();

        assert_eq!(catalog.search_calls()[0].query, "Inception");
    }

    #[tokio::test]
    async fn test_page_change_scrolls_to_top() {
        let catalog = Arc::new(MockCatalog::new());
        catalog.set_page("Star", 1, movies("s1-", 10), 20);
        catalog.set_page("Star", 2, movies("s2-", 10), 20);
        let controller = controller_with(catalog, Vec::new());

        controller
            .commit_search(Suggestion::Text("Star".into()))
            .await
            .unwrap()
            .await
            .unwrap();
        controller.model.move_selection_down(10).await;
        controller.model.move_selection_down(10).await;

        controller.change_page(PageDirection::Next).await.unwrap();

        let view = controller.model.snapshot().await;
        assert_eq!(view.pagination.unwrap().page, 2);
        assert_eq!(view.ui.result_selected, 0);
    }

    #[tokio::test]
    async fn test_prev_on_first_page_keeps_selection() {
        let catalog = Arc::new(MockCatalog::new());
        catalog.set_results("Heat", movies("h", 3), 3);
        let controller = controller_with(catalog.clone(), Vec::new());
        controller
            .commit_search(Suggestion::Text("Heat".into()))
            .await
            .unwrap()
            .await
            .unwrap();
        controller.model.move_selection_down(3).await;

        controller.change_page(PageDirection::Prev).await.unwrap();

        assert_eq!(controller.model.get_ui_state().await.result_selected, 1);
        assert_eq!(catalog.search_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_open_and_close_detail() {
        let catalog = Arc::new(MockCatalog::new());
        catalog.set_detail(detail("tt0113277", "Heat"));
        let controller = controller_with(catalog, Vec::new());

        controller.open_detail("tt0113277".into()).await.unwrap();
        assert!(matches!(
            controller.model.detail.view().await,
            DetailView::Loaded { .. }
        ));

        controller.close_detail().await;
        assert_eq!(controller.model.detail.view().await, DetailView::Closed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_popular_preload_survives_a_search() {
        let catalog = Arc::new(MockCatalog::new());
        catalog.set_results("Heat", vec![movie("tt0113277", "Heat")], 1);
        catalog.set_delay("Heat", Duration::from_secs(1));
        catalog.set_results("Alien", vec![movie("tt0078748", "Alien")], 1);
        let controller = controller_with(catalog, vec!["Heat".into(), "Alien".into()]);

        let preload = controller.load_popular().await;
        assert!(controller.model.snapshot().await.popular.loading);

        controller
            .commit_search(Suggestion::Text("Alien".into()))
            .await
            .unwrap()
            .await
            .unwrap();
        preload.await.unwrap();

        let view = controller.model.snapshot().await;
        assert!(!view.popular.loading);
        assert_eq!(view.popular.movies.len(), 2);
        assert!(matches!(view.search, SearchState::Ready(_)));
    }
}
