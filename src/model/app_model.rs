//! Main application model with state management

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use super::catalog::{MovieCatalog, TrailerSource};
use super::content::MovieSummary;
use super::detail::{DetailController, DetailView};
use super::favorites::FavoritesStore;
use super::popular::PopularState;
use super::search::{Pagination, SearchController, SearchState};
use super::storage::KeyValueStore;
use super::suggestions::{SuggestionEngine, SuggestionSnapshot};
use super::theme::{ThemeMode, ThemeStore};
use super::types::{ActiveSection, UiState};

const ERROR_DISPLAY_TIME: Duration = Duration::from_secs(5);

/// Everything the view needs for one frame
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub ui: UiState,
    pub theme: ThemeMode,
    pub suggestions: SuggestionSnapshot,
    pub search: SearchState,
    pub pagination: Option<Pagination>,
    pub popular: PopularState,
    pub favorites: Vec<MovieSummary>,
    pub detail: DetailView,
}

impl ViewState {
    /// Rows of the content area: the favorites list, the current result page,
    /// or the popular preload while nothing has been searched yet.
    pub fn visible_movies(&self) -> &[MovieSummary] {
        if self.ui.show_favorites {
            return &self.favorites;
        }
        match &self.search {
            SearchState::Idle => &self.popular.movies,
            SearchState::Ready(page) => &page.movies,
            SearchState::Loading { .. } | SearchState::Empty { .. } => &[],
        }
    }

    pub fn selected_index(&self) -> usize {
        if self.ui.show_favorites {
            self.ui.favorites_selected
        } else {
            self.ui.result_selected
        }
    }

    pub fn selected_movie(&self) -> Option<&MovieSummary> {
        self.visible_movies().get(self.selected_index())
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|m| m.id == id)
    }
}

/// Main application model containing all state
#[derive(Clone)]
pub struct AppModel {
    pub favorites: FavoritesStore,
    pub theme: ThemeStore,
    pub suggestions: SuggestionEngine,
    pub search: SearchController,
    pub detail: DetailController,
    ui_state: Arc<Mutex<UiState>>,
    popular: Arc<Mutex<PopularState>>,
    should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new(
        catalog: Arc<dyn MovieCatalog>,
        trailers: Arc<dyn TrailerSource>,
        storage: Arc<dyn KeyValueStore>,
        debounce: Duration,
        min_chars: usize,
    ) -> Self {
        Self {
            favorites: FavoritesStore::load(storage.clone()),
            theme: ThemeStore::load(storage),
            suggestions: SuggestionEngine::new(catalog.clone(), debounce, min_chars),
            search: SearchController::new(catalog.clone()),
            detail: DetailController::new(catalog, trailers),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            popular: Arc::new(Mutex::new(PopularState::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    pub async fn snapshot(&self) -> ViewState {
        let suggestions = self.suggestions.snapshot().await;
        self.sync_suggestion_list(suggestions.list_generation).await;
        ViewState {
            ui: self.get_ui_state().await,
            theme: self.theme.current().await,
            suggestions,
            search: self.search.state().await,
            pagination: self.search.pagination().await,
            popular: self.popular.lock().await.clone(),
            favorites: self.favorites.list().await,
            detail: self.detail.view().await,
        }
    }

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        let mut state = self.ui_state.lock().await;
        state.active_section = section;
    }

    pub async fn toggle_active_section(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.toggled();
    }

    // ========================================================================
    // Popular preload
    // ========================================================================

    pub async fn set_popular_loading(&self) {
        self.popular.lock().await.loading = true;
    }

    pub async fn set_popular(&self, movies: Vec<MovieSummary>) {
        let mut popular = self.popular.lock().await;
        popular.loading = false;
        popular.movies = movies;
    }

    // ========================================================================
    // Suggestion dropdown selection
    // ========================================================================

    pub async fn suggestion_move_down(&self, item_count: usize) {
        if item_count == 0 {
            return;
        }
        let mut state = self.ui_state.lock().await;
        state.suggestion_selected = Some(match state.suggestion_selected {
            None => 0,
            Some(i) => (i + 1).min(item_count - 1),
        });
    }

    pub async fn suggestion_move_up(&self) {
        let mut state = self.ui_state.lock().await;
        state.suggestion_selected = match state.suggestion_selected {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
    }

    /// Drop the highlight if the list it pointed into has been replaced.
    ///
    /// Returns the highlight that is valid for `list_generation`.
    pub async fn sync_suggestion_list(&self, list_generation: u64) -> Option<usize> {
        let mut state = self.ui_state.lock().await;
        if state.suggestion_list != list_generation {
            state.suggestion_list = list_generation;
            state.suggestion_selected = None;
        }
        state.suggestion_selected
    }

    pub async fn reset_suggestion_selection(&self) {
        self.ui_state.lock().await.suggestion_selected = None;
    }

    // ========================================================================
    // Content list selection
    // ========================================================================

    pub async fn move_selection_up(&self) {
        let mut state = self.ui_state.lock().await;
        let selected = if state.show_favorites {
            &mut state.favorites_selected
        } else {
            &mut state.result_selected
        };
        *selected = selected.saturating_sub(1);
    }

    /// `visible` is the length of the list currently shown.
    pub async fn move_selection_down(&self, visible: usize) {
        let mut state = self.ui_state.lock().await;
        let selected = if state.show_favorites {
            &mut state.favorites_selected
        } else {
            &mut state.result_selected
        };
        if *selected < visible.saturating_sub(1) {
            *selected += 1;
        }
    }

    /// Back to the first row, used after a new page or search is applied
    pub async fn reset_result_selection(&self) {
        self.ui_state.lock().await.result_selected = 0;
    }

    /// Keep the favorites cursor inside the list after a removal
    pub async fn clamp_favorites_selection(&self, len: usize) {
        let mut state = self.ui_state.lock().await;
        state.favorites_selected = state.favorites_selected.min(len.saturating_sub(1));
    }

    pub async fn show_results(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = ActiveSection::Results;
        state.show_favorites = false;
        state.result_selected = 0;
        state.suggestion_selected = None;
    }

    pub async fn toggle_favorites_view(&self) {
        let mut state = self.ui_state.lock().await;
        state.show_favorites = !state.show_favorites;
        state.favorites_selected = 0;
    }

    // ========================================================================
    // Overlays
    // ========================================================================

    pub async fn set_error(&self, message: String) {
        let mut state = self.ui_state.lock().await;
        state.error_message = Some(message);
        state.error_timestamp = Some(Instant::now());
    }

    pub async fn clear_error(&self) {
        let mut state = self.ui_state.lock().await;
        state.error_message = None;
        state.error_timestamp = None;
    }

    pub async fn has_error(&self) -> bool {
        self.ui_state.lock().await.error_message.is_some()
    }

    pub async fn auto_clear_old_errors(&self) {
        let mut state = self.ui_state.lock().await;
        if let Some(timestamp) = state.error_timestamp {
            if timestamp.elapsed() > ERROR_DISPLAY_TIME {
                state.error_message = None;
                state.error_timestamp = None;
            }
        }
    }

    pub async fn show_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = true;
    }

    pub async fn hide_help_popup(&self) {
        self.ui_state.lock().await.show_help_popup = false;
    }

    pub async fn is_help_popup_open(&self) -> bool {
        self.ui_state.lock().await.show_help_popup
    }
}
