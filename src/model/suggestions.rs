//! Debounced autocomplete over the movie catalog
//!
//! Each input change bumps a generation counter and schedules a fetch after
//! the debounce delay. The scheduled task only fetches if its generation is
//! still current when the timer fires, and only applies the response if the
//! generation is still current when the response arrives. Older responses are
//! not cancelled, they are dropped on arrival.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use super::catalog::MovieCatalog;
use super::content::{dedup_by_id, MovieSummary};

/// Something the user picked from the search box
#[derive(Clone, Debug)]
pub enum Suggestion {
    /// Free text typed by the user
    Text(String),
    /// A record from the suggestion list
    Movie(MovieSummary),
}

impl Suggestion {
    /// Query to commit when this suggestion is selected
    pub fn query(&self) -> String {
        match self {
            Suggestion::Text(text) => text.trim().to_string(),
            Suggestion::Movie(movie) => movie.title.clone(),
        }
    }
}

/// What the view needs to draw the search box and dropdown
#[derive(Clone, Debug, Default)]
pub struct SuggestionSnapshot {
    pub input: String,
    pub items: Vec<MovieSummary>,
    pub loading: bool,
    /// Bumped every time `items` is replaced
    pub list_generation: u64,
}

#[derive(Default)]
struct SuggestionState {
    input: String,
    items: Vec<MovieSummary>,
    loading: bool,
    generation: u64,
    list_generation: u64,
}

impl SuggestionState {
    fn replace_items(&mut self, items: Vec<MovieSummary>) {
        self.items = items;
        self.list_generation += 1;
    }
}

#[derive(Clone)]
pub struct SuggestionEngine {
    catalog: Arc<dyn MovieCatalog>,
    state: Arc<Mutex<SuggestionState>>,
    debounce: Duration,
    min_chars: usize,
}

impl SuggestionEngine {
    pub fn new(catalog: Arc<dyn MovieCatalog>, debounce: Duration, min_chars: usize) -> Self {
        Self {
            catalog,
            state: Arc::new(Mutex::new(SuggestionState::default())),
            debounce,
            min_chars,
        }
    }

    /// Record the live input and (re)start the debounce timer.
    ///
    /// Inputs shorter than `min_chars` clear the list without a fetch.
    pub async fn input_changed(&self, input: impl Into<String>) {
        let input = input.into();
        let mut state = self.state.lock().await;
        state.generation += 1;
        state.input = input.clone();

        if input.trim().chars().count() < self.min_chars {
            state.replace_items(Vec::new());
            state.loading = false;
            return;
        }

        let generation = state.generation;
        drop(state);

        let engine = self.clone();
        tokio::spawn(async move {
            engine.debounced_fetch(generation, input).await;
        });
    }

    async fn debounced_fetch(&self, generation: u64, input: String) {
        tokio::time::sleep(self.debounce).await;

        {
            let mut state = self.state.lock().await;
            if state.generation != generation {
                tracing::trace!(generation, "Suggestion timer superseded");
                return;
            }
            state.loading = true;
        }

        let result = self.catalog.search(input.trim(), 1).await;

        let mut state = self.state.lock().await;
        if state.generation != generation {
            tracing::debug!(
                input = %input,
                generation,
                latest = state.generation,
                "Discarding stale suggestions"
            );
            return;
        }
        state.loading = false;

        match result {
            Ok(response) => {
                state.replace_items(dedup_by_id(response.results));
                tracing::debug!(input = %input, count = state.items.len(), "Suggestions updated");
            }
            Err(e) => {
                tracing::warn!(input = %input, error = %e, "Error fetching suggestions");
            }
        }
    }

    /// Replace the input with a committed query and close the dropdown.
    ///
    /// Pending timers and in-flight fetches become stale.
    pub async fn commit(&self, query: &str) {
        let mut state = self.state.lock().await;
        state.generation += 1;
        state.input = query.to_string();
        state.replace_items(Vec::new());
        state.loading = false;
    }

    pub async fn clear(&self) {
        self.commit("").await;
    }

    pub async fn input(&self) -> String {
        self.state.lock().await.input.clone()
    }

    pub async fn snapshot(&self) -> SuggestionSnapshot {
        let state = self.state.lock().await;
        SuggestionSnapshot {
            input: state.input.clone(),
            items: state.items.clone(),
            loading: state.loading,
            list_generation: state.list_generation,
        }
    }
}
