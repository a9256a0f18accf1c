//! Startup preload of a fixed list of popular titles

use super::catalog::MovieCatalog;
use super::content::{dedup_by_id, MovieSummary};

#[derive(Clone, Debug, Default)]
pub struct PopularState {
    pub loading: bool,
    pub movies: Vec<MovieSummary>,
}

/// Look up each title in order and keep its first hit.
///
/// Titles that fail or match nothing are skipped; the batch always runs to
/// the end.
pub async fn load_popular(catalog: &dyn MovieCatalog, titles: &[String]) -> Vec<MovieSummary> {
    let mut movies = Vec::with_capacity(titles.len());

    for title in titles {
        match catalog.search(title, 1).await {
            Ok(response) => match response.results.into_iter().next() {
                Some(first) => movies.push(first),
                None => tracing::debug!(title = %title, "Popular title had no match"),
            },
            Err(e) => {
                tracing::warn!(title = %title, error = %e, "Skipping popular title");
            }
        }
    }

    let movies = dedup_by_id(movies);
    tracing::info!(requested = titles.len(), loaded = movies.len(), "Popular titles loaded");
    movies
}
