//! Scriptable fakes for the external APIs and storage.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::catalog::{CatalogError, MovieCatalog, SearchResponse, Trailer, TrailerSource};
use super::content::{MovieDetail, MovieSummary};
use super::storage::{KeyValueStore, StorageError};

pub fn movie(id: &str, title: &str) -> MovieSummary {
    MovieSummary {
        id: id.to_string(),
        title: title.to_string(),
        year: "2000".to_string(),
        poster_url: None,
    }
}

/// `count` distinct movies with ids `<prefix>0`, `<prefix>1`, ...
pub fn movies(prefix: &str, count: usize) -> Vec<MovieSummary> {
    (0..count)
        .map(|i| movie(&format!("{}{}", prefix, i), &format!("Movie {}{}", prefix, i)))
        .collect()
}

pub fn detail(id: &str, title: &str) -> MovieDetail {
    MovieDetail {
        summary: movie(id, title),
        genre: Some("Drama".to_string()),
        director: Some("Someone".to_string()),
        cast: Some("Actor One, Actor Two".to_string()),
        plot: Some("Things happen.".to_string()),
        rating: Some("7.5".to_string()),
    }
}

/// A recorded search call for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSearch {
    pub query: String,
    pub page: u32,
}

/// Mock movie catalog.
///
/// Unknown queries answer with an empty (no match) response, unknown ids
/// with `NotFound`.
#[derive(Default)]
pub struct MockCatalog {
    pages: Mutex<HashMap<(String, u32), SearchResponse>>,
    query_delays: Mutex<HashMap<String, Duration>>,
    page_delays: Mutex<HashMap<(String, u32), Duration>>,
    failing: Mutex<HashSet<String>>,
    details: Mutex<HashMap<String, MovieDetail>>,
    detail_delays: Mutex<HashMap<String, Duration>>,
    searches: Mutex<Vec<RecordedSearch>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Page 1 response for `query`
    pub fn set_results(&self, query: &str, results: Vec<MovieSummary>, total_results: u32) {
        self.set_page(query, 1, results, total_results);
    }

    pub fn set_page(&self, query: &str, page: u32, results: Vec<MovieSummary>, total_results: u32) {
        self.pages.lock().unwrap().insert(
            (query.to_string(), page),
            SearchResponse {
                results,
                total_results,
            },
        );
    }

    pub fn set_delay(&self, query: &str, delay: Duration) {
        self.query_delays.lock().unwrap().insert(query.to_string(), delay);
    }

    pub fn set_page_delay(&self, query: &str, page: u32, delay: Duration) {
        self.page_delays
            .lock()
            .unwrap()
            .insert((query.to_string(), page), delay);
    }

    pub fn fail_query(&self, query: &str) {
        self.failing.lock().unwrap().insert(query.to_string());
    }

    pub fn set_detail(&self, detail: MovieDetail) {
        self.details
            .lock()
            .unwrap()
            .insert(detail.summary.id.clone(), detail);
    }

    pub fn set_detail_delay(&self, id: &str, delay: Duration) {
        self.detail_delays.lock().unwrap().insert(id.to_string(), delay);
    }

    pub fn search_calls(&self) -> Vec<RecordedSearch> {
        self.searches.lock().unwrap().clone()
    }
}

#[async_trait]
impl MovieCatalog for MockCatalog {
    async fn search(&self, query: &str, page: u32) -> Result<SearchResponse, CatalogError> {
        self.searches.lock().unwrap().push(RecordedSearch {
            query: query.to_string(),
            page,
        });

        let delay = {
            let by_page = self.page_delays.lock().unwrap().get(&(query.to_string(), page)).copied();
            by_page.or_else(|| self.query_delays.lock().unwrap().get(query).copied())
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.lock().unwrap().contains(query) {
            return Err(CatalogError::Status {
                status: 503,
                message: "service unavailable".to_string(),
            });
        }

        Ok(self
            .pages
            .lock()
            .unwrap()
            .get(&(query.to_string(), page))
            .cloned()
            .unwrap_or_default())
    }

    async fn get_detail(&self, id: &str) -> Result<MovieDetail, CatalogError> {
        let delay = self.detail_delays.lock().unwrap().get(id).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.details
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}

/// Mock trailer source keyed by title.
#[derive(Default)]
pub struct MockTrailers {
    trailers: Mutex<HashMap<String, String>>,
    lookups: Mutex<Vec<String>>,
}

impl MockTrailers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_trailer(&self, title: &str, video_id: &str) {
        self.trailers
            .lock()
            .unwrap()
            .insert(title.to_string(), video_id.to_string());
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl TrailerSource for MockTrailers {
    async fn find_trailer(&self, title: &str) -> Option<Trailer> {
        self.lookups.lock().unwrap().push(title.to_string());
        self.trailers
            .lock()
            .unwrap()
            .get(title)
            .map(|id| Trailer::new(id.clone(), "www.youtube.com"))
    }
}

/// Storage whose writes always fail.
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other("disk full")))
    }
}
