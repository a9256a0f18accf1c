//! Committed search and pagination
//!
//! Only the most recently issued fetch is authoritative. Every submit or page
//! change takes a new request sequence number; a response whose number is no
//! longer the latest is dropped when it resolves.

use std::sync::Arc;

use tokio::sync::Mutex;

use super::catalog::MovieCatalog;
use super::content::{dedup_by_id, page_count, SearchResultPage, PAGE_SIZE};

/// Why a committed search shows no results
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyReason {
    /// Upstream reported no match
    NoMatch,
    /// The fetch failed on the wire
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchState {
    #[default]
    Idle,
    Loading {
        query: String,
        page: u32,
    },
    Ready(SearchResultPage),
    Empty {
        query: String,
        reason: EmptyReason,
    },
}

/// Prev/Next availability for the current result page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub total_pages: u32,
}

impl Pagination {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[derive(Default)]
struct SearchInner {
    state: SearchState,
    /// Last submitted query; page changes always re-use it
    committed: Option<String>,
    page: u32,
    total_results: u32,
    seq: u64,
}

#[derive(Clone)]
pub struct SearchController {
    catalog: Arc<dyn MovieCatalog>,
    inner: Arc<Mutex<SearchInner>>,
}

impl SearchController {
    pub fn new(catalog: Arc<dyn MovieCatalog>) -> Self {
        Self {
            catalog,
            inner: Arc::new(Mutex::new(SearchInner::default())),
        }
    }

    /// Commit `query` and fetch its first page.
    ///
    /// Blank queries are ignored. Returns `true` when this fetch resolved,
    /// was still authoritative and succeeded.
    pub async fn submit(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }

        let ticket = {
            let mut inner = self.inner.lock().await;
            inner.seq += 1;
            inner.committed = Some(query.to_string());
            inner.page = 1;
            inner.total_results = 0;
            inner.state = SearchState::Loading {
                query: query.to_string(),
                page: 1,
            };
            inner.seq
        };

        tracing::debug!(query, ticket, "Submitting search");
        self.fetch(ticket, query.to_string(), 1).await
    }

    /// Fetch `target` for the last committed query.
    ///
    /// Targets outside `1..=total_pages` are rejected without touching state.
    /// Returns `true` when the new page was applied, which is the cue to
    /// scroll back to the top.
    pub async fn change_page(&self, target: u32) -> bool {
        let (ticket, query) = {
            let mut inner = self.inner.lock().await;
            let Some(query) = inner.committed.clone() else {
                return false;
            };
            let total_pages = page_count(inner.total_results);
            if target < 1 || target > total_pages {
                tracing::debug!(target, total_pages, "Rejected out-of-range page change");
                return false;
            }

            inner.seq += 1;
            inner.state = SearchState::Loading {
                query: query.clone(),
                page: target,
            };
            (inner.seq, query)
        };

        tracing::debug!(query = %query, page = target, ticket, "Changing page");
        self.fetch(ticket, query, target).await
    }

    pub async fn next_page(&self) -> bool {
        match self.pagination().await {
            Some(p) if p.has_next() => self.change_page(p.page + 1).await,
            _ => false,
        }
    }

    pub async fn prev_page(&self) -> bool {
        match self.pagination().await {
            Some(p) if p.has_prev() => self.change_page(p.page - 1).await,
            _ => false,
        }
    }

    async fn fetch(&self, ticket: u64, query: String, page: u32) -> bool {
        let result = self.catalog.search(&query, page).await;

        let mut inner = self.inner.lock().await;
        if inner.seq != ticket {
            tracing::debug!(query = %query, page, ticket, latest = inner.seq, "Discarding stale search response");
            return false;
        }

        match result {
            Ok(response) if !response.results.is_empty() => {
                let mut movies = dedup_by_id(response.results);
                movies.truncate(PAGE_SIZE as usize);
                let total_results = response.total_results.max(movies.len() as u32);

                tracing::info!(query = %query, page, shown = movies.len(), total_results, "Search results ready");
                inner.page = page;
                inner.total_results = total_results;
                inner.state = SearchState::Ready(SearchResultPage {
                    query,
                    page,
                    movies,
                    total_results,
                });
                true
            }
            Ok(_) => {
                tracing::info!(query = %query, page, "Search returned no results");
                inner.total_results = 0;
                inner.state = SearchState::Empty {
                    query,
                    reason: EmptyReason::NoMatch,
                };
                true
            }
            Err(e) => {
                tracing::error!(query = %query, page, error = %e, "Search failed");
                inner.total_results = 0;
                inner.state = SearchState::Empty {
                    query,
                    reason: EmptyReason::Failed,
                };
                false
            }
        }
    }

    pub async fn state(&self) -> SearchState {
        self.inner.lock().await.state.clone()
    }

    #[cfg(test)]
    pub async fn committed_query(&self) -> Option<String> {
        self.inner.lock().await.committed.clone()
    }

    /// Present only while a result page is displayed
    pub async fn pagination(&self) -> Option<Pagination> {
        let inner = self.inner.lock().await;
        match &inner.state {
            SearchState::Ready(page) => Some(Pagination {
                page: page.page,
                total_pages: page.total_pages(),
            }),
            _ => None,
        }
    }
}
