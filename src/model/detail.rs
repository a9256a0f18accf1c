//! Detail overlay: full record plus trailer for one selected movie

use std::sync::Arc;

use tokio::sync::Mutex;

use super::catalog::{MovieCatalog, Trailer, TrailerSource};
use super::content::{MovieDetail, MovieSummary};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrailerState {
    Searching,
    Found(Trailer),
    Unavailable,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DetailView {
    #[default]
    Closed,
    Loading {
        id: String,
    },
    Loaded {
        detail: MovieDetail,
        trailer: TrailerState,
    },
    Failed {
        id: String,
    },
}

impl DetailView {
    pub fn is_open(&self) -> bool {
        !matches!(self, DetailView::Closed)
    }

    pub fn summary(&self) -> Option<&MovieSummary> {
        match self {
            DetailView::Loaded { detail, .. } => Some(&detail.summary),
            _ => None,
        }
    }
}

#[derive(Default)]
struct DetailInner {
    view: DetailView,
    seq: u64,
}

#[derive(Clone)]
pub struct DetailController {
    catalog: Arc<dyn MovieCatalog>,
    trailers: Arc<dyn TrailerSource>,
    inner: Arc<Mutex<DetailInner>>,
}

impl DetailController {
    pub fn new(catalog: Arc<dyn MovieCatalog>, trailers: Arc<dyn TrailerSource>) -> Self {
        Self {
            catalog,
            trailers,
            inner: Arc::new(Mutex::new(DetailInner::default())),
        }
    }

    /// Open the overlay for `id`. The detail renders as soon as it arrives;
    /// the trailer fills in afterwards or is marked unavailable.
    pub async fn open(&self, id: &str) {
        let ticket = {
            let mut inner = self.inner.lock().await;
            inner.seq += 1;
            inner.view = DetailView::Loading { id: id.to_string() };
            inner.seq
        };

        let title = match self.catalog.get_detail(id).await {
            Ok(detail) => {
                let mut inner = self.inner.lock().await;
                if inner.seq != ticket {
                    tracing::debug!(id, "Discarding stale movie detail");
                    return;
                }
                let title = detail.summary.title.clone();
                inner.view = DetailView::Loaded {
                    detail,
                    trailer: TrailerState::Searching,
                };
                title
            }
            Err(e) => {
                if e.is_transport() {
                    tracing::error!(id, error = %e, "Failed to fetch movie detail");
                } else {
                    tracing::info!(id, "No detail record for movie");
                }
                let mut inner = self.inner.lock().await;
                if inner.seq == ticket {
                    inner.view = DetailView::Failed { id: id.to_string() };
                }
                return;
            }
        };

        let trailer = self.trailers.find_trailer(&title).await;

        let mut inner = self.inner.lock().await;
        if inner.seq != ticket {
            tracing::debug!(id, "Discarding stale trailer");
            return;
        }
        if let DetailView::Loaded { trailer: slot, .. } = &mut inner.view {
            *slot = match trailer {
                Some(trailer) => {
                    tracing::debug!(id, video_id = %trailer.video_id, "Trailer attached");
                    TrailerState::Found(trailer)
                }
                None => TrailerState::Unavailable,
            };
        }
    }

    pub async fn close(&self) {
        let mut inner = self.inner.lock().await;
        inner.seq += 1;
        inner.view = DetailView::Closed;
    }

    pub async fn view(&self) -> DetailView {
        self.inner.lock().await.view.clone()
    }
}
