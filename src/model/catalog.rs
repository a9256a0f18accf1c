//! Seams over the external movie and video APIs
//!
//! The flow engines only talk to these traits, so tests can swap in the
//! scripted fakes from `model::testing`.

use async_trait::async_trait;
use thiserror::Error;

use super::content::{MovieDetail, MovieSummary};

/// Errors from the movie database or video search APIs.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network failure, timeout or connection refused.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Detail lookup for an identifier the upstream does not know.
    #[error("Movie not found: {0}")]
    NotFound(String),
}

impl CatalogError {
    /// Whether the failure happened on the wire rather than in the data
    pub fn is_transport(&self) -> bool {
        !matches!(self, CatalogError::NotFound(_))
    }
}

/// One search response. An upstream "no match" is an empty response, not an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResponse {
    pub results: Vec<MovieSummary>,
    pub total_results: u32,
}

/// A playable trailer resolved from a title
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trailer {
    pub video_id: String,
    pub embed_url: String,
}

impl Trailer {
    pub fn new(video_id: impl Into<String>, embed_host: &str) -> Self {
        let video_id = video_id.into();
        let embed_url = format!("https://{}/embed/{}", embed_host, video_id);
        Self { video_id, embed_url }
    }
}

/// Movie database search and detail lookups.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Search titles; `page` starts at 1.
    async fn search(&self, query: &str, page: u32) -> Result<SearchResponse, CatalogError>;

    /// Fetch the full record for an identifier.
    async fn get_detail(&self, id: &str) -> Result<MovieDetail, CatalogError>;
}

/// Trailer resolution. Failures are swallowed and reported as `None`.
#[async_trait]
pub trait TrailerSource: Send + Sync {
    async fn find_trailer(&self, title: &str) -> Option<Trailer>;
}
