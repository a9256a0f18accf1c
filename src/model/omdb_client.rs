//! OMDb API client for title search and detail lookups

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::OmdbSettings;
use super::catalog::{CatalogError, MovieCatalog, SearchResponse};
use super::content::{MovieDetail, MovieSummary};

/// OMDb marks missing fields with this sentinel
const UNAVAILABLE: &str = "N/A";

#[derive(Clone)]
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    pub fn new(settings: &OmdbSettings) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
        })
    }

    async fn get<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T, CatalogError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let response = check_status(response).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}

async fn check_status(response: Response) -> Result<Response, CatalogError> {
    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(CatalogError::Status {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response)
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty() && v != UNAVAILABLE)
}

#[async_trait]
impl MovieCatalog for OmdbClient {
    async fn search(&self, query: &str, page: u32) -> Result<SearchResponse, CatalogError> {
        crate::log_api_request!("omdb_search", query, page);

        let page_param = page.to_string();
        let result: Result<OmdbSearchEnvelope, CatalogError> =
            self.get(&[("s", query), ("page", page_param.as_str())]).await;
        crate::log_api_result!("omdb_search", result);

        let envelope = result?;
        if !envelope.is_match() {
            tracing::debug!(query, page, reason = ?envelope.error, "No match from OMDb");
            return Ok(SearchResponse::default());
        }

        let total_results = envelope
            .total_results
            .as_deref()
            .and_then(|t| t.trim().parse::<u32>().ok())
            .unwrap_or(0);

        let results: Vec<MovieSummary> = envelope.search.into_iter().map(Into::into).collect();
        tracing::info!(query, page, returned = results.len(), total_results, "OMDb search completed");

        Ok(SearchResponse {
            results,
            total_results,
        })
    }

    async fn get_detail(&self, id: &str) -> Result<MovieDetail, CatalogError> {
        crate::log_api_request!("omdb_detail", id);

        let result: Result<OmdbDetailRecord, CatalogError> = self.get(&[("i", id)]).await;
        crate::log_api_result!("omdb_detail", result);

        let record = result?;
        if record.response.as_deref() != Some("True") {
            return Err(CatalogError::NotFound(id.to_string()));
        }

        Ok(record.into_detail(id))
    }
}

#[derive(Debug, Deserialize)]
struct OmdbSearchEnvelope {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Search", default)]
    search: Vec<OmdbSearchItem>,
    #[serde(rename = "totalResults", default)]
    total_results: Option<String>,
    #[serde(rename = "Error", default)]
    error: Option<String>,
}

impl OmdbSearchEnvelope {
    fn is_match(&self) -> bool {
        self.response == "True"
    }
}

#[derive(Debug, Deserialize)]
struct OmdbSearchItem {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Poster", default)]
    poster: Option<String>,
}

impl From<OmdbSearchItem> for MovieSummary {
    fn from(item: OmdbSearchItem) -> Self {
        Self {
            id: item.imdb_id,
            title: item.title,
            year: item.year,
            poster_url: present(item.poster),
        }
    }
}

#[derive(Debug, Deserialize)]
struct OmdbDetailRecord {
    #[serde(rename = "Response", default)]
    response: Option<String>,
    #[serde(rename = "imdbID", default)]
    imdb_id: Option<String>,
    #[serde(rename = "Title", default)]
    title: Option<String>,
    #[serde(rename = "Year", default)]
    year: Option<String>,
    #[serde(rename = "Poster", default)]
    poster: Option<String>,
    #[serde(rename = "Genre", default)]
    genre: Option<String>,
    #[serde(rename = "Director", default)]
    director: Option<String>,
    #[serde(rename = "Actors", default)]
    actors: Option<String>,
    #[serde(rename = "Plot", default)]
    plot: Option<String>,
    #[serde(rename = "imdbRating", default)]
    imdb_rating: Option<String>,
}

impl OmdbDetailRecord {
    fn into_detail(self, requested_id: &str) -> MovieDetail {
        MovieDetail {
            summary: MovieSummary {
                id: self.imdb_id.unwrap_or_else(|| requested_id.to_string()),
                title: self.title.unwrap_or_default(),
                year: self.year.unwrap_or_default(),
                poster_url: present(self.poster),
            },
            genre: present(self.genre),
            director: present(self.director),
            cast: present(self.actors),
            plot: present(self.plot),
            rating: present(self.imdb_rating),
        }
    }
}
