//! YouTube Data API client used to resolve trailers

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::YoutubeSettings;
use super::catalog::{CatalogError, Trailer, TrailerSource};

const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct YoutubeClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    embed_host: String,
}

impl YoutubeClient {
    pub fn new(settings: &YoutubeSettings) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone().filter(|k| !k.trim().is_empty()),
            embed_host: settings.embed_host.clone(),
        })
    }

    /// First embeddable video for `query`, if any
    async fn first_video_id(&self, api_key: &str, query: &str) -> Result<Option<String>, CatalogError> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("key", api_key),
                ("maxResults", "1"),
                ("type", "video"),
                ("videoEmbeddable", "true"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body: VideoSearchResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        Ok(body.items.into_iter().find_map(|item| item.id.video_id))
    }
}

#[async_trait]
impl TrailerSource for YoutubeClient {
    async fn find_trailer(&self, title: &str) -> Option<Trailer> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::debug!(title, "No YouTube API key configured, skipping trailer lookup");
            return None;
        };

        let query = format!("{} official trailer", title);
        crate::log_api_request!("youtube_search", query = %query);

        match self.first_video_id(api_key, &query).await {
            Ok(Some(video_id)) => {
                tracing::info!(title, video_id = %video_id, "Trailer resolved");
                Some(Trailer::new(video_id, &self.embed_host))
            }
            Ok(None) => {
                tracing::info!(title, "No trailer found");
                None
            }
            Err(e) => {
                tracing::warn!(title, error = %e, "Failed to fetch trailer");
                None
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct VideoSearchResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
struct VideoItem {
    id: VideoId,
}

#[derive(Debug, Deserialize)]
struct VideoId {
    #[serde(rename = "videoId", default)]
    video_id: Option<String>,
}
