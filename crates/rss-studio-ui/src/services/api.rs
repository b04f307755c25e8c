//! HTTP client helpers (REST).

use crate::core::http::{ApiError, StudioApi, interpret_response};
use crate::models::{
    Episode, EpisodeId, Feed, FeedCreate, FeedId, FeedRefreshResult, FullContent,
};
use gloo::console;
use gloo_net::http::Request;
use rss_studio_api_models::{
    episodes_path, feed_path, feed_refresh_path, feeds_path, full_content_path,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::cell::RefCell;

const JSON: &str = "application/json";

/// REST client for the feed backend.
#[derive(Debug)]
pub(crate) struct ApiClient {
    pub base_url: String,
    generic_error: RefCell<String>,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>, generic_error: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            generic_error: RefCell::new(generic_error.into()),
        }
    }

    /// Swap the fallback message after a locale change.
    pub(crate) fn set_generic_error(&self, message: impl Into<String>) {
        *self.generic_error.borrow_mut() = message.into();
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: Request) -> Result<Option<T>, ApiError> {
        let fallback = self.generic_error.borrow().clone();
        let response = request
            .header("Content-Type", JSON)
            .send()
            .await
            .map_err(|err| {
                console::error!(format!("request failed: {err}"));
                ApiError::transport(fallback.clone())
            })?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        interpret_response(status, &body, &fallback)
    }
}

impl StudioApi for ApiClient {
    async fn list_feeds(&self) -> Result<Vec<Feed>, ApiError> {
        let feeds = self.send(Request::get(&self.url(feeds_path()))).await?;
        Ok(feeds.unwrap_or_default())
    }

    async fn create_feed(&self, body: &FeedCreate) -> Result<(), ApiError> {
        let request = Request::post(&self.url(feeds_path()))
            .json(body)
            .map_err(|err| ApiError::transport(err.to_string()))?;
        self.send::<Value>(request).await.map(drop)
    }

    async fn delete_feed(&self, id: FeedId) -> Result<(), ApiError> {
        self.send::<Value>(Request::delete(&self.url(&feed_path(id))))
            .await
            .map(drop)
    }

    async fn refresh_feed(&self, id: FeedId) -> Result<(), ApiError> {
        let result = self
            .send::<FeedRefreshResult>(Request::post(&self.url(&feed_refresh_path(id))))
            .await?;
        if let Some(result) = result {
            console::debug!(format!(
                "feed {} refreshed: {} new, {} skipped",
                result.feed_id, result.new_items, result.skipped_items
            ));
        }
        Ok(())
    }

    async fn list_episodes(&self, filter: Option<FeedId>) -> Result<Vec<Episode>, ApiError> {
        let episodes = self
            .send(Request::get(&self.url(&episodes_path(filter))))
            .await?;
        Ok(episodes.unwrap_or_default())
    }

    async fn full_content(&self, id: EpisodeId) -> Result<Option<String>, ApiError> {
        let body = self
            .send::<FullContent>(Request::get(&self.url(&full_content_path(id))))
            .await?;
        Ok(body
            .and_then(|body| body.content)
            .filter(|content| !content.trim().is_empty()))
    }
}
