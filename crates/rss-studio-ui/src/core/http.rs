//! HTTP contract shared by the browser client and host-side tests.
//!
//! # Design
//! - Response interpretation is a pure function of `(status, body)` so the
//!   error/204 rules are testable without a browser.
//! - UI flows depend on [`StudioApi`], never on the concrete client.

use crate::models::{Episode, EpisodeId, ErrorBody, Feed, FeedCreate, FeedId};
use serde::de::DeserializeOwned;
use std::future::Future;
use thiserror::Error;

/// HTTP 204: success without a payload.
pub const NO_CONTENT: u16 = 204;

/// Failure surfaced by an API call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status, `None` for transport failures.
    pub status: Option<u16>,
    /// Message shown to the user.
    pub message: String,
}

impl ApiError {
    /// Failure before any HTTP status was received.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// Failure tied to an HTTP response.
    #[must_use]
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }
}

/// Whether a status is in the 2xx range.
#[must_use]
pub const fn is_success(status: u16) -> bool {
    status >= 200 && status < 300
}

/// Build the error for a non-success response.
///
/// Uses the body's `detail` when it parses, otherwise `fallback`.
#[must_use]
pub fn error_from_body(status: u16, body: &str, fallback: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message())
        .unwrap_or_else(|| fallback.to_string());
    ApiError::http(status, message)
}

/// Interpret a raw response.
///
/// Non-2xx statuses become [`ApiError`]; 204 and empty bodies yield `None`.
///
/// # Errors
/// Returns [`ApiError`] for non-success statuses and undecodable bodies.
pub fn interpret_response<T: DeserializeOwned>(
    status: u16,
    body: &str,
    fallback: &str,
) -> Result<Option<T>, ApiError> {
    if !is_success(status) {
        return Err(error_from_body(status, body, fallback));
    }
    if status == NO_CONTENT || body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(body)
        .map(Some)
        .map_err(|err| ApiError::http(status, format!("{fallback}: {err}")))
}

/// Backend operations the dashboard performs.
pub trait StudioApi {
    /// `GET /feeds`.
    fn list_feeds(&self) -> impl Future<Output = Result<Vec<Feed>, ApiError>>;
    /// `POST /feeds`.
    fn create_feed(&self, body: &FeedCreate) -> impl Future<Output = Result<(), ApiError>>;
    /// `DELETE /feeds/{id}`.
    fn delete_feed(&self, id: FeedId) -> impl Future<Output = Result<(), ApiError>>;
    /// `POST /feeds/{id}/refresh`.
    fn refresh_feed(&self, id: FeedId) -> impl Future<Output = Result<(), ApiError>>;
    /// `GET /episodes[?feed_id=]`.
    fn list_episodes(
        &self,
        filter: Option<FeedId>,
    ) -> impl Future<Output = Result<Vec<Episode>, ApiError>>;
    /// `GET /episodes/{id}/full-content`; `None` when the body is empty.
    fn full_content(&self, id: EpisodeId)
    -> impl Future<Output = Result<Option<String>, ApiError>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FullContent;

    const FALLBACK: &str = "请求失败";

    #[test]
    fn error_detail_is_used_when_present() {
        let err = error_from_body(404, r#"{"detail":"订阅不存在"}"#, FALLBACK);
        assert_eq!(err.status, Some(404));
        assert_eq!(err.to_string(), "订阅不存在");
    }

    #[test]
    fn error_falls_back_for_missing_detail_or_bad_json() {
        assert_eq!(error_from_body(500, "{}", FALLBACK).message, FALLBACK);
        assert_eq!(error_from_body(502, "<html>", FALLBACK).message, FALLBACK);
        assert_eq!(error_from_body(500, "", FALLBACK).message, FALLBACK);
    }

    #[test]
    fn no_content_yields_none() {
        let parsed: Option<FullContent> = interpret_response(NO_CONTENT, "", FALLBACK).unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn success_body_is_decoded() {
        let parsed: Option<FullContent> =
            interpret_response(200, r#"{"content":"hello"}"#, FALLBACK).unwrap();
        assert_eq!(parsed.and_then(|body| body.content).as_deref(), Some("hello"));
    }

    #[test]
    fn non_success_is_an_error_even_with_valid_json() {
        let err = interpret_response::<FullContent>(400, r#"{"detail":"bad url"}"#, FALLBACK)
            .unwrap_err();
        assert_eq!(err, ApiError::http(400, "bad url"));
    }

    #[test]
    fn undecodable_success_body_is_an_error() {
        let err = interpret_response::<Vec<u8>>(200, "not json", FALLBACK).unwrap_err();
        assert_eq!(err.status, Some(200));
        assert!(err.message.starts_with(FALLBACK));
    }
}
