#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
//! Shared HTTP DTOs for the RSS Studio feed API.
//!
//! The backend serialises timestamps as ISO-8601 strings that may or may not
//! carry an offset, so timestamps are kept as raw strings on the wire types and
//! parsed leniently through [`parse_timestamp`]. Optional text fields treat
//! blank strings the same as missing ones.
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier of a subscribed feed.
pub type FeedId = i64;
/// Identifier of a single episode/article.
pub type EpisodeId = i64;

/// A subscribed content source (RSS or podcast) polled by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feed {
    /// Unique feed identifier.
    pub id: FeedId,
    /// Subscription source URL.
    pub url: String,
    /// Channel title, when the feed has been fetched at least once.
    #[serde(default)]
    pub title: Option<String>,
    /// Channel description (markdown or HTML).
    #[serde(default)]
    pub description: Option<String>,
    /// Channel homepage.
    #[serde(default)]
    pub link: Option<String>,
    /// Channel language tag.
    #[serde(default)]
    pub language: Option<String>,
    /// Last successful fetch, `None` when never fetched.
    #[serde(default)]
    pub last_checked: Option<String>,
    /// Publication time of the newest item.
    #[serde(default)]
    pub last_published: Option<String>,
}

impl Feed {
    /// Title with blank values treated as missing.
    #[must_use]
    pub fn display_title(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }

    /// Title, or the subscription URL when the feed has no title yet.
    #[must_use]
    pub fn label(&self) -> &str {
        self.display_title().unwrap_or(&self.url)
    }

    /// Homepage link, falling back to the subscription URL.
    #[must_use]
    pub fn homepage(&self) -> Option<&str> {
        non_blank(self.link.as_deref()).or_else(|| non_blank(Some(&self.url)))
    }

    /// Parsed `last_checked` timestamp.
    #[must_use]
    pub fn last_checked_at(&self) -> Option<DateTime<Utc>> {
        self.last_checked.as_deref().and_then(parse_timestamp)
    }
}

/// One item of a feed: an article or a podcast entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Episode {
    /// Unique episode identifier.
    pub id: EpisodeId,
    /// Owning feed.
    pub feed_id: FeedId,
    /// Feed-provided GUID.
    #[serde(default)]
    pub guid: Option<String>,
    /// Episode title.
    #[serde(default)]
    pub title: Option<String>,
    /// Original article URL.
    #[serde(default)]
    pub link: Option<String>,
    /// Summary body (markdown or HTML).
    #[serde(default)]
    pub summary: Option<String>,
    /// Alternative body field some payloads use instead of `summary`.
    #[serde(default)]
    pub description: Option<String>,
    /// Enclosure URL for podcast episodes.
    #[serde(default)]
    pub audio_url: Option<String>,
    /// Display duration as provided by the feed.
    #[serde(default)]
    pub duration: Option<String>,
    /// Publication timestamp.
    #[serde(default)]
    pub published: Option<String>,
}

impl Episode {
    /// Title with blank values treated as missing.
    #[must_use]
    pub fn display_title(&self) -> Option<&str> {
        non_blank(self.title.as_deref())
    }

    /// Summary, else description.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        non_blank(self.summary.as_deref()).or_else(|| non_blank(self.description.as_deref()))
    }

    /// Original article link.
    #[must_use]
    pub fn original_link(&self) -> Option<&str> {
        non_blank(self.link.as_deref())
    }

    /// Audio enclosure; present only for podcast episodes.
    #[must_use]
    pub fn audio(&self) -> Option<&str> {
        non_blank(self.audio_url.as_deref())
    }

    /// Parsed publication timestamp.
    #[must_use]
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published.as_deref().and_then(parse_timestamp)
    }
}

/// Body of `POST /feeds`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedCreate {
    /// Subscription URL.
    pub url: String,
    /// Fetch the feed immediately after creating it.
    #[serde(default = "default_auto_refresh")]
    pub auto_refresh: bool,
}

const fn default_auto_refresh() -> bool {
    true
}

/// Response of `POST /feeds/{id}/refresh`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedRefreshResult {
    /// Refreshed feed.
    pub feed_id: FeedId,
    /// Items inserted by this refresh.
    #[serde(default)]
    pub new_items: u32,
    /// Items already known and skipped.
    #[serde(default)]
    pub skipped_items: u32,
    /// Time of the refresh.
    #[serde(default)]
    pub last_checked: Option<String>,
}

/// Response of `GET /episodes/{id}/full-content`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FullContent {
    /// Extracted article body.
    #[serde(default)]
    pub content: Option<String>,
}

/// Error document returned on non-success statuses.
///
/// `detail` is a string for handler errors and a list of `{loc, msg, type}`
/// objects for request validation errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    /// Human-readable failure detail.
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// Flatten `detail` into a single display message.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(text) => non_blank(Some(text)).map(ToString::to_string),
            Value::Array(items) => {
                let parts: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                if parts.is_empty() {
                    None
                } else {
                    Some(parts.join("; "))
                }
            }
            _ => None,
        }
    }
}

/// Parse a backend timestamp.
///
/// Accepts RFC 3339 strings and naive `YYYY-MM-DDTHH:MM:SS[.fff]` values,
/// which are interpreted as UTC. Anything else yields `None`.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| naive.and_utc())
}

/// `GET`/`POST /feeds`.
#[must_use]
pub const fn feeds_path() -> &'static str {
    "/feeds"
}

/// `DELETE /feeds/{id}`.
#[must_use]
pub fn feed_path(id: FeedId) -> String {
    format!("/feeds/{id}")
}

/// `POST /feeds/{id}/refresh`.
#[must_use]
pub fn feed_refresh_path(id: FeedId) -> String {
    format!("/feeds/{id}/refresh")
}

/// `GET /episodes`, optionally filtered to one feed.
#[must_use]
pub fn episodes_path(filter: Option<FeedId>) -> String {
    filter.map_or_else(
        || "/episodes".to_string(),
        |id| format!("/episodes?feed_id={id}"),
    )
}

/// `GET /episodes/{id}/full-content`.
#[must_use]
pub fn full_content_path(id: EpisodeId) -> String {
    format!("/episodes/{id}/full-content")
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}
