//! Subscribe form validation.

use crate::models::FeedCreate;
use thiserror::Error;
use url::Url;

/// Client-side rejection of a subscription URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SubscribeError {
    /// Nothing was entered.
    #[error("subscription url is empty")]
    Empty,
    /// Not an absolute `http`/`https` URL.
    #[error("subscription url must use http or https")]
    Invalid,
}

impl SubscribeError {
    /// Translation key for the inline error.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::Empty => "subscribe.error_empty",
            Self::Invalid => "subscribe.error_invalid",
        }
    }
}

/// Validate form input and build the request body.
///
/// # Errors
/// Returns [`SubscribeError`] for empty or non-HTTP(S) input.
pub fn build_feed_create(raw_url: &str, auto_refresh: bool) -> Result<FeedCreate, SubscribeError> {
    let url = raw_url.trim();
    if url.is_empty() {
        return Err(SubscribeError::Empty);
    }
    let parsed = Url::parse(url).map_err(|_| SubscribeError::Invalid)?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(SubscribeError::Invalid);
    }
    Ok(FeedCreate {
        url: url.to_string(),
        auto_refresh,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(build_feed_create("   ", true), Err(SubscribeError::Empty));
    }

    #[test]
    fn non_http_input_is_rejected() {
        assert_eq!(build_feed_create("feed.xml", true), Err(SubscribeError::Invalid));
        assert_eq!(
            build_feed_create("ftp://example.com/feed.xml", true),
            Err(SubscribeError::Invalid)
        );
        assert_eq!(
            build_feed_create("javascript:alert(1)", true),
            Err(SubscribeError::Invalid)
        );
    }

    #[test]
    fn valid_input_is_trimmed_and_keeps_flag() {
        let body = build_feed_create("  https://example.com/rss  ", false).unwrap();
        assert_eq!(body.url, "https://example.com/rss");
        assert!(!body.auto_refresh);
        assert_eq!(
            SubscribeError::Invalid.message_key(),
            "subscribe.error_invalid"
        );
    }
}
