//! In-memory [`StudioApi`] used by flow tests.

use crate::core::http::{ApiError, StudioApi};
use crate::models::{Episode, EpisodeId, Feed, FeedCreate, FeedId};
use futures::future::poll_fn;
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::task::Poll;

/// Scripted backend that records every call.
#[derive(Debug, Default)]
pub(crate) struct FakeApi {
    pub(crate) feeds: RefCell<Vec<Feed>>,
    pub(crate) episodes: RefCell<Vec<Episode>>,
    pub(crate) full_content: RefCell<BTreeMap<EpisodeId, String>>,
    pub(crate) failing_refresh: RefCell<BTreeSet<FeedId>>,
    pub(crate) fail_full_content: RefCell<bool>,
    pub(crate) fail_create: RefCell<Option<String>>,
    /// Polls `GET /feeds` stays pending for.
    pub(crate) feeds_delay: RefCell<usize>,
    /// Polls a filtered `GET /episodes` stays pending for.
    pub(crate) filtered_delay: RefCell<usize>,
    pub(crate) calls: RefCell<Vec<String>>,
}

impl FakeApi {
    pub(crate) fn with_feeds(feeds: Vec<Feed>) -> Self {
        let api = Self::default();
        *api.feeds.borrow_mut() = feeds;
        api
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }
}

/// Stay pending for `polls` polls, waking immediately each time.
pub(crate) async fn yield_polls(polls: usize) {
    let mut left = polls;
    poll_fn(|cx| {
        if left == 0 {
            return Poll::Ready(());
        }
        left -= 1;
        cx.waker().wake_by_ref();
        Poll::Pending
    })
    .await;
}

pub(crate) fn feed(id: FeedId) -> Feed {
    Feed {
        id,
        url: format!("https://example.com/{id}.xml"),
        title: Some(format!("Feed {id}")),
        description: None,
        link: Some(format!("https://example.com/{id}")),
        language: None,
        last_checked: None,
        last_published: None,
    }
}

pub(crate) fn episode(id: EpisodeId, feed_id: FeedId) -> Episode {
    Episode {
        id,
        feed_id,
        guid: None,
        title: Some(format!("Episode {id}")),
        link: None,
        summary: Some(format!("Summary {id}")),
        description: None,
        audio_url: None,
        duration: None,
        published: None,
    }
}

impl StudioApi for FakeApi {
    async fn list_feeds(&self) -> Result<Vec<Feed>, ApiError> {
        self.record("GET /feeds");
        yield_polls(*self.feeds_delay.borrow()).await;
        Ok(self.feeds.borrow().clone())
    }

    async fn create_feed(&self, body: &FeedCreate) -> Result<(), ApiError> {
        self.record(format!("POST /feeds {}", body.url));
        if let Some(detail) = self.fail_create.borrow().clone() {
            return Err(ApiError::http(400, detail));
        }
        let id = self
            .feeds
            .borrow()
            .iter()
            .map(|feed| feed.id)
            .max()
            .unwrap_or(0)
            + 1;
        let mut created = feed(id);
        created.url.clone_from(&body.url);
        self.feeds.borrow_mut().push(created);
        Ok(())
    }

    async fn delete_feed(&self, id: FeedId) -> Result<(), ApiError> {
        self.record(format!("DELETE /feeds/{id}"));
        self.feeds.borrow_mut().retain(|feed| feed.id != id);
        Ok(())
    }

    async fn refresh_feed(&self, id: FeedId) -> Result<(), ApiError> {
        self.record(format!("POST /feeds/{id}/refresh"));
        if self.failing_refresh.borrow().contains(&id) {
            return Err(ApiError::http(502, format!("feed {id} unreachable")));
        }
        Ok(())
    }

    async fn list_episodes(&self, filter: Option<FeedId>) -> Result<Vec<Episode>, ApiError> {
        self.record(filter.map_or_else(
            || "GET /episodes".to_string(),
            |id| format!("GET /episodes?feed_id={id}"),
        ));
        if filter.is_some() {
            yield_polls(*self.filtered_delay.borrow()).await;
        }
        Ok(self
            .episodes
            .borrow()
            .iter()
            .filter(|episode| filter.is_none_or(|id| episode.feed_id == id))
            .cloned()
            .collect())
    }

    async fn full_content(&self, id: EpisodeId) -> Result<Option<String>, ApiError> {
        self.record(format!("GET /episodes/{id}/full-content"));
        if *self.fail_full_content.borrow() {
            return Err(ApiError::transport("offline"));
        }
        Ok(self.full_content.borrow().get(&id).cloned())
    }
}
