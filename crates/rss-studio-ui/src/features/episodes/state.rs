//! Episode list state and card view-models.
//!
//! # Design
//! - The list is capped on write, so no view can exceed the limit.
//! - Source labels and fallback links resolve against the feed list; a feed
//!   missing from the list degrades to placeholders instead of failing.
//! - Routing a click is a pure decision: audio goes to the player, everything
//!   else to the reader.

use crate::core::config::EPISODE_LIMIT;
use crate::core::logic::{format_timestamp, html_needs_collapse};
use crate::core::markdown::{render_markdown, text_html};
use crate::core::player::PlayableEpisode;
use crate::i18n::TranslationBundle;
use crate::models::{Episode, EpisodeId, Feed, FeedId};
use chrono::{DateTime, Utc};

/// Recent episodes plus the active feed filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EpisodesState {
    /// At most [`EPISODE_LIMIT`] episodes, newest first.
    pub items: Vec<Episode>,
    /// Feed filter; `None` shows every feed.
    pub filter: Option<FeedId>,
    /// `true` once the first fetch completed.
    pub loaded: bool,
}

impl EpisodesState {
    /// Replace the list, keeping the first [`EPISODE_LIMIT`] entries.
    pub fn set_episodes(&mut self, mut episodes: Vec<Episode>) {
        episodes.truncate(EPISODE_LIMIT);
        self.items = episodes;
        self.loaded = true;
    }

    /// Episode by id.
    #[must_use]
    pub fn get(&self, id: EpisodeId) -> Option<&Episode> {
        self.items.iter().find(|episode| episode.id == id)
    }
}

/// Where a card click leads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EpisodeTarget {
    /// Podcast episode: open the player.
    Player(PlayableEpisode),
    /// Article: open the reader.
    Reader(Episode),
}

/// Route a card click.
#[must_use]
pub fn target_for(episode: &Episode) -> EpisodeTarget {
    PlayableEpisode::try_from(episode)
        .map_or_else(|_| EpisodeTarget::Reader(episode.clone()), EpisodeTarget::Player)
}

/// Source label for an episode, or `None` when its feed is unknown.
#[must_use]
pub fn source_label(feeds: &[Feed], feed_id: FeedId) -> Option<&str> {
    feeds
        .iter()
        .find(|feed| feed.id == feed_id)
        .map(Feed::label)
}

/// Original link: the episode link, else the feed homepage, else `#`.
#[must_use]
pub fn original_link(feeds: &[Feed], episode: &Episode) -> String {
    episode
        .original_link()
        .or_else(|| {
            feeds
                .iter()
                .find(|feed| feed.id == episode.feed_id)
                .and_then(Feed::homepage)
        })
        .unwrap_or("#")
        .to_string()
}

/// Everything an episode card displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EpisodeCardView {
    /// Episode id.
    pub id: EpisodeId,
    /// Title or the untitled placeholder.
    pub title: String,
    /// Feed label or the unknown-source placeholder.
    pub source: String,
    /// Sanitized summary HTML, or the escaped no-summary placeholder.
    pub summary_html: String,
    /// Whether the summary starts collapsed behind a toggle.
    pub collapsible: bool,
    /// Formatted publication time.
    pub published: String,
    /// Original link target.
    pub link: String,
    /// Whether the card opens the player.
    pub has_audio: bool,
    /// Feed-provided duration.
    pub duration: Option<String>,
}

/// Build the card for `episode`.
///
/// `now` stands in for a missing publication time.
#[must_use]
pub fn episode_card(
    episode: &Episode,
    feeds: &[Feed],
    bundle: &TranslationBundle,
    now: DateTime<Utc>,
    offset_minutes: i32,
) -> EpisodeCardView {
    let summary_html = episode.body().map_or_else(
        || text_html(&bundle.text("episodes.no_summary", "暂无简介")),
        render_markdown,
    );
    EpisodeCardView {
        id: episode.id,
        title: episode.display_title().map_or_else(
            || bundle.text("episodes.untitled", "未命名节目"),
            ToString::to_string,
        ),
        source: source_label(feeds, episode.feed_id).map_or_else(
            || bundle.text("episodes.unknown_source", "未知来源"),
            ToString::to_string,
        ),
        collapsible: html_needs_collapse(&summary_html),
        summary_html,
        published: format_timestamp(episode.published_at().unwrap_or(now), offset_minutes),
        link: original_link(feeds, episode),
        has_audio: episode.audio().is_some(),
        duration: episode
            .duration
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(ToString::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;
    use chrono::TimeZone;

    fn feed(id: FeedId) -> Feed {
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

    fn episode(id: EpisodeId, feed_id: FeedId) -> Episode {
        Episode {
            id,
            feed_id,
            guid: None,
            title: None,
            link: None,
            summary: None,
            description: None,
            audio_url: None,
            duration: None,
            published: None,
        }
    }

    #[test]
    fn list_is_capped() {
        let mut state = EpisodesState::default();
        state.set_episodes((0..35).map(|id| episode(id, 1)).collect());
        assert_eq!(state.items.len(), EPISODE_LIMIT);
        assert_eq!(state.items[0].id, 0);
        assert!(state.get(19).is_some());
        assert!(state.get(20).is_none());
    }

    #[test]
    fn audio_routes_to_player_and_articles_to_reader() {
        let mut podcast = episode(1, 1);
        podcast.audio_url = Some("https://cdn.example.com/1.mp3".into());
        assert!(matches!(target_for(&podcast), EpisodeTarget::Player(_)));
        assert!(matches!(target_for(&episode(2, 1)), EpisodeTarget::Reader(_)));
    }

    #[test]
    fn link_falls_back_to_feed_homepage_then_hash() {
        let feeds = vec![feed(1)];
        let mut linked = episode(1, 1);
        linked.link = Some("https://example.com/post".into());
        assert_eq!(original_link(&feeds, &linked), "https://example.com/post");
        assert_eq!(original_link(&feeds, &episode(2, 1)), "https://example.com/1");
        assert_eq!(original_link(&feeds, &episode(3, 9)), "#");
    }

    #[test]
    fn card_placeholders_cover_missing_data() {
        let bundle = TranslationBundle::new(LocaleCode::Zh);
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 0).unwrap();
        let card = episode_card(&episode(1, 9), &[], &bundle, now, 0);
        assert_eq!(card.title, "未命名节目");
        assert_eq!(card.source, "未知来源");
        assert_eq!(card.summary_html, "暂无简介");
        assert_eq!(card.published, "2024-01-02 03:04");
        assert_eq!(card.link, "#");
        assert!(!card.has_audio);
    }

    #[test]
    fn card_prefers_summary_then_description() {
        let bundle = TranslationBundle::new(LocaleCode::Zh);
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 0).unwrap();
        let mut item = episode(1, 1);
        item.description = Some("from description".into());
        let card = episode_card(&item, &[feed(1)], &bundle, now, 0);
        assert_eq!(card.source, "Feed 1");
        assert!(card.summary_html.contains("from description"));

        item.summary = Some("from summary".into());
        item.published = Some("2023-12-31T16:00:00+00:00".into());
        let card = episode_card(&item, &[feed(1)], &bundle, now, 8 * 60);
        assert!(card.summary_html.contains("from summary"));
        assert_eq!(card.published, "2024-01-01 00:00");
    }
}
