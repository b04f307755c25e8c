//! Feed list state and card view-models.
//!
//! # Design
//! - The list is replaced wholesale on every successful fetch.
//! - The filter dropdown is derived from the same list, so both always agree.
//! - Card builders resolve every placeholder up front; views only render.

use crate::core::logic::{format_timestamp, html_needs_collapse};
use crate::core::markdown::{render_markdown, text_html};
use crate::i18n::TranslationBundle;
use crate::models::{Feed, FeedId};
use std::collections::BTreeSet;

/// Subscribed feeds plus in-flight action flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedsState {
    /// Feeds in backend order.
    pub items: Vec<Feed>,
    /// `true` once the first fetch completed.
    pub loaded: bool,
    /// Feeds with a refresh or delete in flight.
    pub busy: BTreeSet<FeedId>,
    /// "Refresh all" in flight.
    pub refreshing_all: bool,
}

impl FeedsState {
    /// Replace the list.
    pub fn set_feeds(&mut self, feeds: Vec<Feed>) {
        self.items = feeds;
        self.loaded = true;
    }

    /// Feed by id.
    #[must_use]
    pub fn get(&self, id: FeedId) -> Option<&Feed> {
        self.items.iter().find(|feed| feed.id == id)
    }

    /// Whether `id` is in the list.
    #[must_use]
    pub fn contains(&self, id: FeedId) -> bool {
        self.get(id).is_some()
    }

    /// Ids of every feed, in order.
    #[must_use]
    pub fn ids(&self) -> Vec<FeedId> {
        self.items.iter().map(|feed| feed.id).collect()
    }

    /// Mark a per-feed action as started or finished.
    pub fn set_busy(&mut self, id: FeedId, busy: bool) {
        if busy {
            self.busy.insert(id);
        } else {
            self.busy.remove(&id);
        }
    }

    /// Whether a per-feed action is in flight.
    #[must_use]
    pub fn is_busy(&self, id: FeedId) -> bool {
        self.busy.contains(&id)
    }
}

/// One `<option>` of the episode filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOption {
    /// Option value: empty for "all", else the feed id.
    pub value: String,
    /// Visible label.
    pub label: String,
    /// Whether the option is selected.
    pub selected: bool,
}

/// Filter options: the "all" sentinel, then one per feed in list order.
#[must_use]
pub fn filter_options(
    feeds: &[Feed],
    selected: Option<FeedId>,
    all_label: &str,
) -> Vec<FilterOption> {
    let mut options = Vec::with_capacity(feeds.len() + 1);
    options.push(FilterOption {
        value: String::new(),
        label: all_label.to_string(),
        selected: selected.is_none(),
    });
    options.extend(feeds.iter().map(|feed| FilterOption {
        value: feed.id.to_string(),
        label: feed.label().to_string(),
        selected: selected == Some(feed.id),
    }));
    options
}

/// Everything a feed card displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedCardView {
    /// Feed id.
    pub id: FeedId,
    /// Title or the untitled placeholder.
    pub title: String,
    /// Sanitized description HTML, or the escaped feed URL.
    pub description_html: String,
    /// Whether the description starts collapsed behind a toggle.
    pub collapsible: bool,
    /// Formatted last-checked time or the never-fetched placeholder.
    pub last_checked: String,
}

/// Build the card for `feed`.
#[must_use]
pub fn feed_card(feed: &Feed, bundle: &TranslationBundle, offset_minutes: i32) -> FeedCardView {
    let description_html = feed
        .description
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .map_or_else(|| text_html(&feed.url), render_markdown);
    FeedCardView {
        id: feed.id,
        title: feed.display_title().map_or_else(
            || bundle.text("feeds.untitled", "未命名订阅"),
            ToString::to_string,
        ),
        collapsible: html_needs_collapse(&description_html),
        description_html,
        last_checked: feed.last_checked_at().map_or_else(
            || bundle.text("feeds.never_fetched", "未抓取"),
            |at| format_timestamp(at, offset_minutes),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocaleCode;

    fn feed(id: FeedId, title: Option<&str>) -> Feed {
        Feed {
            id,
            url: format!("https://example.com/{id}.xml"),
            title: title.map(Into::into),
            description: None,
            link: None,
            language: None,
            last_checked: None,
            last_published: None,
        }
    }

    #[test]
    fn filter_has_one_all_option_then_feeds_in_order() {
        let feeds = vec![feed(3, Some("Gamma")), feed(1, None)];
        let options = filter_options(&feeds, Some(1), "全部订阅");
        assert_eq!(options.len(), 3);
        assert_eq!(options[0].value, "");
        assert!(!options[0].selected);
        assert_eq!(options[1].value, "3");
        assert_eq!(options[1].label, "Gamma");
        assert_eq!(options[2].label, "https://example.com/1.xml");
        assert!(options[2].selected);
        assert_eq!(options.iter().filter(|o| o.value.is_empty()).count(), 1);
    }

    #[test]
    fn card_uses_placeholders() {
        let bundle = TranslationBundle::new(LocaleCode::Zh);
        let card = feed_card(&feed(1, Some("  ")), &bundle, 0);
        assert_eq!(card.title, "未命名订阅");
        assert_eq!(card.last_checked, "未抓取");
        assert_eq!(card.description_html, "https://example.com/1.xml");
        assert!(!card.collapsible);
    }

    #[test]
    fn card_renders_description_and_timestamp() {
        let bundle = TranslationBundle::new(LocaleCode::Zh);
        let mut source = feed(2, Some("Tech"));
        source.description = Some(format!("**{}**", "x".repeat(200)));
        source.last_checked = Some("2024-05-01T08:00:00".into());
        let card = feed_card(&source, &bundle, 0);
        assert!(card.description_html.starts_with("<p><strong>"));
        assert!(card.collapsible);
        assert_eq!(card.last_checked, "2024-05-01 08:00");
    }

    #[test]
    fn busy_flags_track_actions() {
        let mut state = FeedsState::default();
        state.set_feeds(vec![feed(1, None)]);
        assert!(state.loaded);
        state.set_busy(1, true);
        assert!(state.is_busy(1));
        state.set_busy(1, false);
        assert!(!state.is_busy(1));
        assert!(state.contains(1));
        assert!(!state.contains(2));
    }
}
