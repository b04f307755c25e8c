//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Use small, focused slices so reducers stay predictable.
//! - Reducers that touch more than one slice live here as plain functions so
//!   they can be tested without a document.

use crate::core::player::PlayerState;
use crate::core::reader::ReaderState;
use crate::core::theme::ThemeController;
use crate::core::toast::ToastState;
use crate::core::ui::UiState;
use crate::features::episodes::state::EpisodesState;
use crate::features::feeds::state::FeedsState;
use crate::models::{Episode, Feed, FeedId, ToastKind};
use std::cell::RefCell;
use yewdux::dispatch::Dispatch;
use yewdux::store::Store;

/// Where async flows read and write app state.
///
/// The browser uses the yewdux [`Dispatch`]; tests use a [`RefCell`].
pub trait StoreSink {
    /// Read from the current state.
    fn read<R>(&self, f: impl FnOnce(&AppStore) -> R) -> R;
    /// Mutate the state and notify subscribers.
    fn update<R>(&self, f: impl FnOnce(&mut AppStore) -> R) -> R;
}

impl StoreSink for Dispatch<AppStore> {
    fn read<R>(&self, f: impl FnOnce(&AppStore) -> R) -> R {
        f(&self.get())
    }

    fn update<R>(&self, f: impl FnOnce(&mut AppStore) -> R) -> R {
        let mut next = (*self.get()).clone();
        let out = f(&mut next);
        self.set(next);
        out
    }
}

impl StoreSink for RefCell<AppStore> {
    fn read<R>(&self, f: impl FnOnce(&AppStore) -> R) -> R {
        f(&self.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut AppStore) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Subscribed feeds.
    pub feeds: FeedsState,
    /// Recent episodes and the feed filter.
    pub episodes: EpisodesState,
    /// Tabs, sidebar and subscribe overlay.
    pub ui: UiState,
    /// Single-slot toast.
    pub toast: ToastState,
    /// Light/dark theme.
    pub theme: ThemeController,
    /// Reader modal.
    pub reader: ReaderState,
    /// Player modal.
    pub player: PlayerState,
}

/// Store a fresh feed list.
///
/// Resets the episode filter when its feed is gone; returns `true` in that
/// case so the caller can reload episodes.
pub fn apply_feeds(store: &mut AppStore, feeds: Vec<Feed>) -> bool {
    store.feeds.set_feeds(feeds);
    match store.episodes.filter {
        Some(id) if !store.feeds.contains(id) => {
            store.episodes.filter = None;
            true
        }
        _ => false,
    }
}

/// Store a fresh episode list fetched for `requested`.
///
/// A response for a filter that is no longer active is dropped; returns
/// whether the list was applied.
pub fn apply_episodes(
    store: &mut AppStore,
    requested: Option<FeedId>,
    episodes: Vec<Episode>,
) -> bool {
    if store.episodes.filter != requested {
        return false;
    }
    store.episodes.set_episodes(episodes);
    true
}

/// Change the episode filter. Returns `false` when it is unchanged.
pub fn set_filter(store: &mut AppStore, filter: Option<FeedId>) -> bool {
    if store.episodes.filter == filter {
        return false;
    }
    store.episodes.filter = filter;
    true
}

/// Show a toast and return its generation for the hide timer.
pub fn notify(store: &mut AppStore, message: impl Into<String>, kind: ToastKind) -> u64 {
    store.toast.notify(message, kind)
}

/// Whether any modal is open.
#[must_use]
pub const fn modal_open(store: &AppStore) -> bool {
    store.reader.is_open() || store.player.is_open()
}

/// Close whichever modal is open. Returns `true` if the player was closed.
pub fn close_modals(store: &mut AppStore) -> bool {
    let player_was_open = store.player.is_open();
    if store.reader.is_open() {
        store.reader.close();
    }
    if player_was_open {
        store.player.close();
    }
    player_was_open
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::PlayableEpisode;
    use crate::core::settings::ReaderSettings;

    fn feed(id: FeedId) -> Feed {
        Feed {
            id,
            url: format!("https://example.com/{id}.xml"),
            title: None,
            description: None,
            link: None,
            language: None,
            last_checked: None,
            last_published: None,
        }
    }

    fn episode(id: i64, audio: Option<&str>) -> Episode {
        Episode {
            id,
            feed_id: 1,
            guid: None,
            title: None,
            link: None,
            summary: None,
            description: None,
            audio_url: audio.map(Into::into),
            duration: None,
            published: None,
        }
    }

    #[test]
    fn filter_resets_when_feed_disappears() {
        let mut store = AppStore::default();
        assert!(!apply_feeds(&mut store, vec![feed(1), feed(2)]));
        assert!(set_filter(&mut store, Some(2)));
        assert!(!set_filter(&mut store, Some(2)));

        assert!(!apply_feeds(&mut store, vec![feed(2)]));
        assert_eq!(store.episodes.filter, Some(2));

        assert!(apply_feeds(&mut store, vec![feed(1)]));
        assert_eq!(store.episodes.filter, None);
    }

    #[test]
    fn episodes_are_capped_through_store() {
        let mut store = AppStore::default();
        apply_episodes(&mut store, None, (0..25).map(|id| episode(id, None)).collect());
        assert_eq!(store.episodes.items.len(), 20);
    }

    #[test]
    fn episodes_for_a_stale_filter_are_dropped() {
        let mut store = AppStore::default();
        assert!(apply_episodes(&mut store, None, vec![episode(1, None)]));

        assert!(!apply_episodes(&mut store, Some(3), Vec::new()));
        assert_eq!(store.episodes.items.len(), 1);

        store.episodes.filter = Some(3);
        assert!(!apply_episodes(&mut store, None, Vec::new()));
        assert!(apply_episodes(&mut store, Some(3), Vec::new()));
        assert!(store.episodes.items.is_empty());
    }

    #[test]
    fn close_modals_closes_everything_open() {
        let mut store = AppStore::default();
        assert!(!modal_open(&store));

        store.reader.open(episode(1, None), ReaderSettings::default());
        assert!(modal_open(&store));
        assert!(!close_modals(&mut store));
        assert!(!modal_open(&store));

        let playable = PlayableEpisode::try_from(&episode(2, Some("https://a/b.mp3"))).unwrap();
        store.player.open(playable);
        assert!(close_modals(&mut store));
        assert!(!store.player.is_open());
    }

    #[test]
    fn refcell_sink_reads_and_updates() {
        let sink = RefCell::new(AppStore::default());
        let generation = sink.update(|store| notify(store, "hi", ToastKind::Success));
        assert_eq!(sink.read(|store| store.toast.generation()), generation);
    }

    #[test]
    fn notify_replaces_toast() {
        let mut store = AppStore::default();
        notify(&mut store, "a", ToastKind::Default);
        let generation = notify(&mut store, "b", ToastKind::Danger);
        assert_eq!(store.toast.generation(), generation);
        assert_eq!(store.toast.current.as_ref().map(|t| t.message.as_str()), Some("b"));
    }
}
