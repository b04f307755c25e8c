//! Feed actions and the async flows behind them.
//!
//! # Design
//! - Flows are generic over [`StudioApi`] and [`StoreSink`] so they run the
//!   same against the browser client and the in-memory fake.
//! - Every failure becomes a danger toast; busy flags are cleared on every
//!   path.
//! - After a mutation both lists reload concurrently.

use crate::core::http::{ApiError, StudioApi};
use crate::core::store::{StoreSink, apply_episodes, apply_feeds, notify, set_filter};
use crate::i18n::TranslationBundle;
use crate::models::{FeedId, ToastKind};
use futures::future::try_join_all;

/// Per-feed actions emitted from card controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedAction {
    /// Re-fetch one feed.
    Refresh,
    /// Remove the subscription.
    Delete,
}

/// Toast text for a successful action.
#[must_use]
pub fn success_message(bundle: &TranslationBundle, action: FeedAction) -> String {
    match action {
        FeedAction::Refresh => bundle.text("toast.refresh_ok", "刷新成功"),
        FeedAction::Delete => bundle.text("toast.delete_ok", "删除成功"),
    }
}

fn report(sink: &impl StoreSink, err: &ApiError) {
    sink.update(|store| notify(store, err.message.clone(), ToastKind::Danger));
}

/// Fetch the feed list. Reloads episodes when the active filter vanished.
pub async fn load_feeds<A: StudioApi, S: StoreSink>(api: &A, sink: &S) {
    match api.list_feeds().await {
        Ok(feeds) => {
            if sink.update(|store| apply_feeds(store, feeds)) {
                load_episodes(api, sink).await;
            }
        }
        Err(err) => report(sink, &err),
    }
}

/// Fetch episodes for the current filter.
///
/// The result is dropped if the filter changed while the request was out.
pub async fn load_episodes<A: StudioApi, S: StoreSink>(api: &A, sink: &S) {
    let filter = sink.read(|store| store.episodes.filter);
    match api.list_episodes(filter).await {
        Ok(episodes) => {
            sink.update(|store| apply_episodes(store, filter, episodes));
        }
        Err(err) => report(sink, &err),
    }
}

/// Reload feeds and episodes concurrently.
pub async fn reload_lists<A: StudioApi, S: StoreSink>(api: &A, sink: &S) {
    futures::join!(load_feeds(api, sink), load_episodes(api, sink));
}

/// Switch the episode filter and reload episodes when it changed.
pub async fn change_filter<A: StudioApi, S: StoreSink>(api: &A, sink: &S, filter: Option<FeedId>) {
    if sink.update(|store| set_filter(store, filter)) {
        load_episodes(api, sink).await;
    }
}

/// Refresh one feed, then reload both lists.
pub async fn refresh_feed<A: StudioApi, S: StoreSink>(
    api: &A,
    sink: &S,
    bundle: &TranslationBundle,
    id: FeedId,
) {
    sink.update(|store| store.feeds.set_busy(id, true));
    match api.refresh_feed(id).await {
        Ok(()) => {
            let message = success_message(bundle, FeedAction::Refresh);
            sink.update(|store| notify(store, message, ToastKind::Success));
            reload_lists(api, sink).await;
        }
        Err(err) => report(sink, &err),
    }
    sink.update(|store| store.feeds.set_busy(id, false));
}

/// Delete a feed after confirmation. A declined prompt issues no request.
pub async fn delete_feed<A: StudioApi, S: StoreSink>(
    api: &A,
    sink: &S,
    bundle: &TranslationBundle,
    id: FeedId,
    confirmed: bool,
) {
    if !confirmed {
        return;
    }
    sink.update(|store| store.feeds.set_busy(id, true));
    match api.delete_feed(id).await {
        Ok(()) => {
            let message = success_message(bundle, FeedAction::Delete);
            sink.update(|store| notify(store, message, ToastKind::Success));
            reload_lists(api, sink).await;
        }
        Err(err) => report(sink, &err),
    }
    sink.update(|store| store.feeds.set_busy(id, false));
}

/// Refresh every feed concurrently; any failure fails the batch.
///
/// Completed refreshes are not rolled back and only the first error is
/// reported.
pub async fn refresh_all<A: StudioApi, S: StoreSink>(
    api: &A,
    sink: &S,
    bundle: &TranslationBundle,
) {
    let ids = sink.read(|store| store.feeds.ids());
    if ids.is_empty() {
        let message = bundle.text("toast.no_feeds", "暂无订阅");
        sink.update(|store| notify(store, message, ToastKind::Default));
        return;
    }
    sink.update(|store| store.feeds.refreshing_all = true);
    match try_join_all(ids.into_iter().map(|id| api.refresh_feed(id))).await {
        Ok(_) => {
            let message = bundle.text("toast.refresh_all_ok", "刷新完成");
            sink.update(|store| notify(store, message, ToastKind::Success));
            reload_lists(api, sink).await;
        }
        Err(err) => report(sink, &err),
    }
    sink.update(|store| store.feeds.refreshing_all = false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::AppStore;
    use crate::core::testing::{FakeApi, episode, feed};
    use crate::i18n::LocaleCode;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn toast(sink: &RefCell<AppStore>) -> Option<(String, ToastKind)> {
        sink.read(|store| {
            store
                .toast
                .current
                .as_ref()
                .map(|toast| (toast.message.clone(), toast.kind))
        })
    }

    #[test]
    fn success_messages_switch_on_action() {
        let bundle = TranslationBundle::new(LocaleCode::Zh);
        assert_eq!(success_message(&bundle, FeedAction::Refresh), "刷新成功");
        assert_eq!(success_message(&bundle, FeedAction::Delete), "删除成功");
    }

    #[test]
    fn reload_fetches_both_lists() {
        let api = FakeApi::with_feeds(vec![feed(1), feed(2)]);
        api.episodes.borrow_mut().extend([episode(10, 1), episode(11, 2)]);
        let sink = RefCell::new(AppStore::default());

        block_on(reload_lists(&api, &sink));

        sink.read(|store| {
            assert_eq!(store.feeds.items.len(), 2);
            assert_eq!(store.episodes.items.len(), 2);
        });
        let calls = api.calls();
        assert!(calls.contains(&"GET /feeds".to_string()));
        assert!(calls.contains(&"GET /episodes".to_string()));
    }

    #[test]
    fn refresh_toasts_reloads_and_clears_busy() {
        let api = FakeApi::with_feeds(vec![feed(1)]);
        let sink = RefCell::new(AppStore::default());
        let bundle = TranslationBundle::new(LocaleCode::Zh);

        block_on(refresh_feed(&api, &sink, &bundle, 1));

        assert_eq!(toast(&sink), Some(("刷新成功".into(), ToastKind::Success)));
        assert!(!sink.read(|store| store.feeds.is_busy(1)));
        assert_eq!(
            api.calls(),
            vec!["POST /feeds/1/refresh", "GET /feeds", "GET /episodes"]
        );
    }

    #[test]
    fn refresh_failure_toasts_detail_without_reload() {
        let api = FakeApi::with_feeds(vec![feed(1)]);
        api.failing_refresh.borrow_mut().insert(1);
        let sink = RefCell::new(AppStore::default());
        let bundle = TranslationBundle::new(LocaleCode::Zh);

        block_on(refresh_feed(&api, &sink, &bundle, 1));

        assert_eq!(
            toast(&sink),
            Some(("feed 1 unreachable".into(), ToastKind::Danger))
        );
        assert!(!sink.read(|store| store.feeds.is_busy(1)));
        assert_eq!(api.calls(), vec!["POST /feeds/1/refresh"]);
    }

    #[test]
    fn declined_delete_issues_no_request() {
        let api = FakeApi::with_feeds(vec![feed(1)]);
        let sink = RefCell::new(AppStore::default());
        let bundle = TranslationBundle::new(LocaleCode::Zh);

        block_on(delete_feed(&api, &sink, &bundle, 1, false));

        assert!(api.calls().is_empty());
        assert_eq!(toast(&sink), None);
    }

    #[test]
    fn confirmed_delete_reloads_both_lists() {
        let api = FakeApi::with_feeds(vec![feed(1), feed(2)]);
        let sink = RefCell::new(AppStore::default());
        let bundle = TranslationBundle::new(LocaleCode::Zh);

        block_on(delete_feed(&api, &sink, &bundle, 1, true));

        assert_eq!(
            api.calls(),
            vec!["DELETE /feeds/1", "GET /feeds", "GET /episodes"]
        );
        assert_eq!(toast(&sink), Some(("删除成功".into(), ToastKind::Success)));
        assert_eq!(sink.read(|store| store.feeds.ids()), vec![2]);
    }

    #[test]
    fn deleting_filtered_feed_resets_filter_and_reloads_all_episodes() {
        let api = FakeApi::with_feeds(vec![feed(1), feed(2)]);
        let sink = RefCell::new(AppStore::default());
        let bundle = TranslationBundle::new(LocaleCode::Zh);
        block_on(load_feeds(&api, &sink));
        block_on(change_filter(&api, &sink, Some(1)));

        block_on(delete_feed(&api, &sink, &bundle, 1, true));

        assert_eq!(sink.read(|store| store.episodes.filter), None);
        assert_eq!(api.calls().last().map(String::as_str), Some("GET /episodes"));
    }

    #[test]
    fn late_filtered_episodes_do_not_replace_the_reset_list() {
        let api = FakeApi::with_feeds(vec![feed(1), feed(2)]);
        api.episodes.borrow_mut().extend([episode(10, 1), episode(20, 2), episode(21, 2)]);
        let sink = RefCell::new(AppStore::default());
        let bundle = TranslationBundle::new(LocaleCode::Zh);
        block_on(load_feeds(&api, &sink));
        block_on(change_filter(&api, &sink, Some(1)));
        api.episodes.borrow_mut().retain(|episode| episode.feed_id != 1);
        *api.feeds_delay.borrow_mut() = 1;
        *api.filtered_delay.borrow_mut() = 4;

        block_on(delete_feed(&api, &sink, &bundle, 1, true));

        let calls = api.calls();
        assert!(calls.contains(&"GET /episodes?feed_id=1".to_string()));
        assert_eq!(calls.last().map(String::as_str), Some("GET /episodes"));
        sink.read(|store| {
            assert_eq!(store.episodes.filter, None);
            let ids: Vec<_> = store.episodes.items.iter().map(|episode| episode.id).collect();
            assert_eq!(ids, vec![20, 21]);
        });
    }

    #[test]
    fn refresh_all_without_feeds_only_toasts() {
        let api = FakeApi::default();
        let sink = RefCell::new(AppStore::default());
        let bundle = TranslationBundle::new(LocaleCode::Zh);

        block_on(refresh_all(&api, &sink, &bundle));

        assert!(api.calls().is_empty());
        assert_eq!(toast(&sink), Some(("暂无订阅".into(), ToastKind::Default)));
    }

    #[test]
    fn refresh_all_fans_out_and_reports_failure() {
        let api = FakeApi::with_feeds(vec![feed(1), feed(2), feed(3)]);
        let sink = RefCell::new(AppStore::default());
        let bundle = TranslationBundle::new(LocaleCode::Zh);
        block_on(load_feeds(&api, &sink));

        block_on(refresh_all(&api, &sink, &bundle));
        assert_eq!(toast(&sink), Some(("刷新完成".into(), ToastKind::Success)));
        assert!(!sink.read(|store| store.feeds.refreshing_all));

        api.failing_refresh.borrow_mut().insert(2);
        block_on(refresh_all(&api, &sink, &bundle));
        assert_eq!(
            toast(&sink),
            Some(("feed 2 unreachable".into(), ToastKind::Danger))
        );
        assert!(!sink.read(|store| store.feeds.refreshing_all));
    }

    #[test]
    fn unchanged_filter_does_not_reload() {
        let api = FakeApi::with_feeds(vec![feed(1)]);
        let sink = RefCell::new(AppStore::default());

        block_on(change_filter(&api, &sink, None));
        assert!(api.calls().is_empty());

        block_on(change_filter(&api, &sink, Some(1)));
        assert_eq!(api.calls(), vec!["GET /episodes?feed_id=1"]);
    }
}
