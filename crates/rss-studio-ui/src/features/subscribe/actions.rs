//! Subscribe submission flow.

use crate::core::http::{ApiError, StudioApi};
use crate::core::store::{StoreSink, notify};
use crate::features::feeds::actions::reload_lists;
use crate::i18n::TranslationBundle;
use crate::models::{FeedCreate, ToastKind};

/// Create the subscription, close the panel and reload both lists.
///
/// The caller resets the form on `Ok` and clears its loading state either way.
///
/// # Errors
/// Returns the [`ApiError`] after it has been shown as a danger toast.
pub async fn subscribe<A: StudioApi, S: StoreSink>(
    api: &A,
    sink: &S,
    bundle: &TranslationBundle,
    body: FeedCreate,
) -> Result<(), ApiError> {
    match api.create_feed(&body).await {
        Ok(()) => {
            let message = bundle.text("toast.subscribe_ok", "订阅成功");
            sink.update(|store| {
                store.ui.close_add_panel();
                notify(store, message, ToastKind::Success);
            });
            reload_lists(api, sink).await;
            Ok(())
        }
        Err(err) => {
            sink.update(|store| notify(store, err.message.clone(), ToastKind::Danger));
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::AppStore;
    use crate::core::testing::FakeApi;
    use crate::features::subscribe::logic::build_feed_create;
    use crate::i18n::LocaleCode;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[test]
    fn success_closes_panel_and_reloads() {
        let api = FakeApi::default();
        let sink = RefCell::new(AppStore::default());
        sink.update(|store| store.ui.open_add_panel());
        let bundle = TranslationBundle::new(LocaleCode::Zh);
        let body = build_feed_create("https://example.com/rss", true).unwrap();

        assert!(block_on(subscribe(&api, &sink, &bundle, body)).is_ok());

        sink.read(|store| {
            assert!(!store.ui.add_panel_open);
            assert_eq!(store.feeds.items.len(), 1);
            assert_eq!(
                store.toast.current.as_ref().map(|toast| toast.message.as_str()),
                Some("订阅成功")
            );
        });
        assert_eq!(
            api.calls(),
            vec!["POST /feeds https://example.com/rss", "GET /feeds", "GET /episodes"]
        );
    }

    #[test]
    fn failure_keeps_panel_open_and_shows_detail() {
        let api = FakeApi::default();
        *api.fail_create.borrow_mut() = Some("订阅已存在".into());
        let sink = RefCell::new(AppStore::default());
        sink.update(|store| store.ui.open_add_panel());
        let bundle = TranslationBundle::new(LocaleCode::Zh);
        let body = build_feed_create("https://example.com/rss", true).unwrap();

        let err = block_on(subscribe(&api, &sink, &bundle, body)).unwrap_err();

        assert_eq!(err.status, Some(400));
        sink.read(|store| {
            assert!(store.ui.add_panel_open);
            let toast = store.toast.current.as_ref().unwrap();
            assert_eq!(toast.message, "订阅已存在");
            assert_eq!(toast.kind, ToastKind::Danger);
        });
    }
}
