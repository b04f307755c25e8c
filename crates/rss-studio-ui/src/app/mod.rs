//! App root: context providers, global listeners and the mounted tree.
//!
//! # Design
//! - One `AppStore` and one API client per boot.
//! - Document-level concerns (theme attribute, scroll lock, Escape, OS theme
//!   changes) are wired here once instead of inside individual views.

use crate::app::api::ApiCtx;
use crate::app::preferences::{
    DARK_QUERY, LocalStore, api_base_url, load_locale, log_storage_error, prefers_dark,
};
use crate::components::dashboard::DashboardPanel;
use crate::components::shell::AppShell;
use crate::components::toast::ToastHost;
use crate::core::logic::{ShortcutOutcome, interpret_shortcut};
use crate::core::prefs::Preferences;
use crate::core::store::{AppStore, close_modals, modal_open};
use crate::core::theme::{ThemeController, ThemeMode};
use crate::core::ui::{NavTarget, sections};
use crate::features::feeds::actions::{refresh_all, reload_lists};
use crate::features::player::view::PlayerModal;
use crate::features::reader::view::ReaderModal;
use crate::features::subscribe::view::SubscribePanel;
use crate::i18n::{LocaleCode, TranslationBundle};
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod api;
pub(crate) mod preferences;

#[function_component(RssStudioApp)]
pub fn rss_studio_app() -> Html {
    let locale = use_state(load_locale);
    let dispatch = Dispatch::<AppStore>::new();
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };
    let api_ctx = {
        let generic_error = bundle.text("toast.request_failed", "请求失败");
        use_memo(move |_| ApiCtx::new(api_base_url(), generic_error), ())
    };

    let theme = use_selector(|store: &AppStore| store.theme);
    let toast = use_selector(|store: &AppStore| store.toast.current.clone());
    let active_nav = use_selector(|store: &AppStore| store.ui.active_nav);
    let feed_count = use_selector(|store: &AppStore| store.feeds.items.len());
    let episode_count = use_selector(|store: &AppStore| store.episodes.items.len());
    let refreshing_all = use_selector(|store: &AppStore| store.feeds.refreshing_all);
    let any_modal = use_selector(modal_open);

    {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |_| {
                let storage = LocalStore;
                let prefs = Preferences::new(&storage);
                let initial = ThemeController::initial(prefs.theme(), prefers_dark());
                if prefs.reader_settings_corrupt() {
                    console::warn!("stored reader settings are unreadable, using defaults");
                }
                dispatch.reduce_mut(|store| store.theme = initial);
                spawn_local(async move {
                    reload_lists(&*api_ctx.client, &dispatch).await;
                });
                || ()
            },
            (),
        );
    }
    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                let listener = window()
                    .match_media(DARK_QUERY)
                    .ok()
                    .flatten()
                    .map(|query| {
                        EventListener::new(&query, "change", move |_event| {
                            let dark = prefers_dark();
                            dispatch.reduce_mut(|store| store.theme.on_os_change(dark));
                        })
                    });
                move || drop(listener)
            },
            (),
        );
    }
    {
        let dispatch = dispatch.clone();
        use_effect_with_deps(
            move |_| {
                let listener = EventListener::new(&document(), "keydown", move |event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if interpret_shortcut(&event.key()) == Some(ShortcutOutcome::CloseModal) {
                        dispatch.reduce_mut(|store| {
                            close_modals(store);
                        });
                    }
                });
                move || drop(listener)
            },
            (),
        );
    }
    use_effect_with_deps(
        move |mode: &ThemeMode| {
            apply_theme(*mode);
            || ()
        },
        theme.mode,
    );
    use_effect_with_deps(
        move |locked: &bool| {
            lock_scroll(*locked);
            || ()
        },
        *any_modal,
    );
    {
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        use_effect_with_deps(
            move |locale: &LocaleCode| {
                api_ctx
                    .client
                    .set_generic_error(bundle.text("toast.request_failed", "请求失败"));
                if let Err(err) = Preferences::new(&LocalStore).set_locale(*locale) {
                    log_storage_error("set", &err);
                }
                apply_document_locale(*locale);
                || ()
            },
            *locale,
        );
    }

    let on_toggle_theme = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            let mut mode = ThemeMode::default();
            dispatch.reduce_mut(|store| mode = store.theme.toggle());
            if let Err(err) = Preferences::new(&LocalStore).set_theme(mode) {
                log_storage_error("set", &err);
            }
        })
    };
    let on_locale = {
        let locale = locale.clone();
        Callback::from(move |next: LocaleCode| locale.set(next))
    };
    let on_navigate = {
        let dispatch = dispatch.clone();
        Callback::from(move |target: NavTarget| {
            let mut scroll_to = sections::OVERVIEW;
            dispatch.reduce_mut(|store| scroll_to = store.ui.navigate(target).scroll_to);
            scroll_to_section(scroll_to);
        })
    };
    let on_refresh_all = {
        let dispatch = dispatch.clone();
        let api_ctx = api_ctx.clone();
        let bundle = bundle.clone();
        Callback::from(move |()| {
            let dispatch = dispatch.clone();
            let api_ctx = api_ctx.clone();
            let bundle = bundle.clone();
            spawn_local(async move {
                refresh_all(&*api_ctx.client, &dispatch, &bundle).await;
            });
        })
    };
    let on_open_subscribe = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            dispatch.reduce_mut(|store| store.ui.open_add_panel());
            scroll_to_section(sections::ADD_PANEL);
        })
    };
    let on_hide_toast = {
        let dispatch = dispatch.clone();
        Callback::from(move |generation: u64| {
            dispatch.reduce_mut(|store| {
                store.toast.hide(generation);
            });
        })
    };

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
                <AppShell
                    theme={*theme}
                    on_toggle_theme={on_toggle_theme}
                    locale={*locale}
                    on_locale={on_locale}
                    active={*active_nav}
                    on_navigate={on_navigate}
                    feed_count={*feed_count}
                    episode_count={*episode_count}
                    refreshing_all={*refreshing_all}
                    on_refresh_all={on_refresh_all}
                    on_open_subscribe={on_open_subscribe}
                >
                    <DashboardPanel />
                </AppShell>
                <SubscribePanel />
                <ReaderModal />
                <PlayerModal />
                <ToastHost toast={(*toast).clone()} on_hide={on_hide_toast} />
            </ContextProvider<ApiCtx>>
        </ContextProvider<TranslationBundle>>
    }
}

fn apply_theme(mode: ThemeMode) {
    if let Some(body) = document().body() {
        if let Err(err) = body.set_attribute("data-theme", mode.as_str()) {
            console::warn!("could not apply theme", err);
        }
    }
}

fn apply_document_locale(locale: LocaleCode) {
    if let Some(root) = document().document_element() {
        if let Err(err) = root.set_attribute("lang", locale.code()) {
            console::warn!("could not apply locale", err);
        }
    }
}

fn lock_scroll(locked: bool) {
    if let Some(body) = document().body() {
        if let Err(err) = body.class_list().toggle_with_force("modal-open", locked) {
            console::warn!("could not toggle scroll lock", err);
        }
    }
}

fn scroll_to_section(id: &str) {
    let Some(element) = document().get_element_by_id(id) else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Mount the app on `#root`, falling back to `<body>`.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<RssStudioApp>::with_root(root).render();
    } else {
        yew::Renderer::<RssStudioApp>::new().render();
    }
}
