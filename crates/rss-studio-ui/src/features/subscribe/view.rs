//! Subscribe overlay with its form.

use crate::app::api::ApiCtx;
use crate::components::atoms::icons::IconX;
use crate::core::store::AppStore;
use crate::core::ui::sections;
use crate::features::subscribe::actions::subscribe;
use crate::features::subscribe::logic::{SubscribeError, build_feed_create};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(SubscribePanel)]
pub(crate) fn subscribe_panel() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api = use_context::<ApiCtx>();
    let open = use_selector(|store: &AppStore| store.ui.add_panel_open);
    let url = use_state(String::new);
    let auto_refresh = use_state(|| true);
    let error = use_state(|| None::<SubscribeError>);
    let loading = use_state(|| false);

    let on_url = {
        let url = url.clone();
        let error = error.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                url.set(input.value());
                error.set(None);
            }
        })
    };
    let on_auto_refresh = {
        let auto_refresh = auto_refresh.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                auto_refresh.set(input.checked());
            }
        })
    };
    let on_close = Callback::from(|_: MouseEvent| {
        Dispatch::<AppStore>::new().reduce_mut(|store| store.ui.close_add_panel());
    });
    let on_submit = {
        let bundle = bundle.clone();
        let url = url.clone();
        let auto_refresh = auto_refresh.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *loading {
                return;
            }
            let body = match build_feed_create(&url, *auto_refresh) {
                Ok(body) => body,
                Err(err) => {
                    error.set(Some(err));
                    return;
                }
            };
            let Some(api) = api.clone() else {
                return;
            };
            let bundle = bundle.clone();
            let url = url.clone();
            let auto_refresh = auto_refresh.clone();
            let loading = loading.clone();
            loading.set(true);
            spawn_local(async move {
                let dispatch = Dispatch::<AppStore>::new();
                if subscribe(&*api.client, &dispatch, &bundle, body).await.is_ok() {
                    url.set(String::new());
                    auto_refresh.set(true);
                }
                loading.set(false);
            });
        })
    };

    html! {
        <section
            id={sections::ADD_PANEL}
            class={classes!("add-panel", open.then_some("open"))}
            hidden={!*open}
            aria-labelledby="add-panel-title"
        >
            <header class="panel-header">
                <div>
                    <h2 id="add-panel-title">{bundle.text("subscribe.title", "")}</h2>
                    <p class="muted">{bundle.text("subscribe.body", "")}</p>
                </div>
                <button
                    type="button"
                    class="icon-btn ghost"
                    aria-label={bundle.text("subscribe.close", "")}
                    onclick={on_close}
                >
                    <IconX size="4" />
                </button>
            </header>
            <form id="add-feed-form" class="form" novalidate=true onsubmit={on_submit}>
                <label class="field">
                    <span>{bundle.text("subscribe.url_label", "")}</span>
                    <input
                        type="url"
                        name="url"
                        required=true
                        placeholder={bundle.text("subscribe.url_placeholder", "")}
                        value={(*url).clone()}
                        aria-invalid={error.is_some().then_some("true")}
                        oninput={on_url}
                    />
                </label>
                {(*error).map(|err| html! {
                    <p class="field-error" role="alert">{bundle.text(err.message_key(), "")}</p>
                }).unwrap_or_default()}
                <label class="checkbox">
                    <input
                        type="checkbox"
                        name="auto_refresh"
                        checked={*auto_refresh}
                        onchange={on_auto_refresh}
                    />
                    <span>{bundle.text("subscribe.auto_refresh", "")}</span>
                </label>
                <button type="submit" class="primary" disabled={*loading} aria-busy={loading.then_some("true")}>
                    {if *loading {
                        bundle.text("subscribe.submitting", "")
                    } else {
                        bundle.text("subscribe.submit", "")
                    }}
                </button>
            </form>
        </section>
    }
}
