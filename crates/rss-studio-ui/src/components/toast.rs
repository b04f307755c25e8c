//! Single-slot toast with auto-hide.
//!
//! # Design
//! - The hide timer is keyed by the toast generation: a new toast drops the
//!   previous `Timeout` and starts a fresh one.
//! - Hiding is requested with the generation so a stale timer is a no-op.

use crate::core::config::TOAST_DURATION_MS;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::Toast;
use gloo_timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toast: Option<Toast>,
    pub on_hide: Callback<u64>,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    {
        let on_hide = props.on_hide.clone();
        use_effect_with_deps(
            move |generation: &Option<u64>| {
                let handle = generation
                    .map(|id| Timeout::new(TOAST_DURATION_MS, move || on_hide.emit(id)));
                move || drop(handle)
            },
            props.toast.as_ref().map(|toast| toast.id),
        );
    }

    let Some(toast) = props.toast.as_ref() else {
        return html! { <div id="toast" class="toast" aria-live="polite" hidden=true></div> };
    };
    let id = toast.id;
    let on_close = {
        let on_hide = props.on_hide.clone();
        Callback::from(move |_| on_hide.emit(id))
    };

    html! {
        <div
            id="toast"
            class={classes!("toast", "show")}
            data-variant={toast.kind.as_str()}
            role="status"
            aria-live="polite"
            aria-atomic="true"
        >
            <span>{toast.message.clone()}</span>
            <button
                type="button"
                class="ghost"
                aria-label={bundle.text("toast.dismiss", "")}
                onclick={on_close}
            >{"✕"}</button>
        </div>
    }
}
