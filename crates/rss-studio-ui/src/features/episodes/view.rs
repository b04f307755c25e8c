//! Episode filter, list and clickable cards.

use crate::app::api::ApiCtx;
use crate::app::preferences::{LocalStore, local_offset_minutes};
use crate::components::atoms::EmptyState;
use crate::components::atoms::icons::{IconExternalLink, IconHeadphones};
use crate::components::collapse::CollapsibleHtml;
use crate::core::logic::{filter_value, parse_filter_value};
use crate::core::store::AppStore;
use crate::features::episodes::actions::{Opened, open_episode};
use crate::features::episodes::state::{EpisodeCardView, episode_card};
use crate::features::feeds::actions::change_filter;
use crate::features::feeds::state::filter_options;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::EpisodeId;
use chrono::Utc;
use gloo::console;
use web_sys::{Element, HtmlSelectElement};
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(EpisodeFilter)]
pub(crate) fn episode_filter() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api = use_context::<ApiCtx>();
    let feeds = use_selector(|store: &AppStore| store.feeds.items.clone());
    let filter = use_selector(|store: &AppStore| store.episodes.filter);

    let onchange = Callback::from(move |event: Event| {
        let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
            return;
        };
        let Some(api) = api.clone() else {
            return;
        };
        let next = parse_filter_value(&select.value());
        spawn_local(async move {
            change_filter(&*api.client, &Dispatch::<AppStore>::new(), next).await;
        });
    });

    let all_label = bundle.text("episodes.filter_all", "");
    html! {
        <label class="filter">
            <span class="muted">{bundle.text("episodes.filter_label", "")}</span>
            <select id="episode-filter" value={filter_value(*filter)} onchange={onchange}>
                {for filter_options(&feeds, *filter, &all_label).into_iter().map(|option| html! {
                    <option value={option.value} selected={option.selected}>{option.label}</option>
                })}
            </select>
        </label>
    }
}

#[function_component(EpisodeList)]
pub(crate) fn episode_list() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api = use_context::<ApiCtx>();
    let episodes = use_selector(|store: &AppStore| store.episodes.clone());
    let feeds = use_selector(|store: &AppStore| store.feeds.items.clone());

    if episodes.loaded && episodes.items.is_empty() {
        return html! {
            <EmptyState message={bundle.text("episodes.empty", "")} />
        };
    }

    let on_open = {
        let episodes = episodes.clone();
        Callback::from(move |id: EpisodeId| {
            let (Some(api), Some(episode)) = (api.clone(), episodes.get(id).cloned()) else {
                return;
            };
            spawn_local(async move {
                let dispatch = Dispatch::<AppStore>::new();
                if let Opened::Reader(outcome) =
                    open_episode(&*api.client, &dispatch, &LocalStore, &episode).await
                {
                    if let Some(err) = outcome.fetch_error {
                        console::warn!("full content unavailable, using summary", err.to_string());
                    }
                    for src in outcome.unresolved_images {
                        console::debug!("image source left unresolved", src);
                    }
                }
            });
        })
    };

    let now = Utc::now();
    let offset = local_offset_minutes();
    html! {
        <ul class="card-list episode-list" id="episode-list">
            {for episodes.items.iter().map(|episode| {
                let view = episode_card(episode, &feeds, &bundle, now, offset);
                html! { <EpisodeCard key={episode.id} view={view} on_open={on_open.clone()} /> }
            })}
        </ul>
    }
}

#[derive(Properties, PartialEq)]
struct EpisodeCardProps {
    view: EpisodeCardView,
    on_open: Callback<EpisodeId>,
}

#[function_component(EpisodeCard)]
fn episode_card_view(props: &EpisodeCardProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let view = &props.view;
    let id = view.id;
    let onclick = {
        let on_open = props.on_open.clone();
        Callback::from(move |event: MouseEvent| {
            let in_link = event
                .target_dyn_into::<Element>()
                .and_then(|target| target.closest("a").ok().flatten())
                .is_some();
            if !in_link {
                on_open.emit(id);
            }
        })
    };
    let onkeydown = {
        let on_open = props.on_open.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.target() != event.current_target() {
                return;
            }
            if matches!(event.key().as_str(), "Enter" | " ") {
                event.prevent_default();
                on_open.emit(id);
            }
        })
    };

    html! {
        <li
            class={classes!("card", "episode-card", view.has_audio.then_some("has-audio"))}
            role="button"
            tabindex="0"
            data-episode-id={id.to_string()}
            onclick={onclick}
            onkeydown={onkeydown}
        >
            <header class="card-header">
                <h3 class="card-title">{view.title.clone()}</h3>
                {if view.has_audio {
                    html! {
                        <span class="pill">
                            <IconHeadphones size="4" />
                            {bundle.text("episodes.audio_badge", "")}
                        </span>
                    }
                } else {
                    html! {}
                }}
            </header>
            <p class="card-meta muted">
                {bundle.text("episodes.source_prefix", "")}{view.source.clone()}
                {" · "}<time>{view.published.clone()}</time>
                {view.duration.clone().map(|duration| html! {
                    <span>{" · "}{duration}</span>
                }).unwrap_or_default()}
            </p>
            <CollapsibleHtml html={view.summary_html.clone()} collapsible={view.collapsible} />
            <a
                class="link"
                href={view.link.clone()}
                target="_blank"
                rel="noopener noreferrer"
                title={bundle.text("episodes.open_original_title", "")}
            >
                {bundle.text("episodes.open_original", "")}
                <IconExternalLink size="4" />
            </a>
        </li>
    }
}
