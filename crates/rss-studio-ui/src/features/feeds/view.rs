//! Feed list and per-feed controls.

use crate::app::api::ApiCtx;
use crate::app::preferences::local_offset_minutes;
use crate::components::atoms::icons::{IconRefreshCw, IconTrash};
use crate::components::atoms::{EmptyState, IconButton};
use crate::components::collapse::CollapsibleHtml;
use crate::core::store::AppStore;
use crate::features::feeds::actions::{FeedAction, delete_feed, refresh_feed};
use crate::features::feeds::state::{FeedCardView, feed_card};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use crate::models::FeedId;
use gloo::dialogs::confirm;
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(FeedList)]
pub(crate) fn feed_list() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let api = use_context::<ApiCtx>();
    let feeds = use_selector(|store: &AppStore| store.feeds.clone());

    if feeds.loaded && feeds.items.is_empty() {
        return html! {
            <EmptyState message={bundle.text("feeds.empty", "")} />
        };
    }

    let on_action = {
        let bundle = bundle.clone();
        Callback::from(move |(id, action): (FeedId, FeedAction)| {
            let Some(api) = api.clone() else {
                return;
            };
            let bundle = bundle.clone();
            let dispatch = Dispatch::<AppStore>::new();
            match action {
                FeedAction::Refresh => spawn_local(async move {
                    refresh_feed(&*api.client, &dispatch, &bundle, id).await;
                }),
                FeedAction::Delete => {
                    let confirmed = confirm(&bundle.text("feeds.confirm_delete", ""));
                    spawn_local(async move {
                        delete_feed(&*api.client, &dispatch, &bundle, id, confirmed).await;
                    });
                }
            }
        })
    };

    let offset = local_offset_minutes();
    html! {
        <ul class="card-list feed-list" id="feed-list">
            {for feeds.items.iter().map(|feed| {
                let view = feed_card(feed, &bundle, offset);
                let busy = feeds.is_busy(view.id);
                html! {
                    <FeedCard
                        key={feed.id}
                        busy={busy}
                        view={view}
                        on_action={on_action.clone()}
                    />
                }
            })}
        </ul>
    }
}

#[derive(Properties, PartialEq)]
struct FeedCardProps {
    view: FeedCardView,
    busy: bool,
    on_action: Callback<(FeedId, FeedAction)>,
}

#[function_component(FeedCard)]
fn feed_card_view(props: &FeedCardProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let view = &props.view;
    let emit = |action: FeedAction| {
        let on_action = props.on_action.clone();
        let id = view.id;
        Callback::from(move |_: MouseEvent| on_action.emit((id, action)))
    };

    html! {
        <li class="card feed-card" data-feed-id={view.id.to_string()}>
            <header class="card-header">
                <h3 class="card-title">{view.title.clone()}</h3>
                <div class="card-actions">
                    <IconButton
                        label={bundle.text("feeds.refresh", "")}
                        busy={props.busy}
                        onclick={emit(FeedAction::Refresh)}
                    >
                        <IconRefreshCw size="4" />
                    </IconButton>
                    <IconButton
                        class="danger"
                        label={bundle.text("feeds.delete", "")}
                        busy={props.busy}
                        onclick={emit(FeedAction::Delete)}
                    >
                        <IconTrash size="4" />
                    </IconButton>
                </div>
            </header>
            <CollapsibleHtml
                html={view.description_html.clone()}
                collapsible={view.collapsible}
            />
            <footer class="card-meta muted">
                {bundle.text("feeds.last_checked", "")}
                <time>{view.last_checked.clone()}</time>
            </footer>
        </li>
    }
}
