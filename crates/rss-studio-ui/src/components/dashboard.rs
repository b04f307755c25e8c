//! Tabbed dashboard holding the feed and episode lists.
//!
//! # Design
//! - Both panels stay mounted; the inactive one is hidden so list state and
//!   collapse toggles survive tab switches.
//! - Tab selection goes through the store so sidebar navigation and tab
//!   clicks agree.

use crate::core::store::AppStore;
use crate::core::ui::{DashboardTab, sections};
use crate::features::episodes::view::{EpisodeFilter, EpisodeList};
use crate::features::feeds::view::FeedList;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

#[function_component(DashboardPanel)]
pub(crate) fn dashboard_panel() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let active = use_selector(|store: &AppStore| store.ui.active_tab);
    let active = *active;

    let tab = |tab: DashboardTab| {
        let selected = tab == active;
        let onclick = Callback::from(move |_: MouseEvent| {
            Dispatch::<AppStore>::new().reduce_mut(|store| {
                store.ui.select_tab(tab);
            });
        });
        html! {
            <button
                type="button"
                role="tab"
                id={format!("tab-{}", tab.as_str())}
                class={classes!("tab", selected.then_some("active"))}
                aria-selected={selected.to_string()}
                aria-controls={format!("panel-{}", tab.as_str())}
                data-tab-target={tab.as_str()}
                onclick={onclick}
            >
                {bundle.text(&format!("tabs.{}", tab.as_str()), tab.as_str())}
            </button>
        }
    };
    let panel = |tab: DashboardTab, body: Html| {
        html! {
            <div
                role="tabpanel"
                id={format!("panel-{}", tab.as_str())}
                class="tab-panel"
                aria-labelledby={format!("tab-{}", tab.as_str())}
                data-tab-content={tab.as_str()}
                hidden={tab != active}
            >
                {body}
            </div>
        }
    };

    html! {
        <section id={sections::DASHBOARD} class="dashboard">
            <div class="tabs" role="tablist">
                {for DashboardTab::all().into_iter().map(tab)}
            </div>
            {panel(DashboardTab::Feeds, html! { <FeedList /> })}
            {panel(DashboardTab::Episodes, html! {
                <>
                    <EpisodeFilter />
                    <EpisodeList />
                </>
            })}
        </section>
    }
}
