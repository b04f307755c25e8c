//! Sidebar, top bar and hero around the dashboard.

use crate::components::atoms::icons::{
    IconHome, IconList, IconMoon, IconPlus, IconRefreshCw, IconRss, IconSun,
};
use crate::components::locale_menu::LocaleMenu;
use crate::core::logic::format_count;
use crate::core::theme::{ThemeController, ThemeMode};
use crate::core::ui::{NavTarget, sections};
use crate::i18n::{DEFAULT_LOCALE, LocaleCode, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub theme: ThemeController,
    pub on_toggle_theme: Callback<()>,
    pub locale: LocaleCode,
    pub on_locale: Callback<LocaleCode>,
    pub active: NavTarget,
    pub on_navigate: Callback<NavTarget>,
    pub feed_count: usize,
    pub episode_count: usize,
    pub refreshing_all: bool,
    pub on_refresh_all: Callback<()>,
    pub on_open_subscribe: Callback<()>,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let emit = |callback: &Callback<()>| {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };
    let refresh_all = |class: &'static str| {
        html! {
            <button
                type="button"
                class={classes!("ghost", "refresh-all", class)}
                disabled={props.refreshing_all}
                aria-busy={props.refreshing_all.then_some("true")}
                onclick={emit(&props.on_refresh_all)}
            >
                <IconRefreshCw size="4" />
                {bundle.text("topbar.refresh_all", "")}
            </button>
        }
    };
    let feed_count = format_count(props.feed_count);

    html! {
        <div class="app-shell">
            <aside class="sidebar">
                <div class="brand">
                    <strong>{bundle.text("brand.title", "RSS Studio")}</strong>
                    <span class="muted">{bundle.text("brand.subtitle", "")}</span>
                </div>
                <nav>
                    {for NavTarget::all().into_iter().map(|target| nav_item(
                        target,
                        &bundle,
                        props.active,
                        &props.on_navigate,
                    ))}
                </nav>
                <div class="sidebar-footer">
                    <LocaleMenu
                        locale={props.locale}
                        label={bundle.text("locale.label", "")}
                        on_select={props.on_locale.clone()}
                    />
                    <ThemeToggle theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
                </div>
            </aside>
            <div class="main">
                <header class="topbar">
                    <div class="counts">
                        <span class="pill" data-count="feeds">
                            {bundle.text("topbar.feeds", "")}{" "}<strong>{feed_count.clone()}</strong>
                        </span>
                        <span class="pill" data-count="episodes">
                            {bundle.text("topbar.episodes", "")}{" "}<strong>{format_count(props.episode_count)}</strong>
                        </span>
                    </div>
                    <div class="top-actions">
                        {refresh_all("topbar-refresh")}
                        <button type="button" class="primary" onclick={emit(&props.on_open_subscribe)}>
                            <IconPlus size="4" />
                            {bundle.text("topbar.subscribe", "")}
                        </button>
                    </div>
                </header>
                <main>
                    <section id={sections::OVERVIEW} class="hero">
                        <h1>{bundle.text("hero.title", "")}</h1>
                        <p class="muted">{bundle.text("hero.body", "")}</p>
                        <p class="hero-count">
                            <strong>{feed_count}</strong>{" "}{bundle.text("hero.feed_count", "")}
                        </p>
                        <div class="hero-actions">
                            <button type="button" class="primary" onclick={emit(&props.on_open_subscribe)}>
                                {bundle.text("topbar.subscribe", "")}
                            </button>
                            {refresh_all("hero-refresh")}
                        </div>
                    </section>
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}

fn nav_item(
    target: NavTarget,
    bundle: &TranslationBundle,
    active: NavTarget,
    on_navigate: &Callback<NavTarget>,
) -> Html {
    let is_active = active == target;
    let icon = match target {
        NavTarget::Overview => html! { <IconHome size="4" /> },
        NavTarget::Subscribe => html! { <IconPlus size="4" /> },
        NavTarget::Feeds => html! { <IconRss size="4" /> },
        NavTarget::Episodes => html! { <IconList size="4" /> },
    };
    let onclick = {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(target))
    };
    html! {
        <button
            type="button"
            class={classes!("nav-item", is_active.then_some("active"))}
            aria-current={is_active.then_some("true")}
            onclick={onclick}
        >
            {icon}
            <span>{bundle.text(target.label_key(), "")}</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
struct ThemeToggleProps {
    theme: ThemeController,
    on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let theme = props.theme;
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    html! {
        <button
            type="button"
            id="theme-toggle"
            class="ghost theme-toggle"
            aria-pressed={theme.pressed().to_string()}
            aria-label={bundle.text(theme.aria_key(), "")}
            onclick={onclick}
        >
            {match theme.mode {
                ThemeMode::Dark => html! { <IconSun size="4" /> },
                ThemeMode::Light => html! { <IconMoon size="4" /> },
            }}
            <span>{bundle.text(theme.label_key(), "")}</span>
        </button>
    }
}
