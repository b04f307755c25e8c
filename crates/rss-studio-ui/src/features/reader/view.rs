//! Reader modal: article header, settings bar and sanitized body.

use crate::app::preferences::{LocalStore, local_offset_minutes, log_storage_error};
use crate::components::atoms::RawHtml;
use crate::components::atoms::icons::{IconExternalLink, IconX};
use crate::components::modal::Modal;
use crate::core::logic::format_timestamp;
use crate::core::reader::ReaderContent;
use crate::core::settings::{ColumnWidth, FontFamily, ReaderSettings, ReaderTheme};
use crate::core::store::AppStore;
use crate::features::episodes::state::{original_link, source_label};
use crate::features::reader::actions::{SettingsChange, change_settings, close_reader};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use chrono::Utc;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

const TITLE_ID: &str = "reader-title";

#[function_component(ReaderModal)]
pub(crate) fn reader_modal() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let reader = use_selector(|store: &AppStore| store.reader.clone());
    let feeds = use_selector(|store: &AppStore| store.feeds.items.clone());

    let on_close = Callback::from(|()| close_reader(&Dispatch::<AppStore>::new()));
    let on_change = Callback::from(|change: SettingsChange| {
        if let Err(err) = change_settings(&Dispatch::<AppStore>::new(), &LocalStore, change) {
            log_storage_error("set", &err);
        }
    });

    let Some(episode) = reader.episode.as_ref() else {
        return html! { <Modal open={false} labelled_by={TITLE_ID} /> };
    };
    let settings = reader.settings;
    let title = episode.display_title().map_or_else(
        || bundle.text("episodes.untitled", ""),
        ToString::to_string,
    );
    let source = source_label(&feeds, episode.feed_id).map_or_else(
        || bundle.text("episodes.unknown_source", ""),
        ToString::to_string,
    );
    let published = format_timestamp(
        episode.published_at().unwrap_or_else(Utc::now),
        local_offset_minutes(),
    );
    let link = original_link(&feeds, episode);

    let body = match &reader.content {
        ReaderContent::Loading => html! {
            <p class="reader-placeholder muted" aria-busy="true">{bundle.text("reader.loading", "")}</p>
        },
        ReaderContent::Ready { html, minutes, .. } => html! {
            <>
                {minutes.map(|minutes| html! {
                    <p class="reader-time muted">
                        {format!(
                            "{} {minutes} {}",
                            bundle.text("reader.reading_prefix", ""),
                            bundle.text("reader.reading_suffix", "")
                        )}
                    </p>
                }).unwrap_or_default()}
                <RawHtml
                    class="reader-body rich-text"
                    style={settings.body_style()}
                    html={html.clone()}
                />
            </>
        },
        ReaderContent::Missing => html! {
            <p class="reader-placeholder muted">{bundle.text("reader.no_content", "")}</p>
        },
    };

    html! {
        <Modal
            open={true}
            class="reader-modal"
            labelled_by={TITLE_ID}
            on_close={on_close.clone()}
        >
            <div class="reader" data-reader-theme={settings.theme.as_str()}>
                <header class="reader-header">
                    <div>
                        <h2 id={TITLE_ID}>{title}</h2>
                        <p class="muted">
                            {source}{" · "}<time>{published}</time>
                        </p>
                    </div>
                    <div class="reader-actions">
                        <a class="link" href={link} target="_blank" rel="noopener noreferrer">
                            {bundle.text("episodes.open_original", "")}
                            <IconExternalLink size="4" />
                        </a>
                        <button
                            type="button"
                            class="icon-btn ghost"
                            aria-label={bundle.text("reader.close", "")}
                            onclick={Callback::from(move |_| on_close.emit(()))}
                        >
                            <IconX size="4" />
                        </button>
                    </div>
                </header>
                <SettingsBar settings={settings} on_change={on_change} />
                {body}
            </div>
        </Modal>
    }
}

#[derive(Properties, PartialEq)]
struct SettingsBarProps {
    settings: ReaderSettings,
    on_change: Callback<SettingsChange>,
}

#[function_component(SettingsBar)]
fn settings_bar(props: &SettingsBarProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let settings = props.settings;
    let emit = |change: SettingsChange| {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(change))
    };
    let choice = |change: SettingsChange, label: String, pressed: bool| {
        html! {
            <button
                type="button"
                class={classes!("chip", pressed.then_some("active"))}
                aria-pressed={pressed.to_string()}
                onclick={emit(change)}
            >
                {label}
            </button>
        }
    };

    html! {
        <div class="reader-settings" role="toolbar" aria-label={bundle.text("reader.settings", "")}>
            <div class="segmented">
                <button
                    type="button"
                    class="chip"
                    aria-label={bundle.text("reader.font_smaller", "")}
                    disabled={!settings.can_shrink()}
                    onclick={emit(SettingsChange::Smaller)}
                >{"A-"}</button>
                <span class="muted">{format!("{}px", settings.font_size)}</span>
                <button
                    type="button"
                    class="chip"
                    aria-label={bundle.text("reader.font_larger", "")}
                    disabled={!settings.can_grow()}
                    onclick={emit(SettingsChange::Larger)}
                >{"A+"}</button>
            </div>
            <div class="segmented">
                {for ReaderTheme::ALL.into_iter().map(|theme| choice(
                    SettingsChange::Theme(theme),
                    bundle.text(&format!("reader.theme_{}", theme.as_str()), theme.as_str()),
                    settings.theme == theme,
                ))}
            </div>
            <div class="segmented">
                {for FontFamily::ALL.into_iter().map(|family| choice(
                    SettingsChange::Font(family),
                    bundle.text(&format!("reader.font_{}", family.as_str()), family.as_str()),
                    settings.font_family == family,
                ))}
            </div>
            <div class="segmented">
                {for ColumnWidth::ALL.into_iter().map(|width| choice(
                    SettingsChange::Width(width),
                    bundle.text(&format!("reader.width_{}", width.as_str()), width.as_str()),
                    settings.width == width,
                ))}
            </div>
        </div>
    }
}
