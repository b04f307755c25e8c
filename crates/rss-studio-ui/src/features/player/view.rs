//! Player modal bound to a single `<audio>` element.
//!
//! # Design
//! - The store is the source of truth for what is bound; the element is
//!   synced from it in an effect keyed by the audio URL. Binding a source
//!   does not start playback; only the toggle does.
//! - Media events flow back into the store so the controls re-render from
//!   state, never from the element.

use crate::components::atoms::icons::{
    IconPause, IconPlay, IconVariant, IconVolume1, IconVolume2, IconVolumeX, IconX,
};
use crate::components::modal::Modal;
use crate::core::player::{VolumeIcon, format_time};
use crate::core::store::AppStore;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo::console;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlAudioElement, HtmlInputElement};
use yew::platform::spawn_local;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

const TITLE_ID: &str = "player-title";
const SEEK_STEPS: f64 = 1000.0;

fn start_playback(audio: &HtmlAudioElement) {
    match audio.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                console::warn!("playback was rejected", err);
                Dispatch::<AppStore>::new().reduce_mut(|store| store.player.playing = false);
            }
        }),
        Err(err) => console::error!("media element error", err),
    }
}

fn release(audio: &HtmlAudioElement) {
    if let Err(err) = audio.pause() {
        console::warn!("pause failed", err);
    }
    if let Err(err) = audio.remove_attribute("src") {
        console::warn!("could not clear audio source", err);
    }
    audio.load();
}

#[function_component(PlayerModal)]
pub(crate) fn player_modal() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let player = use_selector(|store: &AppStore| store.player.clone());
    let audio_ref = use_node_ref();
    let dispatch = Dispatch::<AppStore>::new();

    {
        let audio_ref = audio_ref.clone();
        let source = player.episode.as_ref().map(|episode| episode.audio_url.clone());
        let (volume, muted) = (player.volume, player.muted);
        use_effect_with_deps(
            move |source: &Option<String>| {
                if let Some(audio) = audio_ref.cast::<HtmlAudioElement>() {
                    match source {
                        Some(url) => {
                            audio.set_src(url);
                            audio.set_current_time(0.0);
                            audio.set_volume(volume);
                            audio.set_muted(muted);
                        }
                        None => release(&audio),
                    }
                }
                || ()
            },
            source,
        );
    }

    let on_close = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| dispatch.reduce_mut(|store| store.player.close()))
    };

    let media = |update: fn(&mut AppStore, &HtmlAudioElement)| {
        let dispatch = dispatch.clone();
        let audio_ref = audio_ref.clone();
        Callback::from(move |_: Event| {
            if let Some(audio) = audio_ref.cast::<HtmlAudioElement>() {
                dispatch.reduce_mut(|store| update(store, &audio));
            }
        })
    };
    let audio = html! {
        <audio
            ref={audio_ref.clone()}
            preload="metadata"
            onplay={media(|store, _| store.player.playing = true)}
            onpause={media(|store, _| store.player.playing = false)}
            onended={media(|store, _| store.player.playing = false)}
            ontimeupdate={media(|store, audio| store.player.sync_time(audio.current_time()))}
            onloadedmetadata={media(|store, audio| store.player.set_duration(audio.duration()))}
            onerror={media(|store, audio| {
                console::error!("media element error", audio.current_src());
                store.player.playing = false;
            })}
        />
    };

    let Some(episode) = player.episode.as_ref() else {
        return html! {
            <>
                {audio}
                <Modal open={false} labelled_by={TITLE_ID} />
            </>
        };
    };

    let on_toggle = {
        let audio_ref = audio_ref.clone();
        let playing = player.playing;
        Callback::from(move |_: MouseEvent| {
            let Some(audio) = audio_ref.cast::<HtmlAudioElement>() else {
                return;
            };
            if playing {
                if let Err(err) = audio.pause() {
                    console::warn!("pause failed", err);
                }
            } else {
                start_playback(&audio);
            }
        })
    };
    let on_seek = {
        let dispatch = dispatch.clone();
        let audio_ref = audio_ref.clone();
        Callback::from(move |event: InputEvent| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let fraction = input.value_as_number() / SEEK_STEPS;
            let mut target = 0.0;
            dispatch.reduce_mut(|store| {
                store.player.begin_seek();
                target = store.player.seek_to(fraction);
            });
            if let Some(audio) = audio_ref.cast::<HtmlAudioElement>() {
                audio.set_current_time(target);
            }
        })
    };
    let on_seek_end = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: Event| dispatch.reduce_mut(|store| store.player.end_seek()))
    };
    let on_volume = {
        let dispatch = dispatch.clone();
        let audio_ref = audio_ref.clone();
        Callback::from(move |event: InputEvent| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let volume = input.value_as_number() / 100.0;
            dispatch.reduce_mut(|store| store.player.set_volume(volume));
            if let Some(audio) = audio_ref.cast::<HtmlAudioElement>() {
                audio.set_volume(volume.clamp(0.0, 1.0));
                audio.set_muted(false);
            }
        })
    };
    let on_mute = {
        let dispatch = dispatch.clone();
        let audio_ref = audio_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let mut muted = false;
            dispatch.reduce_mut(|store| muted = store.player.toggle_mute());
            if let Some(audio) = audio_ref.cast::<HtmlAudioElement>() {
                audio.set_muted(muted);
            }
        })
    };

    let title = episode
        .title
        .clone()
        .unwrap_or_else(|| bundle.text("episodes.untitled", ""));
    let play_label = bundle.text(player.toggle_label_key(), "");
    let play_icon = if player.playing {
        html! { <IconPause size="5" variant={IconVariant::Solid} /> }
    } else {
        html! { <IconPlay size="5" variant={IconVariant::Solid} /> }
    };
    let mute_label = if player.muted {
        bundle.text("player.unmute", "")
    } else {
        bundle.text("player.mute", "")
    };
    let volume_icon = match player.volume_icon() {
        VolumeIcon::Muted => html! { <IconVolumeX size="4" /> },
        VolumeIcon::Low => html! { <IconVolume1 size="4" /> },
        VolumeIcon::Normal => html! { <IconVolume2 size="4" /> },
    };
    let close_button = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <>
            {audio}
            <Modal open={true} class="player-modal" labelled_by={TITLE_ID} on_close={on_close}>
                <header class="player-header">
                    <h2 id={TITLE_ID}>{title}</h2>
                    <button
                        type="button"
                        class="icon-btn ghost"
                        aria-label={bundle.text("player.close", "")}
                        onclick={close_button}
                    >
                        <IconX size="4" />
                    </button>
                </header>
                {episode.duration.clone().map(|duration| html! {
                    <p class="muted">{bundle.text("player.duration", "")}{" "}{duration}</p>
                }).unwrap_or_default()}
                <div class="player-controls">
                    <button
                        type="button"
                        class="icon-btn primary"
                        aria-label={play_label}
                        aria-pressed={player.playing.to_string()}
                        onclick={on_toggle}
                    >
                        {play_icon}
                    </button>
                    <span class="player-time">{format_time(player.current_time)}</span>
                    <input
                        type="range"
                        class="player-seek"
                        min="0"
                        max={SEEK_STEPS.to_string()}
                        step="1"
                        aria-label={bundle.text("player.seek", "")}
                        value={(player.progress() * SEEK_STEPS).round().to_string()}
                        oninput={on_seek}
                        onchange={on_seek_end}
                    />
                    <span class="player-time">{format_time(player.duration)}</span>
                    <button
                        type="button"
                        class="icon-btn ghost"
                        aria-label={mute_label}
                        aria-pressed={player.muted.to_string()}
                        onclick={on_mute}
                    >
                        {volume_icon}
                    </button>
                    <input
                        type="range"
                        class="player-volume"
                        min="0"
                        max="100"
                        step="1"
                        aria-label={bundle.text("player.volume", "")}
                        value={(player.volume * 100.0).round().to_string()}
                        oninput={on_volume}
                    />
                </div>
            </Modal>
        </>
    }
}
