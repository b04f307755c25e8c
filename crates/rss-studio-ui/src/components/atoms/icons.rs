//! Inline SVG icons (Lucide outlines).

use yew::prelude::*;

#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum IconVariant {
    #[default]
    Outline,
    Solid,
}

#[derive(Properties, PartialEq)]
pub(crate) struct IconProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub size: Option<AttrValue>,
    #[prop_or_default]
    pub variant: IconVariant,
}

fn size_class(size: Option<&AttrValue>) -> Option<String> {
    size.map(|value| {
        let raw = value.as_ref();
        if raw.starts_with("size-") {
            raw.to_string()
        } else {
            format!("size-{raw}")
        }
    })
}

fn icon_svg(props: &IconProps, body: Html) -> Html {
    let mut classes = classes!("icon");
    if let Some(size) = size_class(props.size.as_ref()) {
        classes.push(size);
    }
    classes.extend(props.class.clone());
    let title = props.title.clone();
    let aria_hidden = title.is_none().then_some(AttrValue::from("true"));
    let (fill, stroke) = match props.variant {
        IconVariant::Outline => ("none", "currentColor"),
        IconVariant::Solid => ("currentColor", "currentColor"),
    };
    html! {
        <svg
            class={classes}
            viewBox="0 0 24 24"
            fill={fill}
            stroke={stroke}
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {body}
        </svg>
    }
}

#[function_component(IconChevronDown)]
pub(crate) fn icon_chevron_down(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="m6 9l6 6l6-6" /> })
}

#[function_component(IconChevronUp)]
pub(crate) fn icon_chevron_up(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="m18 15l-6-6l-6 6" /> })
}

#[function_component(IconExternalLink)]
pub(crate) fn icon_external_link(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M15 3h6v6m-11 5L21 3m-3 10v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" /> },
    )
}

#[function_component(IconHeadphones)]
pub(crate) fn icon_headphones(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M3 14h3a2 2 0 0 1 2 2v3a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a9 9 0 0 1 18 0v7a2 2 0 0 1-2 2h-1a2 2 0 0 1-2-2v-3a2 2 0 0 1 2-2h3" /> },
    )
}

#[function_component(IconHome)]
pub(crate) fn icon_home(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8" />
            <path d="M3 10a2 2 0 0 1 .709-1.528l7-6a2 2 0 0 1 2.582 0l7 6A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" />
        </> },
    )
}

#[function_component(IconList)]
pub(crate) fn icon_list(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M3 5h.01M3 12h.01M3 19h.01M8 5h13M8 12h13M8 19h13" /> },
    )
}

#[function_component(IconMoon)]
pub(crate) fn icon_moon(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M20.985 12.486a9 9 0 1 1-9.473-9.472c.405-.022.617.46.402.803a6 6 0 0 0 8.268 8.268c.344-.215.825-.004.803.401" /> },
    )
}

#[function_component(IconPause)]
pub(crate) fn icon_pause(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <rect x="14" y="3" width="5" height="18" rx="1" />
            <rect x="5" y="3" width="5" height="18" rx="1" />
        </> },
    )
}

#[function_component(IconPlay)]
pub(crate) fn icon_play(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M5 5a2 2 0 0 1 3.008-1.728l11.997 6.998a2 2 0 0 1 .003 3.458l-12 7A2 2 0 0 1 5 19z" /> },
    )
}

#[function_component(IconPlus)]
pub(crate) fn icon_plus(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M5 12h14m-7-7v14" /> })
}

#[function_component(IconRefreshCw)]
pub(crate) fn icon_refresh_cw(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="M3 12a9 9 0 0 1 9-9a9.75 9.75 0 0 1 6.74 2.74L21 8" />
            <path d="M21 3v5h-5m5 4a9 9 0 0 1-9 9a9.75 9.75 0 0 1-6.74-2.74L3 16" />
            <path d="M8 16H3v5" />
        </> },
    )
}

#[function_component(IconRss)]
pub(crate) fn icon_rss(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="M4 11a9 9 0 0 1 9 9M4 4a16 16 0 0 1 16 16" />
            <circle cx="5" cy="19" r="1" />
        </> },
    )
}

#[function_component(IconSun)]
pub(crate) fn icon_sun(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <circle cx="12" cy="12" r="4" />
            <path d="M12 2v2m0 16v2M4.93 4.93l1.41 1.41m11.32 11.32l1.41 1.41M2 12h2m16 0h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" />
        </> },
    )
}

#[function_component(IconTrash)]
pub(crate) fn icon_trash(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6M3 6h18M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2" /> },
    )
}

#[function_component(IconVolume1)]
pub(crate) fn icon_volume_1(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M11 4.702a.705.705 0 0 0-1.203-.498L6.413 7.587A1.4 1.4 0 0 1 5.416 8H3a1 1 0 0 0-1 1v6a1 1 0 0 0 1 1h2.416a1.4 1.4 0 0 1 .997.413l3.383 3.384A.705.705 0 0 0 11 19.298zM16 9a5 5 0 0 1 0 6" /> },
    )
}

#[function_component(IconVolume2)]
pub(crate) fn icon_volume_2(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M11 4.702a.705.705 0 0 0-1.203-.498L6.413 7.587A1.4 1.4 0 0 1 5.416 8H3a1 1 0 0 0-1 1v6a1 1 0 0 0 1 1h2.416a1.4 1.4 0 0 1 .997.413l3.383 3.384A.705.705 0 0 0 11 19.298zM16 9a5 5 0 0 1 0 6m3.364 3.364a9 9 0 0 0 0-12.728" /> },
    )
}

#[function_component(IconVolumeX)]
pub(crate) fn icon_volume_x(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M11 4.702a.705.705 0 0 0-1.203-.498L6.413 7.587A1.4 1.4 0 0 1 5.416 8H3a1 1 0 0 0-1 1v6a1 1 0 0 0 1 1h2.416a1.4 1.4 0 0 1 .997.413l3.383 3.384A.705.705 0 0 0 11 19.298zM22 9l-6 6m0-6l6 6" /> },
    )
}

#[function_component(IconX)]
pub(crate) fn icon_x(props: &IconProps) -> Html {
    icon_svg(props, html! { <path d="M18 6L6 18M6 6l12 12" /> })
}
