//! Rich-text block that folds long content behind a toggle.

use crate::components::atoms::RawHtml;
use crate::components::atoms::icons::{IconChevronDown, IconChevronUp};
use crate::core::logic::collapse_label_key;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CollapsibleHtmlProps {
    pub html: AttrValue,
    pub collapsible: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(CollapsibleHtml)]
pub(crate) fn collapsible_html(props: &CollapsibleHtmlProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let expanded = use_state(|| false);
    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            expanded.set(!*expanded);
        })
    };
    let folded = props.collapsible && !*expanded;

    html! {
        <div class={classes!("rich-text", folded.then_some("is-collapsed"), props.class.clone())}>
            <RawHtml class="rich-text-body" html={props.html.clone()} />
            {if props.collapsible {
                html! {
                    <button
                        type="button"
                        class="link collapse-toggle"
                        aria-expanded={expanded.to_string()}
                        onclick={on_toggle}
                    >
                        {bundle.text(collapse_label_key(*expanded), "")}
                        {if *expanded { html! { <IconChevronUp size="4" /> } } else { html! { <IconChevronDown size="4" /> } }}
                    </button>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
