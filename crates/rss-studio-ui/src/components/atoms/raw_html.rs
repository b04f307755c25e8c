//! Container whose children come from an already sanitized HTML string.
//!
//! # Design
//! - Only markup that went through `core::markdown::sanitize` or
//!   `text_html` may reach this component.
//! - The string is written with `set_inner_html` whenever it changes.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RawHtmlProps {
    pub html: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
}

#[function_component(RawHtml)]
pub(crate) fn raw_html(props: &RawHtmlProps) -> Html {
    let node = use_node_ref();
    {
        let node = node.clone();
        use_effect_with_deps(
            move |html: &AttrValue| {
                if let Some(element) = node.cast::<web_sys::Element>() {
                    element.set_inner_html(html);
                }
                || ()
            },
            props.html.clone(),
        );
    }
    html! {
        <div ref={node} class={props.class.clone()} style={props.style.clone()}></div>
    }
}
