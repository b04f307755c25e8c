//! Placeholder shown when a list has nothing to render.
//!
//! # Design
//! - Copy comes in already translated.
//! - An optional call to action renders below the message.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub message: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    let has_actions = !props.children.is_empty();
    html! {
        <div class={classes!("empty", props.class.clone())} role="note">
            <p class="muted">{props.message.clone()}</p>
            {if has_actions {
                html! { <div class="empty-actions">{ for props.children.iter() }</div> }
            } else {
                html! {}
            }}
        </div>
    }
}
