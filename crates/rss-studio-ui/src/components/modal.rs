//! Modal frame shared by the reader and the player.
//!
//! # Design
//! - Clicking the backdrop closes; clicks inside the box do not bubble to it.
//! - Escape and the body scroll lock are handled once at the app root.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    pub open: bool,
    pub labelled_by: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub(crate) fn modal(props: &ModalProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let swallow = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div
            class={classes!("modal", props.open.then_some("open"), props.class.clone())}
            hidden={!props.open}
            aria-hidden={(!props.open).then_some("true")}
            onclick={on_backdrop}
        >
            <div
                class="modal-box"
                role="dialog"
                aria-modal="true"
                aria-labelledby={props.labelled_by.clone()}
                onclick={swallow}
            >
                { for props.children.iter() }
            </div>
        </div>
    }
}
