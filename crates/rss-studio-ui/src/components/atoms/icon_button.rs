use yew::prelude::*;

/// Props for icon-only buttons on cards and the topbar.
#[derive(Properties, PartialEq)]
pub(crate) struct IconButtonProps {
    /// Accessible label, also used as the tooltip.
    pub label: AttrValue,
    /// Additional CSS classes.
    #[prop_or_default]
    pub class: Classes,
    /// Whether the button is disabled.
    #[prop_or_default]
    pub disabled: bool,
    /// Marks an in-flight action; implies disabled.
    #[prop_or_default]
    pub busy: bool,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    /// Icon content.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(IconButton)]
pub(crate) fn icon_button(props: &IconButtonProps) -> Html {
    let classes = classes!(
        "icon-btn",
        "ghost",
        props.busy.then_some("is-busy"),
        props.class.clone()
    );
    let onclick = {
        let onclick = props.onclick.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            onclick.emit(event);
        })
    };
    html! {
        <button
            class={classes}
            type="button"
            title={props.label.clone()}
            aria-label={props.label.clone()}
            aria-busy={props.busy.then_some("true")}
            onclick={onclick}
            disabled={props.disabled || props.busy}
        >
            {for props.children.iter()}
        </button>
    }
}
