//! Locale selector for the sidebar footer.
//!
//! # Design
//! - Selection state is owned by the caller; the menu only emits choices.

use crate::i18n::LocaleCode;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LocaleMenuProps {
    pub locale: LocaleCode,
    pub label: AttrValue,
    pub on_select: Callback<LocaleCode>,
}

#[function_component(LocaleMenu)]
pub(crate) fn locale_menu(props: &LocaleMenuProps) -> Html {
    let onchange = {
        let on_select = props.on_select.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            if let Some(locale) = LocaleCode::from_lang_tag(&select.value()) {
                on_select.emit(locale);
            }
        })
    };

    html! {
        <label class="locale-toggle">
            <small>{props.label.clone()}</small>
            <select value={props.locale.code()} onchange={onchange}>
                {for LocaleCode::all().into_iter().map(|locale| html! {
                    <option value={locale.code()} selected={locale == props.locale}>
                        {locale.label()}
                    </option>
                })}
            </select>
        </label>
    }
}
