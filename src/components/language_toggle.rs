use yew::prelude::*;

use crate::i18n::{Language, TextKey};

#[derive(Properties, PartialEq)]
pub struct LanguageToggleProps {
    pub language: Language,
    pub on_toggle: Callback<()>,
}

/// Language toggle button component
#[function_component(LanguageToggle)]
pub fn language_toggle(props: &LanguageToggleProps) -> Html {
    // The label names the language the button switches to
    let label = props.language.text(TextKey::LanguageSwitch);

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_| on_toggle.emit(()))
    };

    html! {
        <button
            class="language-toggle"
            {onclick}
            aria-label={label}
            title={label}
        >
            {label}
        </button>
    }
}
