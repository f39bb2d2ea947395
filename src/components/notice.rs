use yew::prelude::*;

use crate::i18n::{Language, TextKey};

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub message: TextKey,
    pub language: Language,
    /// Technical detail, exposed as a tooltip only
    #[prop_or_default]
    pub detail: Option<String>,
    pub on_dismiss: Callback<()>,
}

/// Dismissable error notification
#[function_component(Notice)]
pub fn notice(props: &NoticeProps) -> Html {
    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(()))
    };

    html! {
        <div class="notice error" role="alert" title={props.detail.clone()}>
            <p>{"❌ "}{props.language.text(props.message)}</p>
            <button class="notice-dismiss" {onclick}>
                {props.language.text(TextKey::Dismiss)}
            </button>
        </div>
    }
}
