use yew::prelude::*;

use crate::components::{DistrictDetailView, DistrictListView};
use crate::hooks::use_language::use_language;

const FOOTER: &str =
    "© 2025 MGNREGA Dashboard | Ministry of Rural Development, Government of India";

#[function_component(App)]
pub fn app() -> Html {
    let language = use_language();
    // Code of the district being viewed; `None` shows the list
    let selected = use_state(|| None::<AttrValue>);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |code: String| selected.set(Some(AttrValue::from(code))))
    };

    let on_back = {
        let selected = selected.clone();
        Callback::from(move |()| selected.set(None))
    };

    html! {
        <div class="app-container">
            if let Some(code) = (*selected).clone() {
                <DistrictDetailView
                    district_code={code}
                    language={language.language}
                    on_toggle_language={language.toggle.clone()}
                    {on_back}
                />
            } else {
                <DistrictListView
                    language={language.language}
                    on_toggle_language={language.toggle.clone()}
                    {on_select}
                />
            }

            <footer class="app-footer">
                <p>{FOOTER}</p>
            </footer>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}
