use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::language_toggle::LanguageToggle;
use crate::components::notice::Notice;
use crate::components::skeleton::Skeleton;
use crate::hooks::use_districts::use_districts;
use crate::i18n::{Language, TextKey};
use crate::state::list::ListAction;

#[derive(Properties, PartialEq)]
pub struct DistrictListViewProps {
    pub language: Language,
    pub on_toggle_language: Callback<()>,
    /// Emits the district code of the selected card
    pub on_select: Callback<String>,
}

/// Searchable grid of the district catalog
#[function_component(DistrictListView)]
pub fn district_list_view(props: &DistrictListViewProps) -> Html {
    let state = use_districts();
    let language = props.language;
    let t = |key: TextKey| language.text(key);

    let on_search = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(ListAction::Search(input.value()));
        })
    };

    let on_dismiss = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(ListAction::DismissError))
    };

    let visible = state.visible();

    html! {
        <div class="page home-page">
            <header class="app-header">
                <div class="header-text">
                    <h1>{t(TextKey::Title)}</h1>
                    <p class="subtitle">{t(TextKey::Subtitle)}</p>
                </div>
                <LanguageToggle {language} on_toggle={props.on_toggle_language.clone()} />
            </header>

            <main class="app-main">
                if state.error.is_some() {
                    <Notice
                        message={TextKey::LoadDistrictsFailed}
                        {language}
                        detail={state.error.clone()}
                        {on_dismiss}
                    />
                }

                <section class="card about-section">
                    <h2>{t(TextKey::About)}</h2>
                    <p>{t(TextKey::AboutText)}</p>
                </section>

                <section class="card search-section">
                    <h2>{t(TextKey::SelectDistrict)}</h2>
                    <input
                        type="text"
                        class="district-search"
                        placeholder={t(TextKey::SearchPlaceholder)}
                        value={state.search_term.clone()}
                        oninput={on_search}
                    />
                </section>

                if !state.loading {
                    <section class="stats-section">
                        <h2>{t(TextKey::Statistics)}</h2>
                        <div class="stat-card">
                            <h3>{t(TextKey::DistrictCount)}</h3>
                            <p class="stat-value">{state.catalog.len().to_string()}</p>
                        </div>
                    </section>
                }

                <section class="district-grid">
                    if state.loading {
                        <Skeleton count={6} height={80} class={classes!("district-card")} />
                    } else if visible.is_empty() {
                        <p class="empty-state">{t(TextKey::NoDistricts)}</p>
                    } else {
                        { for visible.iter().map(|district| {
                            let onclick = {
                                let on_select = props.on_select.clone();
                                let code = district.district_code.clone();
                                Callback::from(move |_| on_select.emit(code.clone()))
                            };
                            html! {
                                <button
                                    key={district.district_code.clone()}
                                    class="district-card"
                                    {onclick}
                                >
                                    <h3>{district.name(language)}</h3>
                                    <p class="district-alt-name">{district.name(language.toggle())}</p>
                                    <p class="district-state">{district.state_name(language)}</p>
                                </button>
                            }
                        }) }
                    }
                </section>
            </main>
        </div>
    }
}
