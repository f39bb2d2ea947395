use std::rc::Rc;
use yew::prelude::*;

use crate::components::budget_overview::BudgetOverview;
use crate::components::language_toggle::LanguageToggle;
use crate::components::metric_card::MetricCard;
use crate::components::notice::Notice;
use crate::components::skeleton::Skeleton;
use crate::components::trend_chart::{TrendChart, TrendKind};
use crate::hooks::use_district_data::use_district_data;
use crate::i18n::{Language, TextKey};
use crate::state::detail::DetailAction;

#[derive(Properties, PartialEq)]
pub struct DistrictDetailViewProps {
    pub district_code: AttrValue,
    pub language: Language,
    pub on_toggle_language: Callback<()>,
    pub on_back: Callback<()>,
}

/// Metric cards, budget overview and trend charts for one district
#[function_component(DistrictDetailView)]
pub fn district_detail_view(props: &DistrictDetailViewProps) -> Html {
    let state = use_district_data(props.district_code.clone());
    let language = props.language;
    let t = |key: TextKey| language.text(key);

    let on_dismiss = {
        let state = state.clone();
        Callback::from(move |()| state.dispatch(DetailAction::DismissError))
    };

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_| on_back.emit(()))
    };

    let notice = match &state.error {
        Some(detail) => html! {
            <Notice
                message={TextKey::LoadDistrictFailed}
                {language}
                detail={detail.clone()}
                {on_dismiss}
            />
        },
        None => html! {},
    };

    // No metric is computed while any of the three requests is outstanding
    if state.is_loading_for(&props.district_code) {
        return html! {
            <div class="page detail-page loading" aria-busy="true">
                <p class="loading-text">{t(TextKey::Loading)}</p>
                <Skeleton height={60} />
                <div class="metric-grid">
                    <Skeleton count={4} height={150} />
                </div>
            </div>
        };
    }

    let metrics = state.metrics();
    let series = Rc::new(state.trend_series());

    html! {
        <div class="page detail-page">
            <header class="app-header">
                <div class="header-text">
                    <button class="back-button" onclick={on_back}>
                        {"← "}{t(TextKey::Back)}
                    </button>
                    <h1>{format!("{} - {}", props.district_code, t(TextKey::PerformanceDashboard))}</h1>
                </div>
                <LanguageToggle {language} on_toggle={props.on_toggle_language.clone()} />
            </header>

            <main class="app-main">
                {notice}

                <section class="metrics-section">
                    <h2>{t(TextKey::CurrentPerformance)}</h2>
                    if state.comparison.is_some() {
                        <p class="section-note">{t(TextKey::Comparison)}</p>
                    }
                    <div class="metric-grid">
                        { for metrics.cards.iter().map(|card| html! {
                            <MetricCard
                                key={card.metric.field_name()}
                                model={card.clone()}
                                {language}
                            />
                        }) }
                    </div>
                </section>

                <section class="budget-section">
                    <BudgetOverview metrics={metrics.clone()} {language} />
                </section>

                if !series.is_empty() {
                    <section class="card chart-section">
                        <h2>{t(TextKey::HistoricalTrend)}</h2>
                        <TrendChart series={series.clone()} kind={TrendKind::Workforce} {language} />
                    </section>

                    <section class="card chart-section">
                        <h2>{t(TextKey::BudgetTrend)}</h2>
                        <TrendChart series={series.clone()} kind={TrendKind::Budget} {language} />
                    </section>
                }
            </main>
        </div>
    }
}
