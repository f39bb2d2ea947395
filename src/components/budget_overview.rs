use crate::i18n::{Language, TextKey};
use crate::models::metrics::{DistrictMetrics, Trend};
use crate::utils::format::format_percentage;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BudgetOverviewProps {
    pub metrics: DistrictMetrics,
    pub language: Language,
}

/// Allocated and spent budget with a utilization bar.
///
/// The bar width is clamped to 100%; the label beside it is not.
#[function_component(BudgetOverview)]
pub fn budget_overview(props: &BudgetOverviewProps) -> Html {
    let t = |key: TextKey| props.language.text(key);
    let metrics = &props.metrics;
    let bar_style = format!("width: {};", metrics.utilization.bar_width());

    html! {
        <div class="budget-grid">
            <div class="budget-card">
                <h3>{t(TextKey::BudgetAllocated)}</h3>
                <p class="budget-value allocated">{&metrics.budget_allocated}</p>
            </div>

            <div class="budget-card">
                <h3>{t(TextKey::BudgetSpent)}</h3>
                <p class="budget-value spent">{&metrics.budget_spent}</p>
                if let Some(change) = metrics.budget_spent_change {
                    <div class={classes!("metric-trend", Trend::from_change(change).css_class())}>
                        <span class="metric-trend-icon">{Trend::from_change(change).icon()}</span>
                        <span class="metric-trend-value">{format_percentage(change)}</span>
                    </div>
                }
                <div class="utilization-track">
                    <div class="utilization-bar" style={bar_style} />
                </div>
                <p class="utilization-label">{metrics.utilization.label()}</p>
            </div>
        </div>
    }
}
