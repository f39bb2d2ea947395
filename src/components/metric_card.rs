use crate::i18n::Language;
use crate::models::metrics::MetricCardModel;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MetricCardProps {
    pub model: MetricCardModel,
    pub language: Language,
}

#[function_component(MetricCard)]
pub fn metric_card(props: &MetricCardProps) -> Html {
    let model = &props.model;
    let title = props.language.text(model.title);

    html! {
        <div class={classes!("metric-card", model.accent)}>
            <h3>{title}</h3>
            <p class="metric-value" data-metric={model.metric.field_name()}>
                {&model.value}
            </p>
            // Absent comparison entries get no indicator at all
            if let (Some(trend), Some(text)) = (model.trend(), model.change_text()) {
                <div class={classes!("metric-trend", trend.css_class())}>
                    <span class="metric-trend-icon">{trend.icon()}</span>
                    <span class="metric-trend-value">{text}</span>
                </div>
            }
        </div>
    }
}
