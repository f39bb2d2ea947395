use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle, LineStyleType,
        SplitLine, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::{Bar, Line},
};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::i18n::{Language, TextKey};
use crate::models::performance::TrendSeries;

const AXIS_COLOR: &str = "#666666";
const GRID_COLOR: &str = "#e0e0e0";

/// Which columns of the trend a chart plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendKind {
    /// Workers, work completed and person days as lines
    Workforce,
    /// Allocated against spent budget as bars
    Budget,
}

impl TrendKind {
    fn element_id(self) -> &'static str {
        match self {
            TrendKind::Workforce => "workforce-trend-chart",
            TrendKind::Budget => "budget-trend-chart",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    pub series: Rc<TrendSeries>,
    pub kind: TrendKind,
    pub language: Language,
}

#[function_component(TrendChart)]
pub fn trend_chart(props: &TrendChartProps) -> Html {
    let container_ref = use_node_ref();
    let element_id = props.kind.element_id();

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (props.series.clone(), props.kind, props.language, container_ref),
            |(series, kind, language, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().map(|container| {
                    render_chart(&container, series, *kind, *language);

                    let series = series.clone();
                    let kind = *kind;
                    let language = *language;
                    EventListener::new(&gloo::utils::window(), "resize", move |_| {
                        render_chart(&container, &series, kind, language);
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={element_id} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, series: &TrendSeries, kind: TrendKind, language: Language) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 || series.is_empty() {
        return;
    }

    let chart = build_chart(series, kind, language);
    if let Err(e) = WasmRenderer::new(width, height).render(kind.element_id(), &chart) {
        gloo::console::error!(format!("Render error: {e:?}"));
    }
}

/// Builds the chart definition; labels come straight from the series, in order.
pub fn build_chart(series: &TrendSeries, kind: TrendKind, language: Language) -> CharmingChart {
    let t = |key: TextKey| language.text(key);

    let chart = CharmingChart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .legend(Legend::new())
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("10%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name(t(TextKey::Month))
                .data(series.labels.clone())
                .axis_label(AxisLabel::new().color(AXIS_COLOR)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().color(AXIS_COLOR))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(GRID_COLOR)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        );

    match kind {
        TrendKind::Workforce => chart
            .series(
                Line::new()
                    .name(t(TextKey::TotalWorkers))
                    .data(series.total_workers.clone())
                    .item_style(ItemStyle::new().color("#3b82f6")),
            )
            .series(
                Line::new()
                    .name(t(TextKey::WorkCompleted))
                    .data(series.work_completed.clone())
                    .item_style(ItemStyle::new().color("#22c55e")),
            )
            .series(
                Line::new()
                    .name(t(TextKey::PersonDays))
                    .data(series.person_days.clone())
                    .item_style(ItemStyle::new().color("#f97316")),
            ),
        TrendKind::Budget => chart
            .series(
                Bar::new()
                    .name(t(TextKey::Allocated))
                    .data(series.budget_allocated.clone())
                    .bar_width("30%")
                    .item_style(ItemStyle::new().color("#3b82f6")),
            )
            .series(
                Bar::new()
                    .name(t(TextKey::Spent))
                    .data(series.budget_spent.clone())
                    .bar_width("30%")
                    .item_style(ItemStyle::new().color("#22c55e")),
            ),
    }
}
