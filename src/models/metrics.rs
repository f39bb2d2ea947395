use super::performance::{ComparisonResult, CurrentSnapshot, Metric};
use crate::i18n::TextKey;
use crate::utils::format::{Utilization, format_count, format_number, format_percentage, format_wage};

/// Direction of a month-over-month change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Zero counts as upward.
    pub fn from_change(change: f64) -> Self {
        if change >= 0.0 { Trend::Up } else { Trend::Down }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Trend::Up => "↑",
            Trend::Down => "↓",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Trend::Up => "trend-up",
            Trend::Down => "trend-down",
        }
    }
}

/// Everything a metric card needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCardModel {
    pub metric: Metric,
    pub title: TextKey,
    pub value: String,
    pub change: Option<f64>,
    pub accent: &'static str,
}

impl MetricCardModel {
    /// `None` when the comparison has no entry for this metric
    pub fn trend(&self) -> Option<Trend> {
        self.change.map(Trend::from_change)
    }

    pub fn change_text(&self) -> Option<String> {
        self.change.map(format_percentage)
    }
}

/// Presentation values derived from the fetched detail-view slots.
#[derive(Debug, Clone, PartialEq)]
pub struct DistrictMetrics {
    pub cards: Vec<MetricCardModel>,
    pub budget_allocated: String,
    pub budget_spent: String,
    pub budget_spent_change: Option<f64>,
    pub utilization: Utilization,
}

impl DistrictMetrics {
    /// Missing slots and fields render as zero.
    pub fn derive(current: Option<&CurrentSnapshot>, comparison: Option<&ComparisonResult>) -> Self {
        let snapshot = current.cloned().unwrap_or_default();
        let change = |metric: Metric| comparison.and_then(|c| c.change(metric));

        let card = |metric: Metric, title: TextKey, value: String, accent: &'static str| MetricCardModel {
            metric,
            title,
            value,
            change: change(metric),
            accent,
        };

        let cards = vec![
            card(
                Metric::TotalWorkers,
                TextKey::TotalWorkers,
                format_count(snapshot.total_workers),
                "accent-blue",
            ),
            card(
                Metric::WorkCompleted,
                TextKey::WorkCompleted,
                format_count(snapshot.work_completed),
                "accent-green",
            ),
            card(
                Metric::WorkOngoing,
                TextKey::WorkOngoing,
                format_count(snapshot.work_ongoing),
                "accent-teal",
            ),
            card(
                Metric::AverageWage,
                TextKey::AverageWage,
                format_wage(snapshot.average_wage),
                "accent-purple",
            ),
            card(
                Metric::PersonDaysGenerated,
                TextKey::PersonDays,
                format_count(snapshot.person_days_generated),
                "accent-orange",
            ),
        ];

        Self {
            cards,
            budget_allocated: format_number(current.map(|c| c.budget_allocated)),
            budget_spent: format_number(current.map(|c| c.budget_spent)),
            budget_spent_change: change(Metric::BudgetSpent),
            utilization: Utilization::new(snapshot.budget_spent, snapshot.budget_allocated),
        }
    }

    pub fn card(&self, metric: Metric) -> Option<&MetricCardModel> {
        self.cards.iter().find(|c| c.metric == metric)
    }
}
