use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::Value;
use std::collections::HashMap;

/// Performance metrics tracked per district.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    TotalWorkers,
    WorkCompleted,
    WorkOngoing,
    AverageWage,
    PersonDaysGenerated,
    BudgetAllocated,
    BudgetSpent,
}

impl Metric {
    /// Field name used on the wire and as the comparison key.
    pub fn field_name(self) -> &'static str {
        match self {
            Metric::TotalWorkers => "total_workers",
            Metric::WorkCompleted => "work_completed",
            Metric::WorkOngoing => "work_ongoing",
            Metric::AverageWage => "average_wage",
            Metric::PersonDaysGenerated => "person_days_generated",
            Metric::BudgetAllocated => "budget_allocated",
            Metric::BudgetSpent => "budget_spent",
        }
    }
}

/// Reads a number that may arrive as a JSON number, a numeric string or null.
fn flexible_f64<E: serde::de::Error>(value: Option<Value>) -> Result<f64, E> {
    match value {
        None | Some(Value::Null) => Ok(0.0),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| E::custom(format!("Number out of range: {n}"))),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(0.0)
            } else {
                trimmed
                    .parse::<f64>()
                    .map_err(|_| E::custom(format!("Invalid numeric string '{s}'")))
            }
        }
        Some(other) => Err(E::custom(format!("Expected a number, got {other}"))),
    }
}

fn deserialize_flexible_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    flexible_f64(value)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn deserialize_flexible_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_flexible_f64(deserializer)?;
    if value.is_finite() && value > 0.0 {
        Ok(value.round() as u64)
    } else {
        Ok(0)
    }
}

fn deserialize_changes<'de, D>(deserializer: D) -> Result<HashMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<HashMap<String, Value>>::deserialize(deserializer)?.unwrap_or_default();

    let mut changes = HashMap::with_capacity(raw.len());
    for (key, value) in raw {
        match value {
            Value::Null => {}
            value => {
                let change = flexible_f64::<D::Error>(Some(value))
                    .map_err(|e| D::Error::custom(format!("change '{key}': {e}")))?;
                changes.insert(key, change);
            }
        }
    }
    Ok(changes)
}

/// Metrics for a district's current reporting period.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CurrentSnapshot {
    #[serde(default, deserialize_with = "deserialize_flexible_count")]
    pub total_workers: u64,
    #[serde(default, deserialize_with = "deserialize_flexible_count")]
    pub work_completed: u64,
    #[serde(default, deserialize_with = "deserialize_flexible_count")]
    pub work_ongoing: u64,
    #[serde(default, deserialize_with = "deserialize_flexible_f64")]
    pub average_wage: f64,
    #[serde(default, deserialize_with = "deserialize_flexible_count")]
    pub person_days_generated: u64,
    #[serde(default, deserialize_with = "deserialize_flexible_f64")]
    pub budget_allocated: f64,
    /// May exceed `budget_allocated`
    #[serde(default, deserialize_with = "deserialize_flexible_f64")]
    pub budget_spent: f64,
}

/// One month of the historical trend.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct HistoricalPoint {
    pub month: u32,
    pub year: i32,
    #[serde(default, deserialize_with = "deserialize_flexible_count")]
    pub total_workers: u64,
    #[serde(default, deserialize_with = "deserialize_flexible_count")]
    pub work_completed: u64,
    #[serde(default, deserialize_with = "deserialize_flexible_count")]
    pub person_days_generated: u64,
    #[serde(default, deserialize_with = "deserialize_flexible_f64")]
    pub budget_allocated: f64,
    #[serde(default, deserialize_with = "deserialize_flexible_f64")]
    pub budget_spent: f64,
}

impl HistoricalPoint {
    /// X-axis label, e.g. `3/2025`
    pub fn axis_label(&self) -> String {
        format!("{}/{}", self.month, self.year)
    }

    /// First day of the point's month, if month/year form a valid date.
    pub fn period_start(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }
}

/// Whether the points are in non-decreasing month order.
///
/// Invalid months make the sequence non-chronological.
pub fn is_chronological(points: &[HistoricalPoint]) -> bool {
    let periods: Option<Vec<NaiveDate>> = points.iter().map(HistoricalPoint::period_start).collect();
    periods.is_some_and(|p| p.windows(2).all(|w| w[0] <= w[1]))
}

/// Percentage deltas between the current and previous period.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ComparisonResult {
    /// Metrics the source did not compare, or sent as null, are absent.
    #[serde(default, deserialize_with = "deserialize_changes")]
    pub changes: HashMap<String, f64>,
    #[serde(default)]
    pub current: Option<CurrentSnapshot>,
    #[serde(default)]
    pub previous: Option<CurrentSnapshot>,
}

impl ComparisonResult {
    pub fn change(&self, metric: Metric) -> Option<f64> {
        self.changes.get(metric.field_name()).copied()
    }
}

/// The three detail-view resources for one district.
///
/// A slot is `None` when its endpoint answered with `success: false`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DistrictBundle {
    pub current: Option<CurrentSnapshot>,
    pub history: Option<Vec<HistoricalPoint>>,
    pub comparison: Option<ComparisonResult>,
}

/// Chart-ready columns built from the historical trend, in the given order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrendSeries {
    pub labels: Vec<String>,
    pub total_workers: Vec<f64>,
    pub work_completed: Vec<f64>,
    pub person_days: Vec<f64>,
    pub budget_allocated: Vec<f64>,
    pub budget_spent: Vec<f64>,
}

impl TrendSeries {
    /// Points are taken as-is: no sorting, no gap filling.
    pub fn from_points(points: &[HistoricalPoint]) -> Self {
        Self {
            labels: points.iter().map(HistoricalPoint::axis_label).collect(),
            total_workers: points.iter().map(|p| p.total_workers as f64).collect(),
            work_completed: points.iter().map(|p| p.work_completed as f64).collect(),
            person_days: points
                .iter()
                .map(|p| p.person_days_generated as f64)
                .collect(),
            budget_allocated: points.iter().map(|p| p.budget_allocated).collect(),
            budget_spent: points.iter().map(|p| p.budget_spent).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(month: u32, year: i32) -> HistoricalPoint {
        HistoricalPoint {
            month,
            year,
            ..Default::default()
        }
    }

    #[test]
    fn test_snapshot_accepts_numeric_strings() {
        let json = r#"{
            "total_workers": 1200000,
            "work_completed": "450",
            "average_wage": "285",
            "budget_spent": null
        }"#;
        let snapshot: CurrentSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.total_workers, 1_200_000);
        assert_eq!(snapshot.work_completed, 450);
        assert_eq!(snapshot.average_wage, 285.0);
        assert_eq!(snapshot.work_ongoing, 0);
        assert_eq!(snapshot.budget_spent, 0.0);
    }

    #[test]
    fn test_snapshot_rejects_garbage() {
        let json = r#"{"total_workers": "lots"}"#;
        assert!(serde_json::from_str::<CurrentSnapshot>(json).is_err());
    }

    #[test]
    fn test_snapshot_ignores_extra_fields() {
        let json = r#"{"id": "x", "district_code": "UP01", "month": 3, "total_workers": 5}"#;
        let snapshot: CurrentSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.total_workers, 5);
    }

    #[test]
    fn test_comparison_drops_null_changes() {
        let json = r#"{"changes": {"total_workers": 5.2, "work_completed": null, "budget_spent": -3}}"#;
        let comparison: ComparisonResult = serde_json::from_str(json).unwrap();
        assert_eq!(comparison.change(Metric::TotalWorkers), Some(5.2));
        assert_eq!(comparison.change(Metric::WorkCompleted), None);
        assert_eq!(comparison.change(Metric::BudgetSpent), Some(-3.0));
        assert_eq!(comparison.change(Metric::AverageWage), None);
    }

    #[test]
    fn test_comparison_without_changes() {
        let comparison: ComparisonResult = serde_json::from_str("{}").unwrap();
        assert!(comparison.changes.is_empty());
    }

    #[test]
    fn test_axis_label_uses_each_points_year() {
        let series = TrendSeries::from_points(&[point(11, 2024), point(12, 2024), point(1, 2025)]);
        assert_eq!(series.labels, vec!["11/2024", "12/2024", "1/2025"]);
    }

    #[test]
    fn test_chronological_check() {
        assert!(is_chronological(&[]));
        assert!(is_chronological(&[point(12, 2024), point(1, 2025)]));
        assert!(!is_chronological(&[point(2, 2025), point(1, 2025)]));
        assert!(!is_chronological(&[point(13, 2025)]));
    }
}
