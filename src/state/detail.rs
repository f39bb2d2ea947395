use crate::models::metrics::DistrictMetrics;
use crate::models::performance::{
    ComparisonResult, CurrentSnapshot, DistrictBundle, HistoricalPoint, TrendSeries,
};
use std::rc::Rc;
use yew::prelude::*;

/// Identifies one fetch of the detail view.
///
/// The generation distinguishes repeated requests for the same district, so
/// only the most recent request can land in state.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RequestKey {
    pub district_code: String,
    pub generation: u64,
}

impl RequestKey {
    pub fn new(district_code: impl Into<String>, generation: u64) -> Self {
        Self {
            district_code: district_code.into(),
            generation,
        }
    }
}

/// State of the district detail screen.
#[derive(Clone, PartialEq, Debug)]
pub struct DetailState {
    pub request: Option<RequestKey>,
    pub loading: bool,
    pub current: Option<Rc<CurrentSnapshot>>,
    pub history: Rc<Vec<HistoricalPoint>>,
    pub comparison: Option<Rc<ComparisonResult>>,
    pub error: Option<String>,
}

impl Default for DetailState {
    fn default() -> Self {
        Self {
            request: None,
            loading: true,
            current: None,
            history: Rc::new(Vec::new()),
            comparison: None,
            error: None,
        }
    }
}

impl DetailState {
    /// Whether the view for `district_code` must show placeholders.
    ///
    /// Also true until a request for that district has begun, so slots held
    /// for a previous district are never rendered under the new one.
    pub fn is_loading_for(&self, district_code: &str) -> bool {
        self.loading || self.district_code() != Some(district_code)
    }

    pub fn district_code(&self) -> Option<&str> {
        self.request.as_ref().map(|r| r.district_code.as_str())
    }

    /// Derived metric values; only meaningful once loading has finished.
    pub fn metrics(&self) -> DistrictMetrics {
        DistrictMetrics::derive(self.current.as_deref(), self.comparison.as_deref())
    }

    pub fn trend_series(&self) -> TrendSeries {
        TrendSeries::from_points(&self.history)
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum DetailAction {
    /// A new request started; drops everything fetched for earlier requests
    Begin(RequestKey),
    /// The joined fetch for `key` finished
    Settled {
        key: RequestKey,
        outcome: Result<DistrictBundle, String>,
    },
    DismissError,
}

impl Reducible for DetailState {
    type Action = DetailAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            DetailAction::Begin(key) => Rc::new(Self {
                request: Some(key),
                loading: true,
                ..Self::default()
            }),
            DetailAction::Settled { key, outcome } => {
                if self.request.as_ref() != Some(&key) {
                    // Superseded request
                    return self;
                }

                let mut next = (*self).clone();
                next.loading = false;
                match outcome {
                    Ok(bundle) => {
                        if let Some(current) = bundle.current {
                            next.current = Some(Rc::new(current));
                        }
                        if let Some(history) = bundle.history {
                            next.history = Rc::new(history);
                        }
                        if let Some(comparison) = bundle.comparison {
                            next.comparison = Some(Rc::new(comparison));
                        }
                    }
                    Err(message) => {
                        next.error = Some(message);
                    }
                }
                Rc::new(next)
            }
            DetailAction::DismissError => {
                let mut next = (*self).clone();
                next.error = None;
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(total_workers: u64) -> CurrentSnapshot {
        CurrentSnapshot {
            total_workers,
            ..Default::default()
        }
    }

    fn bundle(total_workers: u64) -> DistrictBundle {
        DistrictBundle {
            current: Some(snapshot(total_workers)),
            history: Some(vec![HistoricalPoint {
                month: 1,
                year: 2025,
                ..Default::default()
            }]),
            comparison: None,
        }
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = DetailState::default();
        assert!(state.loading);
        assert!(state.is_loading_for("UP01"));
    }

    #[test]
    fn test_settled_district_is_loading_for_another_code() {
        let a = RequestKey::new("UP01", 1);
        let state = Rc::new(DetailState::default())
            .reduce(DetailAction::Begin(a.clone()))
            .reduce(DetailAction::Settled {
                key: a,
                outcome: Ok(bundle(10)),
            });

        assert!(!state.is_loading_for("UP01"));
        // Identifier changed, the effect has not dispatched `Begin` yet
        assert!(state.is_loading_for("UP02"));
    }

    #[test]
    fn test_begin_clears_previous_district() {
        let a = RequestKey::new("UP01", 1);
        let state = Rc::new(DetailState::default())
            .reduce(DetailAction::Begin(a.clone()))
            .reduce(DetailAction::Settled {
                key: a,
                outcome: Ok(bundle(10)),
            });
        assert!(state.current.is_some());

        let state = state.reduce(DetailAction::Begin(RequestKey::new("UP02", 2)));
        assert!(state.loading);
        assert!(state.current.is_none());
        assert!(state.history.is_empty());
        assert_eq!(state.district_code(), Some("UP02"));
    }

    #[test]
    fn test_unsuccessful_slot_stays_empty() {
        let key = RequestKey::new("UP01", 1);
        let state = Rc::new(DetailState::default())
            .reduce(DetailAction::Begin(key.clone()))
            .reduce(DetailAction::Settled {
                key,
                outcome: Ok(DistrictBundle {
                    current: None,
                    history: Some(Vec::new()),
                    comparison: Some(ComparisonResult::default()),
                }),
            });
        assert!(!state.loading);
        assert!(state.current.is_none());
        assert!(state.comparison.is_some());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_failure_clears_loading() {
        let key = RequestKey::new("UP01", 1);
        let state = Rc::new(DetailState::default())
            .reduce(DetailAction::Begin(key.clone()))
            .reduce(DetailAction::Settled {
                key,
                outcome: Err("network".to_string()),
            });
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("network"));
        assert!(state.current.is_none());
    }

    #[test]
    fn test_same_district_older_generation_is_ignored() {
        let first = RequestKey::new("UP01", 1);
        let second = RequestKey::new("UP01", 2);
        let state = Rc::new(DetailState::default())
            .reduce(DetailAction::Begin(first.clone()))
            .reduce(DetailAction::Begin(second.clone()))
            .reduce(DetailAction::Settled {
                key: first,
                outcome: Ok(bundle(1)),
            });
        assert!(state.loading);
        assert!(state.current.is_none());

        let state = state.reduce(DetailAction::Settled {
            key: second,
            outcome: Ok(bundle(2)),
        });
        assert_eq!(state.current.as_ref().unwrap().total_workers, 2);
    }
}
