#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use mgnrega_dashboard::i18n::{Language, TextKey, translate};
    use mgnrega_dashboard::models::{
        district::{DistrictSummary, filter_districts},
        error::AppError,
        metrics::{DistrictMetrics, Trend},
        performance::{
            ComparisonResult, CurrentSnapshot, DistrictBundle, HistoricalPoint, Metric,
            TrendSeries,
        },
        response::ApiEnvelope,
    };
    use mgnrega_dashboard::services::api::{DistrictSource, load_district_bundle};
    use mgnrega_dashboard::state::detail::{DetailAction, DetailState, RequestKey};
    use mgnrega_dashboard::state::list::{ListAction, ListState};
    use mgnrega_dashboard::utils::format::{Utilization, format_number, format_percentage};
    use std::rc::Rc;
    use yew::Reducible;

    // Helper function to create a catalog entry
    fn district(code: &str, name: &str, name_hi: &str) -> DistrictSummary {
        DistrictSummary {
            district_code: code.to_string(),
            district_name: name.to_string(),
            district_name_hi: name_hi.to_string(),
            state_code: "UP".to_string(),
            state_name: "Uttar Pradesh".to_string(),
            state_name_hi: "उत्तर प्रदेश".to_string(),
            latitude: None,
            longitude: None,
        }
    }

    fn catalog() -> Vec<DistrictSummary> {
        vec![
            district("AGR", "Agra", "आगरा"),
            district("KNP", "Kanpur", "कानपुर"),
        ]
    }

    fn agra_snapshot() -> CurrentSnapshot {
        serde_json::from_str(
            r#"{
                "total_workers": 1200000,
                "work_completed": "450",
                "average_wage": "285",
                "person_days_generated": 8500000,
                "budget_allocated": 50000000,
                "budget_spent": 32000000
            }"#,
        )
        .unwrap()
    }

    fn agra_comparison() -> ComparisonResult {
        serde_json::from_str(r#"{"changes": {"total_workers": 5.2}}"#).unwrap()
    }

    // Fake data source answering from fixed envelopes
    struct FakeSource {
        current: Result<ApiEnvelope<CurrentSnapshot>, AppError>,
        history: Result<ApiEnvelope<Vec<HistoricalPoint>>, AppError>,
        comparison: Result<ApiEnvelope<ComparisonResult>, AppError>,
    }

    impl FakeSource {
        fn healthy() -> Self {
            Self {
                current: Ok(ApiEnvelope::ok(agra_snapshot())),
                history: Ok(ApiEnvelope::ok(Vec::new())),
                comparison: Ok(ApiEnvelope::ok(agra_comparison())),
            }
        }
    }

    impl DistrictSource for FakeSource {
        async fn districts(&self) -> Result<ApiEnvelope<Vec<DistrictSummary>>, AppError> {
            Ok(ApiEnvelope::ok(catalog()))
        }

        async fn current(&self, _: &str) -> Result<ApiEnvelope<CurrentSnapshot>, AppError> {
            self.current.clone()
        }

        async fn history(&self, _: &str) -> Result<ApiEnvelope<Vec<HistoricalPoint>>, AppError> {
            self.history.clone()
        }

        async fn comparison(&self, _: &str) -> Result<ApiEnvelope<ComparisonResult>, AppError> {
            self.comparison.clone()
        }
    }

    // FORMATTER TESTS

    #[test]
    fn test_format_number_units() {
        assert_eq!(format_number(Some(50_000_000.0)), "₹5.00Cr");
        assert_eq!(format_number(Some(250_000.0)), "₹2.50L");
        assert_eq!(format_number(Some(1_200.0)), "₹1.20K");
        assert_eq!(format_number(Some(999.0)), "999");
        assert_eq!(format_number(None), "0");
    }

    #[test]
    fn test_format_percentage_sign() {
        assert_eq!(format_percentage(5.25), "+5.3%");
        assert_eq!(format_percentage(-2.0), "-2.0%");
        assert_eq!(format_percentage(0.0), "+0.0%");
    }

    #[test]
    fn test_overspent_budget() {
        let utilization = Utilization::new(150.0, 100.0);
        assert_eq!(utilization.label(), "150.0% utilized");
        assert_eq!(utilization.bar_fraction(), 1.0);
        assert_eq!(utilization.bar_width(), "100.0%");
    }

    #[test]
    fn test_zero_allocation_does_not_divide_by_zero() {
        let utilization = Utilization::new(0.0, 0.0);
        assert_eq!(utilization.percent_text(), "0.0%");
    }

    // SEARCH TESTS

    #[test]
    fn test_search_filter() {
        let catalog = catalog();

        let agra = filter_districts(&catalog, "agra");
        assert_eq!(agra.len(), 1);
        assert_eq!(agra[0].district_code, "AGR");

        assert_eq!(filter_districts(&catalog, "").len(), 2);
        assert!(filter_districts(&catalog, "xyz").is_empty());
    }

    #[test]
    fn test_search_matches_hindi_name() {
        let catalog = catalog();
        let found = filter_districts(&catalog, "कानपुर");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].district_code, "KNP");
    }

    #[test]
    fn test_list_state_search() {
        let state = Rc::new(ListState::default())
            .reduce(ListAction::Loaded(catalog()))
            .reduce(ListAction::Search("KAN".to_string()));

        let visible = state.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name(Language::Hindi), "कानपुर");
    }

    // DETAIL VIEW TESTS

    #[test]
    fn test_agra_metrics_end_to_end() {
        let snapshot = agra_snapshot();
        let comparison = agra_comparison();
        let metrics = DistrictMetrics::derive(Some(&snapshot), Some(&comparison));

        let workers = metrics.card(Metric::TotalWorkers).unwrap();
        assert_eq!(workers.value, "12,00,000");
        assert_eq!(workers.change_text().as_deref(), Some("+5.2%"));
        assert_eq!(workers.trend(), Some(Trend::Up));

        let completed = metrics.card(Metric::WorkCompleted).unwrap();
        assert_eq!(completed.value, "450");
        assert_eq!(completed.trend(), None);

        assert_eq!(metrics.card(Metric::AverageWage).unwrap().value, "₹285");
        assert_eq!(
            metrics.card(Metric::PersonDaysGenerated).unwrap().value,
            "85,00,000"
        );
        assert_eq!(metrics.card(Metric::WorkOngoing).unwrap().value, "0");

        assert_eq!(metrics.budget_allocated, "₹5.00Cr");
        assert_eq!(metrics.budget_spent, "₹3.20Cr");
        assert_eq!(metrics.utilization.percent_text(), "64.0%");
        assert_eq!(metrics.cards.len(), 5);
    }

    #[test]
    fn test_detail_view_starts_with_placeholders() {
        let state = Rc::new(DetailState::default());
        assert!(state.is_loading_for("AGR"));

        let key = RequestKey::new("AGR", 1);
        let state = state
            .reduce(DetailAction::Begin(key.clone()))
            .reduce(DetailAction::Settled {
                key,
                outcome: Ok(DistrictBundle {
                    current: Some(agra_snapshot()),
                    history: None,
                    comparison: None,
                }),
            });
        assert!(!state.is_loading_for("AGR"));
        assert!(state.is_loading_for("KNP"));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let key_a = RequestKey::new("AGR", 1);
        let key_b = RequestKey::new("KNP", 2);

        let state = Rc::new(DetailState::default())
            .reduce(DetailAction::Begin(key_a.clone()))
            .reduce(DetailAction::Begin(key_b.clone()));

        // B resolves first, then the late answer for A arrives
        let state = state
            .reduce(DetailAction::Settled {
                key: key_b,
                outcome: Ok(DistrictBundle {
                    current: Some(CurrentSnapshot {
                        total_workers: 20,
                        ..CurrentSnapshot::default()
                    }),
                    history: None,
                    comparison: None,
                }),
            })
            .reduce(DetailAction::Settled {
                key: key_a,
                outcome: Ok(DistrictBundle {
                    current: Some(agra_snapshot()),
                    history: None,
                    comparison: None,
                }),
            });

        assert_eq!(state.district_code(), Some("KNP"));
        assert!(!state.loading);
        assert_eq!(state.current.as_ref().unwrap().total_workers, 20);
    }

    #[test]
    fn test_failed_request_shows_error_without_data() {
        let key = RequestKey::new("AGR", 1);
        let state = Rc::new(DetailState::default())
            .reduce(DetailAction::Begin(key.clone()))
            .reduce(DetailAction::Settled {
                key,
                outcome: Err("Network error".to_string()),
            });

        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Network error"));
        assert!(state.current.is_none());
        assert!(state.trend_series().is_empty());
    }

    // DATA LOADING TESTS

    #[test]
    fn test_bundle_collects_all_slots() {
        let bundle = block_on(load_district_bundle(&FakeSource::healthy(), "AGR")).unwrap();

        assert_eq!(bundle.current, Some(agra_snapshot()));
        assert_eq!(bundle.history, Some(Vec::new()));
        assert_eq!(bundle.comparison, Some(agra_comparison()));
    }

    #[test]
    fn test_bundle_fails_fast_on_any_error() {
        let source = FakeSource {
            history: Err(AppError::ApiError("Server error 500".to_string())),
            ..FakeSource::healthy()
        };

        let result = block_on(load_district_bundle(&source, "AGR"));
        assert_eq!(
            result,
            Err(AppError::ApiError("Server error 500".to_string()))
        );
    }

    #[test]
    fn test_unsuccessful_endpoint_leaves_slot_empty() {
        let source = FakeSource {
            comparison: Ok(ApiEnvelope::unsuccessful()),
            ..FakeSource::healthy()
        };

        let bundle = block_on(load_district_bundle(&source, "AGR")).unwrap();
        assert!(bundle.comparison.is_none());
        assert!(bundle.current.is_some());

        let metrics = DistrictMetrics::derive(bundle.current.as_ref(), None);
        assert!(metrics.cards.iter().all(|card| card.trend().is_none()));
    }

    #[test]
    fn test_catalog_envelope_parse() {
        let json = r#"{
            "success": true,
            "data": [
                {
                    "district_code": "AGR",
                    "district_name": "Agra",
                    "district_name_hi": "आगरा",
                    "state_code": "UP",
                    "state_name": "Uttar Pradesh",
                    "latitude": 27.18,
                    "longitude": 78.01
                }
            ]
        }"#;

        let envelope: ApiEnvelope<Vec<DistrictSummary>> = serde_json::from_str(json).unwrap();
        let districts = envelope.into_data().unwrap();
        assert_eq!(districts.len(), 1);
        assert_eq!(districts[0].name(Language::English), "Agra");
        assert_eq!(districts[0].latitude, Some(27.18));
    }

    #[test]
    fn test_history_series_keeps_source_order() {
        let json = r#"[
            {"month": 11, "year": 2024, "total_workers": 10, "budget_spent": "12.5"},
            {"month": 1, "year": 2025, "total_workers": 20}
        ]"#;

        let points: Vec<HistoricalPoint> = serde_json::from_str(json).unwrap();
        let series = TrendSeries::from_points(&points);

        assert_eq!(series.labels, vec!["11/2024", "1/2025"]);
        assert_eq!(series.total_workers, vec![10.0, 20.0]);
        assert_eq!(series.budget_spent, vec![12.5, 0.0]);
    }

    // TRANSLATION TESTS

    #[test]
    fn test_every_key_translated_in_both_languages() {
        for key in TextKey::ALL {
            assert!(!translate(Language::Hindi, *key).is_empty(), "{key:?}");
            assert!(!translate(Language::English, *key).is_empty(), "{key:?}");
        }
    }

    #[test]
    fn test_default_language_is_hindi() {
        assert_eq!(Language::default(), Language::Hindi);
        assert_eq!(Language::Hindi.toggle(), Language::English);
        assert_eq!(translate(Language::English, TextKey::Back), "Back to Districts");
    }
}
