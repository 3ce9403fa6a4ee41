#[cfg(test)]
mod tests {
    use products_dashboard::components::ChartPanel;
    use products_dashboard::hooks::use_fetch::FetchState;
    use products_dashboard::models::{
        catalog::{Category, Product, ProductsResponse},
        chart::{ChartConfig, OverviewEntry},
        dashboard::{DashboardAction, DashboardState, ReportPhase},
        error::AppError,
    };
    use std::rc::Rc;

    // Helper function to create the smartphones product list
    fn create_test_products() -> Rc<Vec<Product>> {
        Rc::new(vec![
            Product::new(1, "X", 10.0),
            Product::new(2, "Y", 20.0),
        ])
    }

    fn create_test_categories() -> Vec<Category> {
        vec![Category::new("A"), Category::new("B")]
    }

    fn overview() -> Option<Rc<ChartConfig>> {
        Some(Rc::new(ChartConfig::overview(&create_test_categories())))
    }

    fn products_loaded(category: &str, products: Rc<Vec<Product>>) -> DashboardAction {
        DashboardAction::ProductsLoaded {
            category: category.to_string(),
            products,
        }
    }

    const CATEGORIES_URL: &str = "https://dummyjson.com/products/categories";

    // Dashboard with categories loaded, "smartphones" selected and its products in
    fn create_smartphones_state() -> DashboardState {
        DashboardState::default()
            .apply(DashboardAction::OverviewReady(overview()))
            .apply(DashboardAction::SelectCategory("smartphones".to_string()))
            .apply(products_loaded("smartphones", create_test_products()))
    }

    fn complete_pending(state: DashboardState) -> DashboardState {
        let generation = state.pending_report().expect("report should be pending");
        state.apply(DashboardAction::CompleteReport { generation })
    }

    fn price_points(state: &DashboardState) -> Vec<(String, f64)> {
        state
            .chart()
            .expect("chart should be present")
            .points()
            .into_iter()
            .map(|(label, value)| (label.to_string(), value))
            .collect()
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_network_display() {
        let error = AppError::NetworkError("connection refused".to_string());
        assert_eq!(error.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_app_error_status_display() {
        let error = AppError::HttpStatus {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP 500: boom");
    }

    // ===== Catalog Model Tests =====

    #[test]
    fn test_categories_deserialization() {
        let json = r#"[{"name": "A"}, {"name": "B"}]"#;

        let categories: Vec<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(categories, create_test_categories());
    }

    #[test]
    fn test_products_response_deserialization() {
        let json = r#"{"products": [
            {"id": 1, "title": "X", "price": 10, "category": "smartphones"},
            {"id": 2, "title": "Y", "price": 20, "category": "smartphones"}
        ]}"#;

        let response: ProductsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.products, *create_test_products());
    }

    // ===== Chart Config Tests =====

    #[test]
    fn test_overview_has_one_equal_entry_per_category() {
        let config = ChartConfig::overview(&create_test_categories());

        match config {
            ChartConfig::Overview { entries, .. } => assert_eq!(
                entries,
                vec![
                    OverviewEntry {
                        name: "A".to_string(),
                        weight: 1.0
                    },
                    OverviewEntry {
                        name: "B".to_string(),
                        weight: 1.0
                    },
                ]
            ),
            other => panic!("expected overview, got {other:?}"),
        }
    }

    #[test]
    fn test_price_report_keeps_duplicate_titles() {
        let products = vec![
            Product::new(1, "Case", 5.0),
            Product::new(2, "Case", 7.5),
        ];

        let config = ChartConfig::price_report("accessories", &products);
        assert_eq!(config.title(), "Product Prices in accessories");
        assert_eq!(config.points(), vec![("Case", 5.0), ("Case", 7.5)]);
    }

    // ===== Dashboard State Machine Tests =====

    #[test]
    fn test_initial_state_is_idle() {
        let state = DashboardState::default();

        assert_eq!(state.phase(), ReportPhase::Idle);
        assert!(state.chart().is_none());
        assert!(!state.can_run_report());
    }

    #[test]
    fn test_overview_shown_when_no_category_selected() {
        let state = DashboardState::default().apply(DashboardAction::OverviewReady(overview()));

        let points = price_points(&state);
        assert_eq!(points, vec![("A".to_string(), 1.0), ("B".to_string(), 1.0)]);
    }

    #[test]
    fn test_overview_arriving_after_category_selection_is_held_back() {
        let state = DashboardState::default()
            .apply(DashboardAction::SelectCategory("smartphones".to_string()))
            .apply(DashboardAction::OverviewReady(overview()));

        assert!(state.chart().is_none());

        let state = state.apply(DashboardAction::Clear);
        assert_eq!(state.chart().cloned(), overview());
    }

    #[test]
    fn test_category_change_clears_selected_products() {
        let state = create_smartphones_state();
        let x = state.products()[0].clone();
        let state = state.apply(DashboardAction::SelectProducts(vec![x]));
        assert_eq!(state.selected_products().len(), 1);

        let mut state = state;
        for category in ["laptops", "smartphones", "fragrances"] {
            state = state
                .apply(DashboardAction::SelectCategory(category.to_string()))
                .apply(products_loaded(category, create_test_products()));
            assert!(state.selected_products().is_empty());

            let y = state.products()[1].clone();
            state = state.apply(DashboardAction::SelectProducts(vec![y]));
            assert_eq!(state.selected_products().len(), 1);
        }
    }

    #[test]
    fn test_report_button_enablement() {
        let idle = DashboardState::default();
        assert!(!idle.can_run_report());

        let selected = create_smartphones_state();
        assert_eq!(selected.phase(), ReportPhase::CategorySelected);
        assert!(selected.can_run_report());

        let loading = selected.apply(DashboardAction::RunReport);
        assert_eq!(loading.phase(), ReportPhase::ReportLoading);
        assert!(!loading.can_run_report());

        let ready = complete_pending(loading);
        assert_eq!(ready.phase(), ReportPhase::ReportReady);
        assert!(!ready.can_run_report());
    }

    #[test]
    fn test_run_report_while_disabled_is_ignored() {
        let loading = create_smartphones_state().apply(DashboardAction::RunReport);
        let generation = loading.pending_report();

        let again = loading.clone().apply(DashboardAction::RunReport);
        assert_eq!(again, loading);
        assert_eq!(again.pending_report(), generation);

        let idle = DashboardState::default().apply(DashboardAction::RunReport);
        assert!(!idle.is_loading_report());
    }

    #[test]
    fn test_report_covers_whole_category_without_selection() {
        let state = complete_pending(create_smartphones_state().apply(DashboardAction::RunReport));

        assert_eq!(
            price_points(&state),
            vec![("X".to_string(), 10.0), ("Y".to_string(), 20.0)]
        );
        assert!(state.is_report_run());
        assert!(!state.is_loading_report());
    }

    #[test]
    fn test_report_covers_explicit_selection_only() {
        let state = create_smartphones_state();
        let x = state.products()[0].clone();

        let state = complete_pending(
            state
                .apply(DashboardAction::SelectProducts(vec![x]))
                .apply(DashboardAction::RunReport),
        );

        assert_eq!(price_points(&state), vec![("X".to_string(), 10.0)]);
    }

    #[test]
    fn test_chart_cleared_while_report_loading() {
        let state = create_smartphones_state();
        assert!(state.chart().is_some());

        let loading = state.apply(DashboardAction::RunReport);
        assert!(loading.chart().is_none());
        assert_eq!(
            ChartPanel::select(loading.is_loading_report(), loading.chart()),
            ChartPanel::Loading
        );
    }

    #[test]
    fn test_selection_change_after_report_reenables_run() {
        let ready = complete_pending(create_smartphones_state().apply(DashboardAction::RunReport));
        let report = ready.chart().cloned();
        let y = ready.products()[1].clone();

        let state = ready.apply(DashboardAction::SelectProducts(vec![y]));
        assert_eq!(state.phase(), ReportPhase::CategorySelected);
        assert!(state.can_run_report());
        // The finished report stays on screen until the next run
        assert_eq!(state.chart().cloned(), report);
    }

    #[test]
    fn test_select_products_dedupes_and_ignores_foreign_products() {
        let state = create_smartphones_state();
        let x = state.products()[0].clone();
        let foreign = Product::new(99, "Laptop", 999.0);

        let state = state.apply(DashboardAction::SelectProducts(vec![
            x.clone(),
            foreign,
            x.clone(),
        ]));
        assert_eq!(state.selected_products(), &[x]);
    }

    #[test]
    fn test_select_products_without_category_is_ignored() {
        let state = DashboardState::default().apply(DashboardAction::SelectProducts(vec![
            Product::new(1, "X", 10.0),
        ]));
        assert!(state.selected_products().is_empty());
    }

    #[test]
    fn test_clear_resets_from_every_phase() {
        let selected = create_smartphones_state();
        let loading = selected.clone().apply(DashboardAction::RunReport);
        let ready = complete_pending(loading.clone());

        let idle = DashboardState::default().apply(DashboardAction::OverviewReady(overview()));

        for state in [idle, selected, loading, ready] {
            let cleared = state.apply(DashboardAction::Clear);

            assert_eq!(cleared.selected_category(), None);
            assert!(cleared.selected_products().is_empty());
            assert!(cleared.products().is_empty());
            assert!(!cleared.is_loading_report());
            assert!(!cleared.is_report_run());
            assert_eq!(cleared.chart().cloned(), overview());
            assert_eq!(cleared.phase(), ReportPhase::Idle);
        }
    }

    #[test]
    fn test_clear_cancels_pending_report() {
        let loading = create_smartphones_state().apply(DashboardAction::RunReport);
        let generation = loading.pending_report().unwrap();

        let cleared = loading.apply(DashboardAction::Clear);
        let late = cleared
            .clone()
            .apply(DashboardAction::CompleteReport { generation });

        assert_eq!(late, cleared);
        assert_eq!(late.chart().cloned(), overview());
    }

    #[test]
    fn test_category_change_cancels_pending_report() {
        let loading = create_smartphones_state().apply(DashboardAction::RunReport);
        let generation = loading.pending_report().unwrap();

        let switched = loading.apply(DashboardAction::SelectCategory("laptops".to_string()));
        assert!(!switched.is_loading_report());
        assert_eq!(switched.chart().cloned(), overview());

        let late = switched
            .clone()
            .apply(DashboardAction::CompleteReport { generation });
        assert!(!late.is_report_run());
        assert_eq!(late, switched);
    }

    #[test]
    fn test_reselecting_same_category_keeps_selection() {
        let state = create_smartphones_state();
        let x = state.products()[0].clone();
        let state = state.apply(DashboardAction::SelectProducts(vec![x]));

        let same = state
            .clone()
            .apply(DashboardAction::SelectCategory("smartphones".to_string()));
        assert_eq!(same, state);
    }

    #[test]
    fn test_products_loaded_prunes_stale_selection() {
        let state = create_smartphones_state();
        let x = state.products()[0].clone();
        let state = state.apply(DashboardAction::SelectProducts(vec![x]));

        let state = state.apply(products_loaded(
            "smartphones",
            Rc::new(vec![Product::new(2, "Y", 20.0)]),
        ));
        assert!(state.selected_products().is_empty());
    }

    #[test]
    fn test_products_for_unselected_category_are_ignored() {
        let state = create_smartphones_state()
            .apply(DashboardAction::SelectCategory("laptops".to_string()));

        let late = state
            .clone()
            .apply(products_loaded("smartphones", create_test_products()));
        assert_eq!(late, state);
        assert!(late.products().is_empty());
    }

    #[test]
    fn test_switching_back_to_category_reloads_its_products() {
        // A -> B -> A where the second load of A returns the same list
        let state = create_smartphones_state()
            .apply(DashboardAction::SelectCategory("laptops".to_string()))
            .apply(products_loaded(
                "laptops",
                Rc::new(vec![Product::new(7, "L", 900.0)]),
            ))
            .apply(DashboardAction::SelectCategory("smartphones".to_string()));
        assert!(state.products().is_empty());

        let state = state.apply(products_loaded("smartphones", create_test_products()));
        assert_eq!(state.products().len(), 2);

        let state = complete_pending(state.apply(DashboardAction::RunReport));
        assert_eq!(
            price_points(&state),
            vec![("X".to_string(), 10.0), ("Y".to_string(), 20.0)]
        );
    }

    // ===== Chart Panel Tests =====

    #[test]
    fn test_chart_panel_precedence() {
        let config = Rc::new(ChartConfig::overview(&create_test_categories()));

        assert_eq!(ChartPanel::select(true, Some(&config)), ChartPanel::Loading);
        assert_eq!(ChartPanel::select(true, None), ChartPanel::Loading);
        assert_eq!(
            ChartPanel::select(false, Some(&config)),
            ChartPanel::Chart(config.clone())
        );
        assert_eq!(ChartPanel::select(false, None), ChartPanel::Prompt);
    }

    // ===== FetchState Tests =====

    #[test]
    fn test_fetch_state_idle() {
        let state = FetchState::<Vec<Category>>::idle();
        assert!(state.data().is_none());
        assert!(!state.is_loading());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_fetch_state_begin_keeps_previous_outcome() {
        let loaded = FetchState::loaded(CATEGORIES_URL, 1, create_test_categories());
        let pending = loaded.begin();

        assert!(pending.is_loading());
        assert_eq!(pending.data(), loaded.data());

        let failed = FetchState::<Vec<Category>>::failed(
            CATEGORIES_URL,
            2,
            AppError::Timeout("slow".to_string()),
        );
        let retrying = failed.begin();
        assert!(retrying.is_loading());
        assert_eq!(retrying.error, failed.error);
    }

    #[test]
    fn test_fetch_state_failure_drops_data() {
        let failed = FetchState::<Vec<Category>>::failed(
            CATEGORIES_URL,
            1,
            AppError::NetworkError("offline".to_string()),
        );

        assert!(failed.data().is_none());
        assert!(!failed.is_loading());
        assert_eq!(
            failed.error,
            Some(AppError::NetworkError("offline".to_string()))
        );
    }

    #[test]
    fn test_fetch_state_loaded() {
        let state = FetchState::loaded(CATEGORIES_URL, 1, create_test_categories());

        assert_eq!(
            state.data().map(|d| d.as_slice()),
            Some(create_test_categories().as_slice())
        );
        assert!(state.error.is_none());
        assert!(state.is_for(Some(CATEGORIES_URL)));
    }

    #[test]
    fn test_fetch_state_is_for() {
        let idle = FetchState::<Vec<Category>>::idle();
        assert!(!idle.is_for(None));
        assert!(!idle.is_for(Some(CATEGORIES_URL)));

        let state = FetchState::loaded(CATEGORIES_URL, 1, create_test_categories());
        assert!(!state.is_for(None));
        assert!(!state.is_for(Some("https://dummyjson.com/products/category/laptops")));

        // In-flight requests keep reporting the url of the outcome they hold
        assert!(state.begin().is_for(Some(CATEGORIES_URL)));
    }

    #[test]
    fn test_fetch_state_refetch_with_same_body_is_a_new_landing() {
        let first = FetchState::loaded(CATEGORIES_URL, 1, create_test_categories());
        let second = FetchState::loaded(CATEGORIES_URL, 2, create_test_categories());

        assert_eq!(first.data(), second.data());
        assert_ne!(first.landing(), second.landing());
        assert_eq!(first.begin().landing(), first.landing());
    }
}
