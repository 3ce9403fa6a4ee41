use gloo_timers::callback::Timeout;
use std::rc::Rc;
use yew::prelude::*;

use crate::config::Config;
use crate::hooks::use_fetch::use_fetch;
use crate::models::{
    catalog::{Category, Product, ProductsResponse},
    chart::ChartConfig,
    dashboard::{DashboardAction, DashboardState},
    error::AppError,
};
use crate::services::catalog_api::CatalogConfig;

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Rc::unwrap_or_clone(self).apply(action))
    }
}

/// Handle returned by `use_dashboard` hook
#[derive(Clone)]
pub struct DashboardHandle {
    pub state: UseReducerHandle<DashboardState>,
    pub categories: Rc<Vec<Category>>,
    pub categories_error: Option<AppError>,
    pub products_error: Option<AppError>,
    pub is_loading_products: bool,
    pub on_category_change: Callback<String>,
    pub on_products_change: Callback<Vec<Product>>,
    pub on_run_report: Callback<()>,
    pub on_clear: Callback<()>,
}

/// Owns the dashboard state and wires it to the catalog fetches and the
/// report timer.
#[hook]
pub fn use_dashboard() -> DashboardHandle {
    let catalog = use_memo((), |_| CatalogConfig::default());
    let state = use_reducer(DashboardState::default);

    let categories = use_fetch::<Vec<Category>>(Some(catalog.categories_url()));
    let products_url = state
        .selected_category()
        .map(|category| catalog.category_products_url(category));
    let products = use_fetch::<ProductsResponse>(products_url.clone());

    // Overview is derived once per distinct category list
    let overview = use_memo(categories.data.clone(), |data| {
        data.as_ref()
            .map(|categories| Rc::new(ChartConfig::overview(categories)))
    });
    {
        let dispatcher = state.dispatcher();
        use_effect_with(overview, move |overview| {
            dispatcher.dispatch(DashboardAction::OverviewReady((**overview).clone()));
            || ()
        });
    }

    // Effect: Hand each landed product list for the current category to the state machine
    {
        let dispatcher = state.dispatcher();
        let category = state.selected_category().map(ToString::to_string);
        let is_current = products.is_for(products_url.as_deref());
        let list = products
            .data()
            .map(|response| Rc::new(response.products.clone()))
            .unwrap_or_default();

        use_effect_with(products.landing(), move |_| {
            if let (true, Some(category)) = (is_current, category) {
                dispatcher.dispatch(DashboardAction::ProductsLoaded {
                    category,
                    products: list,
                });
            }
            || ()
        });
    }

    // Effect: Report timer; dropping the Timeout cancels it
    {
        let dispatcher = state.dispatcher();
        use_effect_with(state.pending_report(), move |pending| {
            let timeout = pending.map(|generation| {
                Timeout::new(Config::REPORT_DELAY_MS, move || {
                    gloo::console::info!(&format!("Report {generation} generated"));
                    dispatcher.dispatch(DashboardAction::CompleteReport { generation });
                })
            });

            move || drop(timeout)
        });
    }

    let on_category_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |category: String| {
            dispatcher.dispatch(DashboardAction::SelectCategory(category));
        })
    };

    let on_products_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |selection: Vec<Product>| {
            dispatcher.dispatch(DashboardAction::SelectProducts(selection));
        })
    };

    let on_run_report = {
        let state = state.clone();
        Callback::from(move |()| {
            if state.can_run_report() {
                gloo::console::info!(&format!(
                    "Running report for {}",
                    state.selected_category().unwrap_or_default()
                ));
            }
            state.dispatch(DashboardAction::RunReport);
        })
    };

    let on_clear = {
        let dispatcher = state.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(DashboardAction::Clear))
    };

    DashboardHandle {
        categories: categories.data.clone().unwrap_or_default(),
        categories_error: categories.error.clone(),
        products_error: products.error.clone(),
        is_loading_products: products.is_loading(),
        state,
        on_category_change,
        on_products_change,
        on_run_report,
        on_clear,
    }
}
