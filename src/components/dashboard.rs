use yew::prelude::*;

use crate::components::chart_display::ChartDisplay;
use crate::components::error_banner::FetchErrorBanner;
use crate::components::filters_panel::FiltersPanel;
use crate::hooks::use_dashboard::use_dashboard;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let dashboard = use_dashboard();
    let state = &*dashboard.state;

    html! {
        <div class="dashboard">
            if let Some(error) = dashboard.categories_error.clone() {
                <FetchErrorBanner subject="categories" {error} />
            }
            if let Some(error) = dashboard.products_error.clone() {
                <FetchErrorBanner subject="products" {error} />
            }

            <div class="dashboard-grid">
                <aside class="dashboard-filters">
                    <FiltersPanel
                        categories={dashboard.categories.clone()}
                        products={state.products().clone()}
                        selected_category={state.selected_category().map(ToString::to_string)}
                        selected_products={state.selected_products().to_vec()}
                        on_category_change={dashboard.on_category_change.clone()}
                        on_products_change={dashboard.on_products_change.clone()}
                        on_run_report={dashboard.on_run_report.clone()}
                        on_clear={dashboard.on_clear.clone()}
                        is_report_button_disabled={!state.can_run_report()}
                        is_loading_report={state.is_loading_report()}
                        phase={state.phase()}
                        is_loading_products={dashboard.is_loading_products}
                    />
                </aside>
                <div class="dashboard-chart">
                    <ChartDisplay
                        chart={state.chart().cloned()}
                        is_loading={state.is_loading_report()}
                    />
                </div>
            </div>
        </div>
    }
}
