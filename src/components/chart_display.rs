use std::rc::Rc;
use yew::prelude::*;

use crate::components::chart::Chart;
use crate::models::chart::ChartConfig;

/// The one view the chart area shows. Loading wins over a present chart.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartPanel {
    Loading,
    Chart(Rc<ChartConfig>),
    Prompt,
}

impl ChartPanel {
    pub fn select(is_loading: bool, chart: Option<&Rc<ChartConfig>>) -> Self {
        match (is_loading, chart) {
            (true, _) => Self::Loading,
            (false, Some(config)) => Self::Chart(config.clone()),
            (false, None) => Self::Prompt,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ChartDisplayProps {
    pub chart: Option<Rc<ChartConfig>>,
    pub is_loading: bool,
}

#[function_component(ChartDisplay)]
pub fn chart_display(props: &ChartDisplayProps) -> Html {
    let body = match ChartPanel::select(props.is_loading, props.chart.as_ref()) {
        ChartPanel::Loading => html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"Generating Report..."}</p>
            </div>
        },
        ChartPanel::Chart(config) => html! {
            <div class="chart-wrapper">
                <Chart {config} />
                <p class="chart-caption">
                    {"The chart shows the price of all selected products in the selected category"}
                </p>
            </div>
        },
        ChartPanel::Prompt => html! {
            <div class="chart-prompt">
                <p>{"Select a category and click \"Run Report\" to view data."}</p>
            </div>
        },
    };

    html! {
        <section class="card chart-section">
            {body}
        </section>
    }
}
