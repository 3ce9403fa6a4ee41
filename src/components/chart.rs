use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, Label, LineStyle,
        LineStyleType, SplitLine, TextStyle, Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::{Bar, Pie},
};
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::chart::{ChartConfig, OverviewEntry};

const CHART_ID: &str = "products-chart";

const TITLE_COLOR: &str = "#1f2937";
const AXIS_COLOR: &str = "#6b7280";
const GRID_COLOR: &str = "#e5e7eb";
const BAR_COLOR: &str = "#648fff";

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    pub config: Rc<ChartConfig>,
}

/// Draws a [`ChartConfig`] and redraws it when the window is resized.
#[function_component(Chart)]
pub fn chart(props: &ChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();

        use_effect_with(
            (props.config.clone(), container_ref),
            |(config, container_ref)| {
                let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                    render_chart(&container, config);

                    let config = config.clone();
                    web_sys::window().map(|window| {
                        EventListener::new(&window, "resize", move |_| {
                            render_chart(&container, &config);
                        })
                    })
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, config: &ChartConfig) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(config);
    if let Err(e) = WasmRenderer::new(width, height).render(CHART_ID, &chart) {
        gloo::console::error!(&format!("Render error: {e:?}"));
    }
}

fn build_chart(config: &ChartConfig) -> CharmingChart {
    let title = Title::new()
        .text(config.title())
        .left("center")
        .text_style(TextStyle::new().font_size(16).color(TITLE_COLOR));

    match config {
        ChartConfig::Overview { entries, .. } => build_overview(title, entries),
        ChartConfig::PriceReport { labels, prices, .. } => build_price_report(title, labels, prices),
    }
}

fn build_overview(title: Title, entries: &[OverviewEntry]) -> CharmingChart {
    let data: Vec<(f64, &str)> = entries
        .iter()
        .map(|e| (e.weight, e.name.as_str()))
        .collect();

    CharmingChart::new()
        .title(title)
        .tooltip(Tooltip::new().trigger(Trigger::Item).formatter("{b}: {d}%"))
        .legend(Legend::new().top("bottom"))
        .series(
            Pie::new()
                .name("Categories")
                .radius(vec!["35%", "65%"])
                .item_style(ItemStyle::new().border_radius(4))
                .label(Label::new().show(true).formatter("{b}"))
                .data(data),
        )
}

fn build_price_report(title: Title, labels: &[String], prices: &[f64]) -> CharmingChart {
    CharmingChart::new()
        .title(title)
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
                .formatter("{b}<br/>Price: ${c}"),
        )
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("18%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name("Products")
                .data(labels.to_vec())
                .axis_label(AxisLabel::new().rotate(30).color(AXIS_COLOR)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("Price (USD)")
                .axis_label(AxisLabel::new().color(AXIS_COLOR))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(GRID_COLOR)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(
            Bar::new()
                .name("Price")
                .item_style(ItemStyle::new().color(BAR_COLOR))
                .data(prices.to_vec())
                .bar_width("60%"),
        )
}
