use std::rc::Rc;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::catalog::{Category, Product};
use crate::models::dashboard::{ReportPhase, with_product_added, without_product};

#[derive(Properties, PartialEq)]
pub struct FiltersPanelProps {
    pub categories: Rc<Vec<Category>>,
    pub products: Rc<Vec<Product>>,
    pub selected_category: Option<String>,
    pub selected_products: Vec<Product>,
    pub on_category_change: Callback<String>,
    pub on_products_change: Callback<Vec<Product>>,
    pub on_run_report: Callback<()>,
    pub on_clear: Callback<()>,
    pub is_report_button_disabled: bool,
    pub is_loading_report: bool,
    pub phase: ReportPhase,
    #[prop_or_default]
    pub is_loading_products: bool,
}

/// Value the category `<select>` should show; the placeholder when nothing is selected.
pub fn category_select_value(selected: Option<&str>) -> &str {
    selected.unwrap_or_default()
}

/// Category and product pickers plus the report actions. Holds no state.
#[function_component(FiltersPanel)]
pub fn filters_panel(props: &FiltersPanelProps) -> Html {
    let category_ref = use_node_ref();

    // Effect: Keep the native select in step with the selected category (Clear resets it)
    {
        let category_ref = category_ref.clone();
        use_effect_with(
            (props.selected_category.clone(), props.categories.clone()),
            move |(selected, _)| {
                if let Some(select) = category_ref.cast::<HtmlSelectElement>() {
                    select.set_value(category_select_value(selected.as_deref()));
                }
                || ()
            },
        );
    }

    let on_category_change = {
        let callback = props.on_category_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            let value = target.value();
            if !value.is_empty() {
                callback.emit(value);
            }
        })
    };

    let on_product_added = {
        let callback = props.on_products_change.clone();
        let selected = props.selected_products.clone();
        let options = props.products.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(id) = target.value().parse::<u64>() {
                callback.emit(with_product_added(&selected, &options, id));
            }
            target.set_value("");
        })
    };

    let on_run_report = {
        let callback = props.on_run_report.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    let on_clear = {
        let callback = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    let products_disabled = props.selected_category.is_none();
    let selected_category = props.selected_category.as_deref();

    html! {
        <section class="card filters-panel">
            <div class="filters-header">
                <h2>{"Filters"}</h2>
                <button class="button-text" onclick={on_clear}>{"Clear"}</button>
            </div>

            <div class="filters-body">
                <label class="field">
                    <span class="field-label">{"Select Category"}</span>
                    <select
                        ref={category_ref}
                        class="category-select"
                        onchange={on_category_change}
                        aria-label="Select category"
                    >
                        <option value="" disabled={true} selected={products_disabled}>
                            {"Select Category"}
                        </option>
                        {
                            props.categories.iter().map(|c| {
                                let selected = selected_category == Some(c.name.as_str());
                                html! {
                                    <option key={c.name.clone()} value={c.name.clone()} {selected}>
                                        {&c.name}
                                    </option>
                                }
                            }).collect::<Html>()
                        }
                    </select>
                </label>

                <div class="field">
                    <span class="field-label">{"Select Product"}</span>
                    <ul class="product-chips">
                        {
                            props.selected_products.iter().map(|p| {
                                let on_remove = {
                                    let callback = props.on_products_change.clone();
                                    let selected = props.selected_products.clone();
                                    let id = p.id;
                                    Callback::from(move |_: MouseEvent| {
                                        callback.emit(without_product(&selected, id));
                                    })
                                };
                                html! {
                                    <li key={p.id.to_string()} class="product-chip">
                                        {&p.title}
                                        <button
                                            class="chip-remove"
                                            onclick={on_remove}
                                            aria-label={format!("Remove {}", p.title)}
                                        >
                                            {"×"}
                                        </button>
                                    </li>
                                }
                            }).collect::<Html>()
                        }
                    </ul>
                    <select
                        class="product-select"
                        onchange={on_product_added}
                        disabled={products_disabled}
                        aria-label="Select product"
                    >
                        <option value="" selected={true}>{"Products"}</option>
                        {
                            props.products.iter()
                                .filter(|p| !props.selected_products.iter().any(|s| s.id == p.id))
                                .map(|p| html! {
                                    <option key={p.id.to_string()} value={p.id.to_string()}>{&p.title}</option>
                                })
                                .collect::<Html>()
                        }
                    </select>
                    if props.is_loading_products {
                        <p class="field-hint">{"Loading products..."}</p>
                    }
                </div>
            </div>

            <div class="filters-actions">
                <button
                    class="button-primary"
                    onclick={on_run_report}
                    disabled={props.is_report_button_disabled}
                >
                    if props.is_loading_report {
                        <span class="spinner spinner-small"></span>
                    } else {
                        {"Run Report"}
                    }
                </button>
            </div>
            <p class="field-hint phase-hint">{props.phase.hint()}</p>
        </section>
    }
}
