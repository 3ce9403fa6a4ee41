use std::rc::Rc;

use super::catalog::Product;
use super::chart::{ChartConfig, products_to_show};

/// Where the dashboard is in the report lifecycle, derived from its flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportPhase {
    Idle,
    CategorySelected,
    ReportLoading,
    ReportReady,
}

impl ReportPhase {
    /// Next-step hint shown under the filters.
    pub const fn hint(self) -> &'static str {
        match self {
            Self::Idle => "Pick a category to begin.",
            Self::CategorySelected => "Run a report for the current selection.",
            Self::ReportLoading => "Generating report...",
            Self::ReportReady => "Change the selection to run another report.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DashboardAction {
    /// Overview derived from a freshly loaded category list.
    OverviewReady(Option<Rc<ChartConfig>>),
    /// Product list fetched for `category`; ignored unless it is still selected.
    ProductsLoaded {
        category: String,
        products: Rc<Vec<Product>>,
    },
    SelectCategory(String),
    /// Full new product selection, in selection order.
    SelectProducts(Vec<Product>),
    RunReport,
    CompleteReport { generation: u32 },
    Clear,
}

/// All mutable dashboard state. Transitions go through [`DashboardState::apply`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardState {
    selected_category: Option<String>,
    selected_products: Vec<Product>,
    products: Rc<Vec<Product>>,
    is_loading_report: bool,
    is_report_run: bool,
    chart: Option<Rc<ChartConfig>>,
    overview: Option<Rc<ChartConfig>>,
    report_generation: u32,
}

impl DashboardState {
    pub fn selected_category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    pub fn selected_products(&self) -> &[Product] {
        &self.selected_products
    }

    /// Products available for the selected category.
    pub fn products(&self) -> &Rc<Vec<Product>> {
        &self.products
    }

    pub const fn is_loading_report(&self) -> bool {
        self.is_loading_report
    }

    pub const fn is_report_run(&self) -> bool {
        self.is_report_run
    }

    pub fn chart(&self) -> Option<&Rc<ChartConfig>> {
        self.chart.as_ref()
    }

    pub const fn can_run_report(&self) -> bool {
        self.selected_category.is_some() && !self.is_loading_report && !self.is_report_run
    }

    /// Generation of the report currently being generated, if any.
    pub const fn pending_report(&self) -> Option<u32> {
        if self.is_loading_report {
            Some(self.report_generation)
        } else {
            None
        }
    }

    pub const fn phase(&self) -> ReportPhase {
        if self.is_loading_report {
            ReportPhase::ReportLoading
        } else if self.selected_category.is_none() {
            ReportPhase::Idle
        } else if self.is_report_run {
            ReportPhase::ReportReady
        } else {
            ReportPhase::CategorySelected
        }
    }

    pub fn apply(mut self, action: DashboardAction) -> Self {
        match action {
            DashboardAction::OverviewReady(overview) => {
                self.overview = overview;
                if self.selected_category.is_none() && !self.is_loading_report {
                    self.chart = self.overview.clone();
                }
            }
            DashboardAction::ProductsLoaded { category, products } => {
                if self.selected_category.as_deref() != Some(category.as_str()) {
                    return self;
                }
                let before = self.selected_products.len();
                self.selected_products
                    .retain(|p| products.iter().any(|o| o.id == p.id));
                if self.selected_products.len() != before {
                    self.selection_changed();
                }
                self.products = products;
            }
            DashboardAction::SelectCategory(category) => {
                if self.selected_category.as_deref() == Some(category.as_str()) {
                    return self;
                }
                self.selected_category = Some(category);
                self.selected_products.clear();
                self.products = Rc::default();
                self.selection_changed();
            }
            DashboardAction::SelectProducts(products) => {
                if self.selected_category.is_none() {
                    return self;
                }
                let next = restrict_selection(products, &self.products);
                if next == self.selected_products {
                    return self;
                }
                self.selected_products = next;
                self.selection_changed();
            }
            DashboardAction::RunReport => {
                if !self.can_run_report() {
                    return self;
                }
                self.report_generation = self.report_generation.wrapping_add(1);
                self.is_loading_report = true;
                self.chart = None;
            }
            DashboardAction::CompleteReport { generation } => {
                if !self.is_loading_report || generation != self.report_generation {
                    return self;
                }
                let category = self.selected_category.as_deref().unwrap_or_default();
                let shown = products_to_show(&self.selected_products, &self.products);
                self.chart = Some(Rc::new(ChartConfig::price_report(category, shown)));
                self.is_loading_report = false;
                self.is_report_run = true;
            }
            DashboardAction::Clear => {
                self.cancel_report();
                self.selected_category = None;
                self.selected_products.clear();
                self.products = Rc::default();
                self.is_report_run = false;
                self.chart = self.overview.clone();
            }
        }
        self
    }

    fn selection_changed(&mut self) {
        self.is_report_run = false;
        if self.is_loading_report {
            self.cancel_report();
            self.chart = self.overview.clone();
        }
    }

    // A bumped generation makes any in-flight completion stale.
    fn cancel_report(&mut self) {
        self.report_generation = self.report_generation.wrapping_add(1);
        self.is_loading_report = false;
    }
}

/// Drops duplicates and products outside `available`, keeping first-selection order.
fn restrict_selection(selection: Vec<Product>, available: &[Product]) -> Vec<Product> {
    let mut kept: Vec<Product> = Vec::with_capacity(selection.len());
    for product in selection {
        let known = available.iter().any(|p| p.id == product.id);
        if known && !kept.iter().any(|p| p.id == product.id) {
            kept.push(product);
        }
    }
    kept
}

/// Selection with the product `id` appended, if it is an option and not already chosen.
pub fn with_product_added(selected: &[Product], options: &[Product], id: u64) -> Vec<Product> {
    let mut next = selected.to_vec();
    if !next.iter().any(|p| p.id == id) {
        if let Some(product) = options.iter().find(|p| p.id == id) {
            next.push(product.clone());
        }
    }
    next
}

pub fn without_product(selected: &[Product], id: u64) -> Vec<Product> {
    selected.iter().filter(|p| p.id != id).cloned().collect()
}
