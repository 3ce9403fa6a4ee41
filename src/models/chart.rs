use super::catalog::{Category, Product};

/// One slice of the category overview.
#[derive(Clone, Debug, PartialEq)]
pub struct OverviewEntry {
    pub name: String,
    pub weight: f64,
}

/// Renderer-independent description of what the chart area should draw.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartConfig {
    /// Pie chart with one equally weighted slice per category.
    Overview {
        title: String,
        entries: Vec<OverviewEntry>,
    },
    /// Column chart of product prices, one bar per product in display order.
    PriceReport {
        title: String,
        labels: Vec<String>,
        prices: Vec<f64>,
    },
}

impl ChartConfig {
    pub fn overview(categories: &[Category]) -> Self {
        Self::Overview {
            title: "Product Categories Overview".to_string(),
            entries: categories
                .iter()
                .map(|c| OverviewEntry {
                    name: c.name.clone(),
                    weight: 1.0,
                })
                .collect(),
        }
    }

    /// Duplicate titles stay as separate bars.
    pub fn price_report(category: &str, products: &[Product]) -> Self {
        Self::PriceReport {
            title: format!("Product Prices in {category}"),
            labels: products.iter().map(|p| p.title.clone()).collect(),
            prices: products.iter().map(|p| p.price).collect(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Overview { title, .. } | Self::PriceReport { title, .. } => title,
        }
    }

    /// (label, value) pairs in display order
    pub fn points(&self) -> Vec<(&str, f64)> {
        match self {
            Self::Overview { entries, .. } => entries
                .iter()
                .map(|e| (e.name.as_str(), e.weight))
                .collect(),
            Self::PriceReport { labels, prices, .. } => labels
                .iter()
                .map(String::as_str)
                .zip(prices.iter().copied())
                .collect(),
        }
    }
}

/// Products a report covers: the explicit selection, or the whole category
/// when nothing is selected.
pub fn products_to_show<'a>(selected: &'a [Product], all: &'a [Product]) -> &'a [Product] {
    if selected.is_empty() { all } else { selected }
}
