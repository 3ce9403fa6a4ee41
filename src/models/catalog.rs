use serde::Deserialize;

/// A product category as listed by the catalog. `name` doubles as the
/// identifier used in product lookups and as the display label.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Category {
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
}

impl Product {
    pub fn new(id: u64, title: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            title: title.into(),
            price,
        }
    }
}

/// Body of `GET /products/category/{name}`. Paging fields are ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}
