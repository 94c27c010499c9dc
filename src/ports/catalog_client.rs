//! Catalog API port definition.

use crate::domain::{AppError, Category, Product, ProductFilter};

/// Query for `GET /products`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub category: Option<Category>,
    pub search: Option<String>,
    /// Dynamic filter parameters as `(filter_<name>, value)` pairs.
    pub filters: Vec<(String, String)>,
}

impl ProductQuery {
    pub fn category(category: Category) -> Self {
        Self { category: Some(category), ..Self::default() }
    }

    /// Query-string pairs in the order the backend expects them.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(category) = self.category {
            pairs.push(("category".to_string(), category.as_str().to_string()));
        }
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.push(("search".to_string(), search.to_string()));
        }
        pairs.extend(self.filters.iter().cloned());
        pairs
    }
}

/// Port for read-only catalog operations.
pub trait CatalogClient {
    /// List products matching `query`.
    fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>, AppError>;

    /// Fetch a single product.
    fn get_product(&self, product_id: &str) -> Result<Product, AppError>;

    /// Dynamic filters currently enabled by the shop.
    fn active_filters(&self) -> Result<Vec<ProductFilter>, AppError>;
}
