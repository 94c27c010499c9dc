//! Catalog product models as returned by `GET /products`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::Category;

/// Availability classification of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    #[default]
    InStock,
    OutOfStock,
    ComingSoon,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::InStock => "in_stock",
            StockStatus::OutOfStock => "out_of_stock",
            StockStatus::ComingSoon => "coming_soon",
        }
    }

    /// French badge text.
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "En stock",
            StockStatus::OutOfStock => "Rupture de stock",
            StockStatus::ComingSoon => "Bientôt disponible",
        }
    }

    /// Whether a product in this state may be put in a cart or picked in the configurator.
    pub fn is_available(&self) -> bool {
        matches!(self, StockStatus::InStock)
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub brand: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stock_quantity: i64,
    #[serde(default)]
    pub stock_status: StockStatus,
    #[serde(default)]
    pub specifications: Map<String, Value>,
    #[serde(default)]
    pub compatibility_requirements: Map<String, Value>,
}

impl Product {
    /// Badge text including the remaining quantity when in stock.
    pub fn stock_badge(&self) -> String {
        match self.stock_status {
            StockStatus::InStock => format!("{} ({})", self.stock_status.label(), self.stock_quantity),
            other => other.label().to_string(),
        }
    }

    /// Specification value rendered as plain text (strings unquoted, arrays comma-joined).
    pub fn spec(&self, key: &str) -> Option<String> {
        self.specifications.get(key).map(render_spec_value)
    }
}

fn render_spec_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(render_spec_value).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}

/// Kind of a dynamic product filter configured by the shop admin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    Range,
    Select,
    Boolean,
}

/// Active dynamic filter exposed by `GET /product-filters`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFilter {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FilterKind,
    #[serde(default)]
    pub values: Vec<String>,
    pub field: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl ProductFilter {
    /// Query parameter name the backend matches this filter against.
    pub fn param_name(&self) -> String {
        format!("filter_{}", self.name.to_lowercase().replace(' ', "_"))
    }
}
