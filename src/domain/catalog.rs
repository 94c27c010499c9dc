//! Per-category inventory and the price aggregator.

use std::collections::HashMap;

use crate::domain::{Category, Product, SelectionMap};

/// Products available to the configurator, keyed by category.
///
/// A category whose load failed has no entry at all, which is distinct from
/// an entry with an empty list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    inventory: HashMap<Category, Vec<Product>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: Category, products: Vec<Product>) {
        self.inventory.insert(category, products);
    }

    pub fn products(&self, category: Category) -> Option<&[Product]> {
        self.inventory.get(&category).map(Vec::as_slice)
    }

    pub fn is_loaded(&self, category: Category) -> bool {
        self.inventory.contains_key(&category)
    }

    /// Look up a product by id within its category's inventory.
    pub fn find(&self, category: Category, product_id: &str) -> Option<&Product> {
        self.inventory.get(&category)?.iter().find(|product| product.id == product_id)
    }

    /// Product currently selected for `category`, if it is still in inventory.
    pub fn selected<'a>(
        &'a self,
        selection: &SelectionMap,
        category: Category,
    ) -> Option<&'a Product> {
        selection.get(category).and_then(|id| self.find(category, id))
    }
}

/// Sum of the prices of every selected product found in `catalog`.
///
/// Stale references (ids no longer in inventory) contribute nothing.
pub fn total_price(selection: &SelectionMap, catalog: &Catalog) -> f64 {
    selection
        .iter()
        .filter_map(|(category, id)| catalog.find(category, id))
        .map(|product| product.price.max(0.0))
        .sum()
}
