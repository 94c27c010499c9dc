//! In-progress configurator selection: at most one product per category.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::Category;

/// Mapping from category to the chosen product id.
///
/// Uniqueness per category comes from the map key. `revision` increases on
/// every mutation that changes the map, so a verdict computed for an older
/// revision can be recognised as stale. Equality compares the components
/// only; the revision is history, not content.
#[derive(Debug, Clone, Default)]
pub struct SelectionMap {
    components: BTreeMap<Category, String>,
    revision: u64,
}

impl SelectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose `product_id` for `category`, replacing any previous choice.
    pub fn select(&mut self, category: Category, product_id: impl Into<String>) {
        let product_id = product_id.into();
        if self.components.get(&category) == Some(&product_id) {
            return;
        }
        self.components.insert(category, product_id);
        self.revision += 1;
    }

    /// Drop the choice for `category`; no-op when nothing is selected there.
    pub fn deselect(&mut self, category: Category) {
        if self.components.remove(&category).is_some() {
            self.revision += 1;
        }
    }

    pub fn get(&self, category: Category) -> Option<&str> {
        self.components.get(&category).map(String::as_str)
    }

    pub fn contains(&self, category: Category) -> bool {
        self.components.contains_key(&category)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> {
        self.components.iter().map(|(category, id)| (*category, id.as_str()))
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Categories that still have no product chosen, in storefront order.
    pub fn missing(&self) -> Vec<Category> {
        Category::ALL.into_iter().filter(|category| !self.contains(*category)).collect()
    }

    pub fn components(&self) -> &BTreeMap<Category, String> {
        &self.components
    }
}

impl PartialEq for SelectionMap {
    fn eq(&self, other: &Self) -> bool {
        self.components == other.components
    }
}

impl Eq for SelectionMap {}

impl FromIterator<(Category, String)> for SelectionMap {
    fn from_iter<I: IntoIterator<Item = (Category, String)>>(iter: I) -> Self {
        let mut selection = SelectionMap::new();
        for (category, id) in iter {
            selection.select(category, id);
        }
        selection
    }
}

impl Serialize for SelectionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.components.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SelectionMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let components = BTreeMap::<Category, String>::deserialize(deserializer)?;
        Ok(Self { components, revision: 0 })
    }
}
