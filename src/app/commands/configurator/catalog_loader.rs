//! Per-category catalog fan-out for the configurator.

use std::thread;

use crate::domain::{AppError, Catalog, Category};
use crate::ports::{CatalogClient, ProductQuery};

/// Outcome of loading several categories. Failures never abort the load.
#[derive(Debug, Default)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    pub failures: Vec<(Category, AppError)>,
}

impl CatalogLoad {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Fetch the product list of every category in `categories`, one thread per category.
///
/// Requests are independent; completion order is irrelevant. A failing
/// category is logged and left out of the catalog.
pub fn load_catalog<C>(client: &C, categories: &[Category]) -> CatalogLoad
where
    C: CatalogClient + Sync + ?Sized,
{
    let results: Vec<(Category, Result<_, AppError>)> = thread::scope(|scope| {
        let handles: Vec<_> = categories
            .iter()
            .map(|&category| {
                let handle = scope
                    .spawn(move || client.list_products(&ProductQuery::category(category)));
                (category, handle)
            })
            .collect();

        handles
            .into_iter()
            .map(|(category, handle)| {
                let result = handle.join().unwrap_or_else(|_| {
                    Err(AppError::Transport(format!("loader for {category} panicked")))
                });
                (category, result)
            })
            .collect()
    });

    let mut load = CatalogLoad::default();
    for (category, result) in results {
        match result {
            Ok(products) => {
                tracing::debug!(%category, count = products.len(), "category loaded");
                load.catalog.insert(category, products);
            }
            Err(error) => {
                tracing::warn!(%category, %error, "Erreur lors du chargement des produits");
                load.failures.push((category, error));
            }
        }
    }
    load
}
