//! infotech: client for the INFOTECH.MA PC hardware storefront.
//!
//! The core is the PC configurator: a per-category catalog, a selection of one
//! component per category, a derived price, and a remote compatibility verdict
//! that can be saved as a named build.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::HttpStorefrontClient;
pub use app::commands::configurator::{CatalogLoad, ConfiguratorSession, load_catalog};
pub use app::{AppContext, Route, Router};
pub use domain::{
    AppError, AuthSession, Catalog, Category, CompatibilityVerdict, NamedConfiguration, Notice,
    Product, SelectionMap, ValidatedVerdict, total_price,
};
