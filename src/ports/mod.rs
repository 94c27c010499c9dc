mod auth_client;
mod cart_client;
mod catalog_client;
mod configurator_client;
mod review_client;
mod support_client;

pub use auth_client::AuthClient;
pub use cart_client::CartClient;
pub use catalog_client::{CatalogClient, ProductQuery};
pub use configurator_client::ConfiguratorClient;
pub use review_client::ReviewClient;
pub use support_client::SupportClient;
