mod catalog_loader;
mod session;

pub use catalog_loader::{CatalogLoad, load_catalog};
pub use session::{ConfiguratorSession, LoadTicket, ValidationTicket};
