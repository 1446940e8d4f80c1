// Service exports
pub mod catalog;
pub mod contracts;
pub mod onboarding;

pub use catalog::{CatalogSource, CatalogError, JsonFileCatalog, StaticCatalog};
pub use contracts::{list_portals, search_contracts};
pub use onboarding::assess;
