//! Common types and traits for both currency catalogs

pub mod catalog;
pub mod catalog_entry;
pub mod catalog_response;
pub mod icon_ref;
pub mod lenient;
pub mod network;

// Re-exports
pub use catalog::Catalog;
pub use catalog_entry::CatalogEntry;
pub use catalog_response::CatalogResponse;
pub use icon_ref::IconRef;
pub use network::CurrencyNetwork;
