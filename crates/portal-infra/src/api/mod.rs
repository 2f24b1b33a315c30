pub mod config;
pub mod http_catalog;

pub use config::ApiSettings;
pub use http_catalog::{HttpCatalog, HttpCatalogError};
