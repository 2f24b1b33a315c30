//! Projects Portal Application Orchestration Layer
//!
//! Use cases that drive the browsing pages: loading the catalog and the
//! filter state controller that keeps URL and view in step with the filters.

pub mod usecases;

pub use usecases::browse::{
    BrowserController, CatalogStore, ClientBrowserController, FilterChange, FilterSubscriber,
    ProjectBrowserController, RenderSubscriber, UrlSyncSubscriber,
};
pub use usecases::load_catalog::{LoadCatalog, LoadCatalogError};
