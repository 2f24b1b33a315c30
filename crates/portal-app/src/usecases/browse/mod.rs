//! Filter state controller of the browsing pages.
//!
//! One [`BrowserController`] per page owns the filter state and, after every
//! change, walks its subscriber list in order: URL sync first, then render.

mod catalog_store;
mod client_browser;
mod controller;
mod project_browser;
mod subscriber;

pub use catalog_store::CatalogStore;
pub use client_browser::ClientBrowserController;
pub use controller::BrowserController;
pub use project_browser::ProjectBrowserController;
pub use subscriber::{FilterChange, FilterSubscriber, RenderSubscriber, UrlSyncSubscriber};
