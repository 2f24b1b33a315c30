//! Adapters for the browsing core: the backend API, an in-memory history
//! router and a view sink that keeps the last rendered frame.

pub mod api;
pub mod routing;
pub mod view;

pub use api::{ApiSettings, HttpCatalog, HttpCatalogError};
pub use routing::MemoryRouter;
pub use view::{LatestView, ViewSnapshot};
