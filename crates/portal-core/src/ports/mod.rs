//! Port interfaces between the browsing core and its surroundings.
//!
//! The core consumes the catalog fetch and the router, and exposes frames to
//! whatever renders them. Adapters live in `portal-infra` and the shell.

pub mod catalog;
pub mod errors;
pub mod router;
pub mod view;

pub use catalog::CatalogPort;
pub use errors::CatalogError;
pub use router::{Location, RouterPort};
pub use view::ViewPort;

#[cfg(test)]
pub use catalog::MockCatalog;
