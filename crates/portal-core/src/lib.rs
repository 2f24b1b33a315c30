//! Browsing core of the Projects Portal.
//!
//! Pure domain: catalog models, filter state, the query engine that derives
//! the visible list, and the two-way mapping between filters and the page
//! query string. I/O sits behind the traits in [`ports`].

pub mod browser;
pub mod config;
pub mod filter;
pub mod ids;
pub mod models;
pub mod ports;
pub mod query;
pub mod url_sync;

#[cfg(test)]
mod fixtures;

pub use browser::{match_summary, Browser, ClientBrowser, ProjectBrowser, ViewFrame};
pub use config::PortalConfig;
pub use filter::{
    Choice, ClientFilterPatch, ClientFilters, ProjectFilterPatch, ProjectFilters,
};
pub use ids::{ClientOrgId, ProjectId, UserId};
pub use models::{
    CatalogEntity, ClientOrg, ClientOrgShort, ClientOrgType, Project, ProjectShort, ProjectType,
    Tag, Term, UserShort, WireEnum,
};
pub use ports::{CatalogError, CatalogPort, Location, RouterPort, ViewPort};
