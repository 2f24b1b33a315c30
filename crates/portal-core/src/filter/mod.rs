//! In-memory filter state of the browsing pages.

mod choice;
mod client_filters;
mod project_filters;

pub use choice::Choice;
pub use client_filters::{ClientFilterPatch, ClientFilters};
pub use project_filters::{ProjectFilterPatch, ProjectFilters};
