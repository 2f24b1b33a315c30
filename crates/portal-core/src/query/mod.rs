//! Query engine: pure derivation of the visible list from catalog + filters.

mod client_query;
mod collate;
mod project_query;
mod search;

pub use client_query::{match_client_orgs, searchable_fields};
pub use collate::locale_compare;
pub use project_query::{compare_projects, match_projects, searchable_text, year_options};
pub use search::SearchWords;
