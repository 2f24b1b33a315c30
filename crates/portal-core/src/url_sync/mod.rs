//! Two-way mapping between filter state and the page query string.

mod client_params;
mod params;
mod project_params;

pub use client_params::{parse_client_params, serialize_client_filters, sync_client_params};
pub use params::{parse_leading_int, QueryParams};
pub use project_params::{parse_project_params, serialize_project_filters, sync_project_params};

/// Parameter names read and written by the project browser.
pub mod project_param_names {
    pub use super::project_params::{
        CLIENT_PARAM, SEARCH_PARAM, TERM_PARAM, TYPE_PARAM, YEAR_PARAM,
    };
}

/// Parameter names read and written by the client browser.
pub mod client_param_names {
    pub use super::client_params::{SEARCH_PARAM, TYPE_PARAM};
}
