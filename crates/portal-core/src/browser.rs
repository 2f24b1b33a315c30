//! The two browsing pages as one abstraction.
//!
//! A [`Browser`] bundles everything that differs between the project and the
//! client page: which entity is fetched, which filters exist, how they map to
//! the query string and how the visible list is derived. The controller in
//! `portal-app` is written once against this trait.

use std::fmt;

use futures::future::BoxFuture;

use crate::filter::{ClientFilterPatch, ClientFilters, ProjectFilterPatch, ProjectFilters};
use crate::models::{CatalogEntity, ClientOrg, Project};
use crate::ports::{CatalogError, CatalogPort};
use crate::query::{match_client_orgs, match_projects};
use crate::url_sync::{
    parse_client_params, parse_project_params, serialize_client_filters,
    serialize_project_filters, sync_client_params, sync_project_params,
};

pub trait Browser: Send + Sync + Sized + 'static {
    type Entity: CatalogEntity + Clone + fmt::Debug + Send + Sync + 'static;
    type Filters: Clone + Default + PartialEq + fmt::Debug + Send + Sync + 'static;
    type Patch: fmt::Debug + Send;

    /// Entity noun used in summaries, e.g. "project".
    const SINGULAR: &'static str;
    const PLURAL: &'static str;
    /// Route of the browsing page.
    const PAGE_PATH: &'static str;

    /// Fetch the complete catalog once.
    fn fetch(catalog: &dyn CatalogPort) -> BoxFuture<'_, Result<Vec<Self::Entity>, CatalogError>>;

    /// Query engine: visible entities in display order.
    fn query<'a>(catalog: &'a [Self::Entity], filters: &Self::Filters) -> Vec<&'a Self::Entity>;

    /// Filter values present and legal in `query`.
    fn parse(query: &str, catalog: &[Self::Entity]) -> Self::Patch;

    fn apply(patch: Self::Patch, filters: &mut Self::Filters);

    /// Canonical query string of `filters` alone.
    fn serialize(filters: &Self::Filters) -> String;

    /// `current_query` with this page's parameters rewritten from `filters`.
    fn sync(current_query: &str, filters: &Self::Filters) -> String;
}

/// Project browsing page.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectBrowser;

impl Browser for ProjectBrowser {
    type Entity = Project;
    type Filters = ProjectFilters;
    type Patch = ProjectFilterPatch;

    const SINGULAR: &'static str = "project";
    const PLURAL: &'static str = "projects";
    const PAGE_PATH: &'static str = "/projects";

    fn fetch(catalog: &dyn CatalogPort) -> BoxFuture<'_, Result<Vec<Project>, CatalogError>> {
        catalog.list_projects()
    }

    fn query<'a>(catalog: &'a [Project], filters: &ProjectFilters) -> Vec<&'a Project> {
        match_projects(catalog, filters)
    }

    fn parse(query: &str, catalog: &[Project]) -> ProjectFilterPatch {
        parse_project_params(query, catalog)
    }

    fn apply(patch: ProjectFilterPatch, filters: &mut ProjectFilters) {
        patch.apply_to(filters);
    }

    fn serialize(filters: &ProjectFilters) -> String {
        serialize_project_filters(filters)
    }

    fn sync(current_query: &str, filters: &ProjectFilters) -> String {
        sync_project_params(current_query, filters)
    }
}

/// Client organization browsing page.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientBrowser;

impl Browser for ClientBrowser {
    type Entity = ClientOrg;
    type Filters = ClientFilters;
    type Patch = ClientFilterPatch;

    const SINGULAR: &'static str = "client";
    const PLURAL: &'static str = "clients";
    const PAGE_PATH: &'static str = "/clients";

    fn fetch(catalog: &dyn CatalogPort) -> BoxFuture<'_, Result<Vec<ClientOrg>, CatalogError>> {
        catalog.list_client_orgs()
    }

    fn query<'a>(catalog: &'a [ClientOrg], filters: &ClientFilters) -> Vec<&'a ClientOrg> {
        match_client_orgs(catalog, filters)
    }

    fn parse(query: &str, _catalog: &[ClientOrg]) -> ClientFilterPatch {
        parse_client_params(query)
    }

    fn apply(patch: ClientFilterPatch, filters: &mut ClientFilters) {
        patch.apply_to(filters);
    }

    fn serialize(filters: &ClientFilters) -> String {
        serialize_client_filters(filters)
    }

    fn sync(current_query: &str, filters: &ClientFilters) -> String {
        sync_client_params(current_query, filters)
    }
}

/// One recomputation of a browsing page, handed to the renderer.
pub struct ViewFrame<'a, B: Browser> {
    /// `None` when the catalog could not be fetched.
    pub entities: Option<Vec<&'a B::Entity>>,
    pub filters: &'a B::Filters,
    /// The catalog fetch has not resolved yet.
    pub loading: bool,
}

impl<B: Browser> ViewFrame<'_, B> {
    pub fn summary(&self) -> String {
        match_summary::<B>(self.entities.as_ref().map(Vec::len))
    }
}

/// "3 matching projects", "1 matching client", or the fetch error line.
pub fn match_summary<B: Browser>(count: Option<usize>) -> String {
    match count {
        None => format!("Error retrieving {}", B::PLURAL),
        Some(1) => format!("1 matching {}", B::SINGULAR),
        Some(count) => format!("{} matching {}", count, B::PLURAL),
    }
}
