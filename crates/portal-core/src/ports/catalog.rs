use async_trait::async_trait;

use super::errors::CatalogError;
use crate::models::{ClientOrg, Project};

/// Read access to the backend catalog.
/// 后端目录的只读访问
///
/// Each call returns the complete, unfiltered list. Failures are opaque to
/// the browsing core.
#[async_trait]
pub trait CatalogPort: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>, CatalogError>;

    async fn list_client_orgs(&self) -> Result<Vec<ClientOrg>, CatalogError>;
}

#[cfg(test)]
mockall::mock! {
    pub Catalog {}

    #[async_trait]
    impl CatalogPort for Catalog {
        async fn list_projects(&self) -> Result<Vec<Project>, CatalogError>;
        async fn list_client_orgs(&self) -> Result<Vec<ClientOrg>, CatalogError>;
    }
}
