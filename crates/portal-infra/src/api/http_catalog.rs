//! Catalog fetch over the portal REST API.

use async_trait::async_trait;
use portal_core::models::{ClientOrg, Project};
use portal_core::ports::{CatalogError, CatalogPort};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::ApiSettings;

/// Project listing, excluding the home page selection.
pub const PROJECTS_PATH: &str = "projects/?home_page=false";
pub const CLIENT_ORGS_PATH: &str = "orgs/";

type HttpResult<T> = std::result::Result<T, HttpCatalogError>;

#[derive(Debug, thiserror::Error)]
pub enum HttpCatalogError {
    #[error("failed to build HTTP client: {0}")]
    Build(String),

    #[error("request timed out")]
    Timeout,

    #[error("unexpected status: {0}")]
    Status(StatusCode),

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for HttpCatalogError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            HttpCatalogError::Timeout
        } else if let Some(status) = error.status() {
            HttpCatalogError::Status(status)
        } else if error.is_decode() {
            HttpCatalogError::Decode(error.to_string())
        } else {
            HttpCatalogError::Network(error.to_string())
        }
    }
}

impl From<HttpCatalogError> for CatalogError {
    fn from(error: HttpCatalogError) -> Self {
        match error {
            HttpCatalogError::Timeout => CatalogError::Timeout,
            HttpCatalogError::Status(status) => CatalogError::Status(status.as_u16()),
            HttpCatalogError::Decode(message) => CatalogError::Decode(message),
            HttpCatalogError::Build(message) | HttpCatalogError::Network(message) => {
                CatalogError::Transport(message)
            }
        }
    }
}

/// `CatalogPort` backed by the portal backend.
/// 基于门户后端的目录适配器
pub struct HttpCatalog {
    client: reqwest::Client,
    settings: ApiSettings,
}

impl HttpCatalog {
    pub fn new(settings: ApiSettings) -> HttpResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| HttpCatalogError::Build(e.to_string()))?;

        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> HttpResult<Vec<T>> {
        let url = self.settings.endpoint(path);
        debug!(%url, "GET");

        let mut request = self.client.get(&url).header(ACCEPT, "application/json");
        if let Some(token) = &self.settings.token {
            request = request.header(AUTHORIZATION, format!("Token {}", token));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "Backend rejected listing request");
            return Err(HttpCatalogError::Status(status));
        }

        Ok(response.json::<Vec<T>>().await?)
    }
}

#[async_trait]
impl CatalogPort for HttpCatalog {
    async fn list_projects(&self) -> Result<Vec<Project>, CatalogError> {
        Ok(self.get_list(PROJECTS_PATH).await?)
    }

    async fn list_client_orgs(&self) -> Result<Vec<ClientOrg>, CatalogError> {
        Ok(self.get_list(CLIENT_ORGS_PATH).await?)
    }
}
