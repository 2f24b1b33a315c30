//! 加载目录的用例

use std::sync::Arc;

use portal_core::browser::Browser;
use portal_core::ports::{CatalogError, CatalogPort};
use tracing::{info, info_span, warn, Instrument};

/// Error type for catalog fetch failures.
#[derive(Debug, thiserror::Error)]
pub enum LoadCatalogError {
    #[error("Failed to load {noun}: {source}")]
    Fetch {
        noun: &'static str,
        #[source]
        source: CatalogError,
    },
}

/// Use case for fetching the complete catalog of one browsing page.
/// 获取某个浏览页面完整目录的用例
pub struct LoadCatalog {
    catalog: Arc<dyn CatalogPort>,
}

impl LoadCatalog {
    pub fn new(catalog: Arc<dyn CatalogPort>) -> Self {
        Self { catalog }
    }

    /// Fetch every entity of `B`, unfiltered and in backend order.
    pub async fn execute<B: Browser>(&self) -> Result<Vec<B::Entity>, LoadCatalogError> {
        let span = info_span!("usecase.load_catalog.execute", entity = B::PLURAL);

        async {
            info!("Fetching catalog");
            match B::fetch(self.catalog.as_ref()).await {
                Ok(entities) => {
                    info!(count = entities.len(), "Catalog loaded");
                    Ok(entities)
                }
                Err(err) => {
                    warn!(error = %err, "Catalog fetch failed");
                    Err(LoadCatalogError::Fetch {
                        noun: B::PLURAL,
                        source: err,
                    })
                }
            }
        }
        .instrument(span)
        .await
    }
}
