//! Wiring of real adapters into the ports the use cases consume.

use std::sync::Arc;

use anyhow::Context;
use portal_core::config::PortalConfig;
use portal_core::ports::CatalogPort;
use portal_infra::{ApiSettings, HttpCatalog};
use tracing::info;

/// Build the HTTP catalog from configuration and environment.
pub fn wire_catalog(config: &PortalConfig) -> anyhow::Result<Arc<dyn CatalogPort>> {
    let settings = ApiSettings::resolve(config);
    info!(
        base_url = %settings.base_url,
        timeout_ms = settings.timeout.as_millis() as u64,
        authenticated = settings.token.is_some(),
        "Wiring backend catalog"
    );

    let catalog = HttpCatalog::new(settings).context("Failed to create backend API client")?;
    Ok(Arc::new(catalog))
}
