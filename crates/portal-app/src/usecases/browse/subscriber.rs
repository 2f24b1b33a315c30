use std::sync::Arc;

use portal_core::browser::{Browser, ViewFrame};
use portal_core::ports::{Location, RouterPort, ViewPort};

use super::CatalogStore;

/// State handed to subscribers after a filter change.
pub struct FilterChange<'a, B: Browser> {
    pub filters: &'a B::Filters,
    pub catalog: &'a CatalogStore<B::Entity>,
}

/// Reacts synchronously to every filter change of a controller.
/// 同步响应控制器的每一次过滤变更
pub trait FilterSubscriber<B: Browser>: Send + Sync {
    fn on_change(&self, change: &FilterChange<'_, B>);
}

/// Rewrites the page query string from the filters (history replace).
///
/// Does nothing until the catalog is loaded, so a pending or failed fetch
/// never strips parameters the page has not parsed yet.
pub struct UrlSyncSubscriber {
    router: Arc<dyn RouterPort>,
}

impl UrlSyncSubscriber {
    pub fn new(router: Arc<dyn RouterPort>) -> Self {
        Self { router }
    }
}

impl<B: Browser> FilterSubscriber<B> for UrlSyncSubscriber {
    fn on_change(&self, change: &FilterChange<'_, B>) {
        if !change.catalog.is_loaded() {
            return;
        }
        let current = self.router.location();
        let query = B::sync(&current.query, change.filters);
        tracing::trace!(from = %current.query, to = %query, "Replacing query string");
        self.router.replace(Location::new(current.path, query));
    }
}

/// Runs the query engine and hands the frame to the view.
pub struct RenderSubscriber<B: Browser> {
    view: Arc<dyn ViewPort<B>>,
}

impl<B: Browser> RenderSubscriber<B> {
    pub fn new(view: Arc<dyn ViewPort<B>>) -> Self {
        Self { view }
    }
}

impl<B: Browser> FilterSubscriber<B> for RenderSubscriber<B> {
    fn on_change(&self, change: &FilterChange<'_, B>) {
        let frame = match change.catalog {
            CatalogStore::Pending => ViewFrame {
                entities: Some(Vec::new()),
                filters: change.filters,
                loading: true,
            },
            CatalogStore::Loaded(entities) => ViewFrame {
                entities: Some(B::query(entities, change.filters)),
                filters: change.filters,
                loading: false,
            },
            CatalogStore::Failed => ViewFrame {
                entities: None,
                filters: change.filters,
                loading: false,
            },
        };
        self.view.render(&frame);
    }
}
