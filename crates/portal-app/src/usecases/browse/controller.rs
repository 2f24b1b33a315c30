use std::sync::Arc;

use portal_core::browser::Browser;
use portal_core::ports::{RouterPort, ViewPort};
use tracing::debug;

use super::{CatalogStore, FilterChange, FilterSubscriber, RenderSubscriber, UrlSyncSubscriber};
use crate::usecases::load_catalog::{LoadCatalog, LoadCatalogError};

/// Owns the filter state of one browsing page.
/// 持有单个浏览页面的过滤状态
///
/// Every mutation fully replaces the affected value and then notifies the
/// subscribers in registration order before returning.
pub struct BrowserController<B: Browser> {
    filters: B::Filters,
    catalog: CatalogStore<B::Entity>,
    initial_query: String,
    subscribers: Vec<Box<dyn FilterSubscriber<B>>>,
}

impl<B: Browser> BrowserController<B> {
    /// Standard wiring: URL sync through `router`, then render to `view`.
    ///
    /// The query string is captured now and parsed once the catalog arrives.
    pub fn new(router: Arc<dyn RouterPort>, view: Arc<dyn ViewPort<B>>) -> Self {
        let initial_query = router.location().query;
        Self::with_subscribers(
            initial_query,
            vec![
                Box::new(UrlSyncSubscriber::new(router)),
                Box::new(RenderSubscriber::new(view)),
            ],
        )
    }

    pub fn with_subscribers(
        initial_query: impl Into<String>,
        subscribers: Vec<Box<dyn FilterSubscriber<B>>>,
    ) -> Self {
        Self {
            filters: B::Filters::default(),
            catalog: CatalogStore::Pending,
            initial_query: initial_query.into(),
            subscribers,
        }
    }

    /// Append a subscriber; it runs after the existing ones.
    pub fn subscribe(&mut self, subscriber: Box<dyn FilterSubscriber<B>>) {
        self.subscribers.push(subscriber);
    }

    /// Render the empty page, fetch the catalog, then apply the captured query.
    ///
    /// On failure the page is still notified (with the failed catalog) before
    /// the error is returned.
    pub async fn mount(&mut self, loader: &LoadCatalog) -> Result<(), LoadCatalogError> {
        self.notify();

        let result = match loader.execute::<B>().await {
            Ok(entities) => {
                let patch = B::parse(&self.initial_query, &entities);
                debug!(?patch, "Applying filters from query string");
                B::apply(patch, &mut self.filters);
                self.catalog = CatalogStore::Loaded(entities);
                Ok(())
            }
            Err(err) => {
                self.catalog = CatalogStore::Failed;
                Err(err)
            }
        };

        self.notify();
        result
    }

    /// Mutate the filters and notify.
    pub fn update(&mut self, mutate: impl FnOnce(&mut B::Filters)) {
        mutate(&mut self.filters);
        debug!(filters = ?self.filters, "Filters changed");
        self.notify();
    }

    pub fn filters(&self) -> &B::Filters {
        &self.filters
    }

    pub fn catalog(&self) -> &CatalogStore<B::Entity> {
        &self.catalog
    }

    /// Current visible list; `None` when the fetch failed.
    pub fn visible(&self) -> Option<Vec<&B::Entity>> {
        match &self.catalog {
            CatalogStore::Failed => None,
            catalog => Some(B::query(catalog.entities(), &self.filters)),
        }
    }

    pub fn summary(&self) -> String {
        portal_core::browser::match_summary::<B>(self.visible().as_ref().map(Vec::len))
    }

    fn notify(&self) {
        let change = FilterChange {
            filters: &self.filters,
            catalog: &self.catalog,
        };
        for subscriber in &self.subscribers {
            subscriber.on_change(&change);
        }
    }
}
