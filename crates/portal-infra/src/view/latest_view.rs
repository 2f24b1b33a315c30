use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use portal_core::browser::{Browser, ViewFrame};
use portal_core::ports::ViewPort;

/// Owned copy of a rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot<E, F> {
    /// `None` when the catalog fetch failed.
    pub entities: Option<Vec<E>>,
    pub filters: F,
    pub loading: bool,
    pub summary: String,
}

/// View sink that keeps only the most recent frame.
/// 仅保留最近一帧的视图
pub struct LatestView<B: Browser> {
    latest: Mutex<Option<ViewSnapshot<B::Entity, B::Filters>>>,
    renders: AtomicUsize,
}

impl<B: Browser> Default for LatestView<B> {
    fn default() -> Self {
        Self {
            latest: Mutex::new(None),
            renders: AtomicUsize::new(0),
        }
    }
}

impl<B: Browser> LatestView<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last rendered frame, if any.
    pub fn snapshot(&self) -> Option<ViewSnapshot<B::Entity, B::Filters>> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn render_count(&self) -> usize {
        self.renders.load(Ordering::SeqCst)
    }
}

impl<B: Browser> ViewPort<B> for LatestView<B> {
    fn render(&self, frame: &ViewFrame<'_, B>) {
        let snapshot = ViewSnapshot {
            entities: frame
                .entities
                .as_ref()
                .map(|entities| entities.iter().map(|&entity| entity.clone()).collect()),
            filters: frame.filters.clone(),
            loading: frame.loading,
            summary: frame.summary(),
        };
        *self.latest.lock().unwrap_or_else(PoisonError::into_inner) = Some(snapshot);
        self.renders.fetch_add(1, Ordering::SeqCst);
    }
}
