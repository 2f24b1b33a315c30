use crate::browser::{Browser, ViewFrame};

/// Receives every recomputed frame of a browsing page.
pub trait ViewPort<B: Browser>: Send + Sync {
    fn render(&self, frame: &ViewFrame<'_, B>);
}
