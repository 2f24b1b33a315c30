pub mod latest_view;

pub use latest_view::{LatestView, ViewSnapshot};
