pub mod browse;
pub mod load_catalog;
