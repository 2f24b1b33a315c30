pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, DEFAULT_CONFIG_FILE};
pub use run::run_cli;
pub use wiring::wire_catalog;
