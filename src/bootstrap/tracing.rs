//! Tracing configuration for the portal CLI
//!
//! Logs go to stderr so stdout stays reserved for the listing. When the
//! configuration names a log directory, a non-blocking file layer is added.
//!
//! ## Filtering / 过滤
//!
//! `RUST_LOG` wins when set; otherwise the build profile picks the defaults
//! from [`build_filter_directives`].

use std::{fs, io, path::Path, sync::OnceLock};

use portal_core::config::PortalConfig;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "projects-portal.log";

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
///
/// ## Behavior / 行为
/// - **Development**: debug for the portal crates
/// - **Production**: warn globally, info for the portal crates
/// - HTTP client internals stay quiet in both
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let crate_level = if is_dev { "debug" } else { "info" };
    vec![
        if is_dev { "info" } else { "warn" }.to_string(),
        format!("projects_portal_lib={crate_level}"),
        format!("portal_core={crate_level}"),
        format!("portal_app={crate_level}"),
        format!("portal_infra={crate_level}"),
        "hyper=warn".to_string(),
        "hyper_util=warn".to_string(),
        "reqwest=warn".to_string(),
    ]
}

/// Initialize the tracing subscriber
///
/// ## Errors / 错误
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(config: &PortalConfig) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let stderr_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = if config.log_directory.as_os_str().is_empty() {
        None
    } else {
        match build_file_writer(&config.log_directory) {
            Ok(writer) => Some(writer),
            Err(err) => {
                eprintln!("Failed to initialize file logging, using stderr only: {err}");
                None
            }
        }
    };

    let stderr_layer = fmt::layer()
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stderr_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    let subscriber = registry().with(env_filter).with(stderr_layer);

    if let Some(layer) = file_layer {
        subscriber.with(layer).try_init()?;
    } else {
        subscriber.try_init()?;
    }

    Ok(())
}

fn build_file_writer(directory: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(directory)?;

    let file_appender = tracing_appender::rolling::never(directory, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_directives() {
        let dev_directives = build_filter_directives(true);
        assert!(dev_directives.contains(&"info".to_string()));
        assert!(dev_directives.contains(&"portal_app=debug".to_string()));
        assert!(dev_directives.contains(&"reqwest=warn".to_string()));

        let prod_directives = build_filter_directives(false);
        assert!(prod_directives.contains(&"warn".to_string()));
        assert!(prod_directives.contains(&"portal_infra=info".to_string()));
    }

    #[test]
    fn test_directives_parse_as_env_filter() {
        let directives = build_filter_directives(false).join(",");
        assert!(tracing_subscriber::EnvFilter::try_new(directives).is_ok());
    }
}
