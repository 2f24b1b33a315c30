use clap::Parser;
use projects_portal_lib::bootstrap::{self, tracing::init_tracing_subscriber};
use projects_portal_lib::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real environment variables take precedence
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = bootstrap::load_config(&cli.config)?;
    init_tracing_subscriber(&config)?;

    bootstrap::run_cli(cli, config).await
}
