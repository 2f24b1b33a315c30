//! Drive one browsing page from parsed command-line arguments.

use std::io::Write;
use std::sync::Arc;

use anyhow::Context;
use portal_app::{ClientBrowserController, LoadCatalog, ProjectBrowserController};
use portal_core::browser::{Browser, ClientBrowser, ProjectBrowser};
use portal_core::config::PortalConfig;
use portal_core::models::{ClientOrgType, ProjectType, Term, WireEnum};
use portal_core::ports::RouterPort;
use portal_infra::{LatestView, MemoryRouter};
use tracing::{info, info_span, Instrument};

use super::wiring::wire_catalog;
use crate::cli::{ClientArgs, Cli, Command, ProjectArgs};
use crate::render::{write_menu, write_page};

/// Wire adapters from `config` and run the requested page to stdout.
pub async fn run_cli(cli: Cli, config: PortalConfig) -> anyhow::Result<()> {
    let loader = LoadCatalog::new(wire_catalog(&config)?);
    let mut stdout = std::io::stdout().lock();
    run_command(cli.command, &loader, &mut stdout).await
}

/// Run one subcommand against `loader`, writing the page to `out`.
///
/// The page is written even when the catalog fetch fails; the error is
/// returned afterwards.
pub async fn run_command(
    command: Command,
    loader: &LoadCatalog,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Command::Projects(args) => browse_projects(args, loader, out)
            .instrument(info_span!("cli.projects"))
            .await,
        Command::Clients(args) => browse_clients(args, loader, out)
            .instrument(info_span!("cli.clients"))
            .await,
    }
}

async fn browse_projects(
    args: ProjectArgs,
    loader: &LoadCatalog,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let router = Arc::new(MemoryRouter::at(start_url::<ProjectBrowser>(&args.url)));
    let view = Arc::new(LatestView::<ProjectBrowser>::new());
    let mut controller = ProjectBrowserController::new(router.clone(), view.clone());

    let mounted = controller.mount(loader).await;
    if mounted.is_ok() {
        if let Some(search) = args.search {
            controller.set_search(search);
        }
        if let Some(client_type) = args.client_type {
            controller.set_client_type(client_type);
        }
        if let Some(project_type) = args.project_type {
            controller.set_project_type(project_type);
        }
        if let Some(term) = args.term {
            controller.set_term(term);
        }
        if let Some(year) = args.year {
            controller.set_year(year);
        }
        if args.reverse {
            controller.toggle_reverse_sort();
        }
        info!(filters = ?controller.filters(), "Project filters applied");
    }

    if args.menus {
        write_menu(out, "client", ClientOrgType::ALL)?;
        write_menu(out, "type", ProjectType::ALL)?;
        write_menu(out, "term", Term::ALL)?;
        write_menu(out, "year", controller.year_options())?;
    }
    write_page(out, view.snapshot().as_ref(), &router.location())?;

    mounted.context("Project catalog unavailable")
}

async fn browse_clients(
    args: ClientArgs,
    loader: &LoadCatalog,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let router = Arc::new(MemoryRouter::at(start_url::<ClientBrowser>(&args.url)));
    let view = Arc::new(LatestView::<ClientBrowser>::new());
    let mut controller = ClientBrowserController::new(router.clone(), view.clone());

    let mounted = controller.mount(loader).await;
    if mounted.is_ok() {
        if let Some(search) = args.search {
            controller.set_search(search);
        }
        if let Some(client_type) = args.client_type {
            controller.set_client_type(client_type);
        }
        if args.reverse {
            controller.toggle_reverse_sort();
        }
        info!(filters = ?controller.filters(), "Client filters applied");
    }

    if args.menus {
        write_menu(out, "type", ClientOrgType::ALL)?;
    }
    write_page(out, view.snapshot().as_ref(), &router.location())?;

    mounted.context("Client catalog unavailable")
}

fn start_url<B: Browser>(url: &Option<String>) -> &str {
    url.as_deref().unwrap_or(B::PAGE_PATH)
}
