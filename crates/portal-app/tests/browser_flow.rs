//! End-to-end browsing flow: fake catalog, in-memory router, latest-frame view.

use std::sync::Arc;

use async_trait::async_trait;
use portal_app::{ClientBrowserController, LoadCatalog, ProjectBrowserController};
use portal_core::filter::Choice;
use portal_core::ids::{ClientOrgId, ProjectId};
use portal_core::models::{
    ClientOrg, ClientOrgShort, ClientOrgType, Project, ProjectType, Term,
};
use portal_core::ports::{CatalogError, CatalogPort, Location, RouterPort};
use portal_core::{CatalogEntity, ClientBrowser, ProjectBrowser};
use portal_infra::{LatestView, MemoryRouter};

struct FakeCatalog {
    projects: Result<Vec<Project>, CatalogError>,
    orgs: Result<Vec<ClientOrg>, CatalogError>,
}

#[async_trait]
impl CatalogPort for FakeCatalog {
    async fn list_projects(&self) -> Result<Vec<Project>, CatalogError> {
        self.projects.clone()
    }

    async fn list_client_orgs(&self) -> Result<Vec<ClientOrg>, CatalogError> {
        self.orgs.clone()
    }
}

fn project(id: &str, name: &str, year: i32, term: Term, org_type: ClientOrgType) -> Project {
    Project {
        id: ProjectId::new(id),
        client_org: Some(ClientOrgShort {
            id: ClientOrgId::new(format!("org-{id}")),
            name: format!("Org {id}"),
            image: None,
            org_type,
        }),
        students: vec![],
        ta: None,
        client_rep: None,
        tags: vec![],
        name: name.to_string(),
        summary: String::new(),
        video: String::new(),
        project_type: ProjectType::Web,
        tagline: String::new(),
        is_published: true,
        year,
        term,
        screenshot: String::new(),
        presentation: String::new(),
        review: String::new(),
        website_url: String::new(),
        source_code_url: String::new(),
        logo_url: String::new(),
        storyboard: String::new(),
    }
}

fn org(id: &str, name: &str, about: &str, org_type: ClientOrgType) -> ClientOrg {
    ClientOrg {
        id: ClientOrgId::new(id),
        name: name.to_string(),
        image: None,
        org_type,
        about: about.to_string(),
        website_link: String::new(),
        reps: vec![],
        projects: vec![],
        testimonial: String::new(),
    }
}

fn projects_catalog() -> FakeCatalog {
    FakeCatalog {
        projects: Ok(vec![
            project("1", "Alpha", 2020, Term::Spring, ClientOrgType::Startup),
            project("2", "Beta", 2021, Term::Fall, ClientOrgType::Nonprofit),
            project("3", "Gamma", 2020, Term::Winter, ClientOrgType::Startup),
            project("4", "Delta", 2021, Term::Fall, ClientOrgType::Academic),
        ]),
        orgs: Ok(vec![]),
    }
}

fn clients_catalog() -> FakeCatalog {
    FakeCatalog {
        projects: Ok(vec![]),
        orgs: Ok(vec![
            org("1", "Zeta Labs", "robots", ClientOrgType::Startup),
            org("2", "alpha works", "gardens", ClientOrgType::Nonprofit),
            org("3", "Alpha Works", "community gardens", ClientOrgType::Nonprofit),
        ]),
    }
}

fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("portal_app=debug")
        .with_test_writer()
        .try_init();
}

fn names<E: portal_core::CatalogEntity>(entities: &[E]) -> Vec<String> {
    entities.iter().map(|entity| entity.name().to_string()).collect()
}

#[tokio::test]
async fn project_page_applies_url_filters_after_load() {
    init_test_tracing();
    let router = Arc::new(MemoryRouter::at("/projects?year=2020&utm=mail&type=Bogus"));
    let view = Arc::new(LatestView::<ProjectBrowser>::new());
    let loader = LoadCatalog::new(Arc::new(projects_catalog()));

    let mut controller = ProjectBrowserController::new(router.clone(), view.clone());
    controller.mount(&loader).await.unwrap();

    assert_eq!(controller.filters().year, Choice::Only(2020));
    assert!(controller.filters().project_type.is_any());
    // Illegal `type` is dropped, unrelated `utm` survives.
    assert_eq!(router.location().query, "utm=mail&year=2020");
    assert_eq!(router.depth(), 1);

    let snapshot = view.snapshot().unwrap();
    assert_eq!(view.render_count(), 2);
    assert!(!snapshot.loading);
    assert_eq!(names(&snapshot.entities.unwrap()), vec!["Gamma", "Alpha"]);
    assert_eq!(snapshot.summary, "2 matching projects");
}

#[tokio::test]
async fn project_year_absent_from_catalog_is_ignored() {
    let router = Arc::new(MemoryRouter::at("/projects?year=1999"));
    let view = Arc::new(LatestView::<ProjectBrowser>::new());
    let loader = LoadCatalog::new(Arc::new(projects_catalog()));

    let mut controller = ProjectBrowserController::new(router.clone(), view.clone());
    controller.mount(&loader).await.unwrap();

    assert!(controller.filters().year.is_any());
    assert_eq!(router.location().query, "");
    assert_eq!(view.snapshot().unwrap().summary, "4 matching projects");
}

#[tokio::test]
async fn project_setters_rewrite_url_and_view() {
    let router = Arc::new(MemoryRouter::at("/projects"));
    let view = Arc::new(LatestView::<ProjectBrowser>::new());
    let loader = LoadCatalog::new(Arc::new(projects_catalog()));

    let mut controller = ProjectBrowserController::new(router.clone(), view.clone());
    controller.mount(&loader).await.unwrap();
    assert_eq!(controller.year_options(), vec![2021, 2020]);

    controller.set_client_type(Choice::Only(ClientOrgType::Startup));
    controller.set_search("a");
    assert_eq!(router.location().query, "client=Startup&search=a");

    controller.toggle_reverse_sort();
    let snapshot = view.snapshot().unwrap();
    assert_eq!(names(&snapshot.entities.unwrap()), vec!["Alpha", "Gamma"]);
    // Sort direction is not part of the URL.
    assert_eq!(router.location().query, "client=Startup&search=a");

    controller.set_client_type(Choice::Any);
    controller.set_search("");
    controller.set_reverse_sort(false);
    assert_eq!(router.location().query, "");
    assert_eq!(
        names(&view.snapshot().unwrap().entities.unwrap()),
        vec!["Beta", "Delta", "Gamma", "Alpha"]
    );
    assert_eq!(router.depth(), 1);
}

#[tokio::test]
async fn returning_from_detail_page_restores_filters() {
    let router = Arc::new(MemoryRouter::at("/projects"));
    let loader = LoadCatalog::new(Arc::new(projects_catalog()));

    let mut listing = ProjectBrowserController::new(
        router.clone(),
        Arc::new(LatestView::<ProjectBrowser>::new()),
    );
    listing.mount(&loader).await.unwrap();
    listing.set_term(Choice::Only(Term::Fall));
    listing.set_search("delta");
    let filtered = router.location();

    let detail = listing.visible().unwrap()[0].detail_path();
    router.push(Location::parse(&detail));
    assert_eq!(router.depth(), 2);
    assert_eq!(router.location().path, "/projects/4");

    assert!(router.back());
    assert_eq!(router.location(), filtered);

    let view = Arc::new(LatestView::<ProjectBrowser>::new());
    let mut restored = ProjectBrowserController::new(router.clone(), view.clone());
    restored.mount(&loader).await.unwrap();

    assert_eq!(restored.filters().term, Choice::Only(Term::Fall));
    assert_eq!(restored.filters().search, "delta");
    assert_eq!(router.location(), filtered);
    assert_eq!(names(&view.snapshot().unwrap().entities.unwrap()), vec!["Delta"]);
}

#[test]
fn construction_neither_renders_nor_touches_url() {
    let router = Arc::new(MemoryRouter::at("/projects?term=Fall"));
    let view = Arc::new(LatestView::<ProjectBrowser>::new());

    let _controller = ProjectBrowserController::new(router.clone(), view.clone());

    assert!(view.snapshot().is_none());
    assert_eq!(router.location().query, "term=Fall");
}

#[tokio::test]
async fn failed_fetch_keeps_url_and_reports_error() {
    init_test_tracing();
    let router = Arc::new(MemoryRouter::at("/clients?search=garden"));
    let view = Arc::new(LatestView::<ClientBrowser>::new());
    let loader = LoadCatalog::new(Arc::new(FakeCatalog {
        projects: Ok(vec![]),
        orgs: Err(CatalogError::Status(502)),
    }));

    let mut controller = ClientBrowserController::new(router.clone(), view.clone());
    let result = controller.mount(&loader).await;

    assert!(result.is_err());
    assert_eq!(router.location().query, "search=garden");
    let snapshot = view.snapshot().unwrap();
    assert!(snapshot.entities.is_none());
    assert_eq!(snapshot.summary, "Error retrieving clients");
}

#[tokio::test]
async fn client_page_search_and_reverse_sort() {
    let router = Arc::new(MemoryRouter::at("/clients?search=gardens"));
    let view = Arc::new(LatestView::<ClientBrowser>::new());
    let loader = LoadCatalog::new(Arc::new(clients_catalog()));

    let mut controller = ClientBrowserController::new(router.clone(), view.clone());
    controller.mount(&loader).await.unwrap();

    let visible = names(&view.snapshot().unwrap().entities.unwrap());
    assert_eq!(visible, vec!["alpha works", "Alpha Works"]);

    controller.toggle_reverse_sort();
    let visible = names(&view.snapshot().unwrap().entities.unwrap());
    assert_eq!(visible, vec!["Alpha Works", "alpha works"]);

    controller.set_client_type(Choice::Only(ClientOrgType::Startup));
    assert_eq!(router.location().query, "search=gardens&type=Startup");
    assert_eq!(view.snapshot().unwrap().summary, "0 matching clients");
}
