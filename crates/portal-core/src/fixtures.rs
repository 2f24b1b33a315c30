//! Test fixtures shared by the core unit tests.

use crate::ids::{ClientOrgId, ProjectId};
use crate::models::{
    ClientOrg, ClientOrgShort, ClientOrgType, Project, ProjectShort, ProjectType, Tag, Term,
};

pub(crate) fn org_short(name: &str, org_type: ClientOrgType) -> ClientOrgShort {
    ClientOrgShort {
        id: ClientOrgId::new(format!("org-{}", name.to_lowercase().replace(' ', "-"))),
        name: name.to_string(),
        image: None,
        org_type,
    }
}

pub(crate) fn project(id: &str, name: &str, year: i32, term: Term) -> Project {
    Project {
        id: ProjectId::new(id),
        client_org: Some(org_short("Default Org", ClientOrgType::Other)),
        students: vec![],
        ta: None,
        client_rep: None,
        tags: vec![],
        name: name.to_string(),
        summary: String::new(),
        video: String::new(),
        project_type: ProjectType::Other,
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

pub(crate) fn with_tags(mut project: Project, tags: &[&str]) -> Project {
    project.tags = tags
        .iter()
        .map(|value| Tag {
            value: value.to_string(),
        })
        .collect();
    project
}

pub(crate) fn project_short(id: &str, name: &str) -> ProjectShort {
    ProjectShort {
        id: ProjectId::new(id),
        tags: vec![],
        name: name.to_string(),
        tagline: String::new(),
        year: 2021,
        term: Term::Fall,
        logo_url: String::new(),
        project_type: ProjectType::Web,
    }
}

pub(crate) fn client(
    id: &str,
    name: &str,
    about: &str,
    org_type: ClientOrgType,
    projects: Vec<ProjectShort>,
) -> ClientOrg {
    ClientOrg {
        id: ClientOrgId::new(id),
        name: name.to_string(),
        image: Some(format!("http://example.com/image{id}.png")),
        org_type,
        about: about.to_string(),
        website_link: String::new(),
        reps: vec![],
        projects,
        testimonial: String::new(),
    }
}

/// The client list used by the client browser tests.
pub(crate) fn sample_clients() -> Vec<ClientOrg> {
    vec![
        client(
            "0",
            "Organization Number One",
            "we are the best organization",
            ClientOrgType::Startup,
            vec![],
        ),
        client(
            "1",
            "Organization Number Two",
            "we are also all about sandwiches",
            ClientOrgType::Academic,
            vec![project_short("p4", "Cool Project About Sandpaper")],
        ),
        client(
            "2",
            "Organization of Sandwiches",
            "we are all about sandwiches",
            ClientOrgType::Csl,
            vec![project_short("p1", "Cool Project About Food")],
        ),
        client(
            "3",
            "thebiggestclient",
            "we are by far the largest client",
            ClientOrgType::Nonprofit,
            vec![
                project_short("p3", "Cool Project About Beetles"),
                project_short("p2", "Cool Project About Rocks"),
            ],
        ),
        client(
            "4",
            "A Big Client",
            "we are a large client",
            ClientOrgType::Other,
            vec![],
        ),
        client(
            "5",
            "Small Place",
            "we are quite miniscule",
            ClientOrgType::Nonprofit,
            vec![],
        ),
        client(
            "6",
            "Big Place",
            "we are not miniscule at all",
            ClientOrgType::Academic,
            vec![],
        ),
    ]
}
