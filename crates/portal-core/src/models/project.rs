use serde::{Deserialize, Serialize};

use super::{CatalogEntity, ClientOrgShort, UserShort, WireEnum};
use crate::ids::ProjectId;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub value: String,
}

/// Academic term a project ran in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    Fall,
    Winter,
    Spring,
    Summer,
}

impl Term {
    /// Term precedence used when sorting projects of the same year.
    const SORT_ORDER: [Term; 4] = [Term::Spring, Term::Summer, Term::Fall, Term::Winter];

    /// Position of this term in the academic sort order (Spring lowest).
    pub fn sort_rank(&self) -> usize {
        Self::SORT_ORDER
            .iter()
            .position(|term| term == self)
            .unwrap_or_default()
    }
}

impl WireEnum for Term {
    const ALL: &'static [Self] = &[Term::Fall, Term::Winter, Term::Spring, Term::Summer];

    fn as_str(&self) -> &'static str {
        match self {
            Term::Fall => "Fall",
            Term::Winter => "Winter",
            Term::Spring => "Spring",
            Term::Summer => "Summer",
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    #[serde(rename = "Mobile App")]
    Mobile,
    #[serde(rename = "Web App")]
    Web,
    Other,
}

impl WireEnum for ProjectType {
    const ALL: &'static [Self] = &[ProjectType::Mobile, ProjectType::Web, ProjectType::Other];

    fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Mobile => "Mobile App",
            ProjectType::Web => "Web App",
            ProjectType::Other => "Other",
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full project record returned by the project listing endpoint.
/// 项目列表接口返回的完整项目记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    /// The backend allows projects without a client organization.
    #[serde(default)]
    pub client_org: Option<ClientOrgShort>,
    #[serde(default)]
    pub students: Vec<UserShort>,
    #[serde(default)]
    pub ta: Option<UserShort>,
    #[serde(default)]
    pub client_rep: Option<UserShort>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub video: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub is_published: bool,
    pub year: i32,
    pub term: Term,
    #[serde(default)]
    pub screenshot: String,
    #[serde(default)]
    pub presentation: String,
    #[serde(default)]
    pub review: String,
    #[serde(default)]
    pub website_url: String,
    #[serde(default)]
    pub source_code_url: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub storyboard: String,
}

impl CatalogEntity for Project {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn detail_path(&self) -> String {
        format!("/projects/{}", self.id)
    }
}

/// Project summary embedded in a client organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectShort {
    pub id: ProjectId,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    pub year: i32,
    pub term: Term,
    #[serde(default)]
    pub logo_url: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
}
