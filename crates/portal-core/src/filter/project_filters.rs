use super::Choice;
use crate::models::{ClientOrgType, ProjectType, Term};

/// Filter state of the project browser.
/// 项目浏览页的过滤状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectFilters {
    /// Free text; empty shows all projects.
    pub search: String,
    pub client_type: Choice<ClientOrgType>,
    pub project_type: Choice<ProjectType>,
    pub term: Choice<Term>,
    pub year: Choice<i32>,
    /// Not persisted in the query string.
    pub reverse_sort: bool,
}

/// Filter values recovered from a query string. `None` leaves the field alone.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProjectFilterPatch {
    pub search: Option<String>,
    pub client_type: Option<ClientOrgType>,
    pub project_type: Option<ProjectType>,
    pub term: Option<Term>,
    pub year: Option<i32>,
}

impl ProjectFilterPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(self, filters: &mut ProjectFilters) {
        if let Some(search) = self.search {
            filters.search = search;
        }
        if let Some(client_type) = self.client_type {
            filters.client_type = Choice::Only(client_type);
        }
        if let Some(project_type) = self.project_type {
            filters.project_type = Choice::Only(project_type);
        }
        if let Some(term) = self.term {
            filters.term = Choice::Only(term);
        }
        if let Some(year) = self.year {
            filters.year = Choice::Only(year);
        }
    }
}
