use portal_core::browser::ProjectBrowser;
use portal_core::filter::Choice;
use portal_core::models::{ClientOrgType, ProjectType, Term};
use portal_core::query::year_options;

use super::BrowserController;

pub type ProjectBrowserController = BrowserController<ProjectBrowser>;

/// One setter per project filter; each notifies subscribers.
impl BrowserController<ProjectBrowser> {
    /// Search text is stored exactly as typed.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        self.update(|filters| filters.search = search);
    }

    pub fn set_client_type(&mut self, client_type: Choice<ClientOrgType>) {
        self.update(|filters| filters.client_type = client_type);
    }

    pub fn set_project_type(&mut self, project_type: Choice<ProjectType>) {
        self.update(|filters| filters.project_type = project_type);
    }

    pub fn set_term(&mut self, term: Choice<Term>) {
        self.update(|filters| filters.term = term);
    }

    pub fn set_year(&mut self, year: Choice<i32>) {
        self.update(|filters| filters.year = year);
    }

    pub fn set_reverse_sort(&mut self, reverse_sort: bool) {
        self.update(|filters| filters.reverse_sort = reverse_sort);
    }

    pub fn toggle_reverse_sort(&mut self) {
        self.update(|filters| filters.reverse_sort = !filters.reverse_sort);
    }

    /// Years offered by the year menu, newest first.
    pub fn year_options(&self) -> Vec<i32> {
        year_options(self.catalog().entities())
    }
}
