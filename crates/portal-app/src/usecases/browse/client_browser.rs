use portal_core::browser::ClientBrowser;
use portal_core::filter::Choice;
use portal_core::models::ClientOrgType;

use super::BrowserController;

pub type ClientBrowserController = BrowserController<ClientBrowser>;

impl BrowserController<ClientBrowser> {
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        self.update(|filters| filters.search = search);
    }

    pub fn set_client_type(&mut self, client_type: Choice<ClientOrgType>) {
        self.update(|filters| filters.client_type = client_type);
    }

    pub fn set_reverse_sort(&mut self, reverse_sort: bool) {
        self.update(|filters| filters.reverse_sort = reverse_sort);
    }

    pub fn toggle_reverse_sort(&mut self) {
        self.update(|filters| filters.reverse_sort = !filters.reverse_sort);
    }
}
