use super::Choice;
use crate::models::ClientOrgType;

/// Filter state of the client browser.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientFilters {
    pub search: String,
    pub client_type: Choice<ClientOrgType>,
    pub reverse_sort: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientFilterPatch {
    pub search: Option<String>,
    pub client_type: Option<ClientOrgType>,
}

impl ClientFilterPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(self, filters: &mut ClientFilters) {
        if let Some(search) = self.search {
            filters.search = search;
        }
        if let Some(client_type) = self.client_type {
            filters.client_type = Choice::Only(client_type);
        }
    }
}
