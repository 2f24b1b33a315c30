use super::{locale_compare, SearchWords};
use crate::filter::ClientFilters;
use crate::models::ClientOrg;

/// Client organizations matching `filters`, sorted by name.
///
/// A search word matches an organization when it occurs in the name, the
/// about text, or the name of any of its projects.
pub fn match_client_orgs<'a>(
    catalog: &'a [ClientOrg],
    filters: &ClientFilters,
) -> Vec<&'a ClientOrg> {
    let words = SearchWords::parse(&filters.search);

    let mut matching: Vec<&ClientOrg> = catalog
        .iter()
        .filter(|org| filters.client_type.admits(&org.org_type))
        .filter(|org| words.is_empty() || words.each_found_in_any(&searchable_fields(org)))
        .collect();

    matching.sort_by(|a, b| {
        let ordering = locale_compare(&a.name, &b.name);
        if filters.reverse_sort {
            ordering.reverse()
        } else {
            ordering
        }
    });

    #[cfg(feature = "tracing")]
    tracing::trace!(
        total = catalog.len(),
        matched = matching.len(),
        "client query evaluated"
    );

    matching
}

/// Lowercase searchable fields of an organization.
pub fn searchable_fields(org: &ClientOrg) -> Vec<String> {
    let mut fields = Vec::with_capacity(2 + org.projects.len());
    fields.push(org.name.to_lowercase());
    fields.push(org.about.to_lowercase());
    fields.extend(org.projects.iter().map(|project| project.name.to_lowercase()));
    fields
}
