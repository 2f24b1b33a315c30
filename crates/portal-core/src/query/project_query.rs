use std::cmp::Ordering;

use super::{locale_compare, SearchWords};
use crate::filter::ProjectFilters;
use crate::models::Project;

/// Projects matching `filters`, in display order.
/// 返回符合过滤条件的项目（按显示顺序）
///
/// Categorical filters compose with AND. The free-text search runs against the
/// whole project serialized to JSON, so tags, client names and URLs are all
/// searchable. Sorting is most recent first: year descending, then term
/// (Winter, Fall, Summer, Spring), then name ascending. `reverse_sort` negates
/// the composed comparison.
pub fn match_projects<'a>(catalog: &'a [Project], filters: &ProjectFilters) -> Vec<&'a Project> {
    let words = SearchWords::parse(&filters.search);

    let mut matching: Vec<&Project> = catalog
        .iter()
        .filter(|project| admits_client_type(filters, project))
        .filter(|project| filters.project_type.admits(&project.project_type))
        .filter(|project| filters.term.admits(&project.term))
        .filter(|project| filters.year.admits(&project.year))
        .filter(|project| words.is_empty() || words.all_found_in(&searchable_text(project)))
        .collect();

    matching.sort_by(|a, b| compare_projects(a, b, filters.reverse_sort));

    #[cfg(feature = "tracing")]
    tracing::trace!(
        total = catalog.len(),
        matched = matching.len(),
        "project query evaluated"
    );

    matching
}

/// A project without a client organization only passes the `Any` client type.
fn admits_client_type(filters: &ProjectFilters, project: &Project) -> bool {
    match &project.client_org {
        Some(org) => filters.client_type.admits(&org.org_type),
        None => filters.client_type.is_any(),
    }
}

/// Lowercase flat text of a project used by the free-text search.
pub fn searchable_text(project: &Project) -> String {
    serde_json::to_string(project)
        .map(|text| text.to_lowercase())
        .unwrap_or_default()
}

/// Display order of two projects.
pub fn compare_projects(a: &Project, b: &Project, reverse_sort: bool) -> Ordering {
    let ordering = b
        .year
        .cmp(&a.year)
        .then_with(|| b.term.sort_rank().cmp(&a.term.sort_rank()))
        .then_with(|| locale_compare(&a.name, &b.name));

    if reverse_sort {
        ordering.reverse()
    } else {
        ordering
    }
}

/// Distinct project years, most recent first, for the year menu.
pub fn year_options(catalog: &[Project]) -> Vec<i32> {
    let mut years: Vec<i32> = catalog.iter().map(|project| project.year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}
