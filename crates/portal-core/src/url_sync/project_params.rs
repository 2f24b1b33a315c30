use super::params::{parse_leading_int, QueryParams};
use crate::filter::{Choice, ProjectFilterPatch, ProjectFilters};
use crate::models::Project;

pub const SEARCH_PARAM: &str = "search";
pub const CLIENT_PARAM: &str = "client";
pub const TYPE_PARAM: &str = "type";
pub const TERM_PARAM: &str = "term";
pub const YEAR_PARAM: &str = "year";

/// Read project filters from a query string.
/// 从查询字符串解析项目过滤条件
///
/// Must run after the catalog has loaded: a `year` is only accepted when at
/// least one loaded project has that year. Unknown names and illegal values
/// are ignored.
pub fn parse_project_params(query: &str, catalog: &[Project]) -> ProjectFilterPatch {
    let params = QueryParams::parse(query);

    let year = params
        .get(YEAR_PARAM)
        .and_then(parse_leading_int)
        .filter(|year| catalog.iter().any(|project| project.year == *year));

    ProjectFilterPatch {
        search: params.text(SEARCH_PARAM),
        client_type: params.member(CLIENT_PARAM),
        project_type: params.member(TYPE_PARAM),
        term: params.member(TERM_PARAM),
        year,
    }
}

/// Canonical query string for `filters`: defaults omitted, names sorted.
pub fn serialize_project_filters(filters: &ProjectFilters) -> String {
    let mut params = QueryParams::default();
    write_project_params(filters, &mut params);
    params.sort();
    params.encode()
}

/// Rewrite the project parameters of `current_query`, keeping unrelated ones.
pub fn sync_project_params(current_query: &str, filters: &ProjectFilters) -> String {
    let mut params = QueryParams::parse(current_query);
    write_project_params(filters, &mut params);
    params.sort();
    params.encode()
}

fn write_project_params(filters: &ProjectFilters, params: &mut QueryParams) {
    params.put_text(SEARCH_PARAM, &filters.search);
    params.put_choice(CLIENT_PARAM, &filters.client_type);
    params.put_choice(TYPE_PARAM, &filters.project_type);
    params.put_choice(TERM_PARAM, &filters.term);
    match filters.year {
        Choice::Any => params.delete(YEAR_PARAM),
        Choice::Only(year) => params.set(YEAR_PARAM, year.to_string()),
    }
}
