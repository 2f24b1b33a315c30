use super::params::QueryParams;
use crate::filter::{ClientFilterPatch, ClientFilters};

pub const SEARCH_PARAM: &str = "search";
pub const TYPE_PARAM: &str = "type";

/// Read client filters from a query string. Illegal values are ignored.
pub fn parse_client_params(query: &str) -> ClientFilterPatch {
    let params = QueryParams::parse(query);

    ClientFilterPatch {
        search: params.text(SEARCH_PARAM),
        client_type: params.member(TYPE_PARAM),
    }
}

pub fn serialize_client_filters(filters: &ClientFilters) -> String {
    let mut params = QueryParams::default();
    write_client_params(filters, &mut params);
    params.sort();
    params.encode()
}

pub fn sync_client_params(current_query: &str, filters: &ClientFilters) -> String {
    let mut params = QueryParams::parse(current_query);
    write_client_params(filters, &mut params);
    params.sort();
    params.encode()
}

fn write_client_params(filters: &ClientFilters, params: &mut QueryParams) {
    params.put_text(SEARCH_PARAM, &filters.search);
    params.put_choice(TYPE_PARAM, &filters.client_type);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Choice;
    use crate::models::ClientOrgType;

    fn parsed(query: &str) -> ClientFilters {
        let mut filters = ClientFilters::default();
        parse_client_params(query).apply_to(&mut filters);
        filters
    }

    #[test]
    fn test_default_filters_serialize_to_empty_string() {
        assert_eq!(serialize_client_filters(&ClientFilters::default()), "");
    }

    #[test]
    fn test_round_trip_restores_filters() {
        for member in [ClientOrgType::Csl, ClientOrgType::Nonprofit] {
            let filters = ClientFilters {
                search: "about sandwich".to_string(),
                client_type: Choice::Only(member),
                reverse_sort: false,
            };

            assert_eq!(parsed(&serialize_client_filters(&filters)), filters);
        }
    }

    #[test]
    fn test_serialized_form() {
        let filters = ClientFilters {
            search: "test".to_string(),
            client_type: Choice::Only(ClientOrgType::Csl),
            reverse_sort: true,
        };

        assert_eq!(
            serialize_client_filters(&filters),
            "search=test&type=Community+Service+Learning"
        );
    }

    #[test]
    fn test_unknown_type_is_ignored() {
        assert_eq!(parsed("type=NotARealType"), ClientFilters::default());
    }

    #[test]
    fn test_sync_keeps_unrelated_parameters() {
        let filters = ClientFilters {
            search: "big".to_string(),
            ..Default::default()
        };

        assert_eq!(sync_client_params("?ref=home&type=Startup", &filters), "ref=home&search=big");
    }
}
