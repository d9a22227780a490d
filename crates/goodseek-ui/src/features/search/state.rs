//! Search slice and pure transformations, testable outside wasm.

use crate::core::format::normalize_ein;
use crate::core::query::{DEFAULT_SEARCH_LIMIT, LOAD_MORE_STEP, SearchParams};
use crate::core::remote::{Ticket, Tracked};
use goodseek_api_models::{Organization, SearchEnvelope};
use std::collections::HashSet;

/// US state filter options as `(code, name)` pairs.
pub const US_STATES: [(&str, &str); 50] = [
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

/// Household-name charities offered as one-tap searches.
pub const POPULAR_SEARCH_TERMS: [&str; 8] = [
    "American Red Cross",
    "Salvation Army",
    "Goodwill",
    "United Way",
    "Habitat for Humanity",
    "Boys and Girls Club",
    "YMCA",
    "Food Bank",
];

/// Deduplicated results plus the backend's total match count.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SearchResults {
    /// Organizations in response order, deduped by EIN.
    pub organizations: Vec<Organization>,
    /// Total match count reported by the backend, when it sent one.
    pub count: Option<u64>,
}

impl From<SearchEnvelope> for SearchResults {
    fn from(envelope: SearchEnvelope) -> Self {
        Self {
            organizations: dedupe_by_ein(envelope.data),
            count: envelope.count,
        }
    }
}

/// Search slice stored in the app state.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SearchState {
    /// Query, filters, and limit for the next request.
    pub params: SearchParams,
    /// Results for the current generation of `params`.
    pub results: Tracked<SearchResults>,
}

/// Drop repeated organizations, comparing normalized EINs.
///
/// The backend joins several sources and can emit the same charity twice.
/// The first occurrence wins so response ordering is preserved; records
/// without an EIN are always kept.
#[must_use]
pub fn dedupe_by_ein(organizations: Vec<Organization>) -> Vec<Organization> {
    let mut seen = HashSet::new();
    organizations
        .into_iter()
        .filter(|org| {
            let key = normalize_ein(&org.ein);
            key.is_empty() || seen.insert(key)
        })
        .collect()
}

/// Set the query text and restart pagination.
pub fn set_query(state: &mut SearchState, query: &str) {
    state.params.query = query.to_string();
    state.params.limit = DEFAULT_SEARCH_LIMIT;
}

/// Set the two-letter state filter and restart pagination.
pub fn set_state_filter(state: &mut SearchState, value: &str) {
    state.params.state = value.to_string();
    state.params.limit = DEFAULT_SEARCH_LIMIT;
}

/// Set the city filter and restart pagination.
pub fn set_city_filter(state: &mut SearchState, value: &str) {
    state.params.city = value.to_string();
    state.params.limit = DEFAULT_SEARCH_LIMIT;
}

/// Set the NTEE category filter and restart pagination.
pub fn set_category_filter(state: &mut SearchState, value: &str) {
    state.params.category = value.to_string();
    state.params.limit = DEFAULT_SEARCH_LIMIT;
}

/// Widen the result window for the same query.
pub fn grow_limit(state: &mut SearchState) {
    state.params.limit = state.params.limit.saturating_add(LOAD_MORE_STEP);
}

/// Clear the query, all filters, and any results.
pub fn clear_search(state: &mut SearchState) {
    state.params = SearchParams::default();
    state.results.reset();
}

/// Start a search for the current parameters.
///
/// Queries under the minimum length never reach the network, filters or
/// not: the slice resets to idle and `None` comes back. A searchable
/// query marks the slice loading and returns the ticket the response must
/// present.
pub fn begin_search(state: &mut SearchState) -> Option<Ticket> {
    if state.params.is_searchable() {
        Some(state.results.begin())
    } else {
        state.results.reset();
        None
    }
}

/// Apply a search response if its ticket is still current.
pub fn resolve_search(
    state: &mut SearchState,
    ticket: Ticket,
    outcome: Result<SearchEnvelope, String>,
) -> bool {
    state
        .results
        .resolve(ticket, outcome.map(SearchResults::from))
}

/// Whether the window filled up, meaning more rows may exist.
#[must_use]
pub fn can_load_more(state: &SearchState) -> bool {
    state.results.state.ready().is_some_and(|results| {
        usize::try_from(state.params.limit)
            .is_ok_and(|limit| results.organizations.len() >= limit)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::remote::Remote;

    fn org(ein: &str, name: &str) -> Organization {
        Organization {
            ein: ein.to_string(),
            name: name.to_string(),
            ..Organization::default()
        }
    }

    fn envelope(orgs: Vec<Organization>, count: u64) -> SearchEnvelope {
        SearchEnvelope {
            data: orgs,
            count: Some(count),
            ..SearchEnvelope::default()
        }
    }

    #[test]
    fn dedupe_keeps_the_first_occurrence() {
        let deduped = dedupe_by_ein(vec![
            org("530196605", "American National Red Cross"),
            org("53-0196605", "Red Cross duplicate"),
            org("135613797", "Salvation Army"),
        ]);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].name, "American National Red Cross");
        assert_eq!(deduped[1].ein, "135613797");
    }

    #[test]
    fn dedupe_keeps_records_without_an_ein() {
        let deduped = dedupe_by_ein(vec![org("", "First"), org("", "Second")]);
        assert_eq!(deduped.len(), 2);
    }

    #[test]
    fn new_query_restarts_pagination() {
        let mut state = SearchState::default();
        grow_limit(&mut state);
        assert_eq!(state.params.limit, DEFAULT_SEARCH_LIMIT + LOAD_MORE_STEP);
        set_query(&mut state, "food bank");
        assert_eq!(state.params.limit, DEFAULT_SEARCH_LIMIT);
    }

    #[test]
    fn filter_change_restarts_pagination() {
        let mut state = SearchState::default();
        grow_limit(&mut state);
        set_state_filter(&mut state, "ca");
        assert_eq!(state.params.limit, DEFAULT_SEARCH_LIMIT);
    }

    #[test]
    fn short_query_resets_instead_of_searching() {
        let mut state = SearchState::default();
        set_query(&mut state, "red cross");
        let ticket = begin_search(&mut state).expect("searchable query");
        assert!(resolve_search(
            &mut state,
            ticket,
            Ok(envelope(vec![org("530196605", "Red Cross")], 1))
        ));

        set_query(&mut state, "r");
        assert!(begin_search(&mut state).is_none());
        assert_eq!(state.results.state, Remote::Idle);
    }

    #[test]
    fn short_query_with_filters_still_resets() {
        let mut state = SearchState::default();
        set_state_filter(&mut state, "CA");
        set_query(&mut state, "x");
        assert!(begin_search(&mut state).is_none());
        assert_eq!(state.results.state, Remote::Idle);
    }

    #[test]
    fn stale_response_is_dropped() {
        let mut state = SearchState::default();
        set_query(&mut state, "red cross");
        let stale = begin_search(&mut state).expect("searchable");
        set_query(&mut state, "food bank");
        let current = begin_search(&mut state).expect("searchable");

        assert!(!resolve_search(
            &mut state,
            stale,
            Ok(envelope(vec![org("530196605", "Red Cross")], 1))
        ));
        assert!(state.results.state.is_loading());

        assert!(resolve_search(
            &mut state,
            current,
            Ok(envelope(vec![org("237069110", "Food Bank")], 1))
        ));
        let results = state.results.state.ready().expect("resolved");
        assert_eq!(results.organizations[0].ein, "237069110");
    }

    #[test]
    fn failure_surfaces_the_message() {
        let mut state = SearchState::default();
        set_query(&mut state, "red cross");
        let ticket = begin_search(&mut state).expect("searchable");
        assert!(resolve_search(
            &mut state,
            ticket,
            Err("network error: offline".to_string())
        ));
        assert_eq!(
            state.results.state.error(),
            Some("network error: offline")
        );
    }

    #[test]
    fn state_options_cover_all_fifty_codes() {
        assert_eq!(US_STATES.len(), 50);
        let codes: std::collections::HashSet<&str> =
            US_STATES.iter().map(|(code, _)| *code).collect();
        assert_eq!(codes.len(), 50);
        assert!(
            US_STATES
                .iter()
                .all(|(code, _)| code.len() == 2 && code.chars().all(char::is_uppercase))
        );
    }

    #[test]
    fn clear_search_resets_params_and_results() {
        let mut state = SearchState::default();
        set_query(&mut state, "food bank");
        set_city_filter(&mut state, "Austin");
        let ticket = begin_search(&mut state).expect("searchable");
        assert!(resolve_search(
            &mut state,
            ticket,
            Ok(envelope(vec![org("237069110", "Food Bank")], 1))
        ));

        clear_search(&mut state);
        assert_eq!(state.params, SearchParams::default());
        assert_eq!(state.results.state, Remote::Idle);

        let stale_after_clear = resolve_search(
            &mut state,
            ticket,
            Ok(envelope(vec![org("530196605", "Red Cross")], 1)),
        );
        assert!(!stale_after_clear);
    }

    #[test]
    fn load_more_needs_a_full_window() {
        let mut state = SearchState::default();
        set_query(&mut state, "food bank");
        let ticket = begin_search(&mut state).expect("searchable");
        let short_page = (0..5).map(|i| org(&format!("23706911{i}"), "Org")).collect();
        assert!(resolve_search(&mut state, ticket, Ok(envelope(short_page, 5))));
        assert!(!can_load_more(&state));

        let ticket = begin_search(&mut state).expect("searchable");
        let full_page = (10..30).map(|i| org(&format!("2370691{i}"), "Org")).collect();
        assert!(resolve_search(&mut state, ticket, Ok(envelope(full_page, 61))));
        assert!(can_load_more(&state));
    }
}
