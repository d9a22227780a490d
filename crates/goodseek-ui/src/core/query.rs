//! Pure request-path builders for the charity directory API.
//!
//! Extracted from the wasm client so encoding rules stay testable on the
//! native target.

use crate::core::format::normalize_ein;
use urlencoding::encode;

/// Minimum query length (in characters) before a search may hit the network.
pub const MIN_QUERY_CHARS: usize = 2;

/// Default search result limit.
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;

/// Increment applied by the load-more control.
pub const LOAD_MORE_STEP: u32 = 20;

/// Path of the category listing endpoint.
pub const CATEGORIES_PATH: &str = "/organizations/categories";

/// Path of the backend connectivity probe.
pub const CONNECTION_TEST_PATH: &str = "/organizations/test";

/// Path of the bearer-authenticated profile endpoint.
pub const PROFILE_PATH: &str = "/user/profile";

/// Path of the OAuth login redirect endpoint.
pub const LOGIN_PATH: &str = "/oauth/google/login";

/// Parameters for the organization search endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    /// Free-text query for the organization name.
    pub query: String,
    /// Two-letter state filter; empty means no filter.
    pub state: String,
    /// City filter; empty means no filter.
    pub city: String,
    /// Single-letter NTEE category filter; empty means no filter.
    pub category: String,
    /// Maximum number of results to request.
    pub limit: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            query: String::new(),
            state: String::new(),
            city: String::new(),
            category: String::new(),
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl SearchParams {
    /// Whether the trimmed query is long enough to search.
    #[must_use]
    pub fn is_searchable(&self) -> bool {
        self.query.trim().chars().count() >= MIN_QUERY_CHARS
    }

    /// Whether any filter deviates from its default.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        !self.state.trim().is_empty()
            || !self.city.trim().is_empty()
            || !self.category.trim().is_empty()
    }
}

/// Build the search path. Empty parameters are omitted; `state` and
/// `category` are uppercased; `limit` is always present.
#[must_use]
pub fn build_search_path(params: &SearchParams) -> String {
    let mut pairs: Vec<String> = Vec::with_capacity(5);
    let query = params.query.trim();
    if !query.is_empty() {
        pairs.push(format!("q={}", encode(query)));
    }
    let state = params.state.trim();
    if !state.is_empty() {
        pairs.push(format!("state={}", encode(&state.to_ascii_uppercase())));
    }
    let city = params.city.trim();
    if !city.is_empty() {
        pairs.push(format!("city={}", encode(city)));
    }
    let category = params.category.trim();
    if !category.is_empty() {
        pairs.push(format!("category={}", encode(&category.to_ascii_uppercase())));
    }
    pairs.push(format!("limit={}", params.limit));
    format!("/organizations/search?{}", pairs.join("&"))
}

/// Build the single-organization lookup path from a raw EIN.
#[must_use]
pub fn build_organization_path(ein: &str) -> String {
    format!("/organizations/{}", encode(&normalize_ein(ein)))
}

/// Build the verification path from a raw EIN.
#[must_use]
pub fn build_verify_path(ein: &str) -> String {
    format!("/organizations/verify/{}", encode(&normalize_ein(ein)))
}

/// Build the popular-organizations path.
#[must_use]
pub fn build_popular_path(limit: u32) -> String {
    format!("/organizations/popular?limit={limit}")
}

/// Build the per-category organizations path; the code is uppercased.
#[must_use]
pub fn build_category_path(code: &str, limit: u32) -> String {
    format!(
        "{CATEGORIES_PATH}/{}?limit={limit}",
        encode(&code.trim().to_ascii_uppercase())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_path_includes_only_present_params() {
        let params = SearchParams {
            query: "red cross".to_string(),
            ..SearchParams::default()
        };
        assert_eq!(
            build_search_path(&params),
            "/organizations/search?q=red%20cross&limit=20"
        );
    }

    #[test]
    fn search_path_uppercases_state_and_category() {
        let params = SearchParams {
            query: "food bank".to_string(),
            state: "ca".to_string(),
            category: "k".to_string(),
            limit: 40,
            ..SearchParams::default()
        };
        assert_eq!(
            build_search_path(&params),
            "/organizations/search?q=food%20bank&state=CA&category=K&limit=40"
        );
    }

    #[test]
    fn search_path_encodes_city() {
        let params = SearchParams {
            query: "shelter".to_string(),
            city: "San Francisco".to_string(),
            ..SearchParams::default()
        };
        assert_eq!(
            build_search_path(&params),
            "/organizations/search?q=shelter&city=San%20Francisco&limit=20"
        );
    }

    #[test]
    fn search_path_trims_whitespace_params() {
        let params = SearchParams {
            query: "  homeless aid  ".to_string(),
            state: "  ".to_string(),
            ..SearchParams::default()
        };
        assert_eq!(
            build_search_path(&params),
            "/organizations/search?q=homeless%20aid&limit=20"
        );
    }

    #[test]
    fn searchable_requires_two_trimmed_chars() {
        let mut params = SearchParams::default();
        assert!(!params.is_searchable());
        params.query = " a ".to_string();
        assert!(!params.is_searchable());
        params.query = "ab".to_string();
        assert!(params.is_searchable());
    }

    #[test]
    fn has_filters_ignores_query_and_limit() {
        let mut params = SearchParams {
            query: "red cross".to_string(),
            limit: 60,
            ..SearchParams::default()
        };
        assert!(!params.has_filters());
        params.category = "E".to_string();
        assert!(params.has_filters());
    }

    #[test]
    fn organization_path_normalizes_the_ein() {
        assert_eq!(
            build_organization_path("53-0196605"),
            "/organizations/530196605"
        );
        assert_eq!(
            build_verify_path(" 53 0196605"),
            "/organizations/verify/530196605"
        );
    }

    #[test]
    fn popular_and_category_paths_carry_the_limit() {
        assert_eq!(
            build_popular_path(6),
            "/organizations/popular?limit=6"
        );
        assert_eq!(
            build_category_path("b", 20),
            "/organizations/categories/B?limit=20"
        );
    }
}
