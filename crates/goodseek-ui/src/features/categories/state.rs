//! Pure category-browsing state.

use goodseek_api_models::{Category, CategoryOrganizationsEnvelope, Organization};

use crate::core::remote::{Ticket, Tracked};

/// How many organizations to request for one category listing.
pub const CATEGORY_LISTING_LIMIT: u32 = 24;

/// Organizations fetched for one selected category.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CategoryListing {
    /// Members of the category, in backend order.
    pub organizations: Vec<Organization>,
    /// Total member count reported by the backend.
    pub count: Option<u64>,
    /// Uppercased code the listing belongs to.
    pub code: String,
}

impl CategoryListing {
    /// Build a listing from the wire envelope.
    ///
    /// The backend echoes the code it resolved; when the echo is missing
    /// the requested code fills in so the listing always knows its owner.
    #[must_use]
    pub fn from_envelope(requested: &str, envelope: CategoryOrganizationsEnvelope) -> Self {
        let code = envelope
            .category
            .filter(|code| !code.trim().is_empty())
            .unwrap_or_else(|| requested.to_string())
            .trim()
            .to_ascii_uppercase();
        Self {
            organizations: envelope.data,
            count: envelope.count,
            code,
        }
    }
}

/// Store slice for category browsing.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct CategoriesState {
    /// Full catalog of NTEE major groups.
    pub catalog: Tracked<Vec<Category>>,
    /// Category under inspection, if any.
    pub selected: Option<Category>,
    /// Members of the selected category.
    pub listing: Tracked<CategoryListing>,
}

/// Mark a catalog fetch in flight, unless the catalog is already loaded.
pub fn begin_catalog(state: &mut CategoriesState) -> Option<Ticket> {
    if state.catalog.state.ready().is_some() {
        return None;
    }
    Some(state.catalog.begin())
}

/// Apply a catalog completion; stale tickets are dropped.
pub fn resolve_catalog(
    state: &mut CategoriesState,
    ticket: Ticket,
    outcome: Result<Vec<Category>, String>,
) -> bool {
    state.catalog.resolve(ticket, outcome)
}

/// Inspect a category. Reselecting the current one keeps its listing;
/// switching resets it, which also invalidates any in-flight fetch.
pub fn select_category(state: &mut CategoriesState, category: Category) {
    if state
        .selected
        .as_ref()
        .is_some_and(|current| current.code == category.code)
    {
        return;
    }
    state.selected = Some(category);
    state.listing.reset();
}

/// Return to the catalog grid.
pub fn clear_selection(state: &mut CategoriesState) {
    state.selected = None;
    state.listing.reset();
}

/// Mark a listing fetch in flight for the selected category.
///
/// Returns the ticket and the code to request, or `None` when nothing is
/// selected.
pub fn begin_listing(state: &mut CategoriesState) -> Option<(Ticket, String)> {
    let code = state.selected.as_ref()?.code.clone();
    Some((state.listing.begin(), code))
}

/// Apply a listing completion; stale tickets are dropped.
pub fn resolve_listing(
    state: &mut CategoriesState,
    ticket: Ticket,
    requested: &str,
    outcome: Result<CategoryOrganizationsEnvelope, String>,
) -> bool {
    state.listing.resolve(
        ticket,
        outcome.map(|envelope| CategoryListing::from_envelope(requested, envelope)),
    )
}

/// Catalog entries whose name or description contains the term,
/// case-insensitively. A blank term keeps everything.
#[must_use]
pub fn filter_categories(catalog: &[Category], term: &str) -> Vec<Category> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return catalog.to_vec();
    }
    catalog
        .iter()
        .filter(|category| {
            category.name.to_lowercase().contains(&needle)
                || category
                    .description
                    .as_deref()
                    .is_some_and(|description| description.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(code: &str, name: &str, description: &str) -> Category {
        Category {
            code: code.to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
        }
    }

    fn catalog() -> Vec<Category> {
        vec![
            category("B", "Education", "Schools, scholarships, and literacy"),
            category("D", "Animal-Related", "Shelters and wildlife protection"),
            category("E", "Health Care", "Hospitals and clinics"),
        ]
    }

    #[test]
    fn filter_matches_name_case_insensitively() {
        let hits = filter_categories(&catalog(), "EDUC");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, "B");
    }

    #[test]
    fn filter_matches_description_too() {
        let hits = filter_categories(&catalog(), "wildlife");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].code, "D");
    }

    #[test]
    fn blank_filter_keeps_the_whole_catalog() {
        assert_eq!(filter_categories(&catalog(), "   ").len(), 3);
    }

    #[test]
    fn filter_with_no_hits_is_empty() {
        assert!(filter_categories(&catalog(), "maritime").is_empty());
    }

    #[test]
    fn catalog_fetch_is_skipped_once_loaded() {
        let mut state = CategoriesState::default();
        let ticket = begin_catalog(&mut state).expect("first fetch issues a ticket");
        assert!(resolve_catalog(&mut state, ticket, Ok(catalog())));
        assert!(begin_catalog(&mut state).is_none());
    }

    #[test]
    fn failed_catalog_fetch_can_be_retried() {
        let mut state = CategoriesState::default();
        let ticket = begin_catalog(&mut state).expect("first fetch issues a ticket");
        assert!(resolve_catalog(
            &mut state,
            ticket,
            Err("network error: offline".to_string())
        ));
        assert!(begin_catalog(&mut state).is_some());
    }

    #[test]
    fn switching_selection_resets_the_listing() {
        let mut state = CategoriesState::default();
        select_category(&mut state, category("B", "Education", ""));
        let (ticket, code) = begin_listing(&mut state).expect("selection issues a ticket");
        assert_eq!(code, "B");

        select_category(&mut state, category("E", "Health Care", ""));
        assert!(!resolve_listing(
            &mut state,
            ticket,
            "B",
            Ok(CategoryOrganizationsEnvelope::default())
        ));
        assert_eq!(state.listing.state, crate::core::remote::Remote::Idle);
    }

    #[test]
    fn reselecting_the_same_code_keeps_the_listing() {
        let mut state = CategoriesState::default();
        select_category(&mut state, category("B", "Education", ""));
        let (ticket, _) = begin_listing(&mut state).expect("selection issues a ticket");
        assert!(resolve_listing(
            &mut state,
            ticket,
            "B",
            Ok(CategoryOrganizationsEnvelope::default())
        ));

        select_category(&mut state, category("B", "Education", ""));
        assert!(state.listing.state.ready().is_some());
    }

    #[test]
    fn listing_falls_back_to_the_requested_code() {
        let envelope = CategoryOrganizationsEnvelope {
            category: None,
            ..CategoryOrganizationsEnvelope::default()
        };
        let listing = CategoryListing::from_envelope("b", envelope);
        assert_eq!(listing.code, "B");

        let echoed = CategoryOrganizationsEnvelope {
            category: Some("E".to_string()),
            ..CategoryOrganizationsEnvelope::default()
        };
        assert_eq!(CategoryListing::from_envelope("b", echoed).code, "E");
    }

    #[test]
    fn begin_listing_requires_a_selection() {
        let mut state = CategoriesState::default();
        assert!(begin_listing(&mut state).is_none());
    }
}
