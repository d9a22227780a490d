//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store so effects and views read the same
//!   snapshot.
//! - Fetch lifecycles live in [`Tracked`](crate::core::remote::Tracked)
//!   slices; reducers observe the current generation at resolve time, so a
//!   late response can never clobber a newer request.

use crate::core::storage::{self, KeyValueStore};
use crate::features::categories::state::CategoriesState;
use crate::features::organizations::state::OrganizationsState;
use crate::features::popular::state::PopularState;
use crate::features::search::state::SearchState;
use crate::features::session::state::SessionState;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Sign-in lifecycle.
    pub session: SessionState,
    /// Search query, filters, and results.
    pub search: SearchState,
    /// Organization detail and verification state.
    pub organizations: OrganizationsState,
    /// Category catalog and per-category listings.
    pub categories: CategoriesState,
    /// Popular organizations spotlight.
    pub popular: PopularState,
    /// Client-side records mirrored from persistent storage.
    pub records: RecordsSlice,
}

/// Recent searches and favorites as the views see them.
///
/// The backing store is the source of truth; this slice is hydrated at
/// boot and rewritten through the record operations so views re-render
/// without re-reading storage.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct RecordsSlice {
    /// Recent search terms, most recent first.
    pub recent_searches: Vec<String>,
    /// Favorited EINs in normalized form.
    pub favorites: Vec<String>,
}

/// Populate the records slice from the backing store.
pub fn hydrate_records(store: &mut AppStore, records: &impl KeyValueStore) {
    store.records.recent_searches = storage::load_recent_searches(records);
    store.records.favorites = storage::load_favorites(records);
}

/// Global dispatch handle for [`AppStore`].
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn app_dispatch() -> yewdux::dispatch::Dispatch<AppStore> {
    yewdux::dispatch::Dispatch::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;

    #[test]
    fn hydrate_fills_both_records() {
        let backing = MemoryStore::default();
        storage::record_search(&backing, "red cross");
        storage::toggle_favorite(&backing, "53-0196605");

        let mut store = AppStore::default();
        hydrate_records(&mut store, &backing);
        assert_eq!(store.records.recent_searches, vec!["red cross".to_string()]);
        assert_eq!(store.records.favorites, vec!["530196605".to_string()]);
    }

    #[test]
    fn default_store_is_empty_and_probing() {
        let store = AppStore::default();
        assert!(store.records.recent_searches.is_empty());
        assert!(store.search.params.query.is_empty());
        assert!(!store.session.phase.is_signed_in());
    }
}
