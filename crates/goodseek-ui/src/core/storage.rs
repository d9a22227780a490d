//! Client-side records behind an injectable key-value store.
//!
//! # Design
//! - Views never touch `localStorage` directly; record logic runs against
//!   [`KeyValueStore`] so it stays natively testable.
//! - Stored values are raw strings: JSON arrays for records, bare token
//!   strings for credentials, matching the documented storage contract.
//! - Read failures (missing key, corrupt JSON) yield empty records; write
//!   failures are logged by the backing store and never propagated.

use crate::core::format::normalize_ein;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Storage key holding the OAuth access token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Storage key holding the OAuth refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Storage key holding the recent-search JSON array.
pub const RECENT_SEARCHES_KEY: &str = "recentSearches";

/// Storage key holding the favorites JSON array of EINs.
pub const FAVORITES_KEY: &str = "favorites";

/// Cap on stored recent searches.
pub const RECENT_SEARCHES_CAP: usize = 5;

/// Minimal string key-value persistence seam.
///
/// Implementations decide where the bytes live; callers treat the store as
/// infallible and rely on the implementation to log write problems.
pub trait KeyValueStore {
    /// Read the raw string stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`.
    fn set(&self, key: &str, value: &str);
    /// Remove `key` if present.
    fn remove(&self, key: &str);
}

/// In-memory store for native tests and headless use. Clones share state.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Load the recent-search list, most recent first.
#[must_use]
pub fn load_recent_searches(store: &impl KeyValueStore) -> Vec<String> {
    read_list(store, RECENT_SEARCHES_KEY)
}

/// Record a search term and return the updated list.
///
/// The term moves to the front, deduped case-insensitively; the list never
/// exceeds [`RECENT_SEARCHES_CAP`]. Blank terms leave the record untouched.
pub fn record_search(store: &impl KeyValueStore, term: &str) -> Vec<String> {
    let term = term.trim();
    let mut list = load_recent_searches(store);
    if term.is_empty() {
        return list;
    }
    list.retain(|existing| !existing.eq_ignore_ascii_case(term));
    list.insert(0, term.to_string());
    list.truncate(RECENT_SEARCHES_CAP);
    write_list(store, RECENT_SEARCHES_KEY, &list);
    list
}

/// Load the favorited EINs in storage order.
#[must_use]
pub fn load_favorites(store: &impl KeyValueStore) -> Vec<String> {
    read_list(store, FAVORITES_KEY)
}

/// Toggle an EIN in the favorites record and return the updated list.
///
/// The EIN is normalized before comparison so dashed and plain forms
/// toggle the same entry.
pub fn toggle_favorite(store: &impl KeyValueStore, ein: &str) -> Vec<String> {
    let normalized = normalize_ein(ein);
    if normalized.is_empty() {
        return load_favorites(store);
    }
    let mut list = load_favorites(store);
    let before = list.len();
    list.retain(|existing| existing != &normalized);
    if list.len() == before {
        list.push(normalized);
    }
    write_list(store, FAVORITES_KEY, &list);
    list
}

/// Whether an EIN is currently favorited.
#[must_use]
pub fn is_favorite(favorites: &[String], ein: &str) -> bool {
    let normalized = normalize_ein(ein);
    favorites.iter().any(|existing| existing == &normalized)
}

/// Load the access token when present and non-empty.
#[must_use]
pub fn load_access_token(store: &impl KeyValueStore) -> Option<String> {
    store
        .get(ACCESS_TOKEN_KEY)
        .filter(|token| !token.trim().is_empty())
}

/// Persist both session tokens.
pub fn persist_tokens(store: &impl KeyValueStore, access: &str, refresh: &str) {
    store.set(ACCESS_TOKEN_KEY, access);
    store.set(REFRESH_TOKEN_KEY, refresh);
}

/// Remove both session tokens.
pub fn clear_tokens(store: &impl KeyValueStore) {
    store.remove(ACCESS_TOKEN_KEY);
    store.remove(REFRESH_TOKEN_KEY);
}

fn read_list(store: &impl KeyValueStore, key: &str) -> Vec<String> {
    store
        .get(key)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

fn write_list(store: &impl KeyValueStore, key: &str, list: &[String]) {
    if let Ok(raw) = serde_json::to_string(list) {
        store.set(key, &raw);
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use gloo::console;

    /// `localStorage` adapter used by the running app.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct BrowserStore;

    fn local_storage() -> Option<web_sys::Storage> {
        gloo::utils::window().local_storage().ok().flatten()
    }

    impl super::KeyValueStore for BrowserStore {
        fn get(&self, key: &str) -> Option<String> {
            local_storage()?.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) {
            let Some(storage) = local_storage() else {
                console::error!("localStorage unavailable; dropping write", key.to_string());
                return;
            };
            if let Err(err) = storage.set_item(key, value) {
                console::error!(
                    "storage write failed",
                    key.to_string(),
                    format!("{err:?}")
                );
            }
        }

        fn remove(&self, key: &str) {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;
