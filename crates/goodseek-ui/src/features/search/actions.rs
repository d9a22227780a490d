//! Search effects: fetches and record updates driven by store state.

use crate::core::storage::{self, KeyValueStore};
use crate::core::store::app_dispatch;
use crate::features::search::state;
use crate::services::api::ApiClient;
use gloo::console;
use std::rc::Rc;

/// Run a search for the parameters currently in the store.
///
/// A query failing the length guard goes nowhere near the network; the
/// results slice just resets to idle.
pub(crate) fn run_search(client: &Rc<ApiClient>) {
    let dispatch = app_dispatch();
    let mut ticket = None;
    dispatch.reduce_mut(|store| ticket = state::begin_search(&mut store.search));
    let Some(ticket) = ticket else {
        return;
    };
    let params = dispatch.get().search.params.clone();
    let client = Rc::clone(client);
    yew::platform::spawn_local(async move {
        let outcome = client
            .search_organizations(&params)
            .await
            .map_err(|err| err.to_string());
        if let Err(message) = &outcome {
            console::error!("search failed", message.clone());
        }
        app_dispatch().reduce_mut(|store| state::resolve_search(&mut store.search, ticket, outcome));
    });
}

/// Widen the window and refetch the same query.
pub(crate) fn load_more(client: &Rc<ApiClient>) {
    app_dispatch().reduce_mut(|store| state::grow_limit(&mut store.search));
    run_search(client);
}

/// Add a submitted term to the recent-search record and mirror it into
/// the store.
pub(crate) fn remember_search(records: &impl KeyValueStore, term: &str) {
    let list = storage::record_search(records, term);
    app_dispatch().reduce_mut(|store| store.records.recent_searches = list);
}
