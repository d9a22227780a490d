//! Detail-page effects: record fetch, verification, and favorites.

use std::rc::Rc;

use gloo::console;

use crate::core::storage::{self, KeyValueStore};
use crate::core::store::app_dispatch;
use crate::features::organizations::state;
use crate::services::api::ApiClient;

/// Select an EIN and fetch whatever the selection still needs.
pub(crate) fn open_organization(client: &Rc<ApiClient>, ein: &str) {
    app_dispatch().reduce_mut(|store| state::select_organization(&mut store.organizations, ein));
    load_detail(client);
    load_verification(client);
}

/// Fetch the detail record for the current selection, if it is missing.
pub(crate) fn load_detail(client: &Rc<ApiClient>) {
    let dispatch = app_dispatch();
    let mut issued = None;
    dispatch.reduce_mut(|store| issued = state::begin_detail(&mut store.organizations));
    let Some((ticket, ein)) = issued else {
        return;
    };
    let client = Rc::clone(client);
    yew::platform::spawn_local(async move {
        let outcome = client
            .fetch_organization(&ein)
            .await
            .map_err(|err| err.to_string());
        if let Err(message) = &outcome {
            console::error!("organization fetch failed", message.clone());
        }
        app_dispatch()
            .reduce_mut(|store| state::resolve_detail(&mut store.organizations, ticket, outcome));
    });
}

/// Fetch the verification report for the current selection, if missing.
pub(crate) fn load_verification(client: &Rc<ApiClient>) {
    let dispatch = app_dispatch();
    let mut issued = None;
    dispatch.reduce_mut(|store| issued = state::begin_verification(&mut store.organizations));
    let Some((ticket, ein)) = issued else {
        return;
    };
    let client = Rc::clone(client);
    yew::platform::spawn_local(async move {
        let outcome = client
            .verify_organization(&ein)
            .await
            .map_err(|err| err.to_string());
        if let Err(message) = &outcome {
            console::error!("verification fetch failed", message.clone());
        }
        app_dispatch().reduce_mut(|store| {
            state::resolve_verification(&mut store.organizations, ticket, outcome)
        });
    });
}

/// Flip an EIN's favorite status and mirror the record into the store.
pub(crate) fn toggle_favorite(records: &impl KeyValueStore, ein: &str) {
    let list = storage::toggle_favorite(records, ein);
    app_dispatch().reduce_mut(|store| store.records.favorites = list);
}
