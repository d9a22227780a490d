//! Session effects: boot-time token intake and the profile probe.

use std::rc::Rc;

use gloo::console;
use gloo::utils::window;
use wasm_bindgen::JsValue;

use crate::core::auth;
use crate::core::storage::{self, KeyValueStore};
use crate::core::store::app_dispatch;
use crate::features::session::state::{self, ProbeOutcome};
use crate::services::api::ApiClient;

/// Run the full boot sequence: capture redirect tokens, then decide the
/// session phase with a profile probe.
pub(crate) fn bootstrap_session<R>(client: &Rc<ApiClient>, records: &R)
where
    R: KeyValueStore + Clone + 'static,
{
    capture_callback_tokens(records);
    probe_profile(client, records);
}

/// Probe the profile endpoint with the stored token, if there is one.
///
/// Also the retry path when an earlier probe could not reach the backend.
pub(crate) fn probe_profile<R>(client: &Rc<ApiClient>, records: &R)
where
    R: KeyValueStore + Clone + 'static,
{
    let Some(token) = storage::load_access_token(records) else {
        app_dispatch().reduce_mut(|store| state::settle_signed_out(&mut store.session));
        return;
    };
    app_dispatch().reduce_mut(|store| state::start_probe(&mut store.session));

    let client = Rc::clone(client);
    let records = records.clone();
    yew::platform::spawn_local(async move {
        let outcome = match client.fetch_profile(&token).await {
            Ok(profile) => ProbeOutcome::Profile(profile),
            Err(error) => state::classify_probe_error(&error),
        };
        if let ProbeOutcome::Unreachable(message) = &outcome {
            console::error!("profile probe failed", message.clone());
        }
        let mut discard = false;
        app_dispatch()
            .reduce_mut(|store| discard = state::apply_probe(&mut store.session, outcome));
        if discard {
            storage::clear_tokens(&records);
        }
    });
}

/// Drop the stored tokens and settle signed out. Purely client-side.
pub(crate) fn sign_out_session(records: &impl KeyValueStore) {
    storage::clear_tokens(records);
    app_dispatch().reduce_mut(|store| state::settle_signed_out(&mut store.session));
}

/// Lift tokens out of the OAuth redirect URL into storage, then strip
/// the query so they never linger in the address bar or history.
fn capture_callback_tokens(records: &impl KeyValueStore) {
    let search = window().location().search().unwrap_or_default();
    let Some(tokens) = auth::parse_callback_tokens(&search) else {
        return;
    };
    storage::persist_tokens(records, &tokens.access, &tokens.refresh);
    strip_query();
}

fn strip_query() {
    let location = window().location();
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    match window().history() {
        Ok(history) => {
            if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(&path)) {
                console::error!("failed to strip callback query", err);
            }
        }
        Err(err) => console::error!("history unavailable", err),
    }
}
