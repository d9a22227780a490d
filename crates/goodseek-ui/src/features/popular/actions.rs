//! Spotlight fetch effect.

use std::rc::Rc;

use gloo::console;

use crate::core::store::app_dispatch;
use crate::features::popular::state::{self, POPULAR_LIMIT};
use crate::services::api::ApiClient;

/// Fetch the spotlight list into the store.
pub(crate) fn load_popular(client: &Rc<ApiClient>) {
    let dispatch = app_dispatch();
    let mut ticket = None;
    dispatch.reduce_mut(|store| ticket = Some(state::begin_popular(&mut store.popular)));
    let Some(ticket) = ticket else {
        return;
    };
    let client = Rc::clone(client);
    yew::platform::spawn_local(async move {
        let outcome = client
            .fetch_popular(POPULAR_LIMIT)
            .await
            .map_err(|err| err.to_string());
        if let Err(message) = &outcome {
            console::error!("popular fetch failed", message.clone());
        }
        app_dispatch()
            .reduce_mut(|store| state::resolve_popular(&mut store.popular, ticket, outcome));
    });
}
