//! Category fetch effects.

use std::rc::Rc;

use gloo::console;
use goodseek_api_models::Category;

use crate::core::store::app_dispatch;
use crate::features::categories::state::{self, CATEGORY_LISTING_LIMIT};
use crate::services::api::ApiClient;

/// Fetch the category catalog once; later calls are no-ops while loaded.
pub(crate) fn load_catalog(client: &Rc<ApiClient>) {
    let dispatch = app_dispatch();
    let mut ticket = None;
    dispatch.reduce_mut(|store| ticket = state::begin_catalog(&mut store.categories));
    let Some(ticket) = ticket else {
        return;
    };
    let client = Rc::clone(client);
    yew::platform::spawn_local(async move {
        let outcome = client
            .fetch_categories()
            .await
            .map_err(|err| err.to_string());
        if let Err(message) = &outcome {
            console::error!("category catalog fetch failed", message.clone());
        }
        app_dispatch()
            .reduce_mut(|store| state::resolve_catalog(&mut store.categories, ticket, outcome));
    });
}

/// Fetch members of the currently selected category.
pub(crate) fn load_listing(client: &Rc<ApiClient>) {
    let dispatch = app_dispatch();
    let mut issued = None;
    dispatch.reduce_mut(|store| issued = state::begin_listing(&mut store.categories));
    let Some((ticket, code)) = issued else {
        return;
    };
    let client = Rc::clone(client);
    yew::platform::spawn_local(async move {
        let outcome = client
            .fetch_category_organizations(&code, CATEGORY_LISTING_LIMIT)
            .await
            .map_err(|err| err.to_string());
        if let Err(message) = &outcome {
            console::error!("category listing fetch failed", message.clone());
        }
        app_dispatch().reduce_mut(|store| {
            state::resolve_listing(&mut store.categories, ticket, &code, outcome)
        });
    });
}

/// Drill into a category and fetch its members.
pub(crate) fn open_category(client: &Rc<ApiClient>, category: Category) {
    app_dispatch().reduce_mut(|store| state::select_category(&mut store.categories, category));
    load_listing(client);
}

/// Return to the catalog grid.
pub(crate) fn back_to_catalog() {
    app_dispatch().reduce_mut(|store| state::clear_selection(&mut store.categories));
}
