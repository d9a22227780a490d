//! Organization search page with the popular spotlight tab.

use std::rc::Rc;

use goodseek_api_models::Organization;
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::app::api::ApiCtx;
use crate::components::chips::ChipStrip;
use crate::components::filter_panel::FilterPanel;
use crate::components::org_grid::OrgGrid;
use crate::components::search_box::SearchBox;
use crate::core::remote::Remote;
use crate::core::storage::BrowserStore;
use crate::core::store::{AppStore, app_dispatch};
use crate::features::categories::actions::load_catalog;
use crate::features::organizations::actions::toggle_favorite;
use crate::features::popular::actions::load_popular;
use crate::features::search::actions;
use crate::features::search::state::{self, POPULAR_SEARCH_TERMS, SearchState, can_load_more};
use crate::services::api::ApiClient;

/// Which result set the lower half of the page shows.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Search,
    Popular,
}

#[function_component(SearchPage)]
pub(crate) fn search_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let search = use_selector(|store: &AppStore| store.search.clone());
    let spotlight = use_selector(|store: &AppStore| store.popular.spotlight.state.clone());
    let records = use_selector(|store: &AppStore| store.records.clone());
    let catalog = use_selector(|store: &AppStore| store.categories.catalog.state.clone());
    let tab = use_state(|| Tab::Search);
    let filters_open = use_state(|| false);

    {
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api_ctx) = api_ctx {
                    load_catalog(&api_ctx.client);
                }
                || ()
            },
            (),
        );
    }

    {
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |active| {
                if *active == Tab::Popular
                    && let Some(api_ctx) = api_ctx
                {
                    load_popular(&api_ctx.client);
                }
                || ()
            },
            *tab,
        );
    }

    let Some(api_ctx) = api_ctx else {
        return html! {
            <div class="panel">
                <p class="text-sm text-error">{"Missing API context."}</p>
            </div>
        };
    };

    let on_query = {
        let client = api_ctx.client.clone();
        Callback::from(move |value: String| {
            app_dispatch().reduce_mut(|store| state::set_query(&mut store.search, &value));
            actions::run_search(&client);
        })
    };
    let on_submit = {
        let client = api_ctx.client.clone();
        let tab = tab.clone();
        Callback::from(move |term: String| {
            tab.set(Tab::Search);
            submit_term(&client, &term);
        })
    };
    let on_pick = on_submit.clone();
    let on_state = {
        let client = api_ctx.client.clone();
        let tab = tab.clone();
        Callback::from(move |value: String| {
            tab.set(Tab::Search);
            app_dispatch().reduce_mut(|store| state::set_state_filter(&mut store.search, &value));
            actions::run_search(&client);
        })
    };
    let on_category = {
        let client = api_ctx.client.clone();
        let tab = tab.clone();
        Callback::from(move |value: String| {
            tab.set(Tab::Search);
            app_dispatch()
                .reduce_mut(|store| state::set_category_filter(&mut store.search, &value));
            actions::run_search(&client);
        })
    };
    let on_city = {
        let client = api_ctx.client.clone();
        let tab = tab.clone();
        Callback::from(move |value: String| {
            tab.set(Tab::Search);
            app_dispatch().reduce_mut(|store| state::set_city_filter(&mut store.search, &value));
            actions::run_search(&client);
        })
    };
    let on_clear = Callback::from(|()| {
        app_dispatch().reduce_mut(|store| state::clear_search(&mut store.search));
    });
    let on_load_more = {
        let client = api_ctx.client.clone();
        Callback::from(move |_| actions::load_more(&client))
    };
    let on_favorite = Callback::from(|ein: String| toggle_favorite(&BrowserStore, &ein));
    let show_search = {
        let tab = tab.clone();
        Callback::from(move |_| tab.set(Tab::Search))
    };
    let show_popular = {
        let tab = tab.clone();
        Callback::from(move |_| tab.set(Tab::Popular))
    };
    let toggle_filters = {
        let filters_open = filters_open.clone();
        Callback::from(move |_| filters_open.set(!*filters_open))
    };

    let category_options = catalog.ready().cloned().unwrap_or_default();
    let has_criteria = search.params.has_filters() || !search.params.query.trim().is_empty();
    let body = match *tab {
        Tab::Search => search_results(
            &search,
            &records.recent_searches,
            &records.favorites,
            &on_favorite,
            &on_load_more,
            &on_pick,
        ),
        Tab::Popular => popular_results(&spotlight, &records.favorites, &on_favorite),
    };

    html! {
        <section class="search-page">
            <div class="hero">
                <h1>{"Discover Charitable Organizations"}</h1>
                <p>
                    {"Search through 1.7 million verified 501(c)(3) organizations \
                      and find the perfect charity for your giving goals"}
                </p>
                <div class="search-row">
                    <SearchBox
                        value={search.params.query.clone()}
                        placeholder="Search organizations by name (e.g., 'American Red Cross', 'local food bank')"
                        aria_label="Search organizations"
                        on_change={on_query}
                        on_submit={on_submit}
                    />
                    <button
                        class={classes!("filter-toggle", (*filters_open).then_some("active"))}
                        onclick={toggle_filters}>
                        {"Filters"}
                    </button>
                </div>
                {if *filters_open { html! {
                    <FilterPanel
                        state_value={search.params.state.clone()}
                        category_value={search.params.category.clone()}
                        city_value={search.params.city.clone()}
                        categories={category_options}
                        on_state_change={on_state}
                        on_category_change={on_category}
                        on_city_change={on_city}
                        on_clear={on_clear}
                        show_clear={has_criteria}
                    />
                }} else { html!{} }}
            </div>
            <div class="tabs" role="tablist">
                <button
                    class={classes!("tab", (*tab == Tab::Search).then_some("active"))}
                    onclick={show_search}>
                    {"Search Results"}
                </button>
                <button
                    class={classes!("tab", (*tab == Tab::Popular).then_some("active"))}
                    onclick={show_popular}>
                    {"Popular Organizations"}
                </button>
            </div>
            { body }
            <section class="stats">
                <div class="stat">
                    <h3>{"1.7M+"}</h3>
                    <p>{"Verified 501(c)(3) Organizations"}</p>
                </div>
                <div class="stat">
                    <h3>{"50 States"}</h3>
                    <p>{"Nationwide Coverage"}</p>
                </div>
                <div class="stat">
                    <h3>{"Real-time"}</h3>
                    <p>{"IRS Database Updates"}</p>
                </div>
            </section>
        </section>
    }
}

/// Record a submitted term, make it the query, and search immediately.
fn submit_term(client: &Rc<ApiClient>, term: &str) {
    actions::remember_search(&BrowserStore, term);
    app_dispatch().reduce_mut(|store| state::set_query(&mut store.search, term));
    actions::run_search(client);
}

fn search_results(
    search: &SearchState,
    recents: &[String],
    favorites: &[String],
    on_favorite: &Callback<String>,
    on_load_more: &Callback<MouseEvent>,
    on_pick: &Callback<String>,
) -> Html {
    let results = search.results.state.ready();
    let organizations = results
        .map(|results| results.organizations.clone())
        .unwrap_or_default();
    let count_line = results
        .and_then(|results| results.count)
        .filter(|count| *count > 0)
        .map(|count| {
            let query = search.params.query.trim();
            if query.is_empty() {
                format!("Found {count} organizations")
            } else {
                format!("Found {count} organizations matching \"{query}\"")
            }
        });
    let idle = matches!(search.results.state, Remote::Idle);
    let (empty_title, empty_hint) = if search.params.is_searchable() {
        (
            "No organizations found matching your search criteria",
            "Try adjusting your search criteria",
        )
    } else {
        (
            "Enter a search term to find organizations",
            "Searches need at least two characters",
        )
    };

    html! {
        <>
            {if let Some(message) = search.results.state.error() { html! {
                <div class="panel error">
                    <strong>{"Error: "}</strong>{message.to_string()}
                </div>
            }} else { html!{} }}
            {count_line.map(|line| html! { <p class="muted center">{line}</p> }).unwrap_or_default()}
            <OrgGrid
                organizations={organizations}
                loading={search.results.state.is_loading()}
                favorites={favorites.to_vec()}
                on_favorite={on_favorite.clone()}
                empty_title={empty_title}
                empty_hint={empty_hint}
            />
            {if can_load_more(search) { html! {
                <div class="load-more">
                    <button class="solid" onclick={on_load_more.clone()}>
                        {"Load More Organizations"}
                    </button>
                </div>
            }} else { html!{} }}
            {if idle { html! { <>
                <ChipStrip
                    heading="Recent Searches"
                    terms={recents.to_vec()}
                    on_pick={on_pick.clone()}
                />
                <ChipStrip
                    heading="Popular Searches"
                    terms={popular_terms()}
                    on_pick={on_pick.clone()}
                />
            </> }} else { html!{} }}
        </>
    }
}

fn popular_results(
    spotlight: &Remote<Vec<Organization>>,
    favorites: &[String],
    on_favorite: &Callback<String>,
) -> Html {
    let organizations = spotlight.ready().cloned().unwrap_or_default();
    html! {
        <>
            {if let Some(message) = spotlight.error() { html! {
                <div class="panel error">
                    <strong>{"Error: "}</strong>{message.to_string()}
                </div>
            }} else { html!{} }}
            <OrgGrid
                organizations={organizations}
                loading={spotlight.is_loading()}
                favorites={favorites.to_vec()}
                on_favorite={on_favorite.clone()}
                empty_title="Unable to load popular organizations"
                empty_hint="Try the search tab instead"
            />
        </>
    }
}

fn popular_terms() -> Vec<String> {
    POPULAR_SEARCH_TERMS
        .iter()
        .map(ToString::to_string)
        .collect()
}
