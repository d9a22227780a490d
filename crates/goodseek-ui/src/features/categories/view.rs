//! Category browsing pages.

use goodseek_api_models::Category;
use yew::prelude::*;
use yewdux::prelude::use_selector;

use crate::app::api::ApiCtx;
use crate::components::org_grid::OrgGrid;
use crate::components::search_box::SearchBox;
use crate::core::storage::BrowserStore;
use crate::core::store::AppStore;
use crate::features::categories::actions;
use crate::features::categories::state::{CategoriesState, filter_categories};
use crate::features::organizations::actions::toggle_favorite;

#[function_component(CategoriesPage)]
pub(crate) fn categories_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let slice = use_selector(|store: &AppStore| store.categories.clone());
    let favorites = use_selector(|store: &AppStore| store.records.favorites.clone());
    let term = use_state(String::new);

    {
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(api_ctx) = api_ctx {
                    actions::load_catalog(&api_ctx.client);
                }
                || ()
            },
            (),
        );
    }

    let Some(api_ctx) = api_ctx else {
        return html! {
            <div class="panel">
                <p class="text-sm text-error">{"Missing API context."}</p>
            </div>
        };
    };

    if let Some(selected) = slice.selected.clone() {
        return listing_view(&api_ctx, &slice, &selected, &favorites);
    }

    catalog_view(&api_ctx, &slice, &term)
}

fn catalog_view(
    api_ctx: &ApiCtx,
    slice: &CategoriesState,
    term: &UseStateHandle<String>,
) -> Html {
    if slice.catalog.state.is_loading() {
        return html! {
            <section class="categories-page">
                <p class="muted center">{"Loading categories..."}</p>
            </section>
        };
    }

    if let Some(message) = slice.catalog.state.error() {
        let retry = {
            let client = api_ctx.client.clone();
            Callback::from(move |_| actions::load_catalog(&client))
        };
        return html! {
            <section class="categories-page">
                <div class="panel error">
                    <h3>{"Error Loading Categories"}</h3>
                    <p>{message.to_string()}</p>
                    <button class="ghost" onclick={retry}>{"Retry"}</button>
                </div>
            </section>
        };
    }

    let catalog = slice.catalog.state.ready().cloned().unwrap_or_default();
    let visible = filter_categories(&catalog, term.as_str());
    let on_term = {
        let term = term.clone();
        Callback::from(move |next: String| term.set(next))
    };

    html! {
        <section class="categories-page">
            <div class="hero">
                <h1>{"Browse by Category"}</h1>
                <p>
                    {"Explore charitable organizations by their official IRS \
                      classification. Find the perfect cause that matches your \
                      giving interests."}
                </p>
                <SearchBox
                    value={AttrValue::from((**term).clone())}
                    placeholder="Search categories..."
                    aria_label="Search categories"
                    debounce_ms={0}
                    on_change={on_term}
                />
            </div>
            <div class="category-grid">
                { for visible.iter().map(|category| category_card(api_ctx, category)) }
            </div>
            {if visible.is_empty() && !term.trim().is_empty() { html! {
                <div class="empty-state">
                    <h3>{"No categories found"}</h3>
                    <p>{"Try searching with different keywords"}</p>
                </div>
            }} else { html!{} }}
            <div class="info-panel">
                <h2>{"About NTEE Categories"}</h2>
                <p>
                    {"The National Taxonomy of Exempt Entities (NTEE) is used by \
                      the IRS to classify nonprofit organizations. Each category \
                      represents a specific area of charitable work, helping \
                      donors find organizations that align with their giving \
                      goals."}
                </p>
            </div>
        </section>
    }
}

fn category_card(api_ctx: &ApiCtx, category: &Category) -> Html {
    let open = {
        let client = api_ctx.client.clone();
        let category = category.clone();
        Callback::from(move |_| actions::open_category(&client, category.clone()))
    };
    html! {
        <button key={category.code.clone()} class="category-card" onclick={open}>
            <h3>{category.name.clone()}</h3>
            <span class="muted">{format!("Code: {}", category.code)}</span>
            {category.description.clone().map(|description| html! {
                <p>{description}</p>
            }).unwrap_or_default()}
            <span class="browse-hint">{"Browse Organizations"}</span>
        </button>
    }
}

fn listing_view(
    api_ctx: &ApiCtx,
    slice: &CategoriesState,
    selected: &Category,
    favorites: &[String],
) -> Html {
    let back = Callback::from(|_| actions::back_to_catalog());
    let retry = {
        let client = api_ctx.client.clone();
        Callback::from(move |_| actions::load_listing(&client))
    };
    let on_favorite = Callback::from(|ein: String| toggle_favorite(&BrowserStore, &ein));
    let listing = slice.listing.state.ready();
    let organizations = listing.map(|listing| listing.organizations.clone()).unwrap_or_default();
    let count_line = listing.and_then(|listing| {
        listing.count.filter(|count| *count > 0).map(|_| {
            format!(
                "Showing {} organizations in {}",
                listing.organizations.len(),
                selected.name
            )
        })
    });

    html! {
        <section class="categories-page">
            <header class="category-header">
                <button class="ghost" onclick={back}>{"Back to Categories"}</button>
                <div>
                    <h1>{selected.name.clone()}</h1>
                    {selected.description.clone().map(|description| html! {
                        <p class="muted">{description}</p>
                    }).unwrap_or_default()}
                </div>
                <div class="category-code">
                    <span class="muted">{"Category Code"}</span>
                    <strong>{selected.code.clone()}</strong>
                </div>
            </header>
            {if let Some(message) = slice.listing.state.error() { html! {
                <div class="panel error">
                    <strong>{"Error: "}</strong>{message.to_string()}
                    <button class="ghost" onclick={retry}>{"Retry"}</button>
                </div>
            }} else { html!{} }}
            {count_line.map(|line| html! { <p class="muted center">{line}</p> }).unwrap_or_default()}
            <OrgGrid
                organizations={organizations}
                loading={slice.listing.state.is_loading()}
                favorites={favorites.to_vec()}
                on_favorite={on_favorite}
                show_full_details={true}
                empty_title={format!("No organizations found in {} category", selected.name)}
                empty_hint=""
            />
        </section>
    }
}
