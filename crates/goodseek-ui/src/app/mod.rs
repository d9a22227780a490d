//! Application root: context wiring, boot effects, and route dispatch.
//!
//! # Design
//! - One `ApiCtx` is created at mount and shared through context.
//! - Boot hydrates persisted records and kicks off the session bootstrap
//!   once, from a mount effect.
//! - The frame component reads the active route inside the router so the
//!   shell can highlight navigation.

pub(crate) mod api;
mod config;
pub(crate) mod routes;

use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::app::api::ApiCtx;
use crate::app::routes::Route;
use crate::components::shell::AppShell;
use crate::core::storage::BrowserStore;
use crate::core::store::{AppStore, app_dispatch, hydrate_records};
use crate::features::categories::view::CategoriesPage;
use crate::features::organizations::view::OrganizationDetailPage;
use crate::features::search::view::SearchPage;
use crate::features::session::actions;
use crate::features::session::view::LoginPage;

#[function_component(GoodseekApp)]
fn goodseek_app() -> Html {
    let api = use_memo(|_| ApiCtx::new(config::api_base_url()), ());

    {
        let api = api.clone();
        use_effect_with_deps(
            move |_| {
                app_dispatch().reduce_mut(|store| hydrate_records(store, &BrowserStore));
                actions::bootstrap_session(&api.client, &BrowserStore);
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<ApiCtx> context={(*api).clone()}>
            <BrowserRouter>
                <AppFrame />
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

#[function_component(AppFrame)]
fn app_frame() -> Html {
    let phase = use_selector(|store: &AppStore| store.session.phase.clone());
    let active = use_route::<Route>().unwrap_or(Route::NotFound);
    let api_ctx = use_context::<ApiCtx>();

    let on_sign_out = Callback::from(|()| actions::sign_out_session(&BrowserStore));
    let on_retry = {
        let api_ctx = api_ctx.clone();
        Callback::from(move |()| {
            if let Some(api_ctx) = &api_ctx {
                actions::probe_profile(&api_ctx.client, &BrowserStore);
            }
        })
    };

    html! {
        <AppShell
            active={active}
            phase={(*phase).clone()}
            on_sign_out={on_sign_out}
            on_retry={on_retry}
        >
            <Switch<Route> render={switch} />
        </AppShell>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => home_page(),
        Route::Organizations => html! { <SearchPage /> },
        Route::OrganizationDetail { ein } => html! { <OrganizationDetailPage ein={ein} /> },
        Route::Categories => html! { <CategoriesPage /> },
        Route::Login => html! { <LoginPage /> },
        Route::NotFound => not_found_page(),
    }
}

fn home_page() -> Html {
    html! {
        <section class="home">
            <div class="hero">
                <h1>{"Welcome to Goodseek"}</h1>
                <p>
                    {"Connect with verified charitable organizations and make \
                      meaningful donations to causes you care about. Every act \
                      of kindness creates a ripple of hope."}
                </p>
                <div class="cta-row">
                    <Link<Route> classes="solid" to={Route::Organizations}>
                        {"Explore Organizations"}
                    </Link<Route>>
                    <Link<Route> classes="ghost" to={Route::Categories}>
                        {"Browse Categories"}
                    </Link<Route>>
                </div>
            </div>
            <div class="stats">
                <div class="stat">
                    <h3>{"1.7M+"}</h3>
                    <p>{"Verified Organizations"}</p>
                </div>
                <div class="stat">
                    <h3>{"$50M+"}</h3>
                    <p>{"Donations Facilitated"}</p>
                </div>
                <div class="stat">
                    <h3>{"500K+"}</h3>
                    <p>{"Lives Impacted"}</p>
                </div>
            </div>
            <div class="feature-cards">
                <div class="feature-card">
                    <h3>{"Verified Organizations"}</h3>
                    <p>
                        {"Every listed charity is checked against the IRS \
                          Business Master File and flagged when it is a \
                          501(c)(3) tax-exempt entity."}
                    </p>
                </div>
                <div class="feature-card">
                    <h3>{"Easy Discovery"}</h3>
                    <p>
                        {"Find organizations by cause, location, or impact \
                          area using search and category browsing."}
                    </p>
                </div>
                <div class="feature-card">
                    <h3>{"Give with Confidence"}</h3>
                    <p>
                        {"Direct links to each organization's public profile \
                          so your donation lands where you intend."}
                    </p>
                </div>
            </div>
            <div class="cta-panel">
                <h2>{"Ready to Make a Difference?"}</h2>
                <p>
                    {"Join thousands of donors who are creating positive \
                      change in the world. Start your journey of giving today."}
                </p>
                <Link<Route> classes="solid" to={Route::Login}>
                    {"Get Started Today"}
                </Link<Route>>
            </div>
        </section>
    }
}

fn not_found_page() -> Html {
    html! {
        <section class="not-found">
            <h1>{"Page Not Found"}</h1>
            <p>{"The page you're looking for doesn't exist or has moved."}</p>
            <Link<Route> classes="solid" to={Route::Home}>{"Back to Home"}</Link<Route>>
        </section>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<GoodseekApp>::with_root(root).render();
    } else {
        yew::Renderer::<GoodseekApp>::new().render();
    }
}
