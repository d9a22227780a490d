//! Login page.

use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_selector;

use crate::app::api::ApiCtx;
use crate::app::routes::Route;
use crate::core::auth::SessionPhase;
use crate::core::store::AppStore;

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let phase = use_selector(|store: &AppStore| store.session.phase.clone());
    let navigator = use_navigator();

    {
        let signed_in = phase.is_signed_in();
        use_effect_with_deps(
            move |signed_in: &bool| {
                if *signed_in
                    && let Some(navigator) = navigator
                {
                    navigator.push(&Route::Home);
                }
                || ()
            },
            signed_in,
        );
    }

    let Some(api_ctx) = api_ctx else {
        return html! {
            <div class="panel">
                <p class="text-sm text-error">{"Missing API context."}</p>
            </div>
        };
    };

    match &*phase {
        SessionPhase::Probing => html! {
            <section class="login-page">
                <p class="muted center">{"Loading..."}</p>
            </section>
        },
        SessionPhase::SignedIn(_) => html! {
            <section class="login-page">
                <p class="muted center">{"Redirecting..."}</p>
            </section>
        },
        SessionPhase::SignedOut | SessionPhase::Failed(_) => {
            let failure = phase.error().map(ToString::to_string);
            html! {
                <section class="login-page">
                    <div class="login-card">
                        <h2>{"Welcome back"}</h2>
                        <p class="muted">{"Sign in to continue your journey of giving"}</p>
                        {failure.map(|message| html! {
                            <p class="text-sm text-error">
                                {format!("Last session check failed: {message}")}
                            </p>
                        }).unwrap_or_default()}
                        <a class="solid" href={api_ctx.client.login_url()}>
                            {"Continue with Google"}
                        </a>
                    </div>
                </section>
            }
        }
    }
}
