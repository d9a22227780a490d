use yew::prelude::*;
use yew_router::prelude::Link;

use crate::app::routes::Route;
use crate::core::auth::SessionPhase;

#[derive(Properties, PartialEq)]
pub(crate) struct SessionBadgeProps {
    pub phase: SessionPhase,
    pub on_sign_out: Callback<()>,
    pub on_retry: Callback<()>,
}

#[function_component(SessionBadge)]
pub(crate) fn session_badge(props: &SessionBadgeProps) -> Html {
    let sign_out = {
        let cb = props.on_sign_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let retry = {
        let cb = props.on_retry.clone();
        Callback::from(move |_| cb.emit(()))
    };

    match &props.phase {
        SessionPhase::Probing => html! {
            <span class="session-badge muted">{"Checking session"}</span>
        },
        SessionPhase::SignedOut => html! {
            <Link<Route> classes="session-badge sign-in" to={Route::Login}>{"Sign In"}</Link<Route>>
        },
        SessionPhase::SignedIn(profile) => html! {
            <span class="session-badge signed-in">
                <span class="user-name">{profile.display_name().to_string()}</span>
                <button class="ghost" onclick={sign_out}>{"Sign Out"}</button>
            </span>
        },
        SessionPhase::Failed(message) => html! {
            <span class="session-badge warn" title={message.clone()}>
                {"Session check failed"}
                <button class="ghost" onclick={retry}>{"Retry"}</button>
            </span>
        },
    }
}
