use yew::prelude::*;
use yew_router::prelude::Link;

use crate::app::routes::Route;
use crate::components::session_badge::SessionBadge;
use crate::components::status::ApiStatusBadge;
use crate::core::auth::SessionPhase;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
    pub active: Route,
    pub phase: SessionPhase,
    pub on_sign_out: Callback<()>,
    pub on_retry: Callback<()>,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    html! {
        <div class="app-shell">
            <header class="topbar">
                <Link<Route> classes="brand" to={Route::Home}>
                    <strong>{"Goodseek"}</strong>
                </Link<Route>>
                <nav>
                    {nav_item(Route::Home, "Home", &props.active)}
                    {nav_item(Route::Organizations, "Organizations", &props.active)}
                    {nav_item(Route::Categories, "Categories", &props.active)}
                </nav>
                <SessionBadge
                    phase={props.phase.clone()}
                    on_sign_out={props.on_sign_out.clone()}
                    on_retry={props.on_retry.clone()}
                />
            </header>
            <main>
                {for props.children.iter()}
            </main>
            <footer class="site-footer">
                <span class="muted">
                    {"Empowering charitable giving by connecting donors with verified organizations"}
                </span>
                <ApiStatusBadge />
            </footer>
        </div>
    }
}

fn nav_item(route: Route, label: &'static str, active: &Route) -> Html {
    let classes = classes!("nav-item", (*active == route).then_some("active"));
    html! {
        <Link<Route> to={route} classes={classes}>{label}</Link<Route>>
    }
}
