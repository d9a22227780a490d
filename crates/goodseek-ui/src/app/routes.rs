//! Routing definitions for the Goodseek UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/organizations")]
    Organizations,
    #[at("/organizations/:ein")]
    OrganizationDetail { ein: String },
    #[at("/categories")]
    Categories,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}
