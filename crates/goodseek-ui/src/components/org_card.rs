use goodseek_api_models::Organization;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::app::routes::Route;
use crate::core::format::{format_currency, format_ein};

#[derive(Properties, PartialEq)]
pub(crate) struct OrgCardProps {
    pub organization: Organization,
    #[prop_or_default]
    pub favorite: bool,
    #[prop_or_default]
    pub on_favorite: Option<Callback<String>>,
    #[prop_or_default]
    pub show_full_details: bool,
}

#[function_component(OrgCard)]
pub(crate) fn org_card(props: &OrgCardProps) -> Html {
    let org = &props.organization;
    let location = org.display_location();
    let address = org.full_address();
    let has_revenue = org.revenue_amount.is_some_and(|amount| amount != 0);

    let favorite_button = props.on_favorite.clone().map(|on_favorite| {
        let ein = org.ein.clone();
        let toggle = Callback::from(move |_| on_favorite.emit(ein.clone()));
        let (class, title) = if props.favorite {
            ("favorite-btn active", "Remove from favorites")
        } else {
            ("favorite-btn", "Add to favorites")
        };
        html! {
            <button class={class} title={title} onclick={toggle}>{"\u{2665}"}</button>
        }
    });

    html! {
        <article class="org-card">
            <header class="org-card-header">
                <h3>{&org.name}</h3>
                {favorite_button.unwrap_or_default()}
            </header>
            {if location.is_empty() { html!{} } else { html! { <p class="org-location">{location}</p> }}}
            {org.category_name.clone().map(|category| html! {
                <span class="pill category">{category}</span>
            }).unwrap_or_default()}
            <div class="org-badges">
                {if org.is_public_charity { html! { <span class="badge verified">{"Verified 501(c)(3)"}</span> }} else { html!{} }}
                {if org.is_tax_deductible { html! { <span class="badge deductible">{"Tax Deductible"}</span> }} else { html!{} }}
            </div>
            {if props.show_full_details { html! {
                <dl class="org-details">
                    {if has_revenue { html! { <>
                        <dt>{"Annual Revenue"}</dt>
                        <dd>{format_currency(org.revenue_amount)}</dd>
                    </> }} else { html!{} }}
                    <dt>{"EIN"}</dt>
                    <dd>{format_ein(&org.ein)}</dd>
                    {if address.is_empty() { html!{} } else { html! { <>
                        <dt>{"Address"}</dt>
                        <dd>{address}</dd>
                    </> }}}
                </dl>
            }} else { html!{} }}
            <footer class="org-card-actions">
                <Link<Route> classes="ghost" to={Route::OrganizationDetail { ein: org.ein.clone() }}>
                    {"View Details"}
                </Link<Route>>
                <a
                    class="solid"
                    href={format!("https://www.guidestar.org/profile/{}", org.ein)}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"Donate Now"}
                </a>
            </footer>
        </article>
    }
}
