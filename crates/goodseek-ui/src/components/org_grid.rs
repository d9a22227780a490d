use goodseek_api_models::Organization;
use yew::prelude::*;

use super::org_card::OrgCard;
use crate::core::storage::is_favorite;

const SKELETON_CARDS: usize = 6;

#[derive(Properties, PartialEq)]
pub(crate) struct OrgGridProps {
    pub organizations: Vec<Organization>,
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub favorites: Vec<String>,
    #[prop_or_default]
    pub on_favorite: Option<Callback<String>>,
    #[prop_or_default]
    pub show_full_details: bool,
    #[prop_or(AttrValue::Static("No organizations found"))]
    pub empty_title: AttrValue,
    #[prop_or(AttrValue::Static("Try adjusting your search criteria"))]
    pub empty_hint: AttrValue,
}

#[function_component(OrgGrid)]
pub(crate) fn org_grid(props: &OrgGridProps) -> Html {
    if props.loading {
        return html! {
            <div class="org-grid" aria-busy="true">
                { for (0..SKELETON_CARDS).map(|index| html! {
                    <div key={index} class="org-card skeleton" />
                }) }
            </div>
        };
    }

    if props.organizations.is_empty() {
        return html! {
            <div class="empty-state">
                <h3>{props.empty_title.clone()}</h3>
                {if props.empty_hint.is_empty() { html!{} } else { html! { <p>{props.empty_hint.clone()}</p> }}}
            </div>
        };
    }

    html! {
        <div class="org-grid">
            { for props.organizations.iter().map(|org| {
                let favorite = is_favorite(&props.favorites, &org.ein);
                html! {
                    <OrgCard
                        key={org.ein.clone()}
                        organization={org.clone()}
                        favorite={favorite}
                        on_favorite={props.on_favorite.clone()}
                        show_full_details={props.show_full_details}
                    />
                }
            }) }
        </div>
    }
}
