//! Organization detail page.

use goodseek_api_models::{Organization, VerificationReport};
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_selector;

use crate::app::api::ApiCtx;
use crate::app::routes::Route;
use crate::core::format::{format_currency, format_ein, ruling_year};
use crate::core::remote::Remote;
use crate::core::storage::{BrowserStore, is_favorite};
use crate::core::store::AppStore;
use crate::features::organizations::actions;

#[derive(Properties, PartialEq)]
pub(crate) struct OrganizationDetailPageProps {
    pub ein: AttrValue,
}

#[function_component(OrganizationDetailPage)]
pub(crate) fn organization_detail_page(props: &OrganizationDetailPageProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let slice = use_selector(|store: &AppStore| store.organizations.clone());
    let favorites = use_selector(|store: &AppStore| store.records.favorites.clone());
    let navigator = use_navigator();

    {
        let api_ctx = api_ctx.clone();
        use_effect_with_deps(
            move |ein: &AttrValue| {
                if let Some(api_ctx) = api_ctx {
                    actions::open_organization(&api_ctx.client, ein.as_str());
                }
                || ()
            },
            props.ein.clone(),
        );
    }

    let back = Callback::from(move |_| {
        if let Some(navigator) = navigator.clone() {
            navigator.push(&Route::Organizations);
        }
    });

    let body = if slice.detail.state.is_loading() {
        html! { <div class="detail-card skeleton" aria-busy="true" /> }
    } else if let Some(message) = slice.detail.state.error() {
        html! {
            <div class="panel error">
                <h3>{"Error loading organization"}</h3>
                <p>{message.to_string()}</p>
            </div>
        }
    } else if let Some(org) = slice.detail.state.ready() {
        let favorite = is_favorite(&favorites, &org.ein);
        let on_favorite = Callback::from(|ein: String| {
            actions::toggle_favorite(&BrowserStore, &ein);
        });
        detail_card(org, favorite, &on_favorite, &slice.verification.state)
    } else {
        html! {
            <div class="empty-state">
                <h3>{"Organization not found"}</h3>
                <p>{"The organization you're looking for could not be found."}</p>
            </div>
        }
    };

    html! {
        <section class="detail-page">
            <button class="ghost back" onclick={back}>{"Back to Organizations"}</button>
            {body}
        </section>
    }
}

fn detail_card(
    org: &Organization,
    favorite: bool,
    on_favorite: &Callback<String>,
    verification: &Remote<VerificationReport>,
) -> Html {
    let location = org.display_location();
    let address = org.full_address();
    let established = org
        .ruling_date
        .as_deref()
        .and_then(ruling_year)
        .map(|year| format!("Established {year}"));
    let has_financials = org.revenue_amount.is_some_and(|amount| amount != 0)
        || org.asset_amount.is_some_and(|amount| amount != 0);
    let heart = {
        let on_favorite = on_favorite.clone();
        let ein = org.ein.clone();
        let (class, title) = if favorite {
            ("favorite-btn active", "Remove from favorites")
        } else {
            ("favorite-btn", "Add to favorites")
        };
        html! {
            <button
                class={class}
                title={title}
                onclick={Callback::from(move |_| on_favorite.emit(ein.clone()))}
            >
                {"\u{2665}"}
            </button>
        }
    };

    html! {
        <article class="detail-card">
            <header class="detail-header">
                <div>
                    <h1>{&org.name}</h1>
                    <div class="org-badges">
                        {if org.verified_badge() { html! { <span class="badge verified">{"Verified 501(c)(3)"}</span> }} else { html!{} }}
                        {if org.is_tax_deductible { html! { <span class="badge deductible">{"Tax Deductible"}</span> }} else { html!{} }}
                        {org.category_name.clone().map(|category| html! {
                            <span class="pill category">{category}</span>
                        }).unwrap_or_default()}
                    </div>
                    {if location.is_empty() { html!{} } else { html! { <p class="org-location">{location}</p> }}}
                </div>
                <div class="detail-actions">
                    {heart}
                    <a
                        class="solid"
                        href={format!("https://www.guidestar.org/profile/{}", org.ein)}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"Donate Now"}
                    </a>
                </div>
            </header>

            <div class="detail-columns">
                <div class="detail-column">
                    <h3>{"Organization Details"}</h3>
                    <dl>
                        <dt>{"EIN"}</dt>
                        <dd class="mono">{format_ein(&org.ein)}</dd>
                        {if org.is_public_charity { html! { <>
                            <dt>{"Classification"}</dt>
                            <dd>{"501(c)(3) Public Charity"}</dd>
                        </> }} else { html!{} }}
                        <dt>{"Deductibility"}</dt>
                        <dd>
                            { if org.is_tax_deductible { "Tax Deductible" } else { "Not Tax Deductible" } }
                        </dd>
                        {established.map(|line| html! { <>
                            <dt>{"Ruling Year"}</dt>
                            <dd>{line}</dd>
                        </> }).unwrap_or_default()}
                    </dl>

                    {if has_financials { html! { <>
                        <h3>{"Financial Information"}</h3>
                        <dl>
                            {if org.revenue_amount.is_some_and(|amount| amount != 0) { html! { <>
                                <dt>{"Annual Revenue"}</dt>
                                <dd>{format_currency(org.revenue_amount)}</dd>
                            </> }} else { html!{} }}
                            {if org.asset_amount.is_some_and(|amount| amount != 0) { html! { <>
                                <dt>{"Total Assets"}</dt>
                                <dd>{format_currency(org.asset_amount)}</dd>
                            </> }} else { html!{} }}
                        </dl>
                    </> }} else { html!{} }}
                </div>

                <div class="detail-column">
                    {if address.is_empty() { html!{} } else { html! { <>
                        <h3>{"Contact Information"}</h3>
                        <p class="address">{address}</p>
                    </> }}}
                    <h3>{"Additional Information"}</h3>
                    <dl>
                        {org.ntee_code.clone().map(|code| html! { <>
                            <dt>{"NTEE Code"}</dt>
                            <dd class="mono">{code}</dd>
                        </> }).unwrap_or_default()}
                        {org.status.map(|status| html! { <>
                            <dt>{"Status"}</dt>
                            <dd>{ if status == 1 { "Active" } else { "Inactive" } }</dd>
                        </> }).unwrap_or_default()}
                        {org.revenue_range.clone().map(|range| html! { <>
                            <dt>{"Revenue Range"}</dt>
                            <dd>{range}</dd>
                        </> }).unwrap_or_default()}
                    </dl>
                    {verification_panel(verification)}
                </div>
            </div>

            <footer class="detail-footer">
                <span class="muted">{"Data sourced from the IRS Business Master File"}</span>
                {org.last_updated.clone().map(|updated| html! {
                    <span class="muted">{format!("Last updated: {updated}")}</span>
                }).unwrap_or_default()}
            </footer>
        </article>
    }
}

fn verification_panel(verification: &Remote<VerificationReport>) -> Html {
    let (tone, line) = match verification {
        Remote::Idle | Remote::Loading => ("pending", "Checking IRS records...".to_string()),
        Remote::Failed(message) => ("warn", format!("Verification unavailable: {message}")),
        Remote::Ready(report) => verification_line(report),
    };

    html! {
        <div class={classes!("panel", "verification", tone)}>
            <h3>{"IRS Verification"}</h3>
            <p>{line}</p>
        </div>
    }
}

fn verification_line(report: &VerificationReport) -> (&'static str, String) {
    if let Some(message) = report.message.clone().filter(|message| !message.is_empty()) {
        let tone = if report.verified { "ok" } else { "warn" };
        return (tone, message);
    }
    if report.verified {
        (
            "ok",
            "Verified 501(c)(3) public charity in good standing".to_string(),
        )
    } else if report.exists {
        (
            "warn",
            "Registered with the IRS, but not verified as tax-deductible".to_string(),
        )
    } else {
        ("warn", "No IRS record found for this EIN".to_string())
    }
}
