//! Search filter controls: state, category, and city.

use crate::components::search_box::SearchBox;
use crate::features::search::state::US_STATES;
use goodseek_api_models::Category;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct FilterPanelProps {
    #[prop_or_default]
    pub state_value: AttrValue,
    #[prop_or_default]
    pub category_value: AttrValue,
    #[prop_or_default]
    pub city_value: AttrValue,
    /// Category options from the catalog; empty until it loads.
    #[prop_or_default]
    pub categories: Vec<Category>,
    #[prop_or_default]
    pub on_state_change: Callback<String>,
    #[prop_or_default]
    pub on_category_change: Callback<String>,
    #[prop_or_default]
    pub on_city_change: Callback<String>,
    #[prop_or_default]
    pub on_clear: Callback<()>,
    /// Whether anything is set that the clear button could reset.
    #[prop_or_default]
    pub show_clear: bool,
}

#[function_component(FilterPanel)]
pub(crate) fn filter_panel(props: &FilterPanelProps) -> Html {
    let on_state = select_callback(&props.on_state_change);
    let on_category = select_callback(&props.on_category_change);
    let on_clear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_| on_clear.emit(()))
    };

    html! {
        <section class="filter-panel">
            <div class="filter-field">
                <label>{"State"}</label>
                <select onchange={on_state}>
                    <option value="" selected={props.state_value.is_empty()}>
                        {"All States"}
                    </option>
                    { for US_STATES.iter().map(|(code, name)| html! {
                        <option value={*code} selected={props.state_value.as_str() == *code}>
                            { format!("{name} ({code})") }
                        </option>
                    }) }
                </select>
            </div>
            <div class="filter-field">
                <label>{"Category"}</label>
                <select onchange={on_category}>
                    <option value="" selected={props.category_value.is_empty()}>
                        {"All Categories"}
                    </option>
                    { for props.categories.iter().map(|category| html! {
                        <option
                            value={category.code.clone()}
                            selected={props.category_value.as_str() == category.code}>
                            { category.name.clone() }
                        </option>
                    }) }
                </select>
            </div>
            <div class="filter-field">
                <label>{"City"}</label>
                <SearchBox
                    value={props.city_value.clone()}
                    placeholder="Enter city name"
                    aria_label="City filter"
                    on_change={props.on_city_change.clone()}
                />
            </div>
            {if props.show_clear { html! {
                <button class="filter-clear" onclick={on_clear}>
                    {"Clear All Filters"}
                </button>
            }} else { html!{} }}
        </section>
    }
}

fn select_callback(target: &Callback<String>) -> Callback<Event> {
    let target = target.clone();
    Callback::from(move |event: Event| {
        if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
            target.emit(select.value());
        }
    })
}
