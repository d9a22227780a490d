//! Debounced text input for search and filter fields.
//!
//! # Design
//! - Keep local input state for immediate typing feedback.
//! - Emit debounced values to the caller for shared state updates.
//! - Enter skips the debounce and fires the submit callback.

use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SearchBoxProps {
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or(300)]
    pub debounce_ms: u32,
    #[prop_or_default]
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub on_submit: Callback<String>,
}

#[function_component(SearchBox)]
pub(crate) fn search_box(props: &SearchBoxProps) -> Html {
    let value_state = use_state(|| props.value.to_string());
    let debounce = props.debounce_ms;
    let timer = use_mut_ref(|| None as Option<Timeout>);

    {
        let value_state = value_state.clone();
        let incoming = props.value.clone();
        use_effect_with_deps(
            move |incoming| {
                let next = incoming.to_string();
                if *value_state != next {
                    value_state.set(next);
                }
                || ()
            },
            incoming,
        );
    }

    let oninput = {
        let on_change = props.on_change.clone();
        let value_state = value_state.clone();
        let timer = timer.clone();
        Callback::from(move |next: String| {
            value_state.set(next.clone());
            if debounce == 0 {
                on_change.emit(next);
                return;
            }
            if let Some(timeout) = timer.borrow_mut().take() {
                drop(timeout);
            }
            let on_change = on_change.clone();
            *timer.borrow_mut() = Some(Timeout::new(debounce, move || {
                on_change.emit(next);
            }));
        })
    };

    let onkeydown = {
        let on_submit = props.on_submit.clone();
        let timer = timer.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() != "Enter" {
                return;
            }
            if let Some(timeout) = timer.borrow_mut().take() {
                drop(timeout);
            }
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                on_submit.emit(input.value());
            }
        })
    };

    html! {
        <label class="search-box">
            <input
                type="search"
                placeholder={props.placeholder.clone()}
                value={AttrValue::from((*value_state).clone())}
                aria-label={props.aria_label.clone()}
                oninput={Callback::from(move |event: InputEvent| {
                    if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                        oninput.emit(input.value());
                    }
                })}
                onkeydown={onkeydown}
            />
        </label>
    }
}
