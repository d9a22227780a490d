use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ChipStripProps {
    pub heading: AttrValue,
    pub terms: Vec<String>,
    pub on_pick: Callback<String>,
}

/// Row of tappable search terms, hidden entirely when there are none.
#[function_component(ChipStrip)]
pub(crate) fn chip_strip(props: &ChipStripProps) -> Html {
    if props.terms.is_empty() {
        return html! {};
    }

    html! {
        <div class="chip-strip">
            <h4>{props.heading.clone()}</h4>
            <div class="chips">
                { for props.terms.iter().map(|term| {
                    let on_pick = props.on_pick.clone();
                    let picked = term.clone();
                    let onclick = Callback::from(move |_| on_pick.emit(picked.clone()));
                    html! {
                        <button key={term.clone()} class="chip" onclick={onclick}>
                            {term.clone()}
                        </button>
                    }
                }) }
            </div>
        </div>
    }
}
