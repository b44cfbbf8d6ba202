use crate::dom;
use crate::i18n::t;
use skuform_core::OptionChoice;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub select_id: AttrValue,
    /// Entries left after the exclusion rule, in catalog order.
    pub choices: Vec<OptionChoice>,
    pub on_choose: Callback<OptionChoice>,
}

#[function_component(TypeSelect)]
pub fn type_select(p: &Props) -> Html {
    let onchange = {
        let choices = p.choices.clone();
        let cb = p.on_choose.clone();
        Callback::from(move |e: Event| {
            let picked = dom::select_value(&e)
                .and_then(|value| value.parse::<usize>().ok())
                .and_then(|index| choices.get(index));
            if let Some(choice) = picked {
                cb.emit(choice.clone());
            }
        })
    };
    html! {
        <select id={p.select_id.clone()} class="type-select" aria-label={t("option.choose")} {onchange}>
            <option value="" selected=true disabled=true>{ t("option.choose") }</option>
            { for p.choices.iter().enumerate().map(|(index, choice)| html! {
                <option value={index.to_string()} class={classes!(choice.always_offered().then_some("sentinel"))}>
                    { choice.label() }
                </option>
            }) }
        </select>
    }
}
