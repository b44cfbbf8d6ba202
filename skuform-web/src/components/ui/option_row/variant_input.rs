use crate::components::icon::Icon;
use crate::dom;
use crate::i18n::t;
use skuform_core::VariantFeedback;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub input_id: AttrValue,
    pub draft: AttrValue,
    pub feedback: VariantFeedback,
    pub on_draft: Callback<String>,
    pub on_add: Callback<()>,
}

#[function_component(VariantInput)]
pub fn variant_input(p: &Props) -> Html {
    let oninput = {
        let cb = p.on_draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = dom::input_value(&e) {
                cb.emit(value);
            }
        })
    };
    let onkeydown = {
        let cb = p.on_add.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };
    let onclick = {
        let cb = p.on_add.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let error_id = format!("{}-error", p.input_id);
    let invalid = if p.feedback.duplicate { "true" } else { "false" };

    html! {
        <div class="variant-input">
            <input
                id={p.input_id.clone()}
                type="text"
                placeholder={t("variant.placeholder")}
                aria-label={t("variant.placeholder")}
                value={p.draft.clone()}
                aria-invalid={invalid}
                aria-describedby={error_id.clone()}
                {oninput}
                {onkeydown}
            />
            <button type="button" class="add-variant" disabled={!p.feedback.can_add} {onclick}>
                <span class={Icon::Add.class()} aria-hidden="true">{ Icon::Add.glyph() }</span>
                { t("variant.add") }
            </button>
            if p.feedback.duplicate {
                <p id={error_id} class="error" role="alert">{ t("variant.exists") }</p>
            }
        </div>
    }
}
