use crate::dom;
use crate::i18n::t;
use skuform_core::RowPhase;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub input_id: AttrValue,
    pub name: AttrValue,
    pub phase: RowPhase,
    pub can_rename: bool,
    pub draft: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_begin: Callback<()>,
    pub on_draft: Callback<String>,
    pub on_commit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(NameCell)]
pub fn name_cell(p: &Props) -> Html {
    if p.phase != RowPhase::Renaming {
        let begin = {
            let cb = p.on_begin.clone();
            Callback::from(move |_: MouseEvent| cb.emit(()))
        };
        return html! {
            <div class="name-cell">
                <span class="option-name">{ p.name.clone() }</span>
                if p.can_rename {
                    <button type="button" class="link-button rename-button" onclick={begin}>{ t("option.rename") }</button>
                }
            </div>
        };
    }

    let oninput = {
        let cb = p.on_draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(value) = dom::input_value(&e) {
                cb.emit(value);
            }
        })
    };
    let onkeydown = {
        let commit = p.on_commit.clone();
        let cancel = p.on_cancel.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "Enter" => {
                e.prevent_default();
                commit.emit(());
            }
            "Escape" => cancel.emit(()),
            _ => {}
        })
    };
    let hint_id = format!("{}-hint", p.input_id);
    let invalid = if p.error.is_some() { "true" } else { "false" };

    html! {
        <div class="name-cell renaming">
            <label for={p.input_id.clone()} class="sr-only">{ t("option.name_label") }</label>
            <input
                id={p.input_id.clone()}
                type="text"
                class="rename-input"
                placeholder={t("option.name_placeholder")}
                value={p.draft.clone()}
                aria-describedby={hint_id.clone()}
                aria-invalid={invalid}
                {oninput}
                {onkeydown}
            />
            <p id={hint_id} class="hint">{ t("option.rename_hint") }</p>
            if let Some(error) = p.error.clone() {
                <p class="error" role="alert">{ error }</p>
            }
        </div>
    }
}
