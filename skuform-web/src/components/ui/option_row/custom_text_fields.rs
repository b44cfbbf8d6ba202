use crate::dom;
use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub id_prefix: AttrValue,
    pub field_name: AttrValue,
    pub character_limit: AttrValue,
    #[prop_or_default]
    pub max_character_limit: Option<u32>,
    pub on_field_name: Callback<String>,
    pub on_character_limit: Callback<String>,
}

fn forward_input(cb: &Callback<String>) -> Callback<InputEvent> {
    let cb = cb.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(value) = dom::input_value(&e) {
            cb.emit(value);
        }
    })
}

#[function_component(CustomTextFields)]
pub fn custom_text_fields(p: &Props) -> Html {
    let name_id = format!("{}-field-name", p.id_prefix);
    let limit_id = format!("{}-character-limit", p.id_prefix);
    let max = p.max_character_limit.map(|max| max.to_string());

    html! {
        <div class="custom-text-fields">
            <div class="field">
                <label for={name_id.clone()}>{ t("custom_text.field_name") }</label>
                <input
                    id={name_id}
                    type="text"
                    value={p.field_name.clone()}
                    oninput={forward_input(&p.on_field_name)}
                />
            </div>
            <div class="field">
                <label for={limit_id.clone()}>{ t("custom_text.character_limit") }</label>
                <input
                    id={limit_id}
                    type="number"
                    min="1"
                    max={max}
                    value={p.character_limit.clone()}
                    oninput={forward_input(&p.on_character_limit)}
                />
            </div>
        </div>
    }
}
