use crate::components::icon::{Icon, IconButton};
use crate::i18n::tr;
use skuform_core::VariantList;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub option_name: AttrValue,
    pub variants: VariantList,
    pub on_remove: Callback<usize>,
}

#[function_component(VariantTags)]
pub fn variant_tags(p: &Props) -> Html {
    if p.variants.is_empty() {
        return html! {};
    }
    let list_label = {
        let mut m = BTreeMap::new();
        m.insert("name", p.option_name.as_str());
        tr("variant.list", Some(&m))
    };
    html! {
        <ul class="variant-tags" aria-label={list_label}>
            { for p.variants.iter().enumerate().map(|(index, variant)| {
                let label = {
                    let mut m = BTreeMap::new();
                    m.insert("value", variant.value.as_str());
                    tr("variant.remove", Some(&m))
                };
                let on_click = {
                    let cb = p.on_remove.clone();
                    Callback::from(move |()| cb.emit(index))
                };
                html! {
                    <li class="tag" key={format!("{index}:{}", variant.value)}>
                        <span class="tag-label">{ variant.value.clone() }</span>
                        <IconButton icon={Icon::DeleteTag} label={label} {on_click} />
                    </li>
                }
            }) }
        </ul>
    }
}
