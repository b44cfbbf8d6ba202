
use crate::components::icon::Icon;
use crate::components::ui::option_row::OptionRow;
use crate::i18n::t;
use skuform_core::{EditorConfig, FormAction, GroupKind, OptionGroup};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub group: OptionGroup,
    pub config: EditorConfig,
    pub on_edit: Callback<(GroupKind, FormAction)>,
}

/// One section of the form: its rows plus the add button.
#[function_component(OptionGroupPanel)]
pub fn option_group_panel(p: &Props) -> Html {
    let kind = p.group.kind();
    let on_action = {
        let cb = p.on_edit.clone();
        Callback::from(move |action: FormAction| cb.emit((kind, action)))
    };
    let on_append = {
        let cb = on_action.clone();
        Callback::from(move |_: MouseEvent| cb.emit(FormAction::AppendOption))
    };
    let choices = p.group.offerable_choices(&p.config);
    let heading_id = format!("{}-heading", kind.key());

    html! {
        <section class={classes!("option-group", kind.key())} aria-labelledby={heading_id.clone()}>
            <h2 id={heading_id}>{ t(&format!("group.{}.title", kind.key())) }</h2>
            if p.group.is_empty() {
                <p class="empty">{ t("group.empty") }</p>
            } else {
                <ol class="option-list">
                    { for p.group.iter().enumerate().map(|(position, option)| html! {
                        <OptionRow
                            key={option.id.0}
                            group={kind}
                            {position}
                            option={option.clone()}
                            choices={choices.clone()}
                            max_character_limit={p.config.max_character_limit}
                            on_action={on_action.clone()}
                        />
                    }) }
                </ol>
            }
            <button type="button" class="add-option" onclick={on_append}>
                <span class={Icon::Add.class()} aria-hidden="true">{ Icon::Add.glyph() }</span>
                { t("group.add") }
            </button>
        </section>
    }
}
