pub mod custom_text_fields;
pub mod name_cell;
pub mod type_select;
pub mod variant_input;
pub mod variant_tags;
#[cfg(test)]
mod tests;

pub use custom_text_fields::CustomTextFields;
pub use name_cell::NameCell;
pub use type_select::TypeSelect;
pub use variant_input::VariantInput;
pub use variant_tags::VariantTags;

use crate::components::icon::{Icon, IconButton};
use crate::i18n::{t, tr};
use skuform_core::{
    FormAction, GroupKind, OptionChoice, OptionKind, ProductOption, RenameError, RowEditor,
    RowPhase,
};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub group: GroupKind,
    pub position: usize,
    pub option: ProductOption,
    pub choices: Vec<OptionChoice>,
    #[prop_or_default]
    pub max_character_limit: Option<u32>,
    pub on_action: Callback<FormAction>,
}

/// Row editor state, seeded from the option so a row that mounts on the
/// create-your-own sentinel opens straight into renaming.
fn seeded_editor(option: &ProductOption) -> RowEditor {
    let mut editor = RowEditor::new();
    editor.observe(option);
    editor
}

/// Inline message for a refused rename; `None` when the row just logs it.
#[must_use]
pub fn rename_error_message(err: &RenameError) -> Option<AttrValue> {
    match err {
        RenameError::EmptyName => Some(AttrValue::from(t("option.rename_empty"))),
        RenameError::ReservedName(name) => {
            let mut args = BTreeMap::new();
            args.insert("name", name.as_str());
            Some(AttrValue::from(tr("option.rename_reserved", Some(&args))))
        }
        RenameError::NotRenamable => None,
    }
}

const fn phase_class(phase: RowPhase) -> &'static str {
    match phase {
        RowPhase::Unset => "unset",
        RowPhase::Named => "named",
        RowPhase::Renaming => "renaming",
    }
}

#[function_component(OptionRow)]
pub fn option_row(p: &Props) -> Html {
    let editor = use_state(|| seeded_editor(&p.option));
    let rename_error = use_state(|| None::<AttrValue>);

    {
        let editor = editor.clone();
        use_effect_with(p.option.clone(), move |option| {
            let mut next = (*editor).clone();
            next.observe(option);
            if next != *editor {
                editor.set(next);
            }
        });
    }

    let id = p.option.id;
    let row_id = format!("{}-option-{}", p.group.key(), id.0);
    let name_input_id = format!("{row_id}-name");
    let phase = editor.phase(&p.option);

    {
        let name_input_id = name_input_id.clone();
        use_effect_with(phase, move |phase| {
            if cfg!(target_arch = "wasm32") && *phase == RowPhase::Renaming {
                crate::dom::focus_element(&name_input_id);
            }
        });
    }

    let emit = |action: FormAction| {
        let cb = p.on_action.clone();
        Callback::from(move |()| cb.emit(action.clone()))
    };

    let on_choose = {
        let cb = p.on_action.clone();
        Callback::from(move |choice: OptionChoice| cb.emit(FormAction::ChooseType { id, choice }))
    };
    let on_begin_rename = {
        let editor = editor.clone();
        let rename_error = rename_error.clone();
        let option = p.option.clone();
        Callback::from(move |()| {
            let mut next = (*editor).clone();
            match next.begin_rename(&option) {
                Ok(()) => {
                    rename_error.set(None);
                    editor.set(next);
                }
                Err(err) => log::debug!("option {id}: {err}"),
            }
        })
    };
    let on_rename_draft = {
        let editor = editor.clone();
        Callback::from(move |value: String| {
            let mut next = (*editor).clone();
            next.set_rename_draft(value);
            editor.set(next);
        })
    };
    let on_commit_rename = {
        let editor = editor.clone();
        let rename_error = rename_error.clone();
        let cb = p.on_action.clone();
        Callback::from(move |()| {
            let mut next = (*editor).clone();
            match next.commit_rename() {
                Ok(name) => {
                    rename_error.set(None);
                    editor.set(next);
                    cb.emit(FormAction::Rename { id, name });
                }
                Err(err) => {
                    log::debug!("option {id}: rename refused: {err}");
                    if let Some(message) = rename_error_message(&err) {
                        rename_error.set(Some(message));
                    }
                }
            }
        })
    };
    let on_cancel_rename = {
        let editor = editor.clone();
        let rename_error = rename_error.clone();
        Callback::from(move |()| {
            let mut next = (*editor).clone();
            next.cancel_rename();
            rename_error.set(None);
            editor.set(next);
        })
    };
    let on_variant_draft = {
        let editor = editor.clone();
        Callback::from(move |value: String| {
            let mut next = (*editor).clone();
            next.set_variant_draft(value);
            editor.set(next);
        })
    };
    let on_add_variant = {
        let editor = editor.clone();
        let option = p.option.clone();
        let cb = p.on_action.clone();
        Callback::from(move |()| {
            let mut next = (*editor).clone();
            match next.take_variant(&option) {
                Ok(value) => {
                    editor.set(next);
                    cb.emit(FormAction::AddVariant { id, value });
                }
                Err(err) => log::debug!("option {id}: variant not added: {err}"),
            }
        })
    };
    let on_remove_variant = {
        let cb = p.on_action.clone();
        Callback::from(move |index: usize| cb.emit(FormAction::RemoveVariant { id, index }))
    };
    let on_field_name = {
        let cb = p.on_action.clone();
        Callback::from(move |value: String| cb.emit(FormAction::SetCustomFieldName { id, value }))
    };
    let on_character_limit = {
        let cb = p.on_action.clone();
        Callback::from(move |value: String| cb.emit(FormAction::SetCharacterLimit { id, value }))
    };

    let head = if phase == RowPhase::Unset {
        html! {
            <TypeSelect select_id={format!("{row_id}-type")} choices={p.choices.clone()} {on_choose} />
        }
    } else {
        html! {
            <NameCell
                input_id={name_input_id}
                name={p.option.name.clone()}
                {phase}
                can_rename={p.option.can_rename()}
                draft={editor.rename_draft().to_string()}
                error={(*rename_error).clone()}
                on_begin={on_begin_rename}
                on_draft={on_rename_draft}
                on_commit={on_commit_rename}
                on_cancel={on_cancel_rename}
            />
        }
    };

    let body = match p.option.kind() {
        OptionKind::Variants => html! {
            <div class="variants">
                <VariantInput
                    input_id={format!("{row_id}-variant")}
                    draft={editor.variant_draft().to_string()}
                    feedback={editor.variant_feedback(&p.option)}
                    on_draft={on_variant_draft}
                    on_add={on_add_variant}
                />
                <VariantTags
                    option_name={p.option.name.clone()}
                    variants={p.option.variants.clone()}
                    on_remove={on_remove_variant}
                />
            </div>
        },
        OptionKind::CustomText => html! {
            <CustomTextFields
                id_prefix={row_id.clone()}
                field_name={p.option.custom_field_name.clone()}
                character_limit={p.option.custom_character_limit.clone()}
                max_character_limit={p.max_character_limit}
                {on_field_name}
                {on_character_limit}
            />
        },
        OptionKind::Unset | OptionKind::AwaitingName => html! {},
    };

    html! {
        <li id={row_id.clone()} class={classes!("option-row", phase_class(phase))}>
            <div class="row-head">
                { head }
                <div class="row-tools">
                    <IconButton
                        icon={Icon::Move}
                        label={t("option.move")}
                        disabled={p.position == 0}
                        on_click={emit(FormAction::MoveUp { id })}
                    />
                    <IconButton
                        icon={Icon::Copy}
                        label={t("option.duplicate")}
                        on_click={emit(FormAction::DuplicateOption { id })}
                    />
                    <button
                        type="button"
                        class="delete-button"
                        onclick={{
                            let cb = p.on_action.clone();
                            Callback::from(move |_: MouseEvent| cb.emit(FormAction::RemoveOption { id }))
                        }}
                    >
                        { t("option.delete") }
                    </button>
                </div>
            </div>
            { body }
        </li>
    }
}
