use super::{OptionRow, Props, VariantInput, VariantTags, rename_error_message};
use futures::executor::block_on;
use skuform_core::{
    CREATE_OWN, CUSTOM_TEXT, EditorConfig, GroupKind, OptionChoice, OptionGroup, ProductOption,
    RenameError, RowPhase, VariantFeedback, VariantList, catalog,
};
use yew::{Callback, LocalServerRenderer};

fn option_named(name: &str, variants: &[&str]) -> ProductOption {
    let mut group = OptionGroup::new(GroupKind::Regular);
    let id = group.append();
    if !name.is_empty() {
        let choice =
            OptionChoice::from_label(name, &EditorConfig::default_config()).unwrap_or(OptionChoice::CreateOwn);
        group.choose_type(id, &choice).unwrap();
        if choice == OptionChoice::CreateOwn && name != CREATE_OWN {
            group.rename(id, name).unwrap();
        }
    }
    for value in variants {
        group.add_variant(id, value).unwrap();
    }
    group.get(id).unwrap().clone()
}

fn props(option: ProductOption) -> Props {
    Props {
        group: GroupKind::Regular,
        position: 0,
        option,
        choices: catalog(&EditorConfig::default_config()),
        max_character_limit: Some(255),
        on_action: Callback::noop(),
    }
}

fn render(option: ProductOption) -> String {
    crate::i18n::set_lang("en");
    block_on(LocalServerRenderer::<OptionRow>::with_props(props(option)).render())
}

#[test]
fn unset_row_shows_type_selector() {
    let html = render(option_named("", &[]));
    assert!(html.contains("type-select"), "selector missing: {html}");
    assert!(html.contains("Choose an Option"));
    assert!(html.contains("Create my own option"));
    assert!(!html.contains("variant-input"));
}

#[test]
fn preset_row_shows_name_and_variant_controls() {
    let html = render(option_named("Color", &["Red", "Blue"]));
    assert!(html.contains("option-name"));
    assert!(html.contains("variant-input"));
    assert!(html.contains("Red") && html.contains("Blue"));
    assert!(!html.contains("rename-button"), "presets cannot be renamed: {html}");
}

#[test]
fn create_own_row_mounts_in_rename_mode() {
    let html = render(option_named(CREATE_OWN, &[]));
    assert!(html.contains("rename-input"), "rename editor missing: {html}");
    assert!(html.contains("Press Enter to save"));
    assert!(!html.contains("variant-input"));
}

#[test]
fn custom_row_offers_rename() {
    let html = render(option_named("Monogram", &["Gold"]));
    assert!(html.contains("rename-button"));
    assert!(html.contains("Gold"));
}

#[test]
fn custom_text_row_shows_field_inputs() {
    let html = render(option_named("Custom Text", &[]));
    assert!(html.contains("custom-text-fields"));
    assert!(html.contains("Field Name"));
    assert!(html.contains("Character Limit"));
    assert!(!html.contains("variant-input"));
}

#[test]
fn variant_input_flags_duplicates() {
    crate::i18n::set_lang("en");
    let props = super::variant_input::Props {
        input_id: "v".into(),
        draft: "Red".into(),
        feedback: VariantFeedback {
            can_add: false,
            duplicate: true,
        },
        on_draft: Callback::noop(),
        on_add: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<VariantInput>::with_props(props).render());
    assert!(html.contains("This variant already exists."));
    assert!(html.contains("disabled"));
}

#[test]
fn variant_tags_render_nothing_when_empty() {
    let props = super::variant_tags::Props {
        option_name: "Color".into(),
        variants: VariantList::new(),
        on_remove: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<VariantTags>::with_props(props).render());
    assert!(!html.contains("variant-tags"));
}

#[test]
fn reserved_names_get_an_inline_message() {
    crate::i18n::set_lang("en");
    for label in [CUSTOM_TEXT, CREATE_OWN] {
        let message = rename_error_message(&RenameError::ReservedName(label.to_string()))
            .expect("reserved names are shown to the user");
        assert_eq!(
            message.as_str(),
            format!("\"{label}\" is an option type and cannot be used as a name.")
        );
    }
    assert!(rename_error_message(&RenameError::NotRenamable).is_none());
}

#[test]
fn name_cell_renders_reserved_name_error() {
    crate::i18n::set_lang("en");
    let props = super::name_cell::Props {
        input_id: "row-name".into(),
        name: "Size".into(),
        phase: RowPhase::Renaming,
        can_rename: true,
        draft: CUSTOM_TEXT.into(),
        error: rename_error_message(&RenameError::ReservedName(CUSTOM_TEXT.to_string())),
        on_begin: Callback::noop(),
        on_draft: Callback::noop(),
        on_commit: Callback::noop(),
        on_cancel: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<super::NameCell>::with_props(props).render());
    assert!(html.contains("role=\"alert\""), "{html}");
    assert!(html.contains("is an option type and cannot be used as a name."), "{html}");
}
