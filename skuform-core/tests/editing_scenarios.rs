use std::collections::BTreeSet;

use skuform_core::{
    AddVariantError, CREATE_OWN, CUSTOM_TEXT, EditError, EditorConfig, FormAction, FormEvent,
    GroupKind, OptionChoice, OptionId, RowEditor, RowPhase, VariationForm,
};

fn preset(name: &str) -> OptionChoice {
    OptionChoice::Preset(name.to_string())
}

fn append(form: &mut VariationForm, kind: GroupKind) -> OptionId {
    match form.apply(kind, FormAction::AppendOption) {
        Ok(FormEvent::Appended(id)) => id,
        other => panic!("unexpected append result: {other:?}"),
    }
}

fn option_with(form: &mut VariationForm, name: &str, variants: &[&str]) -> OptionId {
    let id = append(form, GroupKind::Regular);
    form.apply(
        GroupKind::Regular,
        FormAction::ChooseType {
            id,
            choice: preset(name),
        },
    )
    .unwrap();
    for value in variants {
        form.apply(
            GroupKind::Regular,
            FormAction::AddVariant {
                id,
                value: (*value).to_string(),
            },
        )
        .unwrap();
    }
    id
}

fn values(form: &VariationForm, id: OptionId) -> Vec<String> {
    form.group(GroupKind::Regular)
        .get(id)
        .unwrap()
        .variants
        .iter()
        .map(|v| v.value.clone())
        .collect()
}

#[test]
fn duplicate_variant_is_rejected_then_distinct_value_appends() {
    let mut form = VariationForm::default();
    let color = option_with(&mut form, "Color", &["Red", "Blue"]);
    let mut row = RowEditor::new();
    let option = form.group(GroupKind::Regular).get(color).unwrap().clone();

    row.set_variant_draft("Red");
    assert!(row.variant_feedback(&option).duplicate);
    assert_eq!(
        row.take_variant(&option),
        Err(AddVariantError::DuplicateValue("Red".into()))
    );
    assert_eq!(values(&form, color), vec!["Red", "Blue"]);

    row.set_variant_draft("Green");
    let value = row.take_variant(&option).unwrap();
    form.apply(GroupKind::Regular, FormAction::AddVariant { id: color, value })
        .unwrap();
    assert_eq!(values(&form, color), vec!["Red", "Blue", "Green"]);
    assert_eq!(row.variant_draft(), "");
}

#[test]
fn duplicate_option_appends_custom_copy() {
    let mut form = VariationForm::default();
    let color = option_with(&mut form, "Color", &[]);
    form.apply(GroupKind::Regular, FormAction::DuplicateOption { id: color })
        .unwrap();

    let group = form.group(GroupKind::Regular);
    assert_eq!(group.len(), 2);
    let original = &group.options()[0];
    assert_eq!(original.name, "Color");
    assert!(!original.is_custom && !original.is_duplicate);
    let copy = &group.options()[1];
    assert_eq!(copy.name, "Color Duplicate");
    assert!(copy.is_custom && copy.is_duplicate);
}

#[test]
fn duplicate_captures_variants_at_call_time() {
    let mut form = VariationForm::default();
    let color = option_with(&mut form, "Color", &["Red"]);
    form.apply(
        GroupKind::Regular,
        FormAction::AddVariant {
            id: color,
            value: "Blue".into(),
        },
    )
    .unwrap();
    let FormEvent::Duplicated { copy, .. } = form
        .apply(GroupKind::Regular, FormAction::DuplicateOption { id: color })
        .unwrap()
    else {
        panic!("expected duplicate event");
    };
    form.apply(
        GroupKind::Regular,
        FormAction::RemoveVariant {
            id: color,
            index: 0,
        },
    )
    .unwrap();
    assert_eq!(values(&form, color), vec!["Blue"]);
    assert_eq!(values(&form, copy), vec!["Red", "Blue"]);
}

#[test]
fn create_own_opens_rename_before_variants() {
    let mut form = VariationForm::default();
    let id = append(&mut form, GroupKind::Personalized);
    let mut row = RowEditor::new();
    assert_eq!(
        row.phase(form.group(GroupKind::Personalized).get(id).unwrap()),
        RowPhase::Unset
    );

    form.apply(
        GroupKind::Personalized,
        FormAction::ChooseType {
            id,
            choice: OptionChoice::CreateOwn,
        },
    )
    .unwrap();
    let option = form.group(GroupKind::Personalized).get(id).unwrap().clone();
    row.observe(&option);
    assert_eq!(row.phase(&option), RowPhase::Renaming);
    assert_eq!(
        form.apply(
            GroupKind::Personalized,
            FormAction::AddVariant {
                id,
                value: "Gold".into()
            }
        ),
        Err(EditError::AddVariant(AddVariantError::NotAcceptingVariants))
    );

    row.set_rename_draft("Monogram");
    let name = row.commit_rename().unwrap();
    form.apply(GroupKind::Personalized, FormAction::Rename { id, name })
        .unwrap();
    let option = form.group(GroupKind::Personalized).get(id).unwrap().clone();
    row.observe(&option);
    assert_eq!(row.phase(&option), RowPhase::Named);
    assert_eq!(option.name, "Monogram");
    assert!(option.is_custom);
    form.apply(
        GroupKind::Personalized,
        FormAction::AddVariant {
            id,
            value: "Gold".into(),
        },
    )
    .unwrap();
}

#[test]
fn exclusion_rule_holds_for_every_row() {
    let mut form = VariationForm::default();
    option_with(&mut form, "Color", &[]);
    option_with(&mut form, "Font", &[]);
    for choice in [OptionChoice::CustomText, OptionChoice::CustomText, OptionChoice::CreateOwn] {
        let id = append(&mut form, GroupKind::Regular);
        form.apply(GroupKind::Regular, FormAction::ChooseType { id, choice })
            .unwrap();
    }
    let group = form.group(GroupKind::Regular);
    let used = group.sibling_names();
    let offered: BTreeSet<String> = group
        .offerable_choices(&EditorConfig::default_config())
        .iter()
        .map(|c| c.label().to_string())
        .collect();
    for name in &used {
        if name != CUSTOM_TEXT && name != CREATE_OWN {
            assert!(!offered.contains(name), "{name} should not be offered");
        }
    }
    assert!(offered.contains(CUSTOM_TEXT));
    assert!(offered.contains(CREATE_OWN));
    assert!(offered.contains("Style"));
}

#[test]
fn removal_by_id_survives_earlier_removals() {
    let mut form = VariationForm::default();
    let color = option_with(&mut form, "Color", &[]);
    let style = option_with(&mut form, "Style", &[]);
    let font = option_with(&mut form, "Font", &[]);

    form.apply(GroupKind::Regular, FormAction::RemoveOption { id: color })
        .unwrap();
    form.apply(GroupKind::Regular, FormAction::RemoveOption { id: font })
        .unwrap();
    let names: Vec<_> = form
        .group(GroupKind::Regular)
        .iter()
        .map(|o| (o.id, o.name.clone()))
        .collect();
    assert_eq!(names, vec![(style, "Style".to_string())]);
    assert_eq!(
        form.apply(GroupKind::Regular, FormAction::RemoveOption { id: color }),
        Err(EditError::UnknownOption(color))
    );
}

#[test]
fn remove_variant_keeps_order() {
    let mut form = VariationForm::default();
    let size = option_with(&mut form, "Style", &["Slim", "Regular", "Relaxed", "Oversized"]);
    form.apply(GroupKind::Regular, FormAction::RemoveVariant { id: size, index: 2 })
        .unwrap();
    assert_eq!(values(&form, size), vec!["Slim", "Regular", "Oversized"]);
}
