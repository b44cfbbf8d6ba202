use std::convert::Infallible;

use anyhow::{Context, Result, anyhow, ensure};
use skuform_core::{
    AddVariantError, Ack, CREATE_OWN, CUSTOM_TEXT, ConfigSource, EditError, Editor, EditorConfig,
    FormAction, FormEvent, FormTree, GroupKind, OptionChoice, OptionId, RenameError, RowEditor,
    RowPhase, SubmitError, SubmitHandler, VariationForm,
};

use super::Scenario;

pub fn catalog_scenarios() -> Vec<Scenario> {
    vec![
        Scenario::new(
            "duplicate-variant",
            "Duplicate Variant Rejection",
            duplicate_variant_scenario,
        ),
        Scenario::new("duplicate-option", "Option Duplication", duplicate_option_scenario),
        Scenario::new("create-own", "Create Your Own Option", create_own_scenario),
        Scenario::new("exclusion-rule", "Type Exclusion Rule", exclusion_rule_scenario),
        Scenario::new("stable-ids", "Stable Option Identity", stable_ids_scenario),
        Scenario::new("rename-validation", "Rename Validation", rename_validation_scenario),
        Scenario::new("custom-text", "Custom Text Fields", custom_text_scenario),
        Scenario::new("submit-tree", "Tree Submission", submit_tree_scenario),
    ]
}

/// Hands out one fixed configuration.
#[derive(Debug, Clone)]
pub struct FixedConfig(pub EditorConfig);

impl ConfigSource for FixedConfig {
    type Error = Infallible;

    fn load_config(&self) -> Result<EditorConfig, Self::Error> {
        Ok(self.0.clone())
    }
}

/// Accepts any tree with at least one option.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckedSubmitter;

impl SubmitHandler for CheckedSubmitter {
    type Error = SubmitError;

    fn submit(&self, tree: &FormTree) -> Result<Ack, Self::Error> {
        if tree.option_count() == 0 {
            return Err(SubmitError::Rejected("the form has no options".into()));
        }
        let json = serde_json::to_string(tree)?;
        log::info!("accepted tree: {json}");
        Ok(Ack::for_tree(tree))
    }
}

fn preset(config: &EditorConfig, index: usize) -> Result<OptionChoice> {
    config
        .preset_types
        .get(index)
        .map(|name| OptionChoice::Preset(name.clone()))
        .ok_or_else(|| anyhow!("config needs at least {} preset types", index + 1))
}

fn apply(form: &mut VariationForm, kind: GroupKind, action: FormAction) -> Result<FormEvent> {
    let label = format!("{action:?}");
    form.apply(kind, action)
        .with_context(|| format!("{kind} group refused {label}"))
}

fn append(form: &mut VariationForm, kind: GroupKind) -> Result<OptionId> {
    match apply(form, kind, FormAction::AppendOption)? {
        FormEvent::Appended(id) => Ok(id),
        other => Err(anyhow!("append reported {other:?}")),
    }
}

fn typed(form: &mut VariationForm, kind: GroupKind, choice: OptionChoice) -> Result<OptionId> {
    let id = append(form, kind)?;
    apply(form, kind, FormAction::ChooseType { id, choice })?;
    Ok(id)
}

fn add_variants(form: &mut VariationForm, kind: GroupKind, id: OptionId, values: &[&str]) -> Result<()> {
    for value in values {
        apply(
            form,
            kind,
            FormAction::AddVariant {
                id,
                value: (*value).to_string(),
            },
        )?;
    }
    Ok(())
}

fn values(form: &VariationForm, kind: GroupKind, id: OptionId) -> Result<Vec<String>> {
    let option = form
        .group(kind)
        .get(id)
        .ok_or_else(|| anyhow!("option {id} missing from {kind} group"))?;
    Ok(option.variants.iter().map(|v| v.value.clone()).collect())
}

fn expect_error(
    form: &mut VariationForm,
    kind: GroupKind,
    action: FormAction,
    expected: &EditError,
) -> Result<()> {
    let label = format!("{action:?}");
    match form.apply(kind, action) {
        Err(err) if &err == expected => Ok(()),
        Err(err) => Err(anyhow!("{label} failed with {err:?}, expected {expected:?}")),
        Ok(event) => Err(anyhow!("{label} was accepted ({event:?}), expected {expected:?}")),
    }
}

fn duplicate_variant_scenario(config: &EditorConfig) -> Result<FormTree> {
    let kind = GroupKind::Regular;
    let mut form = VariationForm::new(config.clone());
    let id = typed(&mut form, kind, preset(config, 0)?)?;
    add_variants(&mut form, kind, id, &["Red", "Blue"])?;

    let option = form.group(kind).get(id).cloned().context("option vanished")?;
    let mut row = RowEditor::new();
    row.set_variant_draft("Red");
    let feedback = row.variant_feedback(&option);
    ensure!(feedback.duplicate && !feedback.can_add, "duplicate draft not flagged: {feedback:?}");
    ensure!(
        row.take_variant(&option) == Err(AddVariantError::DuplicateValue("Red".into())),
        "row accepted a duplicate variant"
    );
    expect_error(
        &mut form,
        kind,
        FormAction::AddVariant {
            id,
            value: "Red".into(),
        },
        &EditError::AddVariant(AddVariantError::DuplicateValue("Red".into())),
    )?;
    ensure!(values(&form, kind, id)? == ["Red", "Blue"], "rejected add changed the list");

    row.set_variant_draft("Green");
    let value = row.take_variant(&option).context("distinct value refused")?;
    apply(&mut form, kind, FormAction::AddVariant { id, value })?;
    ensure!(row.variant_draft().is_empty(), "pending input was not cleared");
    ensure!(
        values(&form, kind, id)? == ["Red", "Blue", "Green"],
        "unexpected variants {:?}",
        values(&form, kind, id)?
    );
    Ok(form.tree())
}

fn duplicate_option_scenario(config: &EditorConfig) -> Result<FormTree> {
    let kind = GroupKind::Regular;
    let mut form = VariationForm::new(config.clone());
    let choice = preset(config, 0)?;
    let source = typed(&mut form, kind, choice.clone())?;
    add_variants(&mut form, kind, source, &["Red"])?;

    let FormEvent::Duplicated { copy, .. } =
        apply(&mut form, kind, FormAction::DuplicateOption { id: source })?
    else {
        return Err(anyhow!("duplicate did not report a copy"));
    };
    add_variants(&mut form, kind, source, &["Blue"])?;

    let group = form.group(kind);
    ensure!(group.len() == 2, "expected 2 options, found {}", group.len());
    let original = group.get(source).context("source vanished")?;
    let duplicate = group.get(copy).context("copy vanished")?;
    ensure!(
        !original.is_custom && !original.is_duplicate,
        "source was flagged by duplication"
    );
    let expected_name = format!("{}{}", choice.label(), config.duplicate_suffix);
    ensure!(duplicate.name == expected_name, "copy named {:?}", duplicate.name);
    ensure!(duplicate.is_custom && duplicate.is_duplicate, "copy flags not set");
    ensure!(
        values(&form, kind, copy)? == ["Red"],
        "copy should keep the variants captured at duplication time"
    );
    ensure!(group.position(copy) == Some(1), "copy is not appended last");
    Ok(form.tree())
}

fn create_own_scenario(config: &EditorConfig) -> Result<FormTree> {
    let kind = GroupKind::Personalized;
    let mut form = VariationForm::new(config.clone());
    let id = typed(&mut form, kind, OptionChoice::CreateOwn)?;

    let mut row = RowEditor::new();
    let option = form.group(kind).get(id).cloned().context("option vanished")?;
    row.observe(&option);
    ensure!(row.phase(&option) == RowPhase::Renaming, "rename editor did not open");
    expect_error(
        &mut form,
        kind,
        FormAction::AddVariant {
            id,
            value: "Gold".into(),
        },
        &EditError::AddVariant(AddVariantError::NotAcceptingVariants),
    )?;

    row.set_rename_draft("  ");
    ensure!(row.commit_rename() == Err(RenameError::EmptyName), "blank name accepted");
    ensure!(row.phase(&option) == RowPhase::Renaming, "editor closed on a blank name");

    row.set_rename_draft("Monogram");
    let name = row.commit_rename().context("valid name refused")?;
    apply(&mut form, kind, FormAction::Rename { id, name })?;
    let option = form.group(kind).get(id).cloned().context("option vanished")?;
    row.observe(&option);
    ensure!(row.phase(&option) == RowPhase::Named, "row still renaming");
    ensure!(option.name == "Monogram" && option.is_custom, "rename not applied");
    add_variants(&mut form, kind, id, &["Gold"])?;
    Ok(form.tree())
}

fn exclusion_rule_scenario(config: &EditorConfig) -> Result<FormTree> {
    let kind = GroupKind::Regular;
    let mut form = VariationForm::new(config.clone());
    ensure!(!config.preset_types.is_empty(), "config has no preset types");
    for name in &config.preset_types {
        typed(&mut form, kind, OptionChoice::Preset(name.clone()))?;
    }
    typed(&mut form, kind, OptionChoice::CustomText)?;
    typed(&mut form, kind, OptionChoice::CustomText)?;
    let unset = append(&mut form, kind)?;

    let offered = form.group(kind).offerable_choices(config);
    ensure!(
        offered == [OptionChoice::CustomText, OptionChoice::CreateOwn],
        "selector offered {offered:?}"
    );
    let taken = preset(config, 0)?;
    expect_error(
        &mut form,
        kind,
        FormAction::ChooseType {
            id: unset,
            choice: taken.clone(),
        },
        &EditError::TypeUnavailable(taken.label().to_string()),
    )?;
    apply(&mut form, kind, FormAction::RemoveOption { id: unset })?;
    Ok(form.tree())
}

fn stable_ids_scenario(config: &EditorConfig) -> Result<FormTree> {
    let kind = GroupKind::Regular;
    let mut form = VariationForm::new(config.clone());
    let first = typed(&mut form, kind, preset(config, 0)?)?;
    let second = typed(&mut form, kind, OptionChoice::CustomText)?;
    let third = typed(&mut form, kind, OptionChoice::CreateOwn)?;
    apply(
        &mut form,
        kind,
        FormAction::Rename {
            id: third,
            name: "Finish".into(),
        },
    )?;

    apply(&mut form, kind, FormAction::MoveUp { id: third })?;
    ensure!(form.group(kind).position(third) == Some(1), "move up did not swap rows");
    apply(&mut form, kind, FormAction::RemoveOption { id: first })?;
    let FormEvent::Duplicated { copy, .. } =
        apply(&mut form, kind, FormAction::DuplicateOption { id: second })?
    else {
        return Err(anyhow!("duplicate did not report a copy"));
    };

    let names: Vec<&str> = form.group(kind).iter().map(|o| o.name.as_str()).collect();
    let expected_copy = format!("Custom Text{}", config.duplicate_suffix);
    ensure!(
        names == ["Finish", "Custom Text", expected_copy.as_str()],
        "unexpected order {names:?}"
    );
    ensure!(form.group(kind).position(copy) == Some(2), "copy not appended");
    expect_error(
        &mut form,
        kind,
        FormAction::RemoveOption { id: first },
        &EditError::UnknownOption(first),
    )?;
    Ok(form.tree())
}

fn rename_validation_scenario(config: &EditorConfig) -> Result<FormTree> {
    let kind = GroupKind::Regular;
    let mut form = VariationForm::new(config.clone());
    let custom = typed(&mut form, kind, OptionChoice::CreateOwn)?;
    let fixed = typed(&mut form, kind, preset(config, 0)?)?;

    expect_error(
        &mut form,
        kind,
        FormAction::Rename {
            id: custom,
            name: "   ".into(),
        },
        &EditError::Rename(RenameError::EmptyName),
    )?;
    expect_error(
        &mut form,
        kind,
        FormAction::Rename {
            id: fixed,
            name: "Hue".into(),
        },
        &EditError::Rename(RenameError::NotRenamable),
    )?;
    apply(
        &mut form,
        kind,
        FormAction::Rename {
            id: custom,
            name: "  Size ".into(),
        },
    )?;
    let option = form.group(kind).get(custom).context("option vanished")?;
    ensure!(option.name == "Size", "name not trimmed: {:?}", option.name);
    ensure!(option.is_custom, "renamed option not marked custom");

    add_variants(&mut form, kind, custom, &["S", "M"])?;
    for reserved in [CUSTOM_TEXT, CREATE_OWN] {
        expect_error(
            &mut form,
            kind,
            FormAction::Rename {
                id: custom,
                name: reserved.into(),
            },
            &EditError::Rename(RenameError::ReservedName(reserved.into())),
        )?;
    }
    ensure!(
        values(&form, kind, custom)? == ["S", "M"],
        "reserved rename dropped variants"
    );

    // Custom options stay renamable after their first name.
    apply(
        &mut form,
        kind,
        FormAction::Rename {
            id: custom,
            name: "Fit".into(),
        },
    )?;
    Ok(form.tree())
}

fn custom_text_scenario(config: &EditorConfig) -> Result<FormTree> {
    let kind = GroupKind::Personalized;
    let mut form = VariationForm::new(config.clone());
    let id = typed(&mut form, kind, OptionChoice::CustomText)?;
    expect_error(
        &mut form,
        kind,
        FormAction::AddVariant {
            id,
            value: "Bold".into(),
        },
        &EditError::AddVariant(AddVariantError::NotAcceptingVariants),
    )?;

    apply(&mut form, kind, FormAction::SetCharacterLimit { id, value: "0".into() })?;
    let keys: Vec<_> = form.issues().iter().map(|issue| issue.key()).collect();
    ensure!(
        keys == ["missing_field_name", "invalid_character_limit"],
        "unexpected issues {keys:?}"
    );

    apply(
        &mut form,
        kind,
        FormAction::SetCustomFieldName {
            id,
            value: "Engraving".into(),
        },
    )?;
    apply(&mut form, kind, FormAction::SetCharacterLimit { id, value: "20".into() })?;
    ensure!(form.issues().is_empty(), "issues left: {:?}", form.issues());

    let tree = form.tree();
    let record = tree
        .personalized_variations
        .first()
        .context("custom text option missing from tree")?;
    ensure!(record.custom_field_name.as_deref() == Some("Engraving"), "field name lost");
    ensure!(record.custom_character_limit.as_deref() == Some("20"), "limit lost");
    ensure!(record.variants.is_none(), "custom text record carries variants");
    Ok(tree)
}

fn submit_tree_scenario(config: &EditorConfig) -> Result<FormTree> {
    let editor = Editor::new(FixedConfig(config.clone()), CheckedSubmitter);
    let mut form = editor.create_form()?;
    ensure!(
        matches!(editor.submit(&form), Err(SubmitError::Rejected(_))),
        "empty form was accepted"
    );

    let color = typed(&mut form, GroupKind::Regular, preset(config, 0)?)?;
    add_variants(&mut form, GroupKind::Regular, color, &["Red", "Blue"])?;
    apply(&mut form, GroupKind::Regular, FormAction::DuplicateOption { id: color })?;
    typed(&mut form, GroupKind::Personalized, OptionChoice::CustomText)?;

    let ack = editor.submit(&form).context("submission refused")?;
    ensure!(ack.regular == 2 && ack.personalized == 1, "ack counts {ack:?}");
    ensure!(ack.fingerprint == form.fingerprint(), "ack fingerprint mismatch");

    let json = serde_json::to_value(form.tree())?;
    for key in ["regularVariations", "personalizedVariations"] {
        ensure!(json.get(key).is_some_and(serde_json::Value::is_array), "missing {key}");
    }
    ensure!(
        json["regularVariations"][1]["isDuplicate"] == serde_json::Value::Bool(true),
        "duplicate flag missing from tree"
    );
    Ok(form.tree())
}
