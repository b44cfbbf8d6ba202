use std::hash::Hasher;

use serde_json::{Value, json};
use skuform_core::{
    EditorConfig, FormAction, FormEvent, FormTree, GroupKind, OptionChoice, VariationForm,
};
use twox_hash::XxHash64;

fn build_sample_form() -> VariationForm {
    let mut form = VariationForm::new(EditorConfig::default_config());
    let Ok(FormEvent::Appended(color)) = form.apply(GroupKind::Regular, FormAction::AppendOption)
    else {
        panic!("append failed");
    };
    let steps = [
        FormAction::ChooseType {
            id: color,
            choice: OptionChoice::Preset("Color".into()),
        },
        FormAction::AddVariant {
            id: color,
            value: "Red".into(),
        },
        FormAction::AddVariant {
            id: color,
            value: "Blue".into(),
        },
        FormAction::DuplicateOption { id: color },
    ];
    for step in steps {
        form.apply(GroupKind::Regular, step).unwrap();
    }

    let Ok(FormEvent::Appended(text)) =
        form.apply(GroupKind::Personalized, FormAction::AppendOption)
    else {
        panic!("append failed");
    };
    let steps = [
        FormAction::ChooseType {
            id: text,
            choice: OptionChoice::CustomText,
        },
        FormAction::SetCustomFieldName {
            id: text,
            value: "Engraving".into(),
        },
        FormAction::SetCharacterLimit {
            id: text,
            value: "20".into(),
        },
    ];
    for step in steps {
        form.apply(GroupKind::Personalized, step).unwrap();
    }
    form
}

#[test]
fn submitted_tree_matches_wire_shape() {
    let tree = build_sample_form().tree();
    let value = serde_json::to_value(&tree).unwrap();
    assert_eq!(
        value,
        json!({
            "regularVariations": [
                { "name": "Color", "variants": [{ "value": "Red" }, { "value": "Blue" }] },
                {
                    "name": "Color Duplicate",
                    "isCustom": true,
                    "isDuplicate": true,
                    "variants": [{ "value": "Red" }, { "value": "Blue" }]
                }
            ],
            "personalizedVariations": [
                {
                    "name": "Custom Text",
                    "customFieldName": "Engraving",
                    "customCharacterLimit": "20"
                }
            ]
        })
    );
}

#[test]
fn tree_never_exposes_option_ids() {
    let tree = build_sample_form().tree();
    let value = serde_json::to_value(&tree).unwrap();
    let Value::Object(root) = value else {
        panic!("tree should serialize as an object");
    };
    for records in root.values() {
        for record in records.as_array().unwrap() {
            assert!(record.get("id").is_none(), "record leaked id: {record}");
        }
    }
}

#[test]
fn fingerprint_matches_xxhash_of_canonical_json() {
    let tree = build_sample_form().tree();
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(&serde_json::to_vec(&tree).unwrap());
    assert_eq!(tree.fingerprint(), hasher.finish());
}

#[test]
fn form_snapshot_round_trips_through_json() {
    let form = build_sample_form();
    let snapshot = serde_json::to_string(&form).unwrap();
    let restored: VariationForm = serde_json::from_str(&snapshot).unwrap();
    assert_eq!(restored, form);
    assert_eq!(
        FormTree::from_json(&form.tree().to_json_pretty().unwrap()).unwrap(),
        form.tree()
    );
}
