//! Option type catalog and the selector exclusion rule.
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::config::EditorConfig;

/// Label of the free-text option type.
pub const CUSTOM_TEXT: &str = "Custom Text";
/// Label of the sentinel that asks the user for their own option name.
pub const CREATE_OWN: &str = "Create my own option";

/// Names that select a type rather than describe an option.
#[must_use]
pub fn is_reserved_name(name: &str) -> bool {
    name == CUSTOM_TEXT || name == CREATE_OWN
}

/// One entry offered by the option type selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "label", rename_all = "snake_case")]
pub enum OptionChoice {
    /// A named preset from the configured catalog (Color, Style, ...).
    Preset(String),
    /// Free-text field with a field name and character limit.
    CustomText,
    /// Sentinel that immediately opens the rename editor.
    CreateOwn,
}

impl OptionChoice {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Preset(name) => name,
            Self::CustomText => CUSTOM_TEXT,
            Self::CreateOwn => CREATE_OWN,
        }
    }

    /// Choices that stay offerable no matter how often a group already uses them.
    #[must_use]
    pub const fn always_offered(&self) -> bool {
        matches!(self, Self::CustomText | Self::CreateOwn)
    }

    /// Resolve a selector value back into a choice.
    ///
    /// Sentinel labels win over presets so a misconfigured catalog cannot
    /// shadow them.
    #[must_use]
    pub fn from_label(label: &str, config: &EditorConfig) -> Option<Self> {
        match label {
            CUSTOM_TEXT => Some(Self::CustomText),
            CREATE_OWN => Some(Self::CreateOwn),
            other => config
                .preset_types
                .iter()
                .any(|preset| preset == other)
                .then(|| Self::Preset(other.to_string())),
        }
    }
}

impl fmt::Display for OptionChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Full catalog in display order: presets first, then the two sentinels.
#[must_use]
pub fn catalog(config: &EditorConfig) -> Vec<OptionChoice> {
    config
        .preset_types
        .iter()
        .filter(|name| name.as_str() != CUSTOM_TEXT && name.as_str() != CREATE_OWN)
        .cloned()
        .map(OptionChoice::Preset)
        .chain([OptionChoice::CustomText, OptionChoice::CreateOwn])
        .collect()
}

/// Choices a row may offer given the names its siblings already use.
#[must_use]
pub fn offerable_choices(config: &EditorConfig, sibling_names: &BTreeSet<String>) -> Vec<OptionChoice> {
    catalog(config)
        .into_iter()
        .filter(|choice| choice.always_offered() || !sibling_names.contains(choice.label()))
        .collect()
}
