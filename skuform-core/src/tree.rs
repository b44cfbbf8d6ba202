//! Wire shape handed to the submission boundary.
use serde::{Deserialize, Serialize};
use std::hash::Hasher;
use twox_hash::XxHash64;

use crate::group::OptionGroup;
use crate::option::{OptionKind, ProductOption};
use crate::variant::Variant;

/// One option as submitted. Ids stay behind; flags and empty fields are
/// omitted the way a sparse form value would be.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_custom: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_field_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_character_limit: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_duplicate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<Variant>>,
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl From<&ProductOption> for OptionRecord {
    fn from(option: &ProductOption) -> Self {
        let variants = match option.kind() {
            OptionKind::CustomText => None,
            _ => Some(option.variants.iter().cloned().collect()),
        };
        Self {
            name: option.name.clone(),
            is_custom: option.is_custom,
            custom_field_name: non_empty(&option.custom_field_name),
            custom_character_limit: non_empty(&option.custom_character_limit),
            is_duplicate: option.is_duplicate,
            variants,
        }
    }
}

/// The whole form as one nested value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormTree {
    pub regular_variations: Vec<OptionRecord>,
    pub personalized_variations: Vec<OptionRecord>,
}

impl FormTree {
    #[must_use]
    pub fn from_groups(regular: &OptionGroup, personalized: &OptionGroup) -> Self {
        Self {
            regular_variations: regular.iter().map(OptionRecord::from).collect(),
            personalized_variations: personalized.iter().map(OptionRecord::from).collect(),
        }
    }

    /// Serialize the tree as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a tree previously produced by [`FormTree::to_json_pretty`].
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match the tree shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Content hash of the canonical JSON form.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = XxHash64::with_seed(0);
        match serde_json::to_vec(self) {
            Ok(bytes) => hasher.write(&bytes),
            Err(err) => log::warn!("fingerprint serialization failed: {err}"),
        }
        hasher.finish()
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.regular_variations.len() + self.personalized_variations.len()
    }
}
