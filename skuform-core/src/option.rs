//! A single configurable product option.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{CREATE_OWN, CUSTOM_TEXT};
use crate::error::AddVariantError;
use crate::variant::VariantList;

/// Stable identity assigned when an option is created.
///
/// Independent of list position, so removal and reordering never make one
/// row pick up another row's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionId(pub u64);

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the option currently holds, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// No type picked yet.
    Unset,
    /// Picked "Create my own option" and still waiting for a real name.
    AwaitingName,
    /// Free-text field described by a field name and a character limit.
    CustomText,
    /// Collects discrete variant values.
    Variants,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductOption {
    pub id: OptionId,
    pub name: String,
    #[serde(default)]
    pub is_custom: bool,
    #[serde(default)]
    pub custom_field_name: String,
    #[serde(default)]
    pub custom_character_limit: String,
    #[serde(default)]
    pub is_duplicate: bool,
    #[serde(default)]
    pub variants: VariantList,
}

impl ProductOption {
    /// Fresh placeholder with no type.
    #[must_use]
    pub fn empty(id: OptionId) -> Self {
        Self {
            id,
            name: String::new(),
            is_custom: false,
            custom_field_name: String::new(),
            custom_character_limit: String::new(),
            is_duplicate: false,
            variants: VariantList::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> OptionKind {
        match self.name.as_str() {
            "" => OptionKind::Unset,
            CREATE_OWN => OptionKind::AwaitingName,
            CUSTOM_TEXT => OptionKind::CustomText,
            _ => OptionKind::Variants,
        }
    }

    #[must_use]
    pub fn is_named(&self) -> bool {
        !self.name.is_empty()
    }

    /// Rename is offered for custom options and for the create-your-own sentinel.
    #[must_use]
    pub fn can_rename(&self) -> bool {
        self.is_custom || self.kind() == OptionKind::AwaitingName
    }

    /// Validate a candidate variant against this option's state and list.
    ///
    /// # Errors
    ///
    /// Returns [`AddVariantError::NotAcceptingVariants`] when the option is
    /// unset, awaiting a name, or a Custom Text field; otherwise the list's
    /// own empty/duplicate checks apply.
    pub fn check_variant(&self, value: &str) -> Result<(), AddVariantError> {
        if self.kind() != OptionKind::Variants {
            return Err(AddVariantError::NotAcceptingVariants);
        }
        self.variants.check(value)
    }
}

/// Build the copy produced by the duplicate action.
///
/// Pure: reads `source`, returns a new option under `id`. The copy is always
/// custom (so it can be renamed) and flagged as a duplicate.
#[must_use]
pub fn duplicate_option(source: &ProductOption, id: OptionId, suffix: &str) -> ProductOption {
    ProductOption {
        id,
        name: format!("{}{suffix}", source.name),
        is_custom: true,
        is_duplicate: true,
        custom_field_name: source.custom_field_name.clone(),
        custom_character_limit: source.custom_character_limit.clone(),
        variants: source.variants.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DUPLICATE_SUFFIX;

    fn named(name: &str) -> ProductOption {
        ProductOption {
            name: name.to_string(),
            ..ProductOption::empty(OptionId(1))
        }
    }

    #[test]
    fn kind_follows_name() {
        assert_eq!(ProductOption::empty(OptionId(0)).kind(), OptionKind::Unset);
        assert_eq!(named(CREATE_OWN).kind(), OptionKind::AwaitingName);
        assert_eq!(named(CUSTOM_TEXT).kind(), OptionKind::CustomText);
        assert_eq!(named("Color").kind(), OptionKind::Variants);
    }

    #[test]
    fn duplicate_copies_variants_and_forces_flags() {
        let mut source = named("Color");
        source.variants.push("Red").unwrap();
        source.variants.push("Blue").unwrap();
        let copy = duplicate_option(&source, OptionId(9), DUPLICATE_SUFFIX);
        assert_eq!(copy.id, OptionId(9));
        assert_eq!(copy.name, "Color Duplicate");
        assert!(copy.is_custom);
        assert!(copy.is_duplicate);
        assert_eq!(copy.variants.values(), vec!["Red", "Blue"]);
        assert!(!source.is_duplicate);
        assert!(!source.is_custom);
    }

    #[test]
    fn custom_text_does_not_accept_variants() {
        let option = named(CUSTOM_TEXT);
        assert_eq!(
            option.check_variant("Red"),
            Err(AddVariantError::NotAcceptingVariants)
        );
        assert_eq!(
            named(CREATE_OWN).check_variant("Red"),
            Err(AddVariantError::NotAcceptingVariants)
        );
    }

    #[test]
    fn rename_gate() {
        assert!(!named("Color").can_rename());
        assert!(named(CREATE_OWN).can_rename());
        let custom = ProductOption {
            is_custom: true,
            ..named("Monogram")
        };
        assert!(custom.can_rename());
    }
}
