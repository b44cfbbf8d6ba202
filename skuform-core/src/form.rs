//! The editor's top-level controller: two option groups and every mutation
//! the UI can request, expressed as values.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::OptionChoice;
use crate::config::EditorConfig;
use crate::error::EditError;
use crate::group::{GroupKind, OptionGroup};
use crate::option::{OptionId, OptionKind};
use crate::tree::FormTree;

/// One mutation dispatched against a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FormAction {
    AppendOption,
    RemoveOption { id: OptionId },
    DuplicateOption { id: OptionId },
    /// Move the option one slot towards the top.
    MoveUp { id: OptionId },
    ChooseType { id: OptionId, choice: OptionChoice },
    Rename { id: OptionId, name: String },
    AddVariant { id: OptionId, value: String },
    RemoveVariant { id: OptionId, index: usize },
    SetCustomFieldName { id: OptionId, value: String },
    SetCharacterLimit { id: OptionId, value: String },
}

/// What an accepted action did, for logging and focus handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Appended(OptionId),
    Removed(OptionId),
    Duplicated { source: OptionId, copy: OptionId },
    Moved(OptionId),
    Updated(OptionId),
}

/// Gaps that make a form incomplete. Reported next to the submit button;
/// they do not block submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum FormIssue {
    UnsetOption { group: GroupKind, position: usize },
    AwaitingName { group: GroupKind, position: usize },
    NoVariants { group: GroupKind, name: String },
    MissingFieldName { group: GroupKind, position: usize },
    InvalidCharacterLimit { group: GroupKind, position: usize, value: String },
}

impl FormIssue {
    /// Key used by the UI to look up a translated message.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::UnsetOption { .. } => "unset_option",
            Self::AwaitingName { .. } => "awaiting_name",
            Self::NoVariants { .. } => "no_variants",
            Self::MissingFieldName { .. } => "missing_field_name",
            Self::InvalidCharacterLimit { .. } => "invalid_character_limit",
        }
    }
}

impl fmt::Display for FormIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsetOption { group, position } => {
                write!(f, "{group} option {} has no type", position + 1)
            }
            Self::AwaitingName { group, position } => {
                write!(f, "{group} option {} still needs a name", position + 1)
            }
            Self::NoVariants { group, name } => write!(f, "{group} option {name:?} has no variants"),
            Self::MissingFieldName { group, position } => {
                write!(f, "{group} option {} has no field name", position + 1)
            }
            Self::InvalidCharacterLimit {
                group,
                position,
                value,
            } => write!(
                f,
                "{group} option {} has an invalid character limit {value:?}",
                position + 1
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariationForm {
    config: EditorConfig,
    regular: OptionGroup,
    personalized: OptionGroup,
}

impl Default for VariationForm {
    fn default() -> Self {
        Self::new(EditorConfig::default_config())
    }
}

impl VariationForm {
    #[must_use]
    pub const fn new(config: EditorConfig) -> Self {
        Self {
            config,
            regular: OptionGroup::new(GroupKind::Regular),
            personalized: OptionGroup::new(GroupKind::Personalized),
        }
    }

    /// Keep the groups, swap the configuration.
    #[must_use]
    pub fn with_config(self, config: EditorConfig) -> Self {
        Self { config, ..self }
    }

    #[must_use]
    pub const fn config(&self) -> &EditorConfig {
        &self.config
    }

    #[must_use]
    pub const fn group(&self, kind: GroupKind) -> &OptionGroup {
        match kind {
            GroupKind::Regular => &self.regular,
            GroupKind::Personalized => &self.personalized,
        }
    }

    pub const fn group_mut(&mut self, kind: GroupKind) -> &mut OptionGroup {
        match kind {
            GroupKind::Regular => &mut self.regular,
            GroupKind::Personalized => &mut self.personalized,
        }
    }

    /// Apply one action to the group `kind`.
    ///
    /// Every id is resolved against the group as it is right now, so an
    /// action never lands on a row that merely occupies the old index.
    ///
    /// # Errors
    ///
    /// Returns the group's [`EditError`]; the form is unchanged on error.
    pub fn apply(&mut self, kind: GroupKind, action: FormAction) -> Result<FormEvent, EditError> {
        let suffix = self.config.duplicate_suffix.clone();
        let group = self.group_mut(kind);
        let result = match action {
            FormAction::AppendOption => Ok(FormEvent::Appended(group.append())),
            FormAction::RemoveOption { id } => group.remove_by_id(id).map(|_| FormEvent::Removed(id)),
            FormAction::DuplicateOption { id } => group
                .duplicate_by_id(id, &suffix)
                .map(|copy| FormEvent::Duplicated { source: id, copy }),
            FormAction::MoveUp { id } => match group.position(id) {
                Some(index) => group
                    .move_option(index, index.saturating_sub(1))
                    .map(|()| FormEvent::Moved(id)),
                None => Err(EditError::UnknownOption(id)),
            },
            FormAction::ChooseType { id, choice } => {
                group.choose_type(id, &choice).map(|()| FormEvent::Updated(id))
            }
            FormAction::Rename { id, name } => {
                group.rename(id, &name).map(|()| FormEvent::Updated(id))
            }
            FormAction::AddVariant { id, value } => {
                group.add_variant(id, &value).map(|()| FormEvent::Updated(id))
            }
            FormAction::RemoveVariant { id, index } => {
                group.remove_variant(id, index).map(|_| FormEvent::Updated(id))
            }
            FormAction::SetCustomFieldName { id, value } => group
                .set_custom_field_name(id, &value)
                .map(|()| FormEvent::Updated(id)),
            FormAction::SetCharacterLimit { id, value } => group
                .set_custom_character_limit(id, &value)
                .map(|()| FormEvent::Updated(id)),
        };
        match &result {
            Ok(event) => log::debug!("{kind} group: {event:?}"),
            Err(err) => log::debug!("{kind} group: rejected action: {err}"),
        }
        result
    }

    #[must_use]
    pub fn tree(&self) -> FormTree {
        FormTree::from_groups(&self.regular, &self.personalized)
    }

    /// Hash of the submitted shape; equal fingerprints mean no visible change.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        self.tree().fingerprint()
    }

    /// Incomplete-form findings across both groups, in display order.
    #[must_use]
    pub fn issues(&self) -> Vec<FormIssue> {
        let mut issues = Vec::new();
        for kind in GroupKind::ALL {
            for (position, option) in self.group(kind).iter().enumerate() {
                match option.kind() {
                    OptionKind::Unset => issues.push(FormIssue::UnsetOption {
                        group: kind,
                        position,
                    }),
                    OptionKind::AwaitingName => issues.push(FormIssue::AwaitingName {
                        group: kind,
                        position,
                    }),
                    OptionKind::Variants => {
                        if option.variants.is_empty() {
                            issues.push(FormIssue::NoVariants {
                                group: kind,
                                name: option.name.clone(),
                            });
                        }
                    }
                    OptionKind::CustomText => {
                        if option.custom_field_name.trim().is_empty() {
                            issues.push(FormIssue::MissingFieldName {
                                group: kind,
                                position,
                            });
                        }
                        if !self.character_limit_valid(&option.custom_character_limit) {
                            issues.push(FormIssue::InvalidCharacterLimit {
                                group: kind,
                                position,
                                value: option.custom_character_limit.clone(),
                            });
                        }
                    }
                }
            }
        }
        issues
    }

    fn character_limit_valid(&self, value: &str) -> bool {
        match value.trim().parse::<u32>() {
            Ok(0) | Err(_) => false,
            Ok(limit) => self.config.max_character_limit.is_none_or(|max| limit <= max),
        }
    }
}
