//! Per-row editing state: rename flow and the pending variant input.
use serde::{Deserialize, Serialize};

use crate::catalog::is_reserved_name;
use crate::error::{AddVariantError, RenameError};
use crate::option::{OptionKind, ProductOption};

/// Where a row sits in its small state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowPhase {
    /// No type picked; the row shows the selector.
    Unset,
    /// Typed; the row shows its name and variant controls.
    Named,
    /// The inline rename editor is open.
    Renaming,
}

/// Inline feedback for the pending variant input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VariantFeedback {
    /// Whether the "Add" button is enabled.
    pub can_add: bool,
    /// Whether the input duplicates an existing variant.
    pub duplicate: bool,
}

/// Transient UI state owned by one row. The option itself lives in its group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowEditor {
    renaming: bool,
    rename_draft: String,
    variant_draft: String,
    observed_name: String,
}

impl RowEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self, option: &ProductOption) -> RowPhase {
        if !option.is_named() {
            RowPhase::Unset
        } else if self.renaming {
            RowPhase::Renaming
        } else {
            RowPhase::Named
        }
    }

    /// React to the option's current name.
    ///
    /// Runs only when the name differs from the last one observed, so a user
    /// who cancels a rename is not dragged straight back into it. Picking the
    /// create-your-own sentinel opens the rename editor.
    pub fn observe(&mut self, option: &ProductOption) {
        if self.observed_name == option.name {
            return;
        }
        self.observed_name.clone_from(&option.name);
        if option.kind() == OptionKind::AwaitingName {
            self.renaming = true;
            self.rename_draft.clear();
        }
    }

    /// Open the rename editor for a custom option.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError::NotRenamable`] for preset options.
    pub fn begin_rename(&mut self, option: &ProductOption) -> Result<(), RenameError> {
        if !option.can_rename() {
            return Err(RenameError::NotRenamable);
        }
        self.renaming = true;
        if option.kind() == OptionKind::AwaitingName {
            self.rename_draft.clear();
        } else {
            self.rename_draft.clone_from(&option.name);
        }
        Ok(())
    }

    pub fn cancel_rename(&mut self) {
        self.renaming = false;
        self.rename_draft.clear();
    }

    pub fn set_rename_draft(&mut self, value: impl Into<String>) {
        self.rename_draft = value.into();
    }

    #[must_use]
    pub fn rename_draft(&self) -> &str {
        &self.rename_draft
    }

    /// Take the committed name out of the editor and close it.
    ///
    /// The caller writes the returned name to the option through its group.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError::EmptyName`] when the draft is blank and
    /// [`RenameError::ReservedName`] when it is a type label; the editor
    /// stays open.
    pub fn commit_rename(&mut self) -> Result<String, RenameError> {
        let name = self.rename_draft.trim();
        if name.is_empty() {
            return Err(RenameError::EmptyName);
        }
        if is_reserved_name(name) {
            return Err(RenameError::ReservedName(name.to_string()));
        }
        let name = name.to_string();
        self.renaming = false;
        self.rename_draft.clear();
        Ok(name)
    }

    pub fn set_variant_draft(&mut self, value: impl Into<String>) {
        self.variant_draft = value.into();
    }

    #[must_use]
    pub fn variant_draft(&self) -> &str {
        &self.variant_draft
    }

    #[must_use]
    pub fn variant_feedback(&self, option: &ProductOption) -> VariantFeedback {
        let duplicate = option.variants.contains(&self.variant_draft);
        VariantFeedback {
            can_add: option.check_variant(&self.variant_draft).is_ok(),
            duplicate,
        }
    }

    /// Validate the pending input and hand it over for appending.
    ///
    /// On success the input is cleared; on error it is kept so the user can
    /// fix it.
    ///
    /// # Errors
    ///
    /// Propagates the option's refusal (empty, duplicate, wrong kind).
    pub fn take_variant(&mut self, option: &ProductOption) -> Result<String, AddVariantError> {
        option.check_variant(&self.variant_draft)?;
        Ok(std::mem::take(&mut self.variant_draft))
    }
}
