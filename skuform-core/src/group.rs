//! Ordered collection of options for one section of the form.
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::catalog::{OptionChoice, is_reserved_name, offerable_choices};
use crate::config::EditorConfig;
use crate::error::{EditError, RenameError, SnapshotError};
use crate::option::{OptionId, ProductOption, duplicate_option};
use crate::variant::Variant;

/// Which section of the form a group belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    Regular,
    Personalized,
}

impl GroupKind {
    pub const ALL: [Self; 2] = [Self::Regular, Self::Personalized];

    /// Stable key used for DOM ids and i18n lookups.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Personalized => "personalized",
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Options of one group plus the id counter that names new rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GroupSnapshot")]
pub struct OptionGroup {
    kind: GroupKind,
    options: Vec<ProductOption>,
    next_id: u64,
}

/// Stored form of a group, checked before it becomes an [`OptionGroup`].
#[derive(Deserialize)]
struct GroupSnapshot {
    kind: GroupKind,
    #[serde(default)]
    options: Vec<ProductOption>,
    #[serde(default)]
    next_id: u64,
}

impl TryFrom<GroupSnapshot> for OptionGroup {
    type Error = SnapshotError;

    /// Rejects repeated ids and moves the counter past every stored id, so a
    /// restored group never hands out an id that is already taken.
    fn try_from(snapshot: GroupSnapshot) -> Result<Self, Self::Error> {
        let mut seen = BTreeSet::new();
        for option in &snapshot.options {
            if !seen.insert(option.id) {
                return Err(SnapshotError::DuplicateId(option.id));
            }
        }
        let floor = seen.last().map_or(1, |id| id.0.saturating_add(1));
        let next_id = snapshot.next_id.max(floor);
        if next_id != snapshot.next_id {
            log::debug!(
                "{} group: stored id counter {} raised to {next_id}",
                snapshot.kind,
                snapshot.next_id
            );
        }
        Ok(Self {
            kind: snapshot.kind,
            options: snapshot.options,
            next_id,
        })
    }
}

impl OptionGroup {
    #[must_use]
    pub const fn new(kind: GroupKind) -> Self {
        Self {
            kind,
            options: Vec::new(),
            next_id: 1,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> GroupKind {
        self.kind
    }

    #[must_use]
    pub fn options(&self) -> &[ProductOption] {
        &self.options
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProductOption> {
        self.options.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: OptionId) -> Option<&ProductOption> {
        self.options.iter().find(|o| o.id == id)
    }

    /// Current list position of `id`.
    #[must_use]
    pub fn position(&self, id: OptionId) -> Option<usize> {
        self.options.iter().position(|o| o.id == id)
    }

    fn resolve(&self, id: OptionId) -> Result<usize, EditError> {
        self.position(id).ok_or(EditError::UnknownOption(id))
    }

    fn check_index(&self, index: usize) -> Result<(), EditError> {
        if index < self.options.len() {
            Ok(())
        } else {
            Err(EditError::IndexOutOfRange {
                index,
                len: self.options.len(),
            })
        }
    }

    fn option_mut(&mut self, id: OptionId) -> Result<&mut ProductOption, EditError> {
        let index = self.resolve(id)?;
        Ok(&mut self.options[index])
    }

    fn allocate_id(&mut self) -> OptionId {
        let id = OptionId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Append an empty placeholder option.
    pub fn append(&mut self) -> OptionId {
        let id = self.allocate_id();
        self.options.push(ProductOption::empty(id));
        log::debug!("{} group: appended option {id}", self.kind);
        id
    }

    /// Remove the option currently at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::IndexOutOfRange`] for an invalid index.
    pub fn remove(&mut self, index: usize) -> Result<ProductOption, EditError> {
        self.check_index(index)?;
        let removed = self.options.remove(index);
        log::debug!("{} group: removed option {} ({:?})", self.kind, removed.id, removed.name);
        Ok(removed)
    }

    /// Remove the option with `id`, wherever it currently sits.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownOption`] if no option has that id.
    pub fn remove_by_id(&mut self, id: OptionId) -> Result<ProductOption, EditError> {
        let index = self.resolve(id)?;
        self.remove(index)
    }

    /// Append a copy of the option currently at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::IndexOutOfRange`] for an invalid index.
    pub fn duplicate(&mut self, index: usize, suffix: &str) -> Result<OptionId, EditError> {
        self.check_index(index)?;
        let id = self.allocate_id();
        let copy = duplicate_option(&self.options[index], id, suffix);
        log::debug!("{} group: duplicated {} as {id} ({:?})", self.kind, self.options[index].id, copy.name);
        self.options.push(copy);
        Ok(id)
    }

    /// Append a copy of the option with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownOption`] if no option has that id.
    pub fn duplicate_by_id(&mut self, id: OptionId, suffix: &str) -> Result<OptionId, EditError> {
        let index = self.resolve(id)?;
        self.duplicate(index, suffix)
    }

    /// Move the option at `from` so it ends up at `to`.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::IndexOutOfRange`] if either index is invalid.
    pub fn move_option(&mut self, from: usize, to: usize) -> Result<(), EditError> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from != to {
            let option = self.options.remove(from);
            self.options.insert(to, option);
        }
        Ok(())
    }

    /// Names already taken in this group. Unset options contribute nothing.
    #[must_use]
    pub fn sibling_names(&self) -> BTreeSet<String> {
        self.options
            .iter()
            .filter(|o| o.is_named())
            .map(|o| o.name.clone())
            .collect()
    }

    /// Selector entries available to any row of this group.
    #[must_use]
    pub fn offerable_choices(&self, config: &EditorConfig) -> Vec<OptionChoice> {
        offerable_choices(config, &self.sibling_names())
    }

    /// Give an unset option its type.
    ///
    /// # Errors
    ///
    /// Fails if the option is unknown, already named, or the preset is
    /// already used by a sibling.
    pub fn choose_type(&mut self, id: OptionId, choice: &OptionChoice) -> Result<(), EditError> {
        let index = self.resolve(id)?;
        if self.options[index].is_named() {
            return Err(EditError::AlreadyNamed);
        }
        if !choice.always_offered() && self.sibling_names().contains(choice.label()) {
            return Err(EditError::TypeUnavailable(choice.label().to_string()));
        }
        let option = &mut self.options[index];
        option.name = choice.label().to_string();
        log::debug!("{} group: option {id} typed as {choice}", self.kind);
        Ok(())
    }

    /// Commit a new name, which also marks the option as custom.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError::EmptyName`] for an empty or whitespace-only
    /// name, [`RenameError::ReservedName`] for a type label, and
    /// [`RenameError::NotRenamable`] for preset options.
    pub fn rename(&mut self, id: OptionId, name: &str) -> Result<(), EditError> {
        let option = self.option_mut(id)?;
        if !option.can_rename() {
            return Err(RenameError::NotRenamable.into());
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(RenameError::EmptyName.into());
        }
        if is_reserved_name(name) {
            return Err(RenameError::ReservedName(name.to_string()).into());
        }
        option.name = name.to_string();
        option.is_custom = true;
        Ok(())
    }

    /// # Errors
    ///
    /// Fails if the option is unknown or refuses the value (see
    /// [`ProductOption::check_variant`]).
    pub fn add_variant(&mut self, id: OptionId, value: &str) -> Result<(), EditError> {
        let option = self.option_mut(id)?;
        option.check_variant(value)?;
        option.variants.push(value)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Fails if the option is unknown or `index` is out of range.
    pub fn remove_variant(&mut self, id: OptionId, index: usize) -> Result<Variant, EditError> {
        self.option_mut(id)?.variants.remove(index)
    }

    /// # Errors
    ///
    /// Returns [`EditError::UnknownOption`] if no option has that id.
    pub fn set_custom_field_name(&mut self, id: OptionId, value: &str) -> Result<(), EditError> {
        self.option_mut(id)?.custom_field_name = value.to_string();
        Ok(())
    }

    /// Stored as typed; readiness checks validate it later.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownOption`] if no option has that id.
    pub fn set_custom_character_limit(&mut self, id: OptionId, value: &str) -> Result<(), EditError> {
        self.option_mut(id)?.custom_character_limit = value.to_string();
        Ok(())
    }
}

impl<'a> IntoIterator for &'a OptionGroup {
    type Item = &'a ProductOption;
    type IntoIter = std::slice::Iter<'a, ProductOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
