//! Variant values attached to an option.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{AddVariantError, EditError};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variant {
    pub value: String,
}

/// Ordered, duplicate-free list of variants. Most options carry a handful.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantList(SmallVec<[Variant; 4]>);

impl VariantList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact, case-sensitive membership test.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v.value == value)
    }

    /// Check a candidate value without mutating the list.
    ///
    /// # Errors
    ///
    /// Returns [`AddVariantError::Empty`] for an empty (or whitespace-only)
    /// value and [`AddVariantError::DuplicateValue`] when the value is
    /// already present.
    pub fn check(&self, value: &str) -> Result<(), AddVariantError> {
        if value.trim().is_empty() {
            return Err(AddVariantError::Empty);
        }
        if self.contains(value) {
            return Err(AddVariantError::DuplicateValue(value.to_string()));
        }
        Ok(())
    }

    /// Append a value after validating it.
    ///
    /// # Errors
    ///
    /// See [`VariantList::check`]; the list is left untouched on error.
    pub fn push(&mut self, value: impl Into<String>) -> Result<(), AddVariantError> {
        let value = value.into();
        self.check(&value)?;
        self.0.push(Variant { value });
        Ok(())
    }

    /// Remove the variant at `index`, keeping the order of the rest.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::IndexOutOfRange`] for an invalid index.
    pub fn remove(&mut self, index: usize) -> Result<Variant, EditError> {
        if index >= self.0.len() {
            return Err(EditError::IndexOutOfRange {
                index,
                len: self.0.len(),
            });
        }
        Ok(self.0.remove(index))
    }

    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        self.0.iter().map(|v| v.value.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Variant> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a VariantList {
    type Item = &'a Variant;
    type IntoIter = std::slice::Iter<'a, Variant>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for VariantList {
    /// Collect values, skipping empties and duplicates.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            if let Err(err) = list.push(value) {
                log::debug!("variant skipped while collecting: {err}");
            }
        }
        list
    }
}
