//! Error types for editing operations.
use thiserror::Error;

use crate::option::OptionId;

/// Why a candidate variant value was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddVariantError {
    #[error("variant value is empty")]
    Empty,
    #[error("This variant already exists.")]
    DuplicateValue(String),
    #[error("option does not collect variants")]
    NotAcceptingVariants,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenameError {
    #[error("option name cannot be empty")]
    EmptyName,
    #[error("only custom options can be renamed")]
    NotRenamable,
    #[error("{0:?} is reserved for an option type")]
    ReservedName(String),
}

/// A stored group that cannot be restored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("option id {0} appears more than once")]
    DuplicateId(OptionId),
}

/// Umbrella error for group and form mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("no option with id {0}")]
    UnknownOption(OptionId),
    #[error("index {index} out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("option already has a type")]
    AlreadyNamed,
    #[error("option type {0:?} is already used in this group")]
    TypeUnavailable(String),
    #[error(transparent)]
    AddVariant(#[from] AddVariantError),
    #[error(transparent)]
    Rename(#[from] RenameError),
}

/// Failure at the submission boundary.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("Serialization error: {0}")]
    Encode(#[from] serde_json::Error),
}
