//! Skuform Core
//!
//! Platform-agnostic state model for the Skuform product option editor:
//! option groups, variant lists, the per-row editing state machine, and the
//! submission boundary. This crate has no UI or platform-specific dependencies.

pub mod catalog;
pub mod config;
pub mod error;
pub mod form;
pub mod group;
pub mod option;
pub mod row;
pub mod submit;
pub mod tree;
pub mod variant;

// Re-export commonly used types
pub use catalog::{
    CREATE_OWN, CUSTOM_TEXT, OptionChoice, catalog, is_reserved_name, offerable_choices,
};
pub use config::{ConfigError, ConfigSource, DefaultConfigSource, EditorConfig};
pub use error::{AddVariantError, EditError, RenameError, SnapshotError, SubmitError};
pub use form::{FormAction, FormEvent, FormIssue, VariationForm};
pub use group::{GroupKind, OptionGroup};
pub use option::{OptionId, OptionKind, ProductOption, duplicate_option};
pub use row::{RowEditor, RowPhase, VariantFeedback};
pub use submit::{Ack, LogSubmitter, SubmitHandler};
pub use tree::{FormTree, OptionRecord};
pub use variant::{Variant, VariantList};

/// Ties a configuration source and a submission handler to editor sessions.
pub struct Editor<C, S>
where
    C: ConfigSource,
    S: SubmitHandler,
{
    config_source: C,
    submitter: S,
}

impl<C, S> Editor<C, S>
where
    C: ConfigSource,
    S: SubmitHandler,
{
    /// Create an editor with the provided config source and submitter
    pub const fn new(config_source: C, submitter: S) -> Self {
        Self {
            config_source,
            submitter,
        }
    }

    /// Start an empty form using the loaded configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn create_form(&self) -> Result<VariationForm, C::Error> {
        let config = self.config_source.load_config()?;
        Ok(VariationForm::new(config))
    }

    /// Submit the current state of a form
    ///
    /// # Errors
    ///
    /// Returns an error if the submitter rejects the tree.
    pub fn submit(&self, form: &VariationForm) -> Result<Ack, S::Error> {
        self.submitter.submit(&form.tree())
    }

    /// Reload the configuration and rebuild a form around the same groups
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or the stored
    /// form cannot be decoded, including when a group repeats an option id.
    pub fn restore_form(&self, snapshot: &str) -> anyhow::Result<VariationForm> {
        let config = self.config_source.load_config()?;
        let form: VariationForm = serde_json::from_str(snapshot)?;
        Ok(form.with_config(config))
    }
}
