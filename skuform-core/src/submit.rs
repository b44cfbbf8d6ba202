//! Submission boundary.
use serde::{Deserialize, Serialize};

use crate::error::SubmitError;
use crate::tree::FormTree;

/// Receipt for an accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub regular: usize,
    pub personalized: usize,
    /// Fingerprint of the tree that was accepted.
    pub fingerprint: u64,
}

impl Ack {
    #[must_use]
    pub fn for_tree(tree: &FormTree) -> Self {
        Self {
            regular: tree.regular_variations.len(),
            personalized: tree.personalized_variations.len(),
            fingerprint: tree.fingerprint(),
        }
    }
}

/// Receives the whole form tree on submit.
/// Platform-specific crates provide the implementation.
pub trait SubmitHandler {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Hand the tree to the collaborator.
    ///
    /// # Errors
    ///
    /// Returns an error if the collaborator refuses the tree.
    fn submit(&self, tree: &FormTree) -> Result<Ack, Self::Error>;
}

/// Records the tree in the log and accepts it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSubmitter;

impl SubmitHandler for LogSubmitter {
    type Error = SubmitError;

    fn submit(&self, tree: &FormTree) -> Result<Ack, Self::Error> {
        let json = serde_json::to_string(tree)?;
        log::info!("form submitted: {json}");
        Ok(Ack::for_tree(tree))
    }
}
