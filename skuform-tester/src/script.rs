//! User-authored editing scripts: a list of actions plus optional
//! expectations about the resulting form.
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use skuform_core::{EditError, EditorConfig, FormAction, FormEvent, FormTree, GroupKind, VariationForm};
use thiserror::Error;

use crate::scenarios::ScenarioResult;

/// One action against one group.
///
/// Option ids are assigned per group starting at 1, in creation order.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptStep {
    pub group: GroupKind,
    #[serde(flatten)]
    pub action: FormAction,
    /// The step is expected to be refused.
    #[serde(default)]
    pub rejected: bool,
}

/// A step whose outcome contradicts its `rejected` flag.
#[derive(Debug, Error)]
pub enum StepError {
    #[error("step {step} was refused")]
    Refused {
        step: usize,
        #[source]
        source: EditError,
    },
    #[error("step {step} should have been refused but did {event:?}")]
    Accepted { step: usize, event: FormEvent },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScriptExpect {
    /// Submitted tree, compared as JSON.
    #[serde(default)]
    pub tree: Option<serde_json::Value>,
    /// Issue keys in report order.
    #[serde(default)]
    pub issues: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub name: Option<String>,
    pub steps: Vec<ScriptStep>,
    #[serde(default)]
    pub expect: ScriptExpect,
}

impl Script {
    /// Read a script from disk.
    ///
    /// # Errors
    ///
    /// Fails if the file is unreadable or not a valid script.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;
        let mut script: Self = serde_json::from_str(&json)
            .with_context(|| format!("invalid script {}", path.display()))?;
        if script.name.is_none() {
            script.name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned());
        }
        Ok(script)
    }

    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| "script".to_string())
    }

    /// Replay every step on a fresh form and check the expectations.
    pub fn run(&self, config: &EditorConfig) -> ScenarioResult {
        let started = Instant::now();
        let outcome = self.replay(config);
        ScenarioResult::from_outcome(&self.display_name(), started, outcome)
    }

    fn replay(&self, config: &EditorConfig) -> Result<FormTree> {
        let mut form = VariationForm::new(config.clone());
        for (index, step) in self.steps.iter().enumerate() {
            let number = index + 1;
            match (form.apply(step.group, step.action.clone()), step.rejected) {
                (Ok(event), false) => log::debug!("step {number}: {event:?}"),
                (Err(err), true) => log::debug!("step {number}: refused as expected: {err}"),
                (Ok(event), true) => {
                    return Err(StepError::Accepted {
                        step: number,
                        event,
                    }
                    .into());
                }
                (Err(source), false) => {
                    return Err(StepError::Refused {
                        step: number,
                        source,
                    }
                    .into());
                }
            }
        }

        let tree = form.tree();
        if let Some(expected) = &self.expect.tree {
            let actual = serde_json::to_value(&tree)?;
            ensure!(
                &actual == expected,
                "tree mismatch\nexpected: {expected}\nactual:   {actual}"
            );
        }
        if let Some(expected) = &self.expect.issues {
            let actual: Vec<&str> = form.issues().iter().map(|issue| issue.key()).collect();
            ensure!(
                actual == *expected,
                "issues mismatch: expected {expected:?}, found {actual:?}"
            );
        }
        Ok(tree)
    }
}
