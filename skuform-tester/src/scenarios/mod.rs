use std::time::Instant;

use anyhow::Result;
use serde::Serialize;
use skuform_core::{EditorConfig, FormTree};

pub mod catalog;

pub type ScenarioFn = fn(&EditorConfig) -> Result<FormTree>;

/// Named editing session replayed against a fresh form.
#[derive(Clone, Copy)]
pub struct Scenario {
    pub key: &'static str,
    pub name: &'static str,
    run: ScenarioFn,
}

impl Scenario {
    pub const fn new(key: &'static str, name: &'static str, run: ScenarioFn) -> Self {
        Self { key, name, run }
    }

    pub fn execute(&self, config: &EditorConfig) -> ScenarioResult {
        log::debug!("running scenario {}", self.key);
        let started = Instant::now();
        let outcome = (self.run)(config);
        ScenarioResult::from_outcome(self.name, started, outcome)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub duration_ms: f64,
    pub failures: Vec<String>,
    /// Options in the final tree; zero when the scenario failed.
    pub options: usize,
    /// xxHash64 of the final tree, hex encoded.
    pub fingerprint: Option<String>,
}

impl ScenarioResult {
    pub fn from_outcome(name: &str, started: Instant, outcome: Result<FormTree>) -> Self {
        let duration_ms = started.elapsed().as_secs_f64() * 1000.0;
        match outcome {
            Ok(tree) => Self {
                scenario_name: name.to_string(),
                passed: true,
                duration_ms,
                failures: Vec::new(),
                options: tree.option_count(),
                fingerprint: Some(format!("{:016x}", tree.fingerprint())),
            },
            Err(err) => Self::failed(name, duration_ms, format!("{err:#}")),
        }
    }

    pub fn failed(name: &str, duration_ms: f64, failure: String) -> Self {
        Self {
            scenario_name: name.to_string(),
            passed: false,
            duration_ms,
            failures: vec![failure],
            options: 0,
            fingerprint: None,
        }
    }
}

pub fn all_scenarios() -> Vec<Scenario> {
    catalog::catalog_scenarios()
}

pub fn get_scenario(name: &str) -> Option<Scenario> {
    let wanted = name.to_lowercase();
    all_scenarios()
        .into_iter()
        .find(|scenario| scenario.key == wanted || scenario.name.to_lowercase() == wanted)
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    all_scenarios()
        .iter()
        .map(|scenario| (scenario.key, scenario.name))
        .collect()
}
