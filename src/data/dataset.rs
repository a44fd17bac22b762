//! The validated, read-only scenario dataset.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::{Arc, OnceLock};

use tracing::info;

use super::loader::{load_scenarios_from_path, parse_scenarios, BUNDLED_SCENARIOS};
use crate::error::LoadError;
use crate::models::{Answer, Scenario, ScenarioId};
use crate::quiz::DISTRACTOR_COUNT;

/// Smallest dataset that can still fill every question with distractors.
pub const MIN_SCENARIOS: usize = DISTRACTOR_COUNT + 1;

static BUILTIN: OnceLock<Dataset> = OnceLock::new();

/// An ordered, immutable list of scenarios.
///
/// Cloning is cheap: clones share the same backing storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    scenarios: Arc<[Scenario]>,
}

impl Dataset {
    /// Validate `scenarios` and wrap them as a dataset.
    ///
    /// Rejects empty input, repeated ids, repeated answers and datasets too
    /// small to build a full set of options.
    pub fn new(scenarios: Vec<Scenario>) -> Result<Self, LoadError> {
        if scenarios.is_empty() {
            return Err(LoadError::Empty);
        }

        let mut ids = HashSet::with_capacity(scenarios.len());
        let mut answers: HashMap<&Answer, ScenarioId> = HashMap::with_capacity(scenarios.len());
        for scenario in &scenarios {
            if !ids.insert(scenario.id) {
                return Err(LoadError::DuplicateId(scenario.id));
            }
            if let Some(first) = answers.insert(&scenario.correct_answer, scenario.id) {
                return Err(LoadError::DuplicateAnswer {
                    first,
                    second: scenario.id,
                });
            }
        }

        if scenarios.len() < MIN_SCENARIOS {
            return Err(LoadError::TooFewScenarios {
                needed: MIN_SCENARIOS,
                found: scenarios.len(),
            });
        }

        Ok(Self {
            scenarios: scenarios.into(),
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Self::new(parse_scenarios(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let dataset = Self::new(load_scenarios_from_path(path)?)?;
        info!(path = %path.display(), count = dataset.len(), "loaded scenario file");
        Ok(dataset)
    }

    /// The dataset bundled with the application, validated once per process.
    pub fn builtin() -> Result<Self, LoadError> {
        if let Some(dataset) = BUILTIN.get() {
            return Ok(dataset.clone());
        }

        let dataset = Self::from_json_str(BUNDLED_SCENARIOS)?;
        info!(count = dataset.len(), "loaded bundled scenarios");
        Ok(BUILTIN.get_or_init(|| dataset).clone())
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn get(&self, id: ScenarioId) -> Option<&Scenario> {
        self.scenarios.iter().find(|scenario| scenario.id == id)
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Always false for a constructed dataset.
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
