use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::LoadError;
use crate::models::Scenario;

/// Scenario data compiled into the binary.
pub(crate) const BUNDLED_SCENARIOS: &str = include_str!("../../data/scenarios.json");

pub fn parse_scenarios(json: &str) -> Result<Vec<Scenario>, LoadError> {
    let scenarios: Vec<Scenario> = serde_json::from_str(json)?;
    debug!(count = scenarios.len(), "parsed scenario data");
    Ok(scenarios)
}

pub fn load_scenarios_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_scenarios(&json_content)
}
