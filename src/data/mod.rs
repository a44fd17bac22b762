mod dataset;
mod loader;

pub use dataset::{Dataset, MIN_SCENARIOS};
pub use loader::{load_scenarios_from_path, parse_scenarios};
