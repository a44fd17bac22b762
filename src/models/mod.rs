mod answer;
mod scenario;

pub use answer::{is_correct, Answer};
pub use scenario::{Scenario, ScenarioId};

/// Top-level screen the application is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Landing screen with the two entry points.
    #[default]
    Home,
    /// Every scenario listed with its explanation.
    Study,
    /// Multiple-choice quiz over the dataset.
    Quiz,
}
