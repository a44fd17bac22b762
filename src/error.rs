//! Error types for loading the dataset and driving a quiz session.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::ScenarioId;

/// The scenario dataset could not be loaded or is not usable.
///
/// These are configuration errors: the application cannot start with a
/// dataset that produces one.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse scenario data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("scenario dataset is empty")]
    Empty,

    #[error("scenario id {0} appears more than once")]
    DuplicateId(ScenarioId),

    /// Two scenarios carry the same answer, so a quiz could show two
    /// indistinguishable options.
    #[error("scenarios {first} and {second} share an identical answer")]
    DuplicateAnswer {
        first: ScenarioId,
        second: ScenarioId,
    },

    #[error("scenario dataset needs at least {needed} scenarios, found {found}")]
    TooFewScenarios { needed: usize, found: usize },
}

/// A quiz operation was rejected.
///
/// Apart from `InsufficientData`, these signal that the caller invoked an
/// operation the session's current state does not allow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("not enough scenarios for distractors: need {needed} besides the question, found {available}")]
    InsufficientData { needed: usize, available: usize },

    #[error("cannot start a quiz with an empty question pool")]
    InvalidPool,

    #[error("`{operation}` is not allowed while {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },

    #[error("option {index} is out of range ({len} options)")]
    OptionOutOfRange { index: usize, len: usize },
}

/// Errors surfaced by the terminal application.
#[derive(Debug, Error)]
pub enum DojoError {
    #[error("failed to load scenarios: {0}")]
    Load(#[from] LoadError),

    #[error("quiz error: {0}")]
    Quiz(#[from] QuizError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
