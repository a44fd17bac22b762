use serde::{Deserialize, Serialize};

use super::Answer;

pub type ScenarioId = u32;

/// One quiz item: a learner's situation and the classification that fits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: ScenarioId,
    pub question_text: String,
    pub correct_answer: Answer,
    pub explanation: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// One-line summary shown in the study list.
    #[serde(default)]
    pub key_point: String,
}
