//! Quiz session state machine.
//!
//! A session walks through an ordered pool of scenarios. For each question
//! the learner picks exactly one of the generated options, then advances.
//! After the last question the session is finished and can only be
//! restarted, either over the whole dataset or over the questions that
//! were answered incorrectly.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use super::distractor::generate_options;
use crate::data::Dataset;
use crate::error::QuizError;
use crate::models::{is_correct, Answer, Scenario, ScenarioId};

/// Whether the session still accepts answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    InProgress,
    Finished,
}

/// What kind of pool the session was started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionKind {
    /// Every scenario in the dataset.
    Full,
    /// A subset, typically the questions missed in a previous session.
    Review,
}

/// End-of-session results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub score: usize,
    pub total: usize,
    pub wrong_ids: Vec<ScenarioId>,
    pub kind: SessionKind,
}

impl Summary {
    pub fn is_perfect(&self) -> bool {
        self.score == self.total
    }
}

/// Owned copy of everything a front end needs to render a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub question_pool: Vec<Scenario>,
    pub position: usize,
    pub score: usize,
    pub wrong_ids: BTreeSet<ScenarioId>,
    pub current_options: Vec<Answer>,
    pub selection: Option<usize>,
    pub phase: Phase,
    pub kind: SessionKind,
}

pub struct QuizSession<R = StdRng> {
    dataset: Dataset,
    rng: R,
    kind: SessionKind,
    pool: Vec<Scenario>,
    position: usize,
    score: usize,
    wrong_ids: BTreeSet<ScenarioId>,
    options: Vec<Answer>,
    selection: Option<usize>,
    phase: Phase,
}

impl<R: Rng> QuizSession<R> {
    /// Start a session over `pool`. Distractors are drawn from `dataset`.
    pub fn start(dataset: Dataset, pool: Vec<Scenario>, rng: R) -> Result<Self, QuizError> {
        let kind = if pool.as_slice() == dataset.scenarios() {
            SessionKind::Full
        } else {
            SessionKind::Review
        };

        let mut session = Self {
            dataset,
            rng,
            kind,
            pool: Vec::new(),
            position: 0,
            score: 0,
            wrong_ids: BTreeSet::new(),
            options: Vec::new(),
            selection: None,
            phase: Phase::InProgress,
        };
        session.begin(kind, pool)?;
        Ok(session)
    }

    /// Start a session over the whole dataset, in dataset order.
    pub fn start_full(dataset: Dataset, rng: R) -> Result<Self, QuizError> {
        let pool = dataset.scenarios().to_vec();
        Self::start(dataset, pool, rng)
    }

    /// Record the learner's choice for the current question.
    ///
    /// Returns whether the chosen option is the correct answer. Each
    /// question accepts exactly one selection.
    pub fn select_option(&mut self, index: usize) -> Result<bool, QuizError> {
        if self.phase == Phase::Finished {
            return Err(QuizError::InvalidState {
                operation: "select_option",
                state: "the session is finished",
            });
        }
        if self.selection.is_some() {
            return Err(QuizError::InvalidState {
                operation: "select_option",
                state: "the current question is already answered",
            });
        }
        let Some(selected) = self.options.get(index) else {
            return Err(QuizError::OptionOutOfRange {
                index,
                len: self.options.len(),
            });
        };

        let scenario = &self.pool[self.position];
        let correct = is_correct(selected, &scenario.correct_answer);
        self.selection = Some(index);

        if correct {
            self.score += 1;
        } else {
            self.wrong_ids.insert(scenario.id);
        }

        debug!(scenario = scenario.id, index, correct, "option selected");
        Ok(correct)
    }

    /// Move past the answered question, finishing the session after the
    /// last one.
    pub fn advance(&mut self) -> Result<Phase, QuizError> {
        if self.phase == Phase::Finished {
            return Err(QuizError::InvalidState {
                operation: "advance",
                state: "the session is finished",
            });
        }
        if self.selection.is_none() {
            return Err(QuizError::InvalidState {
                operation: "advance",
                state: "the current question is unanswered",
            });
        }

        let next = self.position + 1;
        if next == self.pool.len() {
            self.phase = Phase::Finished;
            info!(
                score = self.score,
                total = self.pool.len(),
                wrong = self.wrong_ids.len(),
                "quiz session finished"
            );
            return Ok(self.phase);
        }

        self.options = generate_options(&self.pool[next], self.dataset.scenarios(), &mut self.rng)?;
        self.position = next;
        self.selection = None;
        Ok(self.phase)
    }

    /// Replace this session with a fresh one over the whole dataset.
    pub fn restart_all(&mut self) -> Result<(), QuizError> {
        let pool = self.dataset.scenarios().to_vec();
        self.begin(SessionKind::Full, pool)
    }

    /// Replace this finished session with one over the questions it got
    /// wrong, in dataset order.
    pub fn restart_wrong(&mut self) -> Result<(), QuizError> {
        if self.phase != Phase::Finished {
            return Err(QuizError::InvalidState {
                operation: "restart_wrong",
                state: "the session is in progress",
            });
        }
        if self.wrong_ids.is_empty() {
            return Err(QuizError::InvalidState {
                operation: "restart_wrong",
                state: "no question was answered incorrectly",
            });
        }

        let pool = self
            .dataset
            .scenarios()
            .iter()
            .filter(|scenario| self.wrong_ids.contains(&scenario.id))
            .cloned()
            .collect();
        self.begin(SessionKind::Review, pool)
    }

    fn begin(&mut self, kind: SessionKind, pool: Vec<Scenario>) -> Result<(), QuizError> {
        let Some(first) = pool.first() else {
            return Err(QuizError::InvalidPool);
        };
        let options = generate_options(first, self.dataset.scenarios(), &mut self.rng)?;

        info!(?kind, questions = pool.len(), "quiz session started");
        self.kind = kind;
        self.pool = pool;
        self.position = 0;
        self.score = 0;
        self.wrong_ids.clear();
        self.options = options;
        self.selection = None;
        self.phase = Phase::InProgress;
        Ok(())
    }
}

impl<R> QuizSession<R> {
    pub fn current_scenario(&self) -> &Scenario {
        &self.pool[self.position]
    }

    pub fn question_pool(&self) -> &[Scenario] {
        &self.pool
    }

    pub fn total(&self) -> usize {
        self.pool.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn wrong_ids(&self) -> &BTreeSet<ScenarioId> {
        &self.wrong_ids
    }

    pub fn options(&self) -> &[Answer] {
        &self.options
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn is_last_question(&self) -> bool {
        self.position + 1 == self.pool.len()
    }

    /// Whether the selected option was correct, once one has been chosen.
    pub fn answered_correctly(&self) -> Option<bool> {
        self.selection
            .map(|index| is_correct(&self.options[index], &self.current_scenario().correct_answer))
    }

    /// Results of a finished session.
    pub fn summary(&self) -> Option<Summary> {
        (self.phase == Phase::Finished).then(|| Summary {
            score: self.score,
            total: self.pool.len(),
            wrong_ids: self.wrong_ids.iter().copied().collect(),
            kind: self.kind,
        })
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            question_pool: self.pool.clone(),
            position: self.position,
            score: self.score,
            wrong_ids: self.wrong_ids.clone(),
            current_options: self.options.clone(),
            selection: self.selection,
            phase: self.phase,
            kind: self.kind,
        }
    }
}
